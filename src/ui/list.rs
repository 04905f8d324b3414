// Paginated list rendering.
// Draws the visible page of a panel and its previous/next bar.

use std::time::Instant;

use chrono::{DateTime, Utc};
use ratatui::{prelude::*, widgets::*};

use crate::catalog::{MediaItem, Place, Project};
use crate::pagination::{Control, RevealQueue};
use crate::state::ListPanel;

/// Format a timestamp as relative time (e.g., "2h ago").
pub fn format_relative_time(dt: &DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(*dt);

    if duration.num_days() > 0 {
        format!("{}d ago", duration.num_days())
    } else if duration.num_hours() > 0 {
        format!("{}h ago", duration.num_hours())
    } else if duration.num_minutes() > 0 {
        format!("{}m ago", duration.num_minutes())
    } else {
        "just now".to_string()
    }
}

/// Render an empty state message.
pub fn render_empty(frame: &mut Frame, area: Rect, title: &str, message: &str) {
    let text = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(text, area);
}

/// Text for the pagination bar, e.g. "‹ Prev   Page 2 / 3   Next ›".
pub fn pager_line<T>(panel: &ListPanel<T>) -> Line<'static> {
    let (current, total) = panel.page_labels();
    let control_style = |control: Control| {
        if panel.control_enabled(control) {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    };

    Line::from(vec![
        Span::styled("‹ Prev", control_style(Control::Previous)),
        Span::raw("   "),
        Span::styled(
            format!("Page {} / {}", current, total),
            Style::default().fg(Color::White),
        ),
        Span::raw("   "),
        Span::styled("Next ›", control_style(Control::Next)),
    ])
}

/// Split off a one-line pagination bar when the panel shows one.
fn split_pager<T>(panel: &ListPanel<T>, area: Rect) -> (Rect, Option<Rect>) {
    if panel.controls_shown() {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(area);
        (chunks[0], Some(chunks[1]))
    } else {
        (area, None)
    }
}

fn draw_pager<T>(frame: &mut Frame, panel: &ListPanel<T>, area: Option<Rect>) {
    if let Some(area) = area {
        let bar = Paragraph::new(pager_line(panel)).alignment(Alignment::Center);
        frame.render_widget(bar, area);
    }
}

/// Items still mid-reveal are drawn dimmed.
fn reveal_style(pending: bool, base: Style) -> Style {
    if pending {
        base.fg(Color::DarkGray)
    } else {
        base
    }
}

/// Render the visible page of projects.
pub fn render_projects(
    frame: &mut Frame,
    panel: &ListPanel<Project>,
    reveals: &RevealQueue,
    key: &str,
    area: Rect,
) {
    if panel.is_empty() {
        render_empty(frame, area, " Projects ", "No projects yet");
        return;
    }

    let (list_area, pager_area) = split_pager(panel, area);
    let now = Instant::now();

    let items: Vec<ListItem> = panel
        .visible_items()
        .map(|(index, project)| {
            let pending = reveals.is_pending(key, index, now);
            let mut title = vec![Span::styled(
                project.title.clone(),
                reveal_style(pending, Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)),
            )];
            if let Some(year) = project.year {
                title.push(Span::styled(
                    format!("  {}", year),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            if !project.tags.is_empty() {
                title.push(Span::styled(
                    format!("  [{}]", project.tags.join(", ")),
                    reveal_style(pending, Style::default().fg(Color::Magenta)),
                ));
            }

            let mut lines = vec![Line::from(title)];
            if !project.summary.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("  {}", project.summary),
                    reveal_style(pending, Style::default()),
                )));
            }
            if let Some(url) = &project.url {
                lines.push(Line::from(Span::styled(
                    format!("  {}", url),
                    Style::default().fg(Color::Blue),
                )));
            }
            lines.push(Line::from(""));
            ListItem::new(lines)
        })
        .collect();

    let list_widget = List::new(items).block(Block::default().borders(Borders::ALL).title(" Projects "));
    frame.render_widget(list_widget, list_area);
    draw_pager(frame, panel, pager_area);
}

/// Render the visible page of a media shelf.
pub fn render_media(
    frame: &mut Frame,
    panel: &ListPanel<MediaItem>,
    reveals: &RevealQueue,
    key: &str,
    title: &str,
    area: Rect,
) {
    let block_title = format!(" {} ", title);
    let (list_area, pager_area) = split_pager(panel, area);
    if panel.is_empty() {
        // The bar still shows "Page 1 / 0" with both controls disabled
        render_empty(frame, list_area, &block_title, "Nothing on this shelf yet");
        draw_pager(frame, panel, pager_area);
        return;
    }

    let now = Instant::now();

    let items: Vec<ListItem> = panel
        .visible_items()
        .map(|(index, item)| {
            let pending = reveals.is_pending(key, index, now);
            let mut spans = vec![Span::styled(
                item.title.clone(),
                reveal_style(pending, Style::default().fg(Color::Cyan)),
            )];
            if let Some(creator) = &item.creator {
                spans.push(Span::styled(
                    format!("  {}", creator),
                    reveal_style(pending, Style::default()),
                ));
            }
            if let Some(note) = &item.note {
                spans.push(Span::styled(
                    format!("  ({})", note),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list_widget = List::new(items).block(Block::default().borders(Borders::ALL).title(block_title));
    frame.render_widget(list_widget, list_area);
    draw_pager(frame, panel, pager_area);
}

/// Render the visited places list.
pub fn render_places(frame: &mut Frame, places: &[Place], area: Rect) {
    if places.is_empty() {
        render_empty(frame, area, " Places ", "No places recorded");
        return;
    }

    let items: Vec<ListItem> = places
        .iter()
        .map(|place| {
            let name = match &place.country {
                Some(country) => format!("{}, {}", place.name, country),
                None => place.name.clone(),
            };
            let marker = "●".repeat(usize::from(place.size.clamp(1, 6)).div_ceil(2));
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<3} ", marker), Style::default().fg(Color::Cyan)),
                Span::raw(name),
                Span::styled(
                    format!("  {:.1}, {:.1}", place.latitude(), place.longitude()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list_widget = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Places I've Visited ({}) ", places.len())),
    );
    frame.render_widget(list_widget, area);
}
