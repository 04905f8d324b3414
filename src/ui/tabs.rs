// Tab bar rendering with badge support for Console tab.
// Also draws the media shelf sub-tabs.

use ratatui::{prelude::*, widgets::*};

use crate::app::{App, Tab};
use crate::catalog::MediaCategory;

/// Draw the tab bar at the top of the screen.
pub fn draw_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let tab_titles: Vec<Line> = Tab::ALL
        .iter()
        .map(|tab| {
            let title = if *tab == Tab::Console && app.console.unread > 0 {
                format!("{} ({})", tab.title(), app.console.unread)
            } else {
                tab.title().to_string()
            };

            let style = if *tab == app.active_tab {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else if *tab == Tab::Console && app.console.unread > 0 {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::White)
            };

            Line::from(Span::styled(title, style))
        })
        .collect();

    let selected_index = Tab::ALL
        .iter()
        .position(|t| *t == app.active_tab)
        .unwrap_or(0);

    let heading = match &app.owner {
        Some(owner) => format!(" folio · {} ", owner),
        None => " folio ".to_string(),
    };

    let tabs_widget = Tabs::new(tab_titles)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(heading)
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .select(selected_index)
        .highlight_style(Style::default().fg(Color::Yellow))
        .divider(Span::raw(" │ "));

    frame.render_widget(tabs_widget, area);
}

/// Draw the Books / Music / Digitals selector.
pub fn draw_media_tabs(frame: &mut Frame, active: MediaCategory, area: Rect) {
    let titles: Vec<Line> = MediaCategory::ALL
        .iter()
        .enumerate()
        .map(|(i, category)| {
            let style = if *category == active {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(vec![
                Span::styled(format!("{} ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(category.title(), style),
            ])
        })
        .collect();

    let selected_index = MediaCategory::ALL
        .iter()
        .position(|c| *c == active)
        .unwrap_or(0);

    let widget = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .select(selected_index)
        .highlight_style(Style::default().fg(Color::Yellow))
        .divider(Span::raw(" · "));

    frame.render_widget(widget, area);
}
