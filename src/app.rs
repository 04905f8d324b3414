// App state and main event loop.
// Manages tabs, media categories, paging, and keyboard input handling.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::*;
use tracing::{debug, info};

use crate::catalog::{CatalogSource, LoadedCatalog, MediaCategory, Place};
use crate::config::PaginationConfig;
use crate::error::Result;
use crate::pagination::{Control, Paginator, RevealQueue};
use crate::state::{ConsoleMessage, ConsoleState, PROJECTS_KEY, Panels};
use crate::ui;

/// Active tab in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Projects,
    Media,
    Places,
    Console,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Projects, Tab::Media, Tab::Places, Tab::Console];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Projects => "Projects",
            Tab::Media => "Media",
            Tab::Places => "Places",
            Tab::Console => "Console",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Tab::Projects => Tab::Media,
            Tab::Media => Tab::Places,
            Tab::Places => Tab::Console,
            Tab::Console => Tab::Projects,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Tab::Projects => Tab::Console,
            Tab::Media => Tab::Projects,
            Tab::Places => Tab::Media,
            Tab::Console => Tab::Places,
        }
    }
}

/// Main application state.
pub struct App {
    /// Currently active tab.
    pub active_tab: Tab,
    /// Selected shelf on the Media tab.
    pub active_media: MediaCategory,
    /// Page state for every paginated panel.
    pub paginator: Paginator<RevealQueue>,
    /// The paginated panels themselves.
    pub panels: Panels,
    /// Visited places (not paginated).
    pub places: Vec<Place>,
    /// Portfolio owner shown in the tab bar.
    pub owner: Option<String>,
    /// Where the catalog came from, for the status bar.
    pub catalog_origin: String,
    /// Activity messages.
    pub console: ConsoleState,
    /// Whether the help overlay is visible.
    pub show_help: bool,
    /// Whether the app should exit.
    pub should_quit: bool,
}

impl App {
    /// Build the app from a loaded catalog and render every panel's first page.
    pub fn new(loaded: LoadedCatalog, pagination: &PaginationConfig) -> Result<Self> {
        let mut paginator = Paginator::with_scheduler(RevealQueue::new())
            .with_panel(PROJECTS_KEY, pagination.project_layout()?);
        let media_layout = pagination.media_layout()?;
        for category in MediaCategory::ALL {
            paginator.register(category.key(), media_layout);
        }

        let mut panels = Panels::from_catalog(&loaded.catalog);
        paginator.render_all(&mut panels);

        let mut console = ConsoleState::new();
        if let Some(reason) = &loaded.fallback_reason {
            console.push(ConsoleMessage::warn(format!(
                "Remote catalog unavailable ({reason}); showing bundled catalog"
            )));
        }
        console.push(ConsoleMessage::info(format!(
            "Loaded {}: {} projects, {} books, {} albums, {} digitals, {} places",
            loaded.origin.describe(),
            loaded.catalog.projects.len(),
            loaded.catalog.books.len(),
            loaded.catalog.music.len(),
            loaded.catalog.digitals.len(),
            loaded.catalog.places.len(),
        )));

        let catalog_origin = match &loaded.origin {
            CatalogSource::Bundled => "bundled".to_string(),
            other => other.describe(),
        };

        Ok(Self {
            active_tab: Tab::default(),
            active_media: MediaCategory::default(),
            paginator,
            panels,
            places: loaded.catalog.places,
            owner: loaded.catalog.owner,
            catalog_origin,
            console,
            show_help: false,
            should_quit: false,
        })
    }

    /// Main event loop.
    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        info!("entering event loop");
        while !self.should_quit {
            terminal.draw(|frame| ui::draw(frame, self))?;
            self.handle_events()?;
            self.tick(Instant::now());
        }
        info!("leaving event loop");
        Ok(())
    }

    /// Handle keyboard and other events.
    #[allow(clippy::collapsible_if)]
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key.code);
                }
            }
        }
        Ok(())
    }

    /// Apply a key press.
    pub fn handle_key(&mut self, code: KeyCode) {
        if self.show_help {
            if matches!(code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                self.show_help = false;
            }
            return;
        }

        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Tab => self.switch_tab(self.active_tab.next()),
            KeyCode::BackTab => self.switch_tab(self.active_tab.prev()),
            KeyCode::Left | KeyCode::Char('h') => self.page(Control::Previous),
            KeyCode::Right | KeyCode::Char('l') => self.page(Control::Next),
            KeyCode::Char(']') => self.select_media(self.active_media.next()),
            KeyCode::Char('[') => self.select_media(self.active_media.prev()),
            KeyCode::Char(c @ '1'..='3') => {
                let index = c as usize - '1' as usize;
                self.select_media(MediaCategory::ALL[index]);
            }
            _ => {}
        }
    }

    /// Panel key of whatever paginated panel is on screen.
    pub fn active_panel_key(&self) -> Option<&'static str> {
        match self.active_tab {
            Tab::Projects => Some(PROJECTS_KEY),
            Tab::Media => Some(self.active_media.key()),
            Tab::Places | Tab::Console => None,
        }
    }

    /// Switch top-level tab and re-render the panel it reveals.
    pub fn switch_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        if tab == Tab::Console {
            self.console.mark_read();
        }
        if let Some(key) = self.active_panel_key() {
            self.paginator.activate(&mut self.panels, key);
        }
    }

    /// Switch media shelf. Only meaningful on the Media tab.
    pub fn select_media(&mut self, category: MediaCategory) {
        if self.active_tab != Tab::Media || category == self.active_media {
            return;
        }
        debug!(from = self.active_media.key(), to = category.key(), "media tab switch");
        self.active_media = category;
        self.paginator.activate(&mut self.panels, category.key());
    }

    /// Page the active panel.
    pub fn page(&mut self, control: Control) {
        if let Some(key) = self.active_panel_key() {
            self.paginator.trigger(&mut self.panels, key, control);
        }
    }

    /// Periodic housekeeping between frames.
    pub fn tick(&mut self, now: Instant) {
        self.paginator.scheduler_mut().prune(now);
    }
}
