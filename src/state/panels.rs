// Paginated panel state for the TUI.
// Terminal-side implementation of the PanelView and PanelRegistry seams.

use crate::catalog::{Catalog, MediaCategory, MediaItem, Project};
use crate::pagination::{Control, PanelRegistry, PanelView};

/// Panel key of the projects list.
pub const PROJECTS_KEY: &str = "projects";

/// A list of items plus everything the paginator last told it.
#[derive(Debug, Clone)]
pub struct ListPanel<T> {
    pub items: Vec<T>,
    visible: Vec<bool>,
    current_label: usize,
    total_label: usize,
    previous_enabled: bool,
    next_enabled: bool,
    controls_shown: bool,
}

impl<T> ListPanel<T> {
    /// A fresh panel shows nothing until the first render.
    pub fn new(items: Vec<T>) -> Self {
        let count = items.len();
        Self {
            items,
            visible: vec![false; count],
            current_label: 0,
            total_label: 0,
            previous_enabled: false,
            next_enabled: false,
            controls_shown: true,
        }
    }

    /// Visible items with their indices, in display order.
    pub fn visible_items(&self) -> impl Iterator<Item = (usize, &T)> {
        self.items
            .iter()
            .enumerate()
            .filter(|(i, _)| self.visible[*i])
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    /// "current / total" as last rendered.
    pub fn page_labels(&self) -> (usize, usize) {
        (self.current_label, self.total_label)
    }

    pub fn control_enabled(&self, control: Control) -> bool {
        match control {
            Control::Previous => self.previous_enabled,
            Control::Next => self.next_enabled,
        }
    }

    pub fn controls_shown(&self) -> bool {
        self.controls_shown
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> PanelView for ListPanel<T> {
    fn item_count(&self) -> usize {
        self.items.len()
    }

    fn set_item_visible(&mut self, index: usize, visible: bool) {
        if let Some(flag) = self.visible.get_mut(index) {
            *flag = visible;
        }
    }

    fn set_page_labels(&mut self, current: usize, total: usize) {
        self.current_label = current;
        self.total_label = total;
    }

    fn set_control_enabled(&mut self, control: Control, enabled: bool) {
        match control {
            Control::Previous => self.previous_enabled = enabled,
            Control::Next => self.next_enabled = enabled,
        }
    }

    fn set_controls_shown(&mut self, shown: bool) {
        self.controls_shown = shown;
    }
}

/// Every paginated panel in the app, looked up by key.
#[derive(Debug, Clone)]
pub struct Panels {
    pub projects: ListPanel<Project>,
    pub books: ListPanel<MediaItem>,
    pub music: ListPanel<MediaItem>,
    pub digitals: ListPanel<MediaItem>,
}

impl Panels {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            projects: ListPanel::new(catalog.projects.clone()),
            books: ListPanel::new(catalog.books.clone()),
            music: ListPanel::new(catalog.music.clone()),
            digitals: ListPanel::new(catalog.digitals.clone()),
        }
    }

    pub fn media(&self, category: MediaCategory) -> &ListPanel<MediaItem> {
        match category {
            MediaCategory::Books => &self.books,
            MediaCategory::Music => &self.music,
            MediaCategory::Digitals => &self.digitals,
        }
    }
}

impl PanelRegistry for Panels {
    fn panel_mut(&mut self, key: &str) -> Option<&mut dyn PanelView> {
        match key {
            PROJECTS_KEY => Some(&mut self.projects),
            "books" => Some(&mut self.books),
            "music" => Some(&mut self.music),
            "digitals" => Some(&mut self.digitals),
            _ => None,
        }
    }
}
