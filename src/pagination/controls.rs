// Navigation controls.
// Previous/next paging and tab-switch re-rendering, bounded at the first and last page.

use tracing::debug;

use super::renderer::{PageStatus, Paginator};
use super::reveal::RevealScheduler;
use super::store::FIRST_PAGE;
use super::view::{Control, PanelRegistry};

impl<S: RevealScheduler> Paginator<S> {
    /// Step back one page. No-op on the first page.
    pub fn previous<R>(&mut self, registry: &mut R, key: &str) -> Option<PageStatus>
    where
        R: PanelRegistry + ?Sized,
    {
        let current = self.current_page(key);
        if current > FIRST_PAGE {
            self.render(registry, key, current - 1)
        } else {
            None
        }
    }

    /// Step forward one page. No-op on the last page.
    pub fn next<R>(&mut self, registry: &mut R, key: &str) -> Option<PageStatus>
    where
        R: PanelRegistry + ?Sized,
    {
        let last_page = self.window(registry, key)?.last_page();
        let current = self.current_page(key);
        if current < last_page {
            self.render(registry, key, current + 1)
        } else {
            None
        }
    }

    /// Trigger a control by kind.
    pub fn trigger<R>(&mut self, registry: &mut R, key: &str, control: Control) -> Option<PageStatus>
    where
        R: PanelRegistry + ?Sized,
    {
        match control {
            Control::Previous => self.previous(registry, key),
            Control::Next => self.next(registry, key),
        }
    }

    /// A panel became active: redraw it at its remembered page.
    pub fn activate<R>(&mut self, registry: &mut R, key: &str) -> Option<PageStatus>
    where
        R: PanelRegistry + ?Sized,
    {
        let page = self.current_page(key);
        debug!(panel = key, page, "panel activated");
        self.render(registry, key, page)
    }
}

#[cfg(test)]
mod tests {
    use crate::pagination::renderer::PageLayout;
    use crate::pagination::renderer::tests::{FakeRegistry, per_page};

    use super::*;

    fn media() -> (Paginator, FakeRegistry) {
        let registry = FakeRegistry::default()
            .with("books", 10)
            .with("music", 9)
            .with("digitals", 0);
        let paginator = Paginator::new()
            .with_panel("books", PageLayout::new(per_page(4)))
            .with_panel("music", PageLayout::new(per_page(4)))
            .with_panel("digitals", PageLayout::new(per_page(4)));
        (paginator, registry)
    }

    #[test]
    fn test_previous_is_noop_on_first_page() {
        let (mut paginator, mut registry) = media();
        paginator.render_all(&mut registry);

        assert!(paginator.previous(&mut registry, "books").is_none());
        assert_eq!(paginator.current_page("books"), 1);
        assert_eq!(registry.panel("books").visible_indices(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_next_walks_to_last_page_then_stops() {
        let (mut paginator, mut registry) = media();
        paginator.render_all(&mut registry);

        assert_eq!(paginator.next(&mut registry, "books").unwrap().page, 2);
        assert_eq!(paginator.next(&mut registry, "books").unwrap().page, 3);
        assert!(paginator.next(&mut registry, "books").is_none());
        assert_eq!(paginator.current_page("books"), 3);
        assert_eq!(registry.panel("books").visible_indices(), vec![8, 9]);

        assert_eq!(paginator.previous(&mut registry, "books").unwrap().page, 2);
        assert_eq!(registry.panel("books").visible_indices(), vec![4, 5, 6, 7]);
    }

    #[test]
    fn test_empty_panel_controls_are_noops() {
        let (mut paginator, mut registry) = media();
        paginator.render_all(&mut registry);

        assert!(paginator.next(&mut registry, "digitals").is_none());
        assert!(paginator.previous(&mut registry, "digitals").is_none());
        assert_eq!(paginator.current_page("digitals"), 1);
    }

    #[test]
    fn test_activate_restores_remembered_page() {
        let (mut paginator, mut registry) = media();
        paginator.render_all(&mut registry);

        paginator.next(&mut registry, "music");
        paginator.activate(&mut registry, "books");

        // Simulate the view losing its flags while hidden
        for flag in registry.panels.get_mut("music").unwrap().visible.iter_mut() {
            *flag = false;
        }

        let status = paginator.activate(&mut registry, "music").unwrap();
        assert_eq!(status.page, 2);
        assert_eq!(registry.panel("music").visible_indices(), vec![4, 5, 6, 7]);
        assert_eq!(paginator.current_page("books"), 1);
    }

    #[test]
    fn test_panels_page_independently() {
        let (mut paginator, mut registry) = media();
        paginator.render_all(&mut registry);

        paginator.next(&mut registry, "books");
        paginator.next(&mut registry, "books");

        assert_eq!(paginator.current_page("books"), 3);
        assert_eq!(paginator.current_page("music"), 1);
        assert_eq!(registry.panel("music").visible_indices(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_seven_projects_three_per_page() {
        let mut registry = FakeRegistry::default().with("projects", 7);
        let mut paginator = Paginator::new().with_panel(
            "projects",
            PageLayout::new(per_page(3)).hiding_single_page_controls(),
        );
        paginator.render_all(&mut registry);

        let mut next_disabled_on = Vec::new();
        for page in 1..=3 {
            if registry.panel("projects").next_enabled == Some(false) {
                next_disabled_on.push(page);
            }
            paginator.trigger(&mut registry, "projects", Control::Next);
        }

        assert_eq!(next_disabled_on, vec![3]);
        assert_eq!(registry.panel("projects").controls_shown, Some(true));
    }

    #[test]
    fn test_unknown_panel_controls_do_nothing() {
        let (mut paginator, mut registry) = media();

        assert!(paginator.next(&mut registry, "films").is_none());
        assert!(paginator.previous(&mut registry, "films").is_none());
        assert!(paginator.activate(&mut registry, "films").is_none());
    }
}
