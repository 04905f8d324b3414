// Page renderer.
// Computes page slices and pushes visibility, labels, and control state into panel views.

use std::collections::BTreeMap;
use std::num::NonZeroUsize;
use std::ops::Range;
use std::time::Duration;

use tracing::{debug, trace};

use super::reveal::{Immediate, RevealScheduler};
use super::store::{FIRST_PAGE, PageStateStore};
use super::view::{Control, PanelRegistry};

/// Static paging parameters for one panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    /// Items shown per page.
    pub items_per_page: NonZeroUsize,
    /// Delay between consecutive reveals on a page.
    pub stagger: Duration,
    /// Hide the pagination bar when everything fits on one page.
    pub hide_single_page_controls: bool,
}

impl PageLayout {
    pub fn new(items_per_page: NonZeroUsize) -> Self {
        Self {
            items_per_page,
            stagger: Duration::ZERO,
            hide_single_page_controls: false,
        }
    }

    pub fn with_stagger(mut self, stagger: Duration) -> Self {
        self.stagger = stagger;
        self
    }

    pub fn hiding_single_page_controls(mut self) -> Self {
        self.hide_single_page_controls = true;
        self
    }
}

/// Page arithmetic for `item_count` items split into fixed-size pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub item_count: usize,
    pub items_per_page: NonZeroUsize,
}

impl PageWindow {
    pub fn new(item_count: usize, items_per_page: NonZeroUsize) -> Self {
        Self {
            item_count,
            items_per_page,
        }
    }

    /// `ceil(item_count / items_per_page)`; zero for an empty panel.
    pub fn total_pages(&self) -> usize {
        self.item_count.div_ceil(self.items_per_page.get())
    }

    /// Highest reachable page. An empty panel still sits on page 1.
    pub fn last_page(&self) -> usize {
        self.total_pages().max(FIRST_PAGE)
    }

    pub fn clamp(&self, page: usize) -> usize {
        page.clamp(FIRST_PAGE, self.last_page())
    }

    /// Item indices shown on `page`, cut off at the end of the list.
    pub fn slice(&self, page: usize) -> Range<usize> {
        let per_page = self.items_per_page.get();
        let start = page
            .saturating_sub(1)
            .saturating_mul(per_page)
            .min(self.item_count);
        let end = start.saturating_add(per_page).min(self.item_count);
        start..end
    }
}

/// Outcome of a successful render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageStatus {
    pub page: usize,
    pub total_pages: usize,
    pub visible: usize,
}

/// Owns the page state of every panel and drives their views.
#[derive(Debug)]
pub struct Paginator<S = Immediate> {
    store: PageStateStore,
    layouts: BTreeMap<String, PageLayout>,
    scheduler: S,
}

impl Paginator<Immediate> {
    pub fn new() -> Self {
        Self::with_scheduler(Immediate)
    }
}

impl Default for Paginator<Immediate> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: RevealScheduler> Paginator<S> {
    pub fn with_scheduler(scheduler: S) -> Self {
        Self {
            store: PageStateStore::default(),
            layouts: BTreeMap::new(),
            scheduler,
        }
    }

    /// Register a panel. It starts on the first page.
    pub fn register(&mut self, key: impl Into<String>, layout: PageLayout) {
        let key = key.into();
        self.store.set_page(&key, FIRST_PAGE);
        self.layouts.insert(key, layout);
    }

    /// Builder form of [`Paginator::register`].
    pub fn with_panel(mut self, key: impl Into<String>, layout: PageLayout) -> Self {
        self.register(key, layout);
        self
    }

    pub fn current_page(&self, key: &str) -> usize {
        self.store.get_page(key)
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Page arithmetic for a panel as it currently stands in the registry.
    pub fn window<R>(&self, registry: &mut R, key: &str) -> Option<PageWindow>
    where
        R: PanelRegistry + ?Sized,
    {
        let layout = self.layouts.get(key)?;
        let view = registry.panel_mut(key)?;
        Some(PageWindow::new(view.item_count(), layout.items_per_page))
    }

    /// Show `page` of the panel registered under `key`.
    ///
    /// Missing panels are skipped silently. Out-of-range pages are clamped
    /// to the nearest valid page before anything is touched.
    pub fn render<R>(&mut self, registry: &mut R, key: &str, page: usize) -> Option<PageStatus>
    where
        R: PanelRegistry + ?Sized,
    {
        let Some(layout) = self.layouts.get(key).copied() else {
            debug!(panel = key, "render skipped: panel not registered");
            return None;
        };
        let Some(view) = registry.panel_mut(key) else {
            debug!(panel = key, "render skipped: panel not in view");
            return None;
        };

        let window = PageWindow::new(view.item_count(), layout.items_per_page);
        let page = window.clamp(page);
        let total_pages = window.total_pages();

        for index in 0..window.item_count {
            view.set_item_visible(index, false);
        }

        let slice = window.slice(page);
        let visible = slice.len();
        for (offset, index) in slice.enumerate() {
            view.set_item_visible(index, true);
            self.scheduler
                .schedule(key, index, layout.stagger.saturating_mul(offset as u32));
        }

        self.store.set_page(key, page);

        view.set_page_labels(page, total_pages);
        view.set_control_enabled(Control::Previous, page != FIRST_PAGE);
        view.set_control_enabled(Control::Next, page != window.last_page());
        if layout.hide_single_page_controls {
            view.set_controls_shown(total_pages > 1);
        }

        trace!(panel = key, page, total_pages, visible, "rendered page");

        Some(PageStatus {
            page,
            total_pages,
            visible,
        })
    }

    /// Render every registered panel on its first page.
    pub fn render_all<R>(&mut self, registry: &mut R)
    where
        R: PanelRegistry + ?Sized,
    {
        let keys: Vec<String> = self.layouts.keys().cloned().collect();
        for key in keys {
            if let Some(status) = self.render(registry, &key, FIRST_PAGE) {
                debug!(
                    panel = %key,
                    total_pages = status.total_pages,
                    "initialized pagination"
                );
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashMap;

    use proptest::prelude::*;

    use super::*;
    use crate::pagination::view::PanelView;

    /// Records everything the paginator pushes into it.
    #[derive(Debug, Default)]
    pub(crate) struct FakePanel {
        pub visible: Vec<bool>,
        pub labels: Option<(usize, usize)>,
        pub previous_enabled: Option<bool>,
        pub next_enabled: Option<bool>,
        pub controls_shown: Option<bool>,
    }

    impl FakePanel {
        pub fn with_items(count: usize) -> Self {
            Self {
                visible: vec![false; count],
                ..Self::default()
            }
        }

        pub fn visible_indices(&self) -> Vec<usize> {
            self.visible
                .iter()
                .enumerate()
                .filter_map(|(i, v)| v.then_some(i))
                .collect()
        }
    }

    impl PanelView for FakePanel {
        fn item_count(&self) -> usize {
            self.visible.len()
        }

        fn set_item_visible(&mut self, index: usize, visible: bool) {
            self.visible[index] = visible;
        }

        fn set_page_labels(&mut self, current: usize, total: usize) {
            self.labels = Some((current, total));
        }

        fn set_control_enabled(&mut self, control: Control, enabled: bool) {
            match control {
                Control::Previous => self.previous_enabled = Some(enabled),
                Control::Next => self.next_enabled = Some(enabled),
            }
        }

        fn set_controls_shown(&mut self, shown: bool) {
            self.controls_shown = Some(shown);
        }
    }

    #[derive(Debug, Default)]
    pub(crate) struct FakeRegistry {
        pub panels: HashMap<String, FakePanel>,
    }

    impl FakeRegistry {
        pub fn with(mut self, key: &str, count: usize) -> Self {
            self.panels
                .insert(key.to_string(), FakePanel::with_items(count));
            self
        }

        pub fn panel(&self, key: &str) -> &FakePanel {
            &self.panels[key]
        }
    }

    impl PanelRegistry for FakeRegistry {
        fn panel_mut(&mut self, key: &str) -> Option<&mut dyn PanelView> {
            self.panels
                .get_mut(key)
                .map(|panel| panel as &mut dyn PanelView)
        }
    }

    /// Scheduler that remembers every reveal request.
    #[derive(Debug, Default)]
    struct RecordingScheduler {
        calls: Vec<(String, usize, Duration)>,
    }

    impl RevealScheduler for RecordingScheduler {
        fn schedule(&mut self, key: &str, index: usize, delay: Duration) {
            self.calls.push((key.to_string(), index, delay));
        }
    }

    pub(crate) fn per_page(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_page_window_math() {
        let window = PageWindow::new(10, per_page(4));
        assert_eq!(window.total_pages(), 3);
        assert_eq!(window.last_page(), 3);
        assert_eq!(window.slice(1), 0..4);
        assert_eq!(window.slice(3), 8..10);
        assert_eq!(window.clamp(0), 1);
        assert_eq!(window.clamp(9), 3);

        let empty = PageWindow::new(0, per_page(4));
        assert_eq!(empty.total_pages(), 0);
        assert_eq!(empty.last_page(), 1);
        assert_eq!(empty.slice(1), 0..0);
    }

    #[test]
    fn test_ten_items_four_per_page() {
        let mut registry = FakeRegistry::default().with("books", 10);
        let mut paginator = Paginator::new().with_panel("books", PageLayout::new(per_page(4)));

        let status = paginator.render(&mut registry, "books", 1).unwrap();
        assert_eq!(status.total_pages, 3);
        assert_eq!(registry.panel("books").visible_indices(), vec![0, 1, 2, 3]);

        paginator.render(&mut registry, "books", 3);
        assert_eq!(registry.panel("books").visible_indices(), vec![8, 9]);
        assert_eq!(registry.panel("books").labels, Some((3, 3)));
        assert_eq!(paginator.current_page("books"), 3);
    }

    #[test]
    fn test_empty_panel_disables_both_controls() {
        let mut registry = FakeRegistry::default().with("digitals", 0);
        let mut paginator = Paginator::new().with_panel("digitals", PageLayout::new(per_page(4)));

        let status = paginator.render(&mut registry, "digitals", 1).unwrap();

        let panel = registry.panel("digitals");
        assert_eq!(status.visible, 0);
        assert_eq!(panel.labels, Some((1, 0)));
        assert_eq!(panel.previous_enabled, Some(false));
        assert_eq!(panel.next_enabled, Some(false));
    }

    #[test]
    fn test_control_enablement_follows_boundaries() {
        let mut registry = FakeRegistry::default().with("projects", 7);
        let mut paginator = Paginator::new().with_panel("projects", PageLayout::new(per_page(3)));

        paginator.render(&mut registry, "projects", 1);
        assert_eq!(registry.panel("projects").previous_enabled, Some(false));
        assert_eq!(registry.panel("projects").next_enabled, Some(true));

        paginator.render(&mut registry, "projects", 2);
        assert_eq!(registry.panel("projects").previous_enabled, Some(true));
        assert_eq!(registry.panel("projects").next_enabled, Some(true));

        paginator.render(&mut registry, "projects", 3);
        assert_eq!(registry.panel("projects").previous_enabled, Some(true));
        assert_eq!(registry.panel("projects").next_enabled, Some(false));
        assert_eq!(registry.panel("projects").visible_indices(), vec![6]);
    }

    #[test]
    fn test_out_of_range_page_is_clamped() {
        let mut registry = FakeRegistry::default().with("music", 5);
        let mut paginator = Paginator::new().with_panel("music", PageLayout::new(per_page(4)));

        let status = paginator.render(&mut registry, "music", 99).unwrap();
        assert_eq!(status.page, 2);
        assert_eq!(paginator.current_page("music"), 2);
        assert_eq!(registry.panel("music").visible_indices(), vec![4]);

        let status = paginator.render(&mut registry, "music", 0).unwrap();
        assert_eq!(status.page, 1);
    }

    #[test]
    fn test_missing_panel_is_silent_noop() {
        let mut registry = FakeRegistry::default().with("books", 3);
        let mut paginator = Paginator::new()
            .with_panel("books", PageLayout::new(per_page(4)))
            .with_panel("ghost", PageLayout::new(per_page(4)));

        assert!(paginator.render(&mut registry, "ghost", 1).is_none());
        assert!(paginator.render(&mut registry, "unregistered", 1).is_none());
        assert_eq!(paginator.current_page("ghost"), 1);
        assert!(registry.panel("books").labels.is_none());
    }

    #[test]
    fn test_single_page_controls_hidden_when_requested() {
        let mut registry = FakeRegistry::default().with("projects", 2).with("books", 2);
        let mut paginator = Paginator::new()
            .with_panel(
                "projects",
                PageLayout::new(per_page(3)).hiding_single_page_controls(),
            )
            .with_panel("books", PageLayout::new(per_page(4)));

        paginator.render_all(&mut registry);

        assert_eq!(registry.panel("projects").controls_shown, Some(false));
        assert_eq!(registry.panel("books").controls_shown, None);
    }

    #[test]
    fn test_stagger_delays_reveals_in_page_order() {
        let mut registry = FakeRegistry::default().with("projects", 7);
        let layout = PageLayout::new(per_page(3)).with_stagger(Duration::from_millis(100));
        let mut paginator =
            Paginator::with_scheduler(RecordingScheduler::default()).with_panel("projects", layout);

        paginator.render(&mut registry, "projects", 2);

        let calls = &paginator.scheduler().calls;
        assert_eq!(
            calls,
            &vec![
                ("projects".to_string(), 3, Duration::ZERO),
                ("projects".to_string(), 4, Duration::from_millis(100)),
                ("projects".to_string(), 5, Duration::from_millis(200)),
            ]
        );
        // Visibility is settled without waiting on the scheduler
        assert_eq!(registry.panel("projects").visible_indices(), vec![3, 4, 5]);
    }

    proptest! {
        #[test]
        fn prop_exactly_the_page_slice_is_visible(
            count in 0usize..60,
            size in 1usize..8,
            page_seed in 0usize..20,
        ) {
            let mut registry = FakeRegistry::default().with("p", count);
            let mut paginator = Paginator::new().with_panel("p", PageLayout::new(per_page(size)));
            let window = PageWindow::new(count, per_page(size));
            let page = 1 + page_seed % window.last_page();

            let status = paginator.render(&mut registry, "p", page).unwrap();
            let expected: Vec<usize> = ((page - 1) * size..(page * size).min(count)).collect();

            prop_assert_eq!(status.total_pages, count.div_ceil(size));
            prop_assert_eq!(registry.panel("p").visible_indices(), expected.clone());

            // Idempotent
            paginator.render(&mut registry, "p", page);
            prop_assert_eq!(registry.panel("p").visible_indices(), expected);
        }
    }
}
