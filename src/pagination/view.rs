// Panel view capabilities.
// The seam between pagination logic and whatever draws the items.

/// A previous/next affordance attached to a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Previous,
    Next,
}

/// What the paginator needs from a panel on screen.
///
/// Labels and controls are optional parts of a panel, so their setters
/// default to doing nothing.
pub trait PanelView {
    /// Number of items in the panel, in display order.
    fn item_count(&self) -> usize;

    /// Show or hide the item at `index`.
    fn set_item_visible(&mut self, index: usize, visible: bool);

    /// Update the "current / total" page labels.
    fn set_page_labels(&mut self, _current: usize, _total: usize) {}

    /// Enable or disable a navigation control.
    fn set_control_enabled(&mut self, _control: Control, _enabled: bool) {}

    /// Show or hide the whole pagination bar.
    fn set_controls_shown(&mut self, _shown: bool) {}
}

/// Lookup of panel views by key.
pub trait PanelRegistry {
    /// The panel registered under `key`, if it exists.
    fn panel_mut(&mut self, key: &str) -> Option<&mut dyn PanelView>;
}
