// Client-side pagination for panels of items.
// Keeps per-panel page state and drives panel views through the PanelView seam.

#![allow(dead_code, unused_imports)]

mod controls;
pub mod renderer;
pub mod reveal;
pub mod store;
pub mod view;

pub use renderer::{PageLayout, PageStatus, PageWindow, Paginator};
pub use reveal::{Immediate, RevealQueue, RevealScheduler};
pub use store::{FIRST_PAGE, PageStateStore};
pub use view::{Control, PanelRegistry, PanelView};
