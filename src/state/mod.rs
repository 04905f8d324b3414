// State management module.
// Holds the paginated panels and console history behind the UI.

#![allow(dead_code)]

pub mod console;
pub mod panels;

pub use console::{ConsoleLevel, ConsoleMessage, ConsoleState};
pub use panels::{ListPanel, PROJECTS_KEY, Panels};
