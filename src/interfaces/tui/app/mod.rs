//! TUI application state and operations

mod navigation;
mod shorten_operations;
mod state;

pub use state::{App, CurrentScreen, EditingField, FormState};
