//! Application state.
//!
//! - `screen`: Screen enum and the static home menu
//! - `app`: Navigation state machine driven by input events
//! - `terminal`: Terminal command line and last command result

mod app;
mod screen;
mod terminal;

pub use app::{AppState, Update};
pub use screen::{MENU, MENU_LEN, MenuItem, Screen};
pub use terminal::{NO_OUTPUT, PLACEHOLDER, TerminalSession, truncate_chars};
