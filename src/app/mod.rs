mod state;

use crossterm::event::KeyCode;

pub use state::{App, SharedStore};

/// Possible input events the app reacts to.
pub enum AppEvent {
    Tick,
    KeyPress(KeyCode),
}
