//! TUI message types (Elm Messages).

use std::time::Duration;

use crossterm::event::KeyEvent;

/// Messages that drive the TUI update cycle.
#[derive(Debug, Clone)]
pub enum TuiMessage {
    /// Frame tick carrying the time since the dashboard started.
    Tick(Duration),
    /// Raw key press; mapped against the current input context.
    Key(KeyEvent),
    /// Terminal resize event.
    Resize { width: u16, height: u16 },
    /// Quit the application.
    Quit,
}
