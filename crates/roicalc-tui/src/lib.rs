//! # roicalc-tui
//!
//! Interactive calculator dashboard using ratatui with Elm architecture.

pub mod audit_panel;
pub mod footer;
pub mod header;
pub mod keymap;
pub mod messages;
pub mod model;
pub mod pricing_panel;
pub mod roi_panel;
pub mod styles;

pub use keymap::{KeyAction, KeyContext};
pub use messages::TuiMessage;
pub use model::{CalcApp, TuiError};
