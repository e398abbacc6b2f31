//! # roicalc-cli
//!
//! CLI output, scan progress display, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod scan;
pub mod ui;

pub use presenter::{CliResultPresenter, JsonResultPresenter, ResultPresenter};
pub use scan::{CancellationToken, ScanError, Scanner};
