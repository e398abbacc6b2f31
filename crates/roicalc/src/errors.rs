//! Error handling and exit codes.

use roicalc_cli::scan::ScanError;
use roicalc_core::calculator::CalcError;
use roicalc_core::constants::exit_codes;

/// Exit code for a core error.
pub fn handle_error(err: &CalcError) -> i32 {
    match err {
        CalcError::EmptyDomain
        | CalcError::UnknownPlan(_)
        | CalcError::UnknownBilling(_)
        | CalcError::UnknownCalculator(_) => exit_codes::ERROR_CONFIG,
        CalcError::FlowBusy => exit_codes::ERROR_GENERIC,
    }
}

/// Exit code for any error surfaced by [`crate::app::run`].
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(scan) = err.downcast_ref::<ScanError>() {
        match scan {
            ScanError::Rejected(e) => handle_error(e),
            ScanError::Cancelled => exit_codes::ERROR_CANCELED,
        }
    } else if let Some(calc) = err.downcast_ref::<CalcError>() {
        handle_error(calc)
    } else {
        exit_codes::ERROR_GENERIC
    }
}
