//! # roicalc-core
//!
//! Deterministic derivation engine for the marketing calculators: string
//! hashing, synthetic audit reports, pricing and ROI figures, bounded
//! inputs, eased value animation, and the staged audit flow.

pub mod animation;
pub mod calculator;
pub mod constants;
pub mod domain;
pub mod flow;
pub mod format;
pub mod hash;
pub mod input;
pub mod pricing;
pub mod report;
pub mod roi;
pub mod timer;

// Re-exports
pub use animation::{ease_out_cubic, AnimatedDisplay, AnimatedValue, FrameRequest};
pub use calculator::{CalcError, CalculatorKind};
pub use constants::exit_codes;
pub use domain::extract_domain;
pub use flow::{AuditFlow, FlowStage, FlowTimings};
pub use format::{format_currency, format_money, format_number, format_signed_percent};
pub use hash::hash;
pub use input::BoundedInput;
pub use pricing::{quote, Billing, Plan, PricingCalculator, PricingQuote};
pub use report::{derive_report, Opportunity, Report, Severity};
pub use roi::{derive_roi, RoiBreakdown, RoiCalculator, RoiInputs};
pub use timer::{TimerHandle, TimerQueue};
