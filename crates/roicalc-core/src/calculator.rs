//! Calculator variants and the shared error type.
//!
//! Derivations are total; `CalcError` only covers boundary checks such as
//! parsing an option name or starting an audit without a domain.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Error type for calculator boundaries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    /// The audit input was empty or whitespace only.
    #[error("enter a domain to analyze")]
    EmptyDomain,

    /// A scan is already running; reset before starting another.
    #[error("a scan is already in progress")]
    FlowBusy,

    /// Unrecognized pricing plan name.
    #[error("unknown plan: {0}")]
    UnknownPlan(String),

    /// Unrecognized billing cycle name.
    #[error("unknown billing cycle: {0}")]
    UnknownBilling(String),

    /// Unrecognized calculator name.
    #[error("unknown calculator: {0}")]
    UnknownCalculator(String),
}

/// The three calculator variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculatorKind {
    Roi,
    Pricing,
    Audit,
}

impl CalculatorKind {
    /// All variants in display order.
    pub const ALL: [CalculatorKind; 3] = [Self::Roi, Self::Pricing, Self::Audit];

    /// Short lowercase name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Roi => "roi",
            Self::Pricing => "pricing",
            Self::Audit => "audit",
        }
    }

    /// Title shown above the calculator.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Roi => "ROI Calculator",
            Self::Pricing => "Pricing Calculator",
            Self::Audit => "AI Search Audit",
        }
    }
}

impl fmt::Display for CalculatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CalculatorKind {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "roi" => Ok(Self::Roi),
            "pricing" | "price" => Ok(Self::Pricing),
            "audit" | "report" => Ok(Self::Audit),
            other => Err(CalcError::UnknownCalculator(other.to_string())),
        }
    }
}
