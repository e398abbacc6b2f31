//! Synthetic content-gap report derived from a domain string.
//!
//! Every figure is an affine transform of a shifted or masked slice of
//! [`hash`](crate::hash::hash). Equal domains always yield equal reports.

use std::fmt;

use serde::Serialize;

use crate::hash::hash;

/// Opportunity severity tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    High,
    Med,
    Low,
}

impl Severity {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Med => "MED",
            Self::Low => "LOW",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the opportunity list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Opportunity {
    pub label: &'static str,
    pub count: u32,
    pub severity: Severity,
}

/// Derivation rule for one opportunity: `base + ((h >> shift) % modulus)`.
struct OpportunityRule {
    label: &'static str,
    shift: u32,
    modulus: u32,
    base: u32,
    severity: Severity,
}

const OPPORTUNITY_RULES: [OpportunityRule; 5] = [
    OpportunityRule {
        label: "Questions AI answers without citing you",
        shift: 0,
        modulus: 38,
        base: 12,
        severity: Severity::High,
    },
    OpportunityRule {
        label: "Comparison queries owned by competitors",
        shift: 2,
        modulus: 22,
        base: 6,
        severity: Severity::High,
    },
    OpportunityRule {
        label: "Pages missing structured answers",
        shift: 6,
        modulus: 31,
        base: 9,
        severity: Severity::Med,
    },
    OpportunityRule {
        label: "Stale statistics on top pages",
        shift: 8,
        modulus: 17,
        base: 4,
        severity: Severity::Med,
    },
    OpportunityRule {
        label: "Thin FAQ coverage",
        shift: 10,
        modulus: 13,
        base: 3,
        severity: Severity::Low,
    },
];

/// Synthetic audit report for one domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub domain: String,
    /// Pages discovered on the site.
    pub pages: u32,
    /// Pages lacking AI-ready content.
    pub missing_ai: u32,
    /// Content gaps against competitors.
    pub gaps: u32,
    /// Monthly sessions at risk.
    pub traffic_at_risk: u32,
    /// Percentage of AI answers that cite the domain.
    pub citation_rate: u32,
    pub opportunities: Vec<Opportunity>,
}

/// Derive the report for `domain`.
///
/// # Example
/// ```
/// let report = roicalc_core::report::derive_report("");
/// assert_eq!(report.pages, 180);
/// assert_eq!(report.opportunities.len(), 5);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn derive_report(domain: &str) -> Report {
    let h = hash(domain);

    let pages = 180 + h % 820;
    let missing_share = 0.55 + f64::from((h >> 4) % 30) / 100.0;
    let missing_ai = (f64::from(pages) * missing_share).round() as u32;

    let opportunities = OPPORTUNITY_RULES
        .iter()
        .map(|rule| Opportunity {
            label: rule.label,
            count: rule.base + (h >> rule.shift) % rule.modulus,
            severity: rule.severity,
        })
        .collect();

    Report {
        domain: domain.to_string(),
        pages,
        missing_ai,
        gaps: 14 + h % 48,
        traffic_at_risk: 7_000 + h % 43_000,
        citation_rate: 6 + h % 18,
        opportunities,
    }
}
