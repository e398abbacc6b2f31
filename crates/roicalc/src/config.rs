//! Application configuration from CLI flags and environment.

use clap::Parser;

use roicalc_core::calculator::{CalcError, CalculatorKind};
use roicalc_core::constants::{
    CONTENT_PIECES_DEFAULT, CUSTOMER_VALUE_DEFAULT, SEATS_DEFAULT, TEAM_SIZE_DEFAULT,
    TRAFFIC_DEFAULT,
};
use roicalc_core::pricing::{Billing, Plan, PricingCalculator};
use roicalc_core::roi::{RoiCalculator, RoiInputs};

/// roicalc: pricing, ROI and AI search audit calculators.
#[derive(Parser, Debug)]
#[command(name = "roicalc", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Calculator to evaluate: roi, pricing, or audit.
    #[arg(long, default_value = "roi", env = "ROICALC_CALCULATOR")]
    pub calculator: String,

    /// ROI: content pieces published per month.
    #[arg(long, default_value_t = CONTENT_PIECES_DEFAULT, allow_negative_numbers = true)]
    pub content_pieces: i64,

    /// ROI: team size.
    #[arg(long, default_value_t = TEAM_SIZE_DEFAULT, allow_negative_numbers = true)]
    pub team_size: i64,

    /// ROI: average customer value in dollars.
    #[arg(long, default_value_t = CUSTOMER_VALUE_DEFAULT, allow_negative_numbers = true)]
    pub customer_value: i64,

    /// ROI: monthly organic traffic.
    #[arg(long, default_value_t = TRAFFIC_DEFAULT, allow_negative_numbers = true)]
    pub traffic: i64,

    /// Pricing: plan (starter, pro, enterprise).
    #[arg(long, default_value = "pro", env = "ROICALC_PLAN")]
    pub plan: String,

    /// Pricing: billing cycle (monthly, annual).
    #[arg(long, default_value = "monthly", env = "ROICALC_BILLING")]
    pub billing: String,

    /// Pricing: number of seats.
    #[arg(long, default_value_t = SEATS_DEFAULT, allow_negative_numbers = true)]
    pub seats: i64,

    /// Audit: website URL or domain.
    #[arg(long, env = "ROICALC_DOMAIN")]
    pub domain: Option<String>,

    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// Also write the JSON result to this file.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Quiet mode (only output the headline number).
    #[arg(short, long)]
    pub quiet: bool,

    /// Audit: skip the real-time scan simulation.
    #[arg(long)]
    pub no_animate: bool,

    /// Launch interactive TUI.
    #[arg(long)]
    pub tui: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn calculator_kind(&self) -> Result<CalculatorKind, CalcError> {
        self.calculator.parse()
    }

    /// ROI calculator seeded from the flags, each value clamped.
    #[must_use]
    pub fn roi_calculator(&self) -> RoiCalculator {
        RoiCalculator::from_inputs(&RoiInputs {
            content_pieces: self.content_pieces,
            team_size: self.team_size,
            avg_customer_value: self.customer_value,
            monthly_traffic: self.traffic,
        })
    }

    /// Pricing calculator seeded from the flags, seats clamped.
    pub fn pricing_calculator(&self) -> Result<PricingCalculator, CalcError> {
        let plan: Plan = self.plan.parse()?;
        let billing: Billing = self.billing.parse()?;
        Ok(PricingCalculator::new(plan, billing, self.seats))
    }
}
