//! Per-seat pricing calculator.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::calculator::CalcError;
use crate::constants::{ANNUAL_DISCOUNT_RATE, SEATS_DEFAULT, SEATS_MAX, SEATS_MIN};
use crate::input::BoundedInput;

/// Pricing plan with its monthly per-seat price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    Starter,
    Pro,
    Enterprise,
}

impl Plan {
    pub const ALL: [Plan; 3] = [Self::Starter, Self::Pro, Self::Enterprise];

    /// Monthly price per seat.
    #[must_use]
    pub fn base_price(self) -> f64 {
        match self {
            Self::Starter => 15.0,
            Self::Pro => 39.0,
            Self::Enterprise => 79.0,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Starter => "starter",
            Self::Pro => "pro",
            Self::Enterprise => "enterprise",
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Plan {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "starter" => Ok(Self::Starter),
            "pro" => Ok(Self::Pro),
            "enterprise" => Ok(Self::Enterprise),
            other => Err(CalcError::UnknownPlan(other.to_string())),
        }
    }
}

/// Billing cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Billing {
    #[default]
    Monthly,
    Annual,
}

impl Billing {
    /// Discount applied to the per-seat price.
    #[must_use]
    pub fn discount_rate(self) -> f64 {
        match self {
            Self::Monthly => 0.0,
            Self::Annual => ANNUAL_DISCOUNT_RATE,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Annual => "annual",
        }
    }
}

impl fmt::Display for Billing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Billing {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monthly" | "month" => Ok(Self::Monthly),
            "annual" | "yearly" | "year" => Ok(Self::Annual),
            other => Err(CalcError::UnknownBilling(other.to_string())),
        }
    }
}

/// Derived pricing figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingQuote {
    pub plan: Plan,
    pub billing: Billing,
    pub seats: i64,
    pub base_price: f64,
    pub discount_rate: f64,
    pub price_per_seat: f64,
    /// Per-month cost for all seats.
    pub subtotal: f64,
    /// Amount billed per cycle (twelve months when annual).
    pub total: f64,
    /// Monthly saving from the annual discount; zero when monthly.
    pub savings: f64,
}

/// Price `seats` seats on `plan`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn quote(plan: Plan, billing: Billing, seats: i64) -> PricingQuote {
    let base_price = plan.base_price();
    let discount_rate = billing.discount_rate();
    let price_per_seat = base_price * (1.0 - discount_rate);
    let subtotal = price_per_seat * seats as f64;
    let total = match billing {
        Billing::Annual => subtotal * 12.0,
        Billing::Monthly => subtotal,
    };
    PricingQuote {
        plan,
        billing,
        seats,
        base_price,
        discount_rate,
        price_per_seat,
        subtotal,
        total,
        savings: base_price * seats as f64 * discount_rate,
    }
}

/// Pricing calculator state: plan, billing cycle, and clamped seat count.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingCalculator {
    pub plan: Plan,
    pub billing: Billing,
    pub seats: BoundedInput,
}

impl Default for PricingCalculator {
    fn default() -> Self {
        Self {
            plan: Plan::Pro,
            billing: Billing::Monthly,
            seats: BoundedInput::new(SEATS_DEFAULT, SEATS_MIN, SEATS_MAX, 1),
        }
    }
}

impl PricingCalculator {
    #[must_use]
    pub fn new(plan: Plan, billing: Billing, seats: i64) -> Self {
        let mut calc = Self {
            plan,
            billing,
            ..Self::default()
        };
        calc.seats.set(seats);
        calc
    }

    /// Recompute the quote from current inputs.
    #[must_use]
    pub fn quote(&self) -> PricingQuote {
        quote(self.plan, self.billing, self.seats.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn pro_annual_five_seats() {
        let q = quote(Plan::Pro, Billing::Annual, 5);
        assert!(approx(q.price_per_seat, 31.2));
        assert!(approx(q.subtotal, 156.0));
        assert!(approx(q.total, 1872.0));
        assert!(approx(q.savings, 39.0));
    }

    #[test]
    fn monthly_has_no_discount() {
        let q = quote(Plan::Starter, Billing::Monthly, 10);
        assert!(approx(q.price_per_seat, 15.0));
        assert!(approx(q.subtotal, 150.0));
        assert!(approx(q.total, 150.0));
        assert!(approx(q.savings, 0.0));
    }

    #[test]
    fn calculator_clamps_seats() {
        let calc = PricingCalculator::new(Plan::Pro, Billing::Monthly, -5);
        assert_eq!(calc.seats.value(), 1);
        let calc = PricingCalculator::new(Plan::Pro, Billing::Monthly, 5000);
        assert_eq!(calc.seats.value(), 999);
    }

    #[test]
    fn quote_follows_inputs() {
        let mut calc = PricingCalculator::default();
        calc.billing = Billing::Annual;
        calc.seats.set(5);
        assert!(approx(calc.quote().total, 1872.0));
        calc.plan = Plan::Enterprise;
        assert!(approx(calc.quote().price_per_seat, 63.2));
    }

    #[test]
    fn parse_plan_and_billing() {
        assert_eq!("PRO".parse::<Plan>(), Ok(Plan::Pro));
        assert_eq!("yearly".parse::<Billing>(), Ok(Billing::Annual));
        assert!(matches!("gold".parse::<Plan>(), Err(CalcError::UnknownPlan(_))));
        assert!(matches!(
            "weekly".parse::<Billing>(),
            Err(CalcError::UnknownBilling(_))
        ));
    }
}
