//! ROI calculator: projected revenue impact against tool cost.

use serde::Serialize;

use crate::constants::{
    CONTENT_PIECES_DEFAULT, CONTENT_PIECES_MAX, CONTENT_PIECES_MIN, CONTENT_PIECES_STEP,
    CONVERSION_RATE, COST_TIERS, COST_TIER_TOP_RATE, CUSTOMER_VALUE_DEFAULT, CUSTOMER_VALUE_MAX,
    CUSTOMER_VALUE_MIN, CUSTOMER_VALUE_STEP, HOURS_PER_PIECE, HOURS_SAVED_SHARE,
    TEAM_SIZE_DEFAULT, TEAM_SIZE_MAX, TEAM_SIZE_MIN, TRAFFIC_DEFAULT, TRAFFIC_LIFT_PERCENT,
    TRAFFIC_LIFT_RATE, TRAFFIC_MAX, TRAFFIC_MIN, TRAFFIC_STEP,
};
use crate::input::BoundedInput;

/// Plain ROI input tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoiInputs {
    pub content_pieces: i64,
    pub team_size: i64,
    pub avg_customer_value: i64,
    pub monthly_traffic: i64,
}

/// Derived ROI figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoiBreakdown {
    pub hours_saved: i64,
    pub traffic_lift: i64,
    pub traffic_lift_percent: u32,
    pub new_customers_per_year: i64,
    pub revenue_impact: i64,
    pub annual_cost: i64,
    /// `revenue_impact - annual_cost`, floored at zero.
    pub net_return: i64,
    /// Return on cost as a whole percentage.
    pub roi: i64,
}

/// Monthly per-seat rate for a team of `team_size`.
#[must_use]
pub fn seat_rate(team_size: i64) -> i64 {
    COST_TIERS
        .iter()
        .find(|(max_team, _)| team_size <= *max_team)
        .map_or(COST_TIER_TOP_RATE, |(_, rate)| *rate)
}

/// Annual tool cost for a team.
#[must_use]
pub fn annual_cost(team_size: i64) -> i64 {
    seat_rate(team_size) * team_size * 12
}

/// Derive the ROI breakdown.
///
/// `team_size` must be at least 1; [`RoiCalculator`] guarantees it.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn derive_roi(inputs: &RoiInputs) -> RoiBreakdown {
    let hours_saved = (inputs.content_pieces as f64 * HOURS_PER_PIECE * HOURS_SAVED_SHARE).round();
    let traffic_lift = (inputs.monthly_traffic as f64 * TRAFFIC_LIFT_RATE).round();
    let new_customers = (traffic_lift * CONVERSION_RATE * 12.0).round() as i64;
    let revenue_impact = new_customers * inputs.avg_customer_value;
    let annual_cost = annual_cost(inputs.team_size);

    let roi = ((revenue_impact - annual_cost) as f64 / annual_cost as f64 * 100.0).round();

    RoiBreakdown {
        hours_saved: hours_saved as i64,
        traffic_lift: traffic_lift as i64,
        traffic_lift_percent: TRAFFIC_LIFT_PERCENT,
        new_customers_per_year: new_customers,
        revenue_impact,
        annual_cost,
        net_return: (revenue_impact - annual_cost).max(0),
        roi: roi as i64,
    }
}

/// ROI calculator state with bounded inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct RoiCalculator {
    pub content_pieces: BoundedInput,
    pub team_size: BoundedInput,
    pub avg_customer_value: BoundedInput,
    pub monthly_traffic: BoundedInput,
}

impl Default for RoiCalculator {
    fn default() -> Self {
        Self {
            content_pieces: BoundedInput::new(
                CONTENT_PIECES_DEFAULT,
                CONTENT_PIECES_MIN,
                CONTENT_PIECES_MAX,
                CONTENT_PIECES_STEP,
            ),
            team_size: BoundedInput::new(TEAM_SIZE_DEFAULT, TEAM_SIZE_MIN, TEAM_SIZE_MAX, 1),
            avg_customer_value: BoundedInput::new(
                CUSTOMER_VALUE_DEFAULT,
                CUSTOMER_VALUE_MIN,
                CUSTOMER_VALUE_MAX,
                CUSTOMER_VALUE_STEP,
            ),
            monthly_traffic: BoundedInput::new(
                TRAFFIC_DEFAULT,
                TRAFFIC_MIN,
                TRAFFIC_MAX,
                TRAFFIC_STEP,
            ),
        }
    }
}

impl RoiCalculator {
    /// Build from raw values, clamping each one.
    #[must_use]
    pub fn from_inputs(inputs: &RoiInputs) -> Self {
        let mut calc = Self::default();
        calc.content_pieces.set(inputs.content_pieces);
        calc.team_size.set(inputs.team_size);
        calc.avg_customer_value.set(inputs.avg_customer_value);
        calc.monthly_traffic.set(inputs.monthly_traffic);
        calc
    }

    /// Current (clamped) inputs.
    #[must_use]
    pub fn inputs(&self) -> RoiInputs {
        RoiInputs {
            content_pieces: self.content_pieces.value(),
            team_size: self.team_size.value(),
            avg_customer_value: self.avg_customer_value.value(),
            monthly_traffic: self.monthly_traffic.value(),
        }
    }

    /// Recompute the breakdown from current inputs.
    #[must_use]
    pub fn breakdown(&self) -> RoiBreakdown {
        derive_roi(&self.inputs())
    }
}
