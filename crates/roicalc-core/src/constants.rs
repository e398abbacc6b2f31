//! Input bounds, animation durations, and scan timings for the calculators.

use std::time::Duration;

/// Seat count bounds for the pricing calculator.
pub const SEATS_MIN: i64 = 1;
/// Upper seat bound.
pub const SEATS_MAX: i64 = 999;
/// Default seat count.
pub const SEATS_DEFAULT: i64 = 5;

/// Annual billing discount.
pub const ANNUAL_DISCOUNT_RATE: f64 = 0.2;

/// Content pieces per month (ROI), stepped by 5.
pub const CONTENT_PIECES_MIN: i64 = 5;
pub const CONTENT_PIECES_MAX: i64 = 500;
pub const CONTENT_PIECES_STEP: i64 = 5;
pub const CONTENT_PIECES_DEFAULT: i64 = 40;

/// Content team size (ROI). The lower bound keeps the annual cost non-zero.
pub const TEAM_SIZE_MIN: i64 = 1;
pub const TEAM_SIZE_MAX: i64 = 100;
pub const TEAM_SIZE_DEFAULT: i64 = 5;

/// Average customer value per year (ROI).
pub const CUSTOMER_VALUE_MIN: i64 = 100;
pub const CUSTOMER_VALUE_MAX: i64 = 100_000_000;
pub const CUSTOMER_VALUE_STEP: i64 = 500;
pub const CUSTOMER_VALUE_DEFAULT: i64 = 5_000;

/// Monthly organic sessions (ROI).
pub const TRAFFIC_MIN: i64 = 1_000;
pub const TRAFFIC_MAX: i64 = 1_000_000_000;
pub const TRAFFIC_STEP: i64 = 5_000;
pub const TRAFFIC_DEFAULT: i64 = 50_000;

/// Hours spent per content piece, and the share the tooling removes.
pub const HOURS_PER_PIECE: f64 = 4.5;
pub const HOURS_SAVED_SHARE: f64 = 0.6;

/// Expected organic traffic lift.
pub const TRAFFIC_LIFT_RATE: f64 = 0.18;
/// Traffic lift as shown in the breakdown.
pub const TRAFFIC_LIFT_PERCENT: u32 = 18;

/// Visitor to customer conversion rate.
pub const CONVERSION_RATE: f64 = 0.015;

/// Per-seat monthly rate tiers by team size: `(max team size, rate)`.
pub const COST_TIERS: [(i64, i64); 2] = [(3, 15), (10, 39)];
/// Rate for teams above the last tier.
pub const COST_TIER_TOP_RATE: i64 = 79;

/// Animation window for the pricing headline.
pub const PRICING_ANIMATION: Duration = Duration::from_millis(380);
/// Animation window for the ROI headline.
pub const ROI_ANIMATION: Duration = Duration::from_millis(420);
/// Animation window for audit report figures.
pub const AUDIT_ANIMATION: Duration = Duration::from_millis(600);

/// Total simulated scan time, split evenly across the scan steps.
pub const SCAN_DURATION: Duration = Duration::from_millis(4_000);
/// Interval between one-point progress increments.
pub const PROGRESS_INTERVAL: Duration = Duration::from_millis(40);
/// Delay between reaching 100% and showing results.
pub const SETTLE_DELAY: Duration = Duration::from_millis(400);

/// Ordered labels shown while scanning.
pub const SCAN_STEPS: [&str; 5] = [
    "Crawling sitemap",
    "Extracting page content",
    "Querying AI answer engines",
    "Mapping content gaps",
    "Scoring opportunities",
];

/// Exit codes for the binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid configuration or rejected input.
    pub const ERROR_CONFIG: i32 = 4;
    /// Cancelled by user (Ctrl+C).
    pub const ERROR_CANCELED: i32 = 130;
}
