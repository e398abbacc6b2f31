//! Bounded numeric inputs.
//!
//! Every setter clamps to `[min, max]`; out-of-range requests never fail.

use serde::Serialize;

/// A stepped integer input with inclusive bounds.
///
/// # Example
/// ```
/// use roicalc_core::input::BoundedInput;
///
/// let mut seats = BoundedInput::new(5, 1, 999, 1);
/// seats.set(-5);
/// assert_eq!(seats.value(), 1);
/// seats.set(5000);
/// assert_eq!(seats.value(), 999);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoundedInput {
    value: i64,
    min: i64,
    max: i64,
    step: i64,
}

impl BoundedInput {
    /// Create an input; `initial` is clamped into range and `step` floors at 1.
    #[must_use]
    pub fn new(initial: i64, min: i64, max: i64, step: i64) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            value: initial.clamp(min, max),
            min,
            max,
            step: step.max(1),
        }
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> i64 {
        self.value
    }

    #[must_use]
    pub fn min(&self) -> i64 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> i64 {
        self.max
    }

    #[must_use]
    pub fn step(&self) -> i64 {
        self.step
    }

    /// Set the value directly, clamped to bounds. Returns the stored value.
    pub fn set(&mut self, value: i64) -> i64 {
        self.value = value.clamp(self.min, self.max);
        self.value
    }

    /// Step up once, saturating at `max`.
    pub fn increment(&mut self) -> i64 {
        self.set(self.value.saturating_add(self.step))
    }

    /// Step down once, saturating at `min`.
    pub fn decrement(&mut self) -> i64 {
        self.set(self.value.saturating_sub(self.step))
    }

    /// Whether a decrement would change the value.
    #[must_use]
    pub fn can_decrement(&self) -> bool {
        self.value > self.min
    }

    /// Whether an increment would change the value.
    #[must_use]
    pub fn can_increment(&self) -> bool {
        self.value < self.max
    }
}
