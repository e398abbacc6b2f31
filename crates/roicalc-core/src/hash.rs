//! Deterministic string hash used to seed synthetic report figures.

/// Hash a string to a non-negative integer.
///
/// Folds every Unicode scalar value into `h = h * 31 + c` using wrapping
/// 32-bit signed arithmetic, then returns the magnitude of the result. The
/// return type is unsigned so `|i32::MIN|` is representable.
///
/// # Example
/// ```
/// assert_eq!(roicalc_core::hash::hash(""), 0);
/// assert_eq!(roicalc_core::hash::hash("a"), 97);
/// ```
#[must_use]
pub fn hash(s: &str) -> u32 {
    s.chars()
        .fold(0i32, |h, c| {
            // Every `char` is at most 0x10FFFF, so it always fits in an i32.
            #[allow(clippy::cast_possible_wrap)]
            let code = u32::from(c) as i32;
            h.wrapping_mul(31).wrapping_add(code)
        })
        .unsigned_abs()
}
