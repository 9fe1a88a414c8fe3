//! Register delta calculation
//!
//! The number of net new registrations is `final - initial - skips`, clamped
//! at zero. The same formula feeds both the live preview and the submission
//! payload so the two can never disagree.

use padron_domain::{CounterValue, SkipCount};

/// Net new registrations between two counter readings.
///
/// Pure function of its three arguments; negative results clamp to zero.
pub fn register_delta(initial: CounterValue, end: CounterValue, skips: SkipCount) -> u32 {
    let diff = i64::from(end.value()) - i64::from(initial.value()) - i64::from(skips.value());
    u32::try_from(diff).unwrap_or(0)
}
