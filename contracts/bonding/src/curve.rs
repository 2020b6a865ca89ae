//! Bonding curve: maps a lock duration in weeks to a share multiplier.
//!
//! The curve is `1 + 0.001 * weeks^1.5` in 1e18 fixed point: no bonus at the
//! zero-week floor, roughly +1.47% at 6 weeks, about 4x at the 208-week cap.
//! Pure functions of `weeks` only; every caller sees the same multiplier for
//! the same duration.

use crate::errors::*;
use crate::math;

/// Fixed-point scale: all ratios and token amounts carry 18 decimals.
pub const SCALE: i128 = 1_000_000_000_000_000_000;

/// Shortest permitted lock, in weeks (a zero-week lock earns no bonus).
pub const MIN_LOCK_WEEKS: u32 = 0;

/// Longest permitted lock, in weeks (four years).
pub const MAX_LOCK_WEEKS: u32 = 208;

/// Panics "lock duration out of range" for durations beyond the cap.
/// The unsigned type already enforces the zero-week floor.
pub fn validate_duration(weeks: u32) {
    if weeks > MAX_LOCK_WEEKS {
        panic!("{}", ERR_INVALID_DURATION);
    }
}

/// Share multiplier for a lock of `weeks` weeks, 1e18-scaled.
///
/// Computed as `SCALE + isqrt(weeks^3 * 1e24) * 1e3`, which is
/// `1 + 0.001 * weeks^1.5` exact to the truncation of the integer square
/// root (about 1 part in 1e12 of the bonus term).
pub fn duration_multiplier(weeks: u32) -> i128 {
    validate_duration(weeks);
    let w = weeks as u128;
    // weeks^1.5 scaled by 1e12; w^3 * 1e24 stays far below u128::MAX.
    let root = math::isqrt(w * w * w * 1_000_000_000_000_000_000_000_000);
    SCALE + (root as i128) * 1_000
}

/// Shares minted for locking `amount` LP for `weeks` weeks.
/// Rounds down, biasing against share inflation.
pub fn bond_shares(amount: i128, weeks: u32) -> i128 {
    math::mul_div_floor(amount, duration_multiplier(weeks), SCALE, ERR_SHARES_OVERFLOW)
}

/// LP principal returned for burning `shares` from the `weeks` bucket.
/// The inverse of `bond_shares` under the same multiplier, rounded down.
pub fn unbond_amount(shares: i128, weeks: u32) -> i128 {
    math::mul_div_floor(shares, SCALE, duration_multiplier(weeks), ERR_PAYOUT_OVERFLOW)
}
