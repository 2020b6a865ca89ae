//! Overflow-safe fixed-point arithmetic for share accounting.
//!
//! All functions use checked arithmetic and panic with a descriptive message
//! on overflow/underflow.

/// Checked `i128` addition with a stable panic message.
#[inline]
#[must_use]
pub fn add_i128(a: i128, b: i128, msg: &'static str) -> i128 {
    a.checked_add(b).unwrap_or_else(|| panic!("{msg}"))
}

/// Checked `i128` subtraction with a stable panic message.
#[inline]
#[must_use]
pub fn sub_i128(a: i128, b: i128, msg: &'static str) -> i128 {
    a.checked_sub(b).unwrap_or_else(|| panic!("{msg}"))
}

/// Exact `floor(a * b / d)` for non-negative operands without overflowing the
/// intermediate product: `a*b/d = (a/d)*b + (a%d)*b/d`, where the first term
/// carries no remainder.
#[must_use]
pub fn mul_div_floor(a: i128, b: i128, d: i128, msg: &'static str) -> i128 {
    let whole = (a / d).checked_mul(b).unwrap_or_else(|| panic!("{msg}"));
    let part = (a % d)
        .checked_mul(b)
        .unwrap_or_else(|| panic!("{msg}"))
        / d;
    whole.checked_add(part).unwrap_or_else(|| panic!("{msg}"))
}

/// Integer square root (floor) via Newton's method.
#[must_use]
pub fn isqrt(n: u128) -> u128 {
    if n < 2 {
        return n;
    }
    // Initial guess >= sqrt(n): 2^ceil(bits/2).
    let bits = 128 - n.leading_zeros();
    let mut x0 = 1_u128 << bits.div_ceil(2);
    let mut x1 = (x0 + n / x0) / 2;
    while x1 < x0 {
        x0 = x1;
        x1 = (x0 + n / x0) / 2;
    }
    x0
}
