//! Tests for the bonding curve.

#![cfg(test)]

use crate::curve::{
    bond_shares, duration_multiplier, unbond_amount, MAX_LOCK_WEEKS, MIN_LOCK_WEEKS, SCALE,
};

const ONE_LP: i128 = SCALE;

#[test]
fn test_multiplier_is_exactly_one_at_minimum() {
    assert_eq!(duration_multiplier(MIN_LOCK_WEEKS), SCALE);
}

#[test]
fn test_multiplier_reference_value_at_6_weeks() {
    // 1 + 0.001 * 6^1.5 = 1.014696938456699068...
    assert_eq!(duration_multiplier(6), 1_014_696_938_456_699_000);
}

#[test]
fn test_multiplier_monotonically_non_decreasing() {
    let mut previous = duration_multiplier(MIN_LOCK_WEEKS);
    for weeks in (MIN_LOCK_WEEKS + 1)..=MAX_LOCK_WEEKS {
        let current = duration_multiplier(weeks);
        assert!(current >= previous, "multiplier decreased at {weeks} weeks");
        previous = current;
    }
}

#[test]
fn test_multiplier_at_cap_is_about_four() {
    // 1 + 0.001 * 208^1.5 ≈ 3.9998
    let m = duration_multiplier(MAX_LOCK_WEEKS);
    assert!(m > 3_990_000_000_000_000_000);
    assert!(m < 4_010_000_000_000_000_000);
}

#[test]
fn test_multiplier_deterministic() {
    assert_eq!(duration_multiplier(42), duration_multiplier(42));
}

#[test]
#[should_panic(expected = "lock duration out of range")]
fn test_multiplier_beyond_cap_panics() {
    duration_multiplier(MAX_LOCK_WEEKS + 1);
}

#[test]
fn test_bond_shares_reference_scenario() {
    // 100 LP for 6 weeks yields 101.4696938456699 shares.
    let shares = bond_shares(100 * ONE_LP, 6);
    assert_eq!(shares, 101_469_693_845_669_900_000);
}

#[test]
fn test_bond_shares_rounds_down() {
    // One stroop for 6 weeks: 1.0146... floors to 1.
    assert_eq!(bond_shares(1, 6), 1);
    // Zero weeks is the identity.
    assert_eq!(bond_shares(1, 0), 1);
}

#[test]
fn test_unbond_inverts_bond_within_one_unit() {
    for amount in [
        1_i128,
        999_i128,
        ONE_LP,
        3 * ONE_LP + 7,
        100 * ONE_LP,
        1_234_567_890_123_456_789_012_i128,
    ] {
        for weeks in [0_u32, 1, 6, 52, 208] {
            let recovered = unbond_amount(bond_shares(amount, weeks), weeks);
            assert!(recovered <= amount);
            assert!(amount - recovered <= 1, "lost more than dust at {weeks} weeks");
        }
    }
}
