//! Tests for share redemption: immediate release, streamed release, and
//! conservation of locked principal.

#![cfg(test)]

use crate::test_helpers::*;
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::token::TokenClient;
use soroban_sdk::{Address, Env};

// ═══════════════════════════════════════════════════════════════════
// 1. Immediate redemption (stream time 0)
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_bond_then_redeem_all_recovers_principal() {
    let e = Env::default();
    let env = setup(&e);
    env.bonding.set_redeem_stream_time(&env.admin, &0_u64);

    let amount = 100 * ONE_LP;
    let shares = env.bonding.bond_tokens(&env.owner, &amount, &6_u32);
    assert_eq!(shares, SHARES_100_LP_6_WEEKS);

    let payout = env.bonding.redeem_shares(&env.owner, &6_u32, &shares);

    // Full redemption recovers the deposit exactly here; in general the
    // floor rounding may strand up to one token unit.
    assert_eq!(payout, amount);
    let tok = TokenClient::new(&e, &env.lp_token);
    assert_eq!(tok.balance(&env.owner), DEFAULT_MINT);
    assert_eq!(env.shares.balance_of(&env.owner, &6_u32), 0);
    assert_eq!(env.bonding.total_locked(), 0);
}

#[test]
fn test_partial_redemption_conserves_locked_total() {
    let e = Env::default();
    let env = setup(&e);

    let amount = 100 * ONE_LP;
    let shares = env.bonding.bond_tokens(&env.owner, &amount, &6_u32);

    let mut redeemed_total = 0_i128;
    for _ in 0..4 {
        redeemed_total += env
            .bonding
            .redeem_shares(&env.owner, &6_u32, &(shares / 4));
        assert_eq!(env.bonding.total_locked(), amount - redeemed_total);
    }

    assert_eq!(env.shares.balance_of(&env.owner, &6_u32), 0);
    // Flooring may strand dust, never create value.
    assert!(redeemed_total <= amount);
    assert!(amount - redeemed_total <= 4);
}

#[test]
fn test_redeem_zero_week_bucket_is_exact() {
    let e = Env::default();
    let env = setup(&e);

    let amount = 7 * ONE_LP + 3;
    let shares = env.bonding.bond_tokens(&env.owner, &amount, &0_u32);
    assert_eq!(shares, amount);

    let payout = env.bonding.redeem_shares(&env.owner, &0_u32, &shares);
    assert_eq!(payout, amount);
}

#[test]
fn test_redeem_reduces_position() {
    let e = Env::default();
    let env = setup(&e);

    let amount = 100 * ONE_LP;
    let shares = env.bonding.bond_tokens(&env.owner, &amount, &6_u32);
    let payout = env.bonding.redeem_shares(&env.owner, &6_u32, &(shares / 2));

    let position = env.bonding.get_position(&env.owner, &6_u32);
    assert_eq!(position.amount, amount - payout);
}

#[test]
fn test_redeem_transferred_shares() {
    let e = Env::default();
    let env = setup(&e);
    let recipient = Address::generate(&e);

    let shares = env.bonding.bond_tokens(&env.owner, &(100 * ONE_LP), &6_u32);
    env.shares
        .transfer(&env.owner, &recipient, &6_u32, &shares);

    let payout = env.bonding.redeem_shares(&recipient, &6_u32, &shares);

    assert_eq!(payout, 100 * ONE_LP);
    let tok = TokenClient::new(&e, &env.lp_token);
    assert_eq!(tok.balance(&recipient), payout);
    assert_eq!(env.shares.balance_of(&recipient, &6_u32), 0);
}

// ═══════════════════════════════════════════════════════════════════
// 2. Redemption — error paths
// ═══════════════════════════════════════════════════════════════════

#[test]
#[should_panic(expected = "insufficient share balance")]
fn test_redeem_twice_panics() {
    let e = Env::default();
    let env = setup(&e);

    let shares = env.bonding.bond_tokens(&env.owner, &(100 * ONE_LP), &6_u32);
    env.bonding.redeem_shares(&env.owner, &6_u32, &shares);
    env.bonding.redeem_shares(&env.owner, &6_u32, &shares);
}

#[test]
#[should_panic(expected = "insufficient share balance")]
fn test_redeem_more_than_balance_panics() {
    let e = Env::default();
    let env = setup(&e);

    let shares = env.bonding.bond_tokens(&env.owner, &(100 * ONE_LP), &6_u32);
    env.bonding.redeem_shares(&env.owner, &6_u32, &(shares + 1));
}

#[test]
#[should_panic(expected = "insufficient share balance")]
fn test_redeem_wrong_bucket_panics() {
    let e = Env::default();
    let env = setup(&e);

    let shares = env.bonding.bond_tokens(&env.owner, &(100 * ONE_LP), &6_u32);
    env.bonding.redeem_shares(&env.owner, &12_u32, &shares);
}

#[test]
#[should_panic(expected = "amount must be positive")]
fn test_redeem_zero_shares_panics() {
    let e = Env::default();
    let env = setup(&e);
    env.bonding.bond_tokens(&env.owner, &(100 * ONE_LP), &6_u32);
    env.bonding.redeem_shares(&env.owner, &6_u32, &0_i128);
}

// ═══════════════════════════════════════════════════════════════════
// 3. Streamed redemption
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_redeem_with_stream_creates_stream_not_transfer() {
    let e = Env::default();
    e.ledger().with_mut(|li| li.timestamp = 10_000);
    let env = setup(&e);
    env.bonding.set_redeem_stream_time(&env.admin, &ONE_WEEK);

    let amount = 100 * ONE_LP;
    let shares = env.bonding.bond_tokens(&env.owner, &amount, &6_u32);
    let payout = env.bonding.redeem_shares(&env.owner, &6_u32, &shares);

    // Nothing reaches the holder until they withdraw from the stream.
    let tok = TokenClient::new(&e, &env.lp_token);
    assert_eq!(tok.balance(&env.owner), DEFAULT_MINT - amount);
    assert_eq!(env.bonding.total_locked(), 0);

    let stream = env.streams.get_stream(&1_u64);
    assert_eq!(stream.recipient, env.owner);
    assert_eq!(stream.deposit, payout);
    assert_eq!(stream.start, 10_000);
    assert_eq!(stream.stop, 10_000 + ONE_WEEK);
    assert_eq!(env.streams.releasable(&1_u64), 0);
}

#[test]
fn test_streamed_payout_withdrawable_over_time() {
    let e = Env::default();
    e.ledger().with_mut(|li| li.timestamp = 0);
    let env = setup(&e);
    env.bonding.set_redeem_stream_time(&env.admin, &ONE_WEEK);

    let amount = 100 * ONE_LP;
    let shares = env.bonding.bond_tokens(&env.owner, &amount, &6_u32);
    let payout = env.bonding.redeem_shares(&env.owner, &6_u32, &shares);

    e.ledger().with_mut(|li| li.timestamp = ONE_WEEK / 2);
    let half = env.streams.releasable(&1_u64);
    assert_eq!(half, payout / 2);
    env.streams.withdraw_from_stream(&env.owner, &1_u64, &half);

    e.ledger().with_mut(|li| li.timestamp = ONE_WEEK);
    env.streams
        .withdraw_from_stream(&env.owner, &1_u64, &(payout - half));

    let tok = TokenClient::new(&e, &env.lp_token);
    assert_eq!(tok.balance(&env.owner), DEFAULT_MINT - amount + payout);
}

#[test]
fn test_stream_time_change_leaves_inflight_streams_untouched() {
    let e = Env::default();
    e.ledger().with_mut(|li| li.timestamp = 0);
    let env = setup(&e);
    env.bonding.set_redeem_stream_time(&env.admin, &ONE_WEEK);

    let shares = env.bonding.bond_tokens(&env.owner, &(100 * ONE_LP), &6_u32);
    env.bonding
        .redeem_shares(&env.owner, &6_u32, &(shares / 2));

    // Reconfigure to immediate; the existing stream keeps its schedule.
    env.bonding.set_redeem_stream_time(&env.admin, &0_u64);
    let stream = env.streams.get_stream(&1_u64);
    assert_eq!(stream.stop, ONE_WEEK);

    // A new redemption now releases immediately, with no second stream.
    let tok = TokenClient::new(&e, &env.lp_token);
    let before = tok.balance(&env.owner);
    let payout = env
        .bonding
        .redeem_shares(&env.owner, &6_u32, &(shares / 2));
    assert_eq!(tok.balance(&env.owner), before + payout);
    assert!(env.streams.try_get_stream(&2_u64).is_err());
}
