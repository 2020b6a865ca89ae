//! LP Bonding Engine Contract
//!
//! Locks LP tokens for a chosen duration and mints bonding shares boosted by
//! a duration-dependent multiplier (longer lock, more shares per unit). Shares
//! are redeemed for the underlying LP either immediately or through a linear
//! payout stream, depending on the configured redeem stream time.
//!
//! ## Key design decisions
//!
//! - **Dependency injection**: the LP token, share ledger and stream provider
//!   are fixed at initialization; nothing is resolved through a registry at
//!   call time.
//! - **One bucket per duration**: shares are minted into the bucket keyed by
//!   the lock's week count, so every share in a bucket carries the same
//!   multiplier and redemption needs no per-deposit bookkeeping.
//! - **Round down on mint and on redeem**: the engine can never pay out more
//!   principal than it custodies; a full redemption recovers the deposit to
//!   within one token unit.
//! - **Checks-Effects-Interactions**: shares are burned and totals reduced
//!   before any LP leaves the contract.

#![no_std]

pub mod curve;
mod errors;
mod interfaces;
mod math;
mod types;

use errors::*;
use interfaces::{ShareLedgerClient, StreamProviderClient};
use types::{DataKey, LockPosition};

use soroban_sdk::{contract, contractimpl, token::TokenClient, Address, Env, Symbol};



#[cfg(test)]
mod test_curve;


#[cfg(test)]
mod test_redeem;

// ─── Helpers ───────────────────────────────────────────────────────────────

fn require_admin(e: &Env, caller: &Address) {
    caller.require_auth();
    let stored: Address = e
        .storage()
        .instance()
        .get(&DataKey::Admin)
        .unwrap_or_else(|| panic!("{}", ERR_NOT_INITIALIZED));
    if stored != *caller {
        panic!("{}", ERR_UNAUTHORIZED);
    }
}

fn get_lp_token(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&DataKey::LpToken)
        .unwrap_or_else(|| panic!("{}", ERR_NOT_INITIALIZED))
}

fn get_share_ledger(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&DataKey::ShareLedger)
        .unwrap_or_else(|| panic!("{}", ERR_NOT_INITIALIZED))
}

fn get_stream_provider(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&DataKey::StreamProvider)
        .unwrap_or_else(|| panic!("{}", ERR_NOT_INITIALIZED))
}

fn read_total_locked(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&DataKey::TotalLocked)
        .unwrap_or(0_i128)
}

fn write_total_locked(e: &Env, value: i128) {
    e.storage().instance().set(&DataKey::TotalLocked, &value);
}

/// Release `payout` LP to `holder`: directly when no stream time is
/// configured, otherwise through a freshly created payout stream.
/// Returns the stream ID (0 for an immediate release).
fn release_payout(e: &Env, holder: &Address, payout: i128) -> u64 {
    let lp_token = get_lp_token(e);
    let contract = e.current_contract_address();
    let stream_time: u64 = e
        .storage()
        .instance()
        .get(&DataKey::RedeemStreamTime)
        .unwrap_or(0_u64);

    if stream_time == 0 {
        TokenClient::new(e, &lp_token).transfer(&contract, holder, &payout);
        return 0;
    }

    let provider = get_stream_provider(e);
    let start = e.ledger().timestamp();
    let stop = start
        .checked_add(stream_time)
        .unwrap_or_else(|| panic!("{}", ERR_STREAM_STOP_OVERFLOW));

    // The provider pulls the deposit via transfer_from.
    let approve_until = e.ledger().sequence().saturating_add(1_000);
    TokenClient::new(e, &lp_token).approve(&contract, &provider, &payout, &approve_until);

    StreamProviderClient::new(e, &provider)
        .create_stream(&contract, holder, &lp_token, &payout, &start, &stop)
}

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct Bonding;

#[contractimpl]
impl Bonding {
    /// One-time initialization. Wires the engine to its collaborators:
    /// the LP token it custodies, the share ledger it mints against, and the
    /// stream provider used for time-released redemptions.
    pub fn initialize(
        e: Env,
        admin: Address,
        lp_token: Address,
        share_ledger: Address,
        stream_provider: Address,
    ) {
        if e.storage().instance().has(&DataKey::Admin) {
            panic!("{}", ERR_ALREADY_INITIALIZED);
        }
        e.storage().instance().set(&DataKey::Admin, &admin);
        e.storage().instance().set(&DataKey::LpToken, &lp_token);
        e.storage()
            .instance()
            .set(&DataKey::ShareLedger, &share_ledger);
        e.storage()
            .instance()
            .set(&DataKey::StreamProvider, &stream_provider);
    }

    /// Set the duration of redemption payout streams, in seconds.
    /// Zero releases redemptions immediately. Takes effect for subsequently
    /// created streams only; in-flight streams are untouched.
    pub fn set_redeem_stream_time(e: Env, admin: Address, duration_secs: u64) {
        require_admin(&e, &admin);
        let old: u64 = e
            .storage()
            .instance()
            .get(&DataKey::RedeemStreamTime)
            .unwrap_or(0_u64);
        e.storage()
            .instance()
            .set(&DataKey::RedeemStreamTime, &duration_secs);
        e.events().publish(
            (Symbol::new(&e, "stream_time_set"),),
            (old, duration_secs),
        );
    }

    // ── Bonding lifecycle ──────────────────────────────────────────────────

    /// Lock `amount` LP tokens for `weeks` weeks.
    ///
    /// Requirements:
    /// - `amount` > 0
    /// - `weeks` within the curve's range (0..=208)
    /// - Caller has approved the contract to spend `amount`
    ///
    /// Mints `amount * duration_multiplier(weeks)` shares (rounded down) into
    /// the caller's `weeks` bucket and records the locked principal.
    /// Returns the shares minted.
    pub fn bond_tokens(e: Env, owner: Address, amount: i128, weeks: u32) -> i128 {
        owner.require_auth();

        if amount <= 0 {
            panic!("{}", ERR_INVALID_AMOUNT);
        }
        let multiplier = curve::duration_multiplier(weeks);

        // Pull the LP in first (caller must have approved).
        let lp_token = get_lp_token(&e);
        let contract = e.current_contract_address();
        TokenClient::new(&e, &lp_token).transfer_from(&contract, &owner, &contract, &amount);

        let shares = curve::bond_shares(amount, weeks);
        ShareLedgerClient::new(&e, &get_share_ledger(&e)).mint(&owner, &weeks, &shares);

        // Accumulate principal into the holder's bucket position.
        let key = DataKey::Position(owner.clone(), weeks);
        let position = match e.storage().persistent().get::<_, LockPosition>(&key) {
            Some(mut existing) => {
                existing.amount = math::add_i128(existing.amount, amount, ERR_LOCKED_OVERFLOW);
                existing
            }
            None => LockPosition {
                holder: owner.clone(),
                amount,
                weeks,
                created_at: e.ledger().timestamp(),
                multiplier,
            },
        };
        e.storage().persistent().set(&key, &position);

        let total = math::add_i128(read_total_locked(&e), amount, ERR_LOCKED_OVERFLOW);
        write_total_locked(&e, total);

        e.events().publish(
            (Symbol::new(&e, "tokens_bonded"), owner),
            (amount, weeks, shares),
        );

        shares
    }

    /// Burn `shares` from the caller's `weeks` bucket and release the
    /// corresponding LP principal.
    ///
    /// The payout uses the same multiplier basis as minting (a pure function
    /// of the bucket), so pooled deposits redeem consistently. With a redeem
    /// stream time configured the payout is delivered through a stream the
    /// holder withdraws from over time; otherwise it is transferred at once.
    /// Returns the payout amount.
    pub fn redeem_shares(e: Env, owner: Address, weeks: u32, shares: i128) -> i128 {
        owner.require_auth();

        if shares <= 0 {
            panic!("{}", ERR_INVALID_AMOUNT);
        }

        let ledger = ShareLedgerClient::new(&e, &get_share_ledger(&e));
        if ledger.balance_of(&owner, &weeks) < shares {
            panic!("{}", ERR_INSUFFICIENT_SHARES);
        }

        let payout = curve::unbond_amount(shares, weeks);

        // CEI: burn and reduce totals before any LP leaves the contract.
        ledger.burn(&owner, &weeks, &shares);

        let key = DataKey::Position(owner.clone(), weeks);
        if let Some(mut position) = e.storage().persistent().get::<_, LockPosition>(&key) {
            // Rounding leaves at most dust behind; shares received by
            // transfer redeem without a position record here.
            position.amount = if position.amount > payout {
                position.amount - payout
            } else {
                0
            };
            e.storage().persistent().set(&key, &position);
        }

        let total = math::sub_i128(read_total_locked(&e), payout, ERR_LOCKED_UNDERFLOW);
        write_total_locked(&e, total);

        let stream_id = release_payout(&e, &owner, payout);

        e.events().publish(
            (Symbol::new(&e, "shares_redeemed"), owner),
            (weeks, shares, payout, stream_id),
        );

        payout
    }

    // ── Queries ────────────────────────────────────────────────────────────

    /// The holder's lock position in the `weeks` bucket.
    /// Panics if no position record exists.
    pub fn get_position(e: Env, holder: Address, weeks: u32) -> LockPosition {
        e.storage()
            .persistent()
            .get(&DataKey::Position(holder, weeks))
            .unwrap_or_else(|| panic!("{}", ERR_NO_POSITION))
    }

    /// Total LP principal currently custodied by the engine.
    pub fn total_locked(e: Env) -> i128 {
        read_total_locked(&e)
    }

    /// Configured redeem stream duration in seconds (0 = immediate).
    pub fn redeem_stream_time(e: Env) -> u64 {
        e.storage()
            .instance()
            .get(&DataKey::RedeemStreamTime)
            .unwrap_or(0_u64)
    }

    /// The admin address.
    pub fn get_admin(e: Env) -> Address {
        e.storage()
            .instance()
            .get(&DataKey::Admin)
            .unwrap_or_else(|| panic!("{}", ERR_NOT_INITIALIZED))
    }
}
