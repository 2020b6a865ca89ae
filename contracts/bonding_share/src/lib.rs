//! Bonding Share Ledger Contract
//!
//! Tracks non-fungible-by-duration share balances minted against time-locked
//! LP deposits. Balances are keyed by (holder, duration bucket), where the
//! bucket id is the lock duration in weeks. The bonding engine is the sole
//! minter/burner; holders may transfer bucket balances freely or delegate
//! transfers to an approved operator.
//!
//! ## Key design decisions
//!
//! - **Totals by construction**: bucket supply and per-holder aggregates are
//!   updated in the same mutation as the balance, never recomputed by
//!   iteration.
//! - **Minter-gated supply changes**: only the configured minter (the bonding
//!   engine) may mint or burn, via `require_auth` on the stored address.
//! - **Checked arithmetic**: every balance/supply update panics with a stable
//!   message on overflow.

#![no_std]

mod errors;
mod types;

use errors::*;
use types::DataKey;

use soroban_sdk::{contract, contractimpl, Address, Env, Symbol};



// ─── Helpers ───────────────────────────────────────────────────────────────

fn require_minter(e: &Env) -> Address {
    let minter: Address = e
        .storage()
        .instance()
        .get(&DataKey::Minter)
        .unwrap_or_else(|| panic!("{}", ERR_NOT_INITIALIZED));
    minter.require_auth();
    minter
}

fn read_balance(e: &Env, holder: &Address, bucket: u32) -> i128 {
    e.storage()
        .persistent()
        .get(&DataKey::Balance(holder.clone(), bucket))
        .unwrap_or(0_i128)
}

fn write_balance(e: &Env, holder: &Address, bucket: u32, value: i128) {
    e.storage()
        .persistent()
        .set(&DataKey::Balance(holder.clone(), bucket), &value);
}

fn read_supply(e: &Env, bucket: u32) -> i128 {
    e.storage()
        .persistent()
        .get(&DataKey::BucketSupply(bucket))
        .unwrap_or(0_i128)
}

fn read_holder_total(e: &Env, holder: &Address) -> i128 {
    e.storage()
        .persistent()
        .get(&DataKey::HolderTotal(holder.clone()))
        .unwrap_or(0_i128)
}

/// Credit `amount` to (holder, bucket) and the holder aggregate.
fn credit(e: &Env, holder: &Address, bucket: u32, amount: i128) {
    let balance = read_balance(e, holder, bucket)
        .checked_add(amount)
        .unwrap_or_else(|| panic!("{}", ERR_BALANCE_OVERFLOW));
    write_balance(e, holder, bucket, balance);

    let total = read_holder_total(e, holder)
        .checked_add(amount)
        .unwrap_or_else(|| panic!("{}", ERR_BALANCE_OVERFLOW));
    e.storage()
        .persistent()
        .set(&DataKey::HolderTotal(holder.clone()), &total);
}

/// Debit `amount` from (holder, bucket) and the holder aggregate.
/// Panics if the bucket balance is insufficient.
fn debit(e: &Env, holder: &Address, bucket: u32, amount: i128) {
    let balance = read_balance(e, holder, bucket);
    if balance < amount {
        panic!("{}", ERR_INSUFFICIENT_BALANCE);
    }
    write_balance(e, holder, bucket, balance - amount);

    let total = read_holder_total(e, holder) - amount;
    e.storage()
        .persistent()
        .set(&DataKey::HolderTotal(holder.clone()), &total);
}

fn require_positive(amount: i128) {
    if amount <= 0 {
        panic!("{}", ERR_INVALID_AMOUNT);
    }
}

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct BondingShare;

#[contractimpl]
impl BondingShare {
    /// One-time initialization. Stores `admin` and the sole `minter`
    /// (the bonding engine contract).
    pub fn initialize(e: Env, admin: Address, minter: Address) {
        if e.storage().instance().has(&DataKey::Admin) {
            panic!("{}", ERR_ALREADY_INITIALIZED);
        }
        e.storage().instance().set(&DataKey::Admin, &admin);
        e.storage().instance().set(&DataKey::Minter, &minter);
    }

    // ── Supply changes (minter only) ───────────────────────────────────────

    /// Mint `amount` shares into (holder, bucket).
    ///
    /// Only the configured minter may call. `amount` must be positive.
    pub fn mint(e: Env, holder: Address, bucket: u32, amount: i128) {
        require_minter(&e);
        require_positive(amount);

        let supply = read_supply(&e, bucket)
            .checked_add(amount)
            .unwrap_or_else(|| panic!("{}", ERR_SUPPLY_OVERFLOW));
        e.storage()
            .persistent()
            .set(&DataKey::BucketSupply(bucket), &supply);

        credit(&e, &holder, bucket, amount);

        e.events().publish(
            (Symbol::new(&e, "shares_minted"), holder),
            (bucket, amount),
        );
    }

    /// Burn `amount` shares from (holder, bucket).
    ///
    /// Only the configured minter may call. Panics if the holder's bucket
    /// balance is insufficient.
    pub fn burn(e: Env, holder: Address, bucket: u32, amount: i128) {
        require_minter(&e);
        require_positive(amount);

        debit(&e, &holder, bucket, amount);

        let supply = read_supply(&e, bucket) - amount;
        e.storage()
            .persistent()
            .set(&DataKey::BucketSupply(bucket), &supply);

        e.events().publish(
            (Symbol::new(&e, "shares_burned"), holder),
            (bucket, amount),
        );
    }

    // ── Transfers ──────────────────────────────────────────────────────────

    /// Move `amount` shares of `bucket` from `from` to `to`.
    /// The bucket supply is unchanged; holder aggregates are adjusted.
    pub fn transfer(e: Env, from: Address, to: Address, bucket: u32, amount: i128) {
        from.require_auth();
        require_positive(amount);

        debit(&e, &from, bucket, amount);
        credit(&e, &to, bucket, amount);

        e.events().publish(
            (Symbol::new(&e, "shares_transferred"), from, to),
            (bucket, amount),
        );
    }

    /// Transfer on behalf of `from` by an approved operator.
    /// Panics "unauthorized" if `operator` lacks approval from `from`.
    pub fn transfer_from(
        e: Env,
        operator: Address,
        from: Address,
        to: Address,
        bucket: u32,
        amount: i128,
    ) {
        operator.require_auth();
        require_positive(amount);

        if !Self::is_approved_for_all(e.clone(), from.clone(), operator.clone()) {
            panic!("{}", ERR_UNAUTHORIZED);
        }

        debit(&e, &from, bucket, amount);
        credit(&e, &to, bucket, amount);

        e.events().publish(
            (Symbol::new(&e, "shares_transferred"), from, to),
            (bucket, amount),
        );
    }

    /// Grant or revoke `operator`'s right to transfer any of `owner`'s buckets.
    pub fn set_approval_for_all(e: Env, owner: Address, operator: Address, approved: bool) {
        owner.require_auth();
        e.storage()
            .persistent()
            .set(&DataKey::Operator(owner.clone(), operator.clone()), &approved);
        e.events().publish(
            (Symbol::new(&e, "approval_set"), owner, operator),
            approved,
        );
    }

    // ── Queries ────────────────────────────────────────────────────────────

    /// Share balance of `holder` in `bucket`.
    pub fn balance_of(e: Env, holder: Address, bucket: u32) -> i128 {
        read_balance(&e, &holder, bucket)
    }

    /// Total shares outstanding in `bucket`, across all holders.
    pub fn total_supply(e: Env, bucket: u32) -> i128 {
        read_supply(&e, bucket)
    }

    /// Aggregate share balance of `holder` across all buckets.
    pub fn balance_of_all(e: Env, holder: Address) -> i128 {
        read_holder_total(&e, &holder)
    }

    /// Returns `true` if `operator` may transfer on behalf of `owner`.
    pub fn is_approved_for_all(e: Env, owner: Address, operator: Address) -> bool {
        e.storage()
            .persistent()
            .get(&DataKey::Operator(owner, operator))
            .unwrap_or(false)
    }

    /// The configured minter address.
    pub fn get_minter(e: Env) -> Address {
        e.storage()
            .instance()
            .get(&DataKey::Minter)
            .unwrap_or_else(|| panic!("{}", ERR_NOT_INITIALIZED))
    }
}
