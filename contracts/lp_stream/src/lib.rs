//! LP Stream Contract
//!
//! A minimal linear payout-streaming primitive. A sender deposits a fixed
//! entitlement for a recipient; the claimable amount grows linearly between
//! `start` and `stop`, and the recipient pulls funds with explicit
//! withdrawals. Nothing is released by a timer; each withdrawal recomputes
//! the currently releasable amount from elapsed time alone.
//!
//! ## Key design decisions
//!
//! - **Pull-based**: the contract never pushes funds; abandoned streams stay
//!   claimable indefinitely.
//! - **No cancellation**: once created, a stream runs to completion.
//! - **Checks-Effects-Interactions**: `withdrawn` is bumped before the token
//!   transfer leaves the contract.

#![no_std]

mod errors;
mod types;

use errors::*;
use types::{DataKey, Stream};

use soroban_sdk::{contract, contractimpl, token::TokenClient, Address, Env, Symbol};



// ─── Helpers ───────────────────────────────────────────────────────────────

fn read_stream(e: &Env, stream_id: u64) -> Stream {
    e.storage()
        .persistent()
        .get(&DataKey::Stream(stream_id))
        .unwrap_or_else(|| panic!("{}", ERR_STREAM_NOT_FOUND))
}

/// Amount claimable right now: the time-proportional vested share of the
/// deposit, minus what has already been withdrawn.
fn releasable_amount(e: &Env, stream: &Stream) -> i128 {
    let now = e.ledger().timestamp();
    if now <= stream.start {
        return 0;
    }
    let duration = (stream.stop - stream.start) as i128;
    let elapsed = if now >= stream.stop {
        duration
    } else {
        (now - stream.start) as i128
    };
    // floor(deposit * elapsed / duration), split to avoid i128 overflow.
    let whole = (stream.deposit / duration)
        .checked_mul(elapsed)
        .unwrap_or_else(|| panic!("{}", ERR_RELEASE_OVERFLOW));
    let vested = whole + (stream.deposit % duration) * elapsed / duration;
    vested - stream.withdrawn
}

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct LpStream;

#[contractimpl]
impl LpStream {
    /// Create a stream of `amount` of `token` from `sender` to `recipient`,
    /// released linearly between `start` and `stop`.
    ///
    /// The sender must have approved this contract to spend `amount`; the
    /// deposit is pulled in full at creation time. Returns the stream ID.
    pub fn create_stream(
        e: Env,
        sender: Address,
        recipient: Address,
        token: Address,
        amount: i128,
        start: u64,
        stop: u64,
    ) -> u64 {
        sender.require_auth();

        if amount <= 0 {
            panic!("{}", ERR_INVALID_AMOUNT);
        }
        if stop <= start {
            panic!("{}", ERR_INVALID_WINDOW);
        }

        // Pull the full entitlement in up front.
        let contract = e.current_contract_address();
        TokenClient::new(&e, &token).transfer_from(&contract, &sender, &contract, &amount);

        // IDs start at 1; 0 is reserved by callers to mean "no stream".
        let stream_id: u64 = e
            .storage()
            .instance()
            .get(&DataKey::NextStreamId)
            .unwrap_or(1_u64);
        let next_id = stream_id
            .checked_add(1)
            .unwrap_or_else(|| panic!("{}", ERR_COUNTER_OVERFLOW));
        e.storage().instance().set(&DataKey::NextStreamId, &next_id);

        let stream = Stream {
            sender: sender.clone(),
            recipient: recipient.clone(),
            token,
            deposit: amount,
            withdrawn: 0,
            start,
            stop,
        };
        e.storage()
            .persistent()
            .set(&DataKey::Stream(stream_id), &stream);

        e.events().publish(
            (Symbol::new(&e, "stream_created"), sender, recipient),
            (stream_id, amount, start, stop),
        );

        stream_id
    }

    /// Withdraw `amount` from a stream. Only the stream's recipient may call,
    /// and `amount` must not exceed the currently releasable balance.
    pub fn withdraw_from_stream(e: Env, recipient: Address, stream_id: u64, amount: i128) {
        recipient.require_auth();

        let mut stream = read_stream(&e, stream_id);
        if stream.recipient != recipient {
            panic!("{}", ERR_UNAUTHORIZED);
        }
        if amount <= 0 {
            panic!("{}", ERR_INVALID_AMOUNT);
        }
        if amount > releasable_amount(&e, &stream) {
            panic!("{}", ERR_EXCEEDS_RELEASABLE);
        }

        // CEI: record the withdrawal before transferring out.
        stream.withdrawn += amount;
        e.storage()
            .persistent()
            .set(&DataKey::Stream(stream_id), &stream);

        let contract = e.current_contract_address();
        TokenClient::new(&e, &stream.token).transfer(&contract, &recipient, &amount);

        e.events().publish(
            (Symbol::new(&e, "stream_withdrawal"), recipient),
            (stream_id, amount),
        );
    }

    // ── Queries ────────────────────────────────────────────────────────────

    /// Amount the recipient could withdraw right now.
    pub fn releasable(e: Env, stream_id: u64) -> i128 {
        let stream = read_stream(&e, stream_id);
        releasable_amount(&e, &stream)
    }

    /// Returns the stream record.
    /// Panics if no stream exists under `stream_id`.
    pub fn get_stream(e: Env, stream_id: u64) -> Stream {
        read_stream(&e, stream_id)
    }
}
