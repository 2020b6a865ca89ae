//! Narrow client interfaces for the engine's collaborators.
//!
//! The engine is wired to concrete contract addresses at initialization and
//! talks to them through these minimal interfaces; any contract exporting the
//! same functions (including a local test deployment) satisfies them.

use soroban_sdk::{contractclient, Address, Env};

/// Share ledger operations the engine needs: supply changes and one query.
#[contractclient(name = "ShareLedgerClient")]
pub trait ShareLedgerInterface {
    /// Mint `amount` shares into (holder, bucket).
    fn mint(e: Env, holder: Address, bucket: u32, amount: i128);

    /// Burn `amount` shares from (holder, bucket).
    fn burn(e: Env, holder: Address, bucket: u32, amount: i128);

    /// Share balance of `holder` in `bucket`.
    fn balance_of(e: Env, holder: Address, bucket: u32) -> i128;
}

/// The payout streaming primitive.
#[contractclient(name = "StreamProviderClient")]
pub trait StreamProviderInterface {
    /// Create a stream of `amount` of `token` from `sender` to `recipient`,
    /// released linearly between `start` and `stop`. Returns the stream ID.
    fn create_stream(
        e: Env,
        sender: Address,
        recipient: Address,
        token: Address,
        amount: i128,
        start: u64,
        stop: u64,
    ) -> u64;

    /// Withdraw `amount` from a stream; recipient-only.
    fn withdraw_from_stream(e: Env, recipient: Address, stream_id: u64, amount: i128);
}
