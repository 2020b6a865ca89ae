use soroban_sdk::{contracttype, Address};

// ─── Stream state ──────────────────────────────────────────────────────────

/// A linear payout stream. The claimable amount grows proportionally with
/// elapsed time between `start` and `stop`; `withdrawn` only ever increases.
#[contracttype]
#[derive(Clone, Debug)]
pub struct Stream {
    /// Address that funded the stream.
    pub sender: Address,
    /// Address entitled to withdraw.
    pub recipient: Address,
    /// Token being streamed.
    pub token: Address,
    /// Total entitlement deposited at creation.
    pub deposit: i128,
    /// Amount already withdrawn by the recipient.
    pub withdrawn: i128,
    /// Ledger timestamp at which release begins.
    pub start: u64,
    /// Ledger timestamp at which the full deposit is released.
    pub stop: u64,
}

// ─── Storage keys ──────────────────────────────────────────────────────────

#[contracttype]
pub enum DataKey {
    /// Counter for generating unique stream IDs.
    NextStreamId,
    /// A stream record, indexed by ID.
    Stream(u64),
}
