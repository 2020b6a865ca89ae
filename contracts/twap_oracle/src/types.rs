use soroban_sdk::contracttype;

// ─── Observations ──────────────────────────────────────────────────────────

/// A single reading of the pool's cumulative price counter.
///
/// `cumulative` accumulates price × seconds (1e18-scaled) and is allowed to
/// wrap; TWAP deltas are taken with modular arithmetic.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceObservation {
    /// Cumulative price counter at `timestamp`.
    pub cumulative: u128,
    /// Ledger timestamp of the reading.
    pub timestamp: u64,
}

// ─── Storage keys ──────────────────────────────────────────────────────────

#[contracttype]
pub enum DataKey {
    /// Address of the pool whose cumulative price is consumed.
    Pool,
    /// Last cached observation; replaced on every successful update.
    LastObservation,
}
