use soroban_sdk::{contracttype, Address};

// ─── Storage keys ──────────────────────────────────────────────────────────

#[contracttype]
pub enum DataKey {
    /// Contract admin address.
    Admin,
    /// Sole address allowed to mint and burn shares (the bonding engine).
    Minter,
    /// Share balance per (holder, duration bucket in weeks).
    Balance(Address, u32),
    /// Total shares outstanding per duration bucket.
    BucketSupply(u32),
    /// Aggregate share balance per holder across all buckets.
    HolderTotal(Address),
    /// Operator approval: (owner, operator) -> bool.
    Operator(Address, Address),
}
