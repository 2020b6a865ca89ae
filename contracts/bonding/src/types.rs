use soroban_sdk::{contracttype, Address};

// ─── Lock positions ────────────────────────────────────────────────────────

/// A holder's locked principal within one duration bucket.
///
/// Deposits into the same bucket accumulate here; redemptions draw the
/// principal down. The duration (and therefore the multiplier) of a position
/// can never change after creation.
#[contracttype]
#[derive(Clone, Debug)]
pub struct LockPosition {
    /// The address that locked the LP tokens.
    pub holder: Address,
    /// Remaining locked principal, in LP token units (1e18 fixed point).
    pub amount: i128,
    /// Lock duration bucket, in weeks.
    pub weeks: u32,
    /// Ledger timestamp of the first deposit into this bucket.
    pub created_at: u64,
    /// Share multiplier applied at mint time (1e18-scaled).
    pub multiplier: i128,
}

// ─── Storage keys ──────────────────────────────────────────────────────────

#[contracttype]
pub enum DataKey {
    /// Contract admin address.
    Admin,
    /// The LP token custodied by the engine.
    LpToken,
    /// Address of the bonding share ledger contract.
    ShareLedger,
    /// Address of the payout streaming contract.
    StreamProvider,
    /// Duration of redemption streams in seconds (0 = immediate release).
    RedeemStreamTime,
    /// Total LP principal currently custodied by the engine.
    TotalLocked,
    /// Per-holder, per-bucket lock position.
    Position(Address, u32),
}
