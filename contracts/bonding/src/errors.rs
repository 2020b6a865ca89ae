/// All panic messages used by the bonding contract.
///
/// Using string constants avoids typos in `#[should_panic(expected = "...")]` tests.
pub const ERR_ALREADY_INITIALIZED: &str = "already initialized";
pub const ERR_NOT_INITIALIZED: &str = "not initialized";
pub const ERR_UNAUTHORIZED: &str = "unauthorized";
pub const ERR_INVALID_AMOUNT: &str = "amount must be positive";
pub const ERR_INVALID_DURATION: &str = "lock duration out of range";
pub const ERR_INSUFFICIENT_SHARES: &str = "insufficient share balance";
pub const ERR_NO_POSITION: &str = "no lock position found";
pub const ERR_SHARES_OVERFLOW: &str = "share calculation overflow";
pub const ERR_PAYOUT_OVERFLOW: &str = "payout calculation overflow";
pub const ERR_LOCKED_OVERFLOW: &str = "locked total overflow";
pub const ERR_LOCKED_UNDERFLOW: &str = "locked total underflow";
pub const ERR_STREAM_STOP_OVERFLOW: &str = "stream stop timestamp would overflow";
