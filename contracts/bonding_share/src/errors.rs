/// All panic messages used by the bonding_share contract.
///
/// Using string constants avoids typos in `#[should_panic(expected = "...")]` tests.
pub const ERR_ALREADY_INITIALIZED: &str = "already initialized";
pub const ERR_NOT_INITIALIZED: &str = "not initialized";
pub const ERR_UNAUTHORIZED: &str = "unauthorized";
pub const ERR_INVALID_AMOUNT: &str = "amount must be positive";
pub const ERR_INSUFFICIENT_BALANCE: &str = "insufficient share balance";
pub const ERR_BALANCE_OVERFLOW: &str = "share balance overflow";
pub const ERR_SUPPLY_OVERFLOW: &str = "share supply overflow";
