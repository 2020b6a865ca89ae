/// All panic messages used by the twap_oracle contract.
///
/// Using string constants avoids typos in `#[should_panic(expected = "...")]` tests.
pub const ERR_ALREADY_INITIALIZED: &str = "already initialized";
pub const ERR_NOT_INITIALIZED: &str = "not initialized";
pub const ERR_NO_HISTORY: &str = "insufficient price history";
pub const ERR_PRICE_OVERFLOW: &str = "price overflow";
