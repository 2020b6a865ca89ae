/// All panic messages used by the lp_stream contract.
///
/// Using string constants avoids typos in `#[should_panic(expected = "...")]` tests.
pub const ERR_UNAUTHORIZED: &str = "unauthorized";
pub const ERR_INVALID_AMOUNT: &str = "amount must be positive";
pub const ERR_INVALID_WINDOW: &str = "stream stop must be after start";
pub const ERR_STREAM_NOT_FOUND: &str = "stream not found";
pub const ERR_EXCEEDS_RELEASABLE: &str = "amount exceeds releasable balance";
pub const ERR_COUNTER_OVERFLOW: &str = "stream counter overflow";
pub const ERR_RELEASE_OVERFLOW: &str = "release calculation overflow";
