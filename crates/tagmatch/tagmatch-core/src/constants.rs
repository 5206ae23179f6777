/// tagmatch version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Display name used when a stored profile has none.
pub const UNKNOWN_DISPLAY_NAME: &str = "Unknown";

/// Display name used when the front end supplies no handle at all.
pub const ANONYMOUS_DISPLAY_NAME: &str = "Anonymous Player";

/// Reason shown when either side has no interests to compare.
pub const REASON_NO_INTERESTS: &str = "Recommended based on similar game interests";

/// Reason shown when the reason generator fails.
pub const REASON_FALLBACK: &str = "These games may have similar gameplay features";

/// Weight contributed by an exact tag match.
pub const EXACT_MATCH_WEIGHT: f64 = 1.0;

/// Decimal places kept in presented match scores.
pub const SCORE_DECIMALS: i32 = 2;

/// Maximum interests per side included in a match-reason prompt.
pub const MAX_REASON_INTERESTS: usize = 5;
