// Single source of truth for all default values.

// --- Storage ---
pub const DEFAULT_DB_PATH: &str = "tagmatch.db";
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;
pub const DEFAULT_READ_POOL_SIZE: usize = 4;

// --- Similarity ---
pub const DEFAULT_L1_CACHE_SIZE: u64 = 10_000;
pub const DEFAULT_MAX_CONCURRENT_REQUESTS: usize = 8;
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 15_000;
pub const DEFAULT_WRITE_QUEUE_CAPACITY: usize = 1_024;

// --- Matching ---
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.6;
pub const DEFAULT_CROSS_MATCH_THRESHOLD: f64 = 0.4;
pub const DEFAULT_TOP_K: usize = 10;
pub const DEFAULT_ACTIVE_WINDOW_DAYS: u32 = 7;
pub const DEFAULT_MAX_CONCURRENT_CANDIDATES: usize = 16;
pub const DEFAULT_REASON_LIMIT: usize = 3;

// --- LLM ---
pub const DEFAULT_LLM_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_SCORING_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_EXTRACTION_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_REASON_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_LLM_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_LLM_MAX_RETRIES: u32 = 2;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
