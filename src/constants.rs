//! Application-wide constants and configuration values
//!
//! Default connection settings and the per-group fallback option values live
//! here so a change of API version or default team touches one file.

/// Default base URL for every request
pub const DEFAULT_BASE_URL: &str = "http://thebluealliance.com/api/v2";

/// Header the API uses to identify the calling application (`X-TBA-App-Id`)
pub const APP_ID_HEADER: &str = "x-tba-app-id";

/// Default value sent in the application identifier header
pub const DEFAULT_APP_ID: &str = "tba_wrapper:api_wrapper:1";

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 16;

/// Name used for the config directory and the default log file
pub const APP_NAME: &str = "tba_wrapper";

/// Fallback option values used when a caller leaves a key out
pub mod defaults {
    /// First page of the paged team listing
    pub const PAGE_NUM: i64 = 1;

    pub const TEAM_KEY: &str = "frc1114";

    pub const EVENT_KEY: &str = "2014cmp";

    pub const MATCH_KEY: &str = "2014cmp_f1m1";

    pub const DISTRICT_SHORT: &str = "ne";

    pub const YEAR: i64 = 2016;
}
