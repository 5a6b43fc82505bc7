/// Configuration constants for the Mist API
pub mod api {
    /// Version path every normalized base URL ends with
    pub const VERSION_SUFFIX: &str = "/api/v1";

    /// Scheme prepended to bare hosts
    pub const DEFAULT_SCHEME: &str = "https://";

    /// Per-request timeout in seconds (no retries)
    pub const REQUEST_TIMEOUT_SECS: u64 = 15;

    /// TCP connect timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Page size used when listing the sites of an organization
    pub const SITE_PAGE_LIMIT: u32 = 1000;

    /// Default page size for device and statistics listings
    pub const DEFAULT_LIMIT: u32 = 1000;

    /// Device type filter applied server-side
    pub const GATEWAY_TYPE: &str = "gateway";

    /// Field name under which list endpoints may wrap their items
    pub const LIST_WRAPPER_FIELD: &str = "results";
}

/// Configuration constants for the credential file
pub mod credentials {
    /// Credential file name
    pub const FILE_NAME: &str = "Token-Org-URL.txt";

    /// Environment variable overriding the credential file location
    pub const ENV_VAR: &str = "GWSTATS_CREDENTIALS";

    /// Sub-directory of the user config dir searched for the file
    pub const CONFIG_DIR_NAME: &str = "gwstats";

    /// Accepted token keys in a JSON object (checked in order)
    pub const JSON_TOKEN_KEYS: &[&str] = &["token", "api_token", "MIST_TOKEN"];
    /// Accepted org id keys in a JSON object
    pub const JSON_ORG_KEYS: &[&str] = &["org_id", "ORG_ID"];
    /// Accepted base URL keys in a JSON object
    pub const JSON_BASE_URL_KEYS: &[&str] = &["base_url", "BASE_URL"];

    /// Accepted token keys in key=value lines (compared lowercased)
    pub const KV_TOKEN_KEYS: &[&str] = &["token", "mist_token", "api_token"];
    /// Accepted org id keys in key=value lines
    pub const KV_ORG_KEYS: &[&str] = &["org_id"];
    /// Accepted base URL keys in key=value lines
    pub const KV_BASE_URL_KEYS: &[&str] = &["base_url"];
}

/// Interactive workflow constants
pub mod workflow {
    /// Default site hidden from the site menu when other sites exist
    pub const RESERVED_SITE_NAME: &str = "main_site";

    /// Inputs that leave the current menu
    pub const QUIT_WORDS: &[&str] = &["q", "quit", "x", "exit"];
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
