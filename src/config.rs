/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Base URL of the reconciliation API. Set `RECON_API_URL` at build time to override.
    pub const API_URL: &'static str = match option_env!("RECON_API_URL") {
        Some(url) => url,
        None => "http://localhost:8000",
    };

    /// Number of report summaries shown in the sidebar before "See More"
    pub const VISIBLE_REPORTS: usize = 5;

    /// Delay before the global table filter is applied, in milliseconds
    pub const FILTER_DEBOUNCE_MS: u32 = 300;
}
