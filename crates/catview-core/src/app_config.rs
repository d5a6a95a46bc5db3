/// Application configuration for the catview binaries.
///
/// One URL per backend service. Defaults mirror the deployment layout the
/// services run under locally (see [`crate::config::load_app_config`]).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub categories_url: String,
    pub brands_url: String,
    pub units_url: String,
    pub products_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub log_level: String,
}
