use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a numeric env var holds an unparseable value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a numeric env var holds an unparseable value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing logic, decoupled from the actual environment so it
/// can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let categories_url = or_default("CATVIEW_CATEGORIES_URL", "http://localhost:3001/");
    let brands_url = or_default("CATVIEW_BRANDS_URL", "http://localhost:3002/");
    let units_url = or_default("CATVIEW_UNITS_URL", "http://localhost:3003/");
    let products_url = or_default(
        "CATVIEW_PRODUCTS_URL",
        "http://localhost:8080/api/v1/products",
    );

    let request_timeout_secs = parse_u64("CATVIEW_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("CATVIEW_USER_AGENT", "catview/0.1 (catalog-aggregation)");
    let log_level = or_default("CATVIEW_LOG_LEVEL", "info");

    Ok(AppConfig {
        categories_url,
        brands_url,
        units_url,
        products_url,
        request_timeout_secs,
        user_agent,
        log_level,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn build_app_config_succeeds_with_empty_env() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).expect("defaults should suffice");
        assert_eq!(cfg.categories_url, "http://localhost:3001/");
        assert_eq!(cfg.brands_url, "http://localhost:3002/");
        assert_eq!(cfg.units_url, "http://localhost:3003/");
        assert_eq!(cfg.products_url, "http://localhost:8080/api/v1/products");
        assert_eq!(cfg.request_timeout_secs, 30);
        assert_eq!(cfg.user_agent, "catview/0.1 (catalog-aggregation)");
        assert_eq!(cfg.log_level, "info");
    }

    #[test]
    fn build_app_config_url_overrides() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("CATVIEW_CATEGORIES_URL", "http://svc:9001/categories");
        map.insert("CATVIEW_PRODUCTS_URL", "http://svc:9000/products");
        let cfg = build_app_config(lookup_from_map(&map)).expect("valid overrides");
        assert_eq!(cfg.categories_url, "http://svc:9001/categories");
        assert_eq!(cfg.products_url, "http://svc:9000/products");
        // Untouched vars keep their defaults.
        assert_eq!(cfg.brands_url, "http://localhost:3002/");
    }

    #[test]
    fn build_app_config_request_timeout_override() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("CATVIEW_REQUEST_TIMEOUT_SECS", "60");
        let cfg = build_app_config(lookup_from_map(&map)).expect("valid override");
        assert_eq!(cfg.request_timeout_secs, 60);
    }

    #[test]
    fn build_app_config_request_timeout_invalid() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("CATVIEW_REQUEST_TIMEOUT_SECS", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CATVIEW_REQUEST_TIMEOUT_SECS"),
            "expected InvalidEnvVar(CATVIEW_REQUEST_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_log_level_override() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("CATVIEW_LOG_LEVEL", "debug");
        let cfg = build_app_config(lookup_from_map(&map)).expect("valid override");
        assert_eq!(cfg.log_level, "debug");
    }
}
