//! Bundled application configuration.

use contracts::shared::config::{load_config, AppConfig};
use once_cell::sync::Lazy;

const BUNDLED_CONFIG: &str = include_str!("../../config.toml");

static APP_CONFIG: Lazy<AppConfig> = Lazy::new(|| match load_config(BUNDLED_CONFIG) {
    Ok(config) => {
        log::info!(
            "config loaded: upload mode {:?}, page size {}",
            config.upload,
            config.page_size
        );
        config
    }
    Err(e) => {
        log::error!("invalid config.toml, using built-in defaults: {e:#}");
        AppConfig::default()
    }
});

/// Parsed once on first use.
pub fn app_config() -> &'static AppConfig {
    &APP_CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_config_is_valid() {
        assert!(load_config(BUNDLED_CONFIG).is_ok());
    }
}
