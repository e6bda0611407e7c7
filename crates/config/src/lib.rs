use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

const DEFAULT_CONFIG_FILES: &[&str] = &[
    "crimemap.toml",
    "config/crimemap.toml",
    "crates/config/crimemap.toml",
    "../crimemap.toml",
    "../config/crimemap.toml",
    "../crates/config/crimemap.toml",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub database: DatabaseConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://crimemap.db".to_string(),
            max_connections: 10,
        }
    }
}

/// Load the application configuration by combining defaults, files, and environment overrides.
///
/// ```
/// use crimemap_config::load;
///
/// std::env::remove_var("CRIMEMAP_CONFIG");
///
/// let config = load().expect("configuration should load with defaults");
/// assert!(!config.database.url.is_empty());
/// ```
pub fn load() -> anyhow::Result<AppConfig> {
    let defaults = AppConfig::default();

    let mut builder = config::Config::builder();
    builder = builder
        .set_default("database.url", defaults.database.url.clone())
        .unwrap()
        .set_default(
            "database.max_connections",
            defaults.database.max_connections as i64,
        )
        .unwrap();

    let environment_overrides = config::Environment::with_prefix("CRIMEMAP").separator("__");

    let mut config_file_attached = false;

    if let Ok(path) = std::env::var("CRIMEMAP_CONFIG") {
        builder = builder.add_source(config::File::from(PathBuf::from(&path)));
        config_file_attached = true;
        debug!(path, "loading configuration via CRIMEMAP_CONFIG");
    } else if let Ok(cwd) = std::env::current_dir() {
        let fallback = DEFAULT_CONFIG_FILES
            .iter()
            .map(|candidate| cwd.join(candidate))
            .find(|path| path.exists());

        if let Some(path) = fallback {
            debug!(path = %path.display(), "loading configuration file");
            builder = builder.add_source(config::File::from(path));
            config_file_attached = true;
        }
    }

    if !config_file_attached {
        debug!("no configuration file found, relying on defaults and environment overrides");
    }

    builder = builder.add_source(environment_overrides);

    let cfg = builder.build().context("unable to build configuration")?;

    let config = cfg
        .try_deserialize::<AppConfig>()
        .context("invalid configuration")?;

    debug!(?config, "loaded crimemap configuration");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    #[test]
    #[serial]
    fn defaults_load_without_any_sources() {
        std::env::remove_var("CRIMEMAP_CONFIG");
        std::env::remove_var("CRIMEMAP__DATABASE__URL");

        let config = load().unwrap();
        assert_eq!(config.database.url, "sqlite://crimemap.db");
        assert_eq!(config.database.max_connections, 10);
    }

    #[test]
    #[serial]
    fn environment_variables_override_defaults() {
        std::env::remove_var("CRIMEMAP_CONFIG");
        std::env::set_var("CRIMEMAP__DATABASE__URL", "sqlite://other.db");

        let config = load().unwrap();
        assert_eq!(config.database.url, "sqlite://other.db");

        std::env::remove_var("CRIMEMAP__DATABASE__URL");
    }

    #[test]
    #[serial]
    fn config_file_overrides_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("crimemap.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[database]").unwrap();
        writeln!(file, "url = \"sqlite://from-file.db\"").unwrap();
        writeln!(file, "max_connections = 3").unwrap();

        std::env::set_var("CRIMEMAP_CONFIG", &path);
        let config = load().unwrap();
        std::env::remove_var("CRIMEMAP_CONFIG");

        assert_eq!(config.database.url, "sqlite://from-file.db");
        assert_eq!(config.database.max_connections, 3);
    }
}
