use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub store: StoreConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    #[serde(default = "default_num_threads")]
    pub num_threads: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_store_capacity")]
    pub capacity: usize,
    #[serde(default = "default_seed_demo_users")]
    pub seed_demo_users: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            capacity: default_store_capacity(),
            seed_demo_users: default_seed_demo_users(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default = "default_console")]
    pub console: bool,
}

// Default value functions
fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_num_threads() -> usize {
    num_cpus::get()
}

fn default_store_capacity() -> usize {
    1024
}

fn default_seed_demo_users() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

fn default_console() -> bool {
    false
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&content)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .context("Failed to parse config file")?;

        config.validate()?;

        Ok(config)
    }

    /// Address the HTTP listener binds to
    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.server.bind_address, self.server.port)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            bail!("Server port must be greater than 0");
        }

        if self.server.bind_address.is_empty() {
            bail!("bind_address must not be empty");
        }

        if self.server.num_threads == 0 {
            bail!("num_threads must be greater than 0");
        }

        if self.store.capacity == 0 {
            bail!("store capacity must be greater than 0");
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            bail!(
                "Invalid log level '{}'. Must be one of: trace, debug, info, warn, error",
                self.logging.level
            );
        }

        let valid_formats = ["json", "console"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            bail!(
                "Invalid log format '{}'. Must be one of: json, console",
                self.logging.format
            );
        }

        Ok(())
    }
}

/// Config path from the first CLI argument, `config.toml` otherwise
pub fn config_path_from_args(args: &[String]) -> PathBuf {
    args.get(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MINIMAL: &str = r#"
        [server]
        port = 5000

        [logging]
    "#;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = Config::from_toml(MINIMAL).expect("Failed to parse config");

        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.bind_address, "0.0.0.0");
        assert!(config.server.num_threads > 0);
        assert_eq!(config.store.capacity, 1024);
        assert!(config.store.seed_demo_users);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "json");
        assert!(!config.logging.console);
        assert_eq!(config.listen_address(), "0.0.0.0:5000");
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            [server]
            port = 8080
            bind_address = "127.0.0.1"
            num_threads = 2

            [store]
            capacity = 64
            seed_demo_users = false

            [logging]
            level = "debug"
            format = "console"
            console = true
            "#
        )
        .unwrap();

        let config = Config::from_file(file.path()).expect("Failed to load config");
        assert_eq!(config.listen_address(), "127.0.0.1:8080");
        assert_eq!(config.server.num_threads, 2);
        assert_eq!(config.store.capacity, 64);
        assert!(!config.store.seed_demo_users);
        assert_eq!(config.logging.format, "console");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = Config::from_file(Path::new("/nonexistent/user-directory.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_port_rejected() {
        let result = Config::from_toml("[server]\nport = 0\n[logging]\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let result = Config::from_toml("[server]\nport = 80\n[logging]\nlevel = \"loud\"\n");
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("Invalid log level 'loud'"));
    }

    #[test]
    fn test_invalid_log_format_rejected() {
        let result = Config::from_toml("[server]\nport = 80\n[logging]\nformat = \"xml\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_store_capacity_rejected() {
        let result = Config::from_toml("[server]\nport = 80\n[store]\ncapacity = 0\n[logging]\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_config_path_from_args() {
        let args = vec!["user-directory".to_string()];
        assert_eq!(config_path_from_args(&args), PathBuf::from("config.toml"));

        let args = vec!["user-directory".to_string(), "/etc/users.toml".to_string()];
        assert_eq!(config_path_from_args(&args), PathBuf::from("/etc/users.toml"));
    }
}
