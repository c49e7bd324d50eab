//! Configuration loading and defaults.
//!
//! Configuration is resolved in order of precedence (highest wins):
//!
//! 1. **Environment variables**: `PUBGATE_KEY`, `PUBGATE_LISTEN`
//! 2. **Config file**: path via `--config <path>`, or `pubgate.toml` in CWD
//! 3. **Compiled defaults**: see each field's default value below
//!
//! The TOML file mirrors the struct hierarchy:
//!
//! ```toml
//! [server]
//! listen = "0.0.0.0:8000"
//! max_body_bytes = 65536      # 64 KiB
//! request_timeout_ms = 10000
//!
//! [auth]
//! key = "your-stream-key"
//!
//! [logging]
//! level = "info"
//! ```

use serde::Deserialize;
use std::path::Path;

/// Top-level configuration, deserialized from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP listener and request-limit settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Socket address to bind (default `0.0.0.0:8000`).
    #[serde(default = "default_listen")]
    pub listen: String,
    /// Maximum accepted request body size in bytes (default 64 KiB).
    /// Bodies that grow past this are answered with `413`.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
    /// Per-request timeout in milliseconds (default 10 000). Requests that
    /// exceed it are answered with `408`.
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

/// Authentication settings.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// The stream key publishers must present. Override with `PUBGATE_KEY`.
    /// Defaults to `"change-me"` which triggers a startup warning.
    #[serde(default = "default_key")]
    pub key: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// tracing filter level (default `info`). Overridden by `RUST_LOG` env var.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_listen() -> String {
    "0.0.0.0:8000".to_string()
}
fn default_max_body_bytes() -> usize {
    64 * 1024
}
fn default_request_timeout_ms() -> u64 {
    10_000
}
fn default_key() -> String {
    "change-me".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            max_body_bytes: default_max_body_bytes(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            key: default_key(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration with the precedence chain: env vars > file > defaults.
    ///
    /// If `path` is `Some`, reads that file (panics on failure). Otherwise looks
    /// for `pubgate.toml` in the current directory, falling back to compiled
    /// defaults.
    pub fn load(path: Option<&str>) -> Self {
        let mut config = if let Some(p) = path {
            let content = std::fs::read_to_string(p)
                .unwrap_or_else(|e| panic!("Failed to read config file {p}: {e}"));
            toml::from_str(&content)
                .unwrap_or_else(|e| panic!("Failed to parse config file {p}: {e}"))
        } else if Path::new("pubgate.toml").exists() {
            let content =
                std::fs::read_to_string("pubgate.toml").expect("Failed to read pubgate.toml");
            toml::from_str(&content).expect("Failed to parse pubgate.toml")
        } else {
            Config {
                server: ServerConfig::default(),
                auth: AuthConfig::default(),
                logging: LoggingConfig::default(),
            }
        };

        // Env var overrides
        if let Ok(key) = std::env::var("PUBGATE_KEY") {
            config.auth.key = key;
        }
        if let Ok(listen) = std::env::var("PUBGATE_LISTEN") {
            config.server.listen = listen;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.listen, "0.0.0.0:8000");
        assert_eq!(config.server.max_body_bytes, 64 * 1024);
        assert_eq!(config.server.request_timeout_ms, 10_000);
        assert_eq!(config.auth.key, "change-me");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn full_toml_overrides_everything() {
        let config: Config = toml::from_str(
            r#"
            [server]
            listen = "127.0.0.1:9000"
            max_body_bytes = 1024
            request_timeout_ms = 5000

            [auth]
            key = "s3cret"

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.listen, "127.0.0.1:9000");
        assert_eq!(config.server.max_body_bytes, 1024);
        assert_eq!(config.server.request_timeout_ms, 5000);
        assert_eq!(config.auth.key, "s3cret");
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn partial_section_keeps_remaining_defaults() {
        let config: Config = toml::from_str(
            r#"
            [auth]
            key = "s3cret"
            "#,
        )
        .unwrap();
        assert_eq!(config.auth.key, "s3cret");
        assert_eq!(config.server.listen, "0.0.0.0:8000");
        assert_eq!(config.server.max_body_bytes, 64 * 1024);
    }

    // Env vars are process-global, so this is the only test that touches
    // them; it covers both halves of the precedence chain in one pass.
    #[test]
    fn env_vars_override_file_values() {
        let path = std::env::temp_dir().join("pubgate-config-env-test.toml");
        std::fs::write(
            &path,
            r#"
            [server]
            listen = "127.0.0.1:9000"

            [auth]
            key = "from-file"
            "#,
        )
        .unwrap();
        let path = path.to_str().unwrap();

        std::env::set_var("PUBGATE_KEY", "from-env");
        std::env::set_var("PUBGATE_LISTEN", "127.0.0.1:9999");
        let config = Config::load(Some(path));
        assert_eq!(config.auth.key, "from-env");
        assert_eq!(config.server.listen, "127.0.0.1:9999");

        std::env::remove_var("PUBGATE_KEY");
        std::env::remove_var("PUBGATE_LISTEN");
        let config = Config::load(Some(path));
        assert_eq!(config.auth.key, "from-file");
        assert_eq!(config.server.listen, "127.0.0.1:9000");

        std::fs::remove_file(path).unwrap();
    }
}
