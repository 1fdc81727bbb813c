use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Document root all requests are resolved against.
    pub root: String,
    /// Index documents probed, in order, when a directory is requested.
    pub index_files: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
}

impl Config {
    /// Load configuration from `servedir.toml` (optional) with
    /// `SERVEDIR_*` environment overrides on top of built-in defaults.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("servedir")
    }

    /// Load configuration from the specified file path (without
    /// extension); the file is optional, defaults always apply.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("SERVEDIR"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8001)?
            .set_default("server.root", ".")?
            .set_default("server.index_files", vec!["index.html", "index.htm"])?
            .set_default("logging.access_log", true)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

/// Immutable per-process state: the configuration and the canonicalized
/// document root it resolves to. The root is fixed for the process
/// lifetime; nothing else is shared across requests.
pub struct AppState {
    pub config: Config,
    pub root: PathBuf,
}

impl AppState {
    /// Canonicalize the configured document root once at startup.
    /// A missing or unreadable root is a startup failure.
    pub fn new(config: Config) -> std::io::Result<Self> {
        let root = std::fs::canonicalize(&config.server.root)?;
        Ok(Self { config, root })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        // Hermetic: drop any SERVEDIR_* overrides from the environment
        // and point the loader at a file that cannot exist.
        for (key, _) in std::env::vars() {
            if key.starts_with("SERVEDIR") {
                std::env::remove_var(&key);
            }
        }
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("servedir");

        let cfg = Config::load_from(path.to_str().unwrap()).expect("default config should load");
        assert_eq!(cfg.server.port, 8001);
        assert_eq!(cfg.server.root, ".");
        assert_eq!(cfg.server.index_files, vec!["index.html", "index.htm"]);
        assert!(cfg.logging.access_log);
    }

    #[test]
    fn test_socket_addr() {
        let cfg = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8001,
                root: ".".to_string(),
                index_files: vec![],
            },
            logging: LoggingConfig { access_log: false },
        };
        assert_eq!(cfg.socket_addr().unwrap().port(), 8001);
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let cfg = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8001,
                root: "/nonexistent/servedir-test-root".to_string(),
                index_files: vec![],
            },
            logging: LoggingConfig { access_log: false },
        };
        assert!(AppState::new(cfg).is_err());
    }
}
