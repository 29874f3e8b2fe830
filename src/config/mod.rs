//! Configuration module for the campus backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::errors::AppError;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file backing the remote API
    pub db_path: PathBuf,
    /// Directory holding the durable slots of the local store
    pub slot_dir: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Insert demo rows into empty remote tables on startup
    pub seed_demo_data: bool,
    /// Mount the wallet nonce/verify routes
    pub wallet_auth: bool,
    /// How long an issued nonce stays valid
    pub nonce_ttl: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let db_path = env::var("CAMPUS_DB_PATH")
            .unwrap_or_else(|_| "./data/campus.sqlite".to_string())
            .into();

        let slot_dir = env::var("CAMPUS_SLOT_DIR")
            .unwrap_or_else(|_| "./data/slots".to_string())
            .into();

        let bind_addr = env::var("CAMPUS_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .map_err(|e| AppError::Config(format!("Invalid CAMPUS_BIND_ADDR format: {}", e)))?;

        let log_level = env::var("CAMPUS_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let seed_demo_data = parse_flag("CAMPUS_SEED", true)?;
        let wallet_auth = parse_flag("CAMPUS_WALLET_AUTH", false)?;

        let nonce_ttl_secs: u64 = match env::var("CAMPUS_NONCE_TTL_SECS") {
            Ok(raw) => raw.trim().parse().map_err(|e| {
                AppError::Config(format!("Invalid CAMPUS_NONCE_TTL_SECS value: {}", e))
            })?,
            Err(_) => 300,
        };

        Ok(Self {
            db_path,
            slot_dir,
            bind_addr,
            log_level,
            seed_demo_data,
            wallet_auth,
            nonce_ttl: Duration::from_secs(nonce_ttl_secs),
        })
    }
}

fn parse_flag(name: &str, default: bool) -> Result<bool, AppError> {
    match env::var(name) {
        Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            other => Err(AppError::Config(format!(
                "Invalid {} value: {}",
                name, other
            ))),
        },
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Both cases touch process-wide env vars, so they run in one test.
    #[test]
    fn test_config_defaults_and_overrides() {
        for name in [
            "CAMPUS_DB_PATH",
            "CAMPUS_SLOT_DIR",
            "CAMPUS_BIND_ADDR",
            "CAMPUS_LOG_LEVEL",
            "CAMPUS_SEED",
            "CAMPUS_WALLET_AUTH",
            "CAMPUS_NONCE_TTL_SECS",
        ] {
            env::remove_var(name);
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.db_path, PathBuf::from("./data/campus.sqlite"));
        assert_eq!(config.slot_dir, PathBuf::from("./data/slots"));
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "info");
        assert!(config.seed_demo_data);
        assert!(!config.wallet_auth);
        assert_eq!(config.nonce_ttl, Duration::from_secs(300));

        env::set_var("CAMPUS_WALLET_AUTH", "yes");
        env::set_var("CAMPUS_NONCE_TTL_SECS", "30");
        let config = Config::from_env().unwrap();
        assert!(config.wallet_auth);
        assert_eq!(config.nonce_ttl, Duration::from_secs(30));

        env::set_var("CAMPUS_BIND_ADDR", "not-an-address");
        let err = Config::from_env().unwrap_err();
        assert_eq!(err.error_code(), crate::errors::codes::CONFIG_ERROR);

        env::remove_var("CAMPUS_BIND_ADDR");
        env::remove_var("CAMPUS_WALLET_AUTH");
        env::remove_var("CAMPUS_NONCE_TTL_SECS");
    }
}
