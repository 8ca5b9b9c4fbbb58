//! Configuration module for the tour CMS backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Seed demo tours and blogs into an empty database on startup
    pub seed_demo_data: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let db_path = env::var("TOURCMS_DB_PATH")
            .unwrap_or_else(|_| "./data/app.sqlite".to_string())
            .into();

        let bind_addr = env::var("TOURCMS_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .expect("Invalid TOURCMS_BIND_ADDR format");

        let log_level = env::var("TOURCMS_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let seed_demo_data = env::var("TOURCMS_SEED_DEMO")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            db_path,
            bind_addr,
            log_level,
            seed_demo_data,
        }
    }
}
