use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every setting has a default suited to a single local user.
#[derive(Debug, Clone)]
pub struct Config {
    pub storage_url: String,
    /// Key the document is stored under.
    pub storage_key: String,
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    /// Rasterization scale handed to the client with each export plan.
    pub export_scale: u32,
    /// How long `GET /api/v1/resume/changes` waits before answering 204.
    pub changes_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            storage_url: env_or("STORAGE_URL", "sqlite://resume.db?mode=rwc"),
            storage_key: env_or("STORAGE_KEY", "resume"),
            host: env_or("HOST", "127.0.0.1"),
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            export_scale: env_or("EXPORT_SCALE", "2")
                .parse::<u32>()
                .ok()
                .filter(|s| (1..=4).contains(s))
                .context("EXPORT_SCALE must be an integer between 1 and 4")?,
            changes_timeout_secs: env_or("CHANGES_TIMEOUT_SECS", "25")
                .parse::<u64>()
                .context("CHANGES_TIMEOUT_SECS must be a whole number of seconds")?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            storage_url: "sqlite://resume.db?mode=rwc".to_string(),
            storage_key: "resume".to_string(),
            host: "127.0.0.1".to_string(),
            port: 8080,
            rust_log: "info".to_string(),
            export_scale: 2,
            changes_timeout_secs: 25,
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
