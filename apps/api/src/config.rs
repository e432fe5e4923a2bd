use std::path::PathBuf;

use anyhow::{bail, Context, Result};

/// Where the document and section order are persisted.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageBackend {
    Memory,
    File { dir: PathBuf },
    Redis { url: String },
}

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    pub storage_backend: StorageBackend,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            storage_backend: storage_backend_from_env()?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn storage_backend_from_env() -> Result<StorageBackend> {
    let kind = std::env::var("STORAGE_BACKEND").unwrap_or_else(|_| "file".to_string());
    parse_storage_backend(&kind, std::env::var("STORAGE_DIR").ok(), || {
        require_env("REDIS_URL")
    })
}

fn parse_storage_backend(
    kind: &str,
    dir: Option<String>,
    redis_url: impl FnOnce() -> Result<String>,
) -> Result<StorageBackend> {
    match kind.trim().to_ascii_lowercase().as_str() {
        "memory" => Ok(StorageBackend::Memory),
        "file" => Ok(StorageBackend::File {
            dir: PathBuf::from(dir.unwrap_or_else(|| "./data".to_string())),
        }),
        "redis" => Ok(StorageBackend::Redis { url: redis_url()? }),
        other => bail!("STORAGE_BACKEND must be one of memory, file, redis (got '{other}')"),
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
