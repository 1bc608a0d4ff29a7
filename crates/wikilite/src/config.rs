use std::path::{Path, PathBuf};

use crate::error::AppError;

/// Application configuration loaded explicitly from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory of markdown articles. `None` serves the built-in sample catalog.
    pub articles_dir: Option<String>,
    /// Fixed seed for the random-article picker. `None` seeds from the OS.
    pub random_seed: Option<u64>,
    /// Serve MCP over TCP on this address instead of stdio.
    pub tcp_listen_addr: Option<String>,
}

impl Config {
    /// Optional:
    /// - `WIKILITE_ARTICLES_DIR`: directory of `*.md` articles
    /// - `WIKILITE_RANDOM_SEED`: u64 seed for `random_article`
    /// - `MCP_TCP_LISTEN_ADDR`: e.g. "127.0.0.1:7040"
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let articles_dir = var("WIKILITE_ARTICLES_DIR").filter(|s| !s.trim().is_empty());
        if let Some(dir) = &articles_dir {
            if !Path::new(dir).is_dir() {
                return Err(AppError::Config(format!(
                    "WIKILITE_ARTICLES_DIR is not a directory: {dir}"
                )));
            }
        }

        let random_seed = var("WIKILITE_RANDOM_SEED")
            .map(|s| {
                s.trim().parse::<u64>().map_err(|_| {
                    AppError::Config(format!("WIKILITE_RANDOM_SEED must be a u64, got '{s}'"))
                })
            })
            .transpose()?;

        Ok(Self {
            articles_dir,
            random_seed,
            tcp_listen_addr: var("MCP_TCP_LISTEN_ADDR").filter(|s| !s.trim().is_empty()),
        })
    }

    pub fn articles_dir(&self) -> Option<PathBuf> {
        self.articles_dir.as_deref().map(PathBuf::from)
    }
}
