//! Server Configuration
//!
//! Host, port, debug toggle and the question set source, read from the
//! environment once at startup. Defaults live in utils/constants.rs.

use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;

use crate::core::scorer::QuestionSet;
use crate::models::errors::{AppError, AppResult};
use crate::models::types::Question;
use crate::utils::constants::{
    parse_toggle, DEFAULT_HOST, DEFAULT_PORT, ENV_DEBUG, ENV_HOST, ENV_PLATFORM_PORT, ENV_PORT,
    ENV_QUESTIONS_FILE,
};

/// Configuration for the audit server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind host
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Verbose logging
    pub debug: bool,
    /// Optional JSON file replacing the built-in questions
    pub questions_file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            debug: false,
            questions_file: None,
        }
    }
}

impl ServerConfig {
    /// Read configuration from process environment
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup(ENV_HOST)
            .filter(|h| !h.trim().is_empty())
            .unwrap_or(defaults.host);

        // Platforms inject PORT; AUDIT_PORT is the local override
        let port_source = lookup(ENV_PLATFORM_PORT)
            .map(|raw| (ENV_PLATFORM_PORT, raw))
            .or_else(|| lookup(ENV_PORT).map(|raw| (ENV_PORT, raw)));
        let port = match port_source {
            Some((key, raw)) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| AppError::invalid_config(key, &raw))?,
            None => defaults.port,
        };

        let debug = match lookup(ENV_DEBUG) {
            Some(raw) => parse_toggle(&raw).ok_or_else(|| AppError::invalid_config(ENV_DEBUG, &raw))?,
            None => defaults.debug,
        };

        let questions_file = lookup(ENV_QUESTIONS_FILE)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            host,
            port,
            debug,
            questions_file,
        })
    }

    /// Socket address to bind
    pub fn socket_addr(&self) -> AppResult<SocketAddr> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse()
            .map_err(|_| AppError::invalid_config(ENV_HOST, &self.host))
    }

    /// Build the question set: file if configured, built-in otherwise
    pub fn load_questions(&self) -> AppResult<QuestionSet> {
        match &self.questions_file {
            Some(path) => {
                let raw = std::fs::read_to_string(path)?;
                let questions: Vec<Question> = serde_json::from_str(&raw)?;
                let set = QuestionSet::new(questions)?;
                info!(
                    path = %path.display(),
                    questions = set.len(),
                    max_score = set.max_score(),
                    "Loaded question file"
                );
                Ok(set)
            }
            None => Ok(QuestionSet::builtin()),
        }
    }
}
