//! Server configuration read from the environment.

use std::net::SocketAddr;

use fateweaver_core::config::EngineConfig;

use crate::error::AppError;
use crate::state::AppState;

/// Runtime configuration for the API server.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// The process-wide engine.
    pub engine: EngineConfig,
}

impl ServerConfig {
    /// Reads `HOST`, `PORT` and `ENGINE_CONFIG` from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is present but malformed.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which returns the value of a
    /// variable if it is set.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is present but malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?,
            None => 3000,
        };
        let engine = match lookup("ENGINE_CONFIG") {
            Some(raw) => serde_json::from_str(&raw).map_err(|e| {
                AppError::Config(format!("ENGINE_CONFIG must be a valid engine configuration: {e}"))
            })?,
            None => EngineConfig::default(),
        };
        Ok(Self { host, port, engine })
    }

    /// The address to bind.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `host` and `port` do not form a socket
    /// address.
    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }

    /// Builds application state around the configured shared engine.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Engine` if the engine configuration is rejected.
    pub fn build_state(&self) -> Result<AppState, AppError> {
        Ok(AppState::new(self.engine.build()?))
    }
}
