//! # API Configuration Module
//!
//! This module handles loading and managing configuration for the freeslot
//! API server. It retrieves configuration values from environment variables
//! and provides defaults where appropriate.
//!
//! ## Environment Variables
//!
//! The following environment variables are used:
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `GOOGLE_API_KEY`: API key for the calendar free/busy endpoint (required)
//! - `FREEBUSY_ENDPOINT`: Override for the free/busy endpoint URL
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGIN`: The single allowed CORS origin
//! - `API_REQUEST_TIMEOUT_SECONDS`: Request timeout (default: 30)

use eyre::{Result, WrapErr};
use std::env;
use tracing::Level;

use freeslot_calendar::google;

/// Configuration for the freeslot API server.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// API key for the calendar free/busy endpoint
    pub google_api_key: String,

    /// Free/busy query endpoint
    pub freebusy_endpoint: String,

    /// Log level for the application
    pub log_level: Level,

    /// The single origin allowed by the CORS layer
    pub cors_origin: String,

    /// Request timeout in seconds
    pub request_timeout: u64,
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The GOOGLE_API_KEY environment variable is not set
    /// - The API_PORT value cannot be parsed as a u16
    pub fn from_env() -> Result<Self> {
        // Network settings
        let host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("API_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Calendar service settings
        let google_api_key = env::var("GOOGLE_API_KEY")
            .wrap_err("GOOGLE_API_KEY environment variable must be set")?;
        let freebusy_endpoint = env::var("FREEBUSY_ENDPOINT")
            .unwrap_or_else(|_| google::DEFAULT_ENDPOINT.to_string());

        // Logging settings
        let log_level = match env::var("LOG_LEVEL")
            .unwrap_or_else(|_| "info".to_string())
            .as_str()
        {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        // CORS settings
        let cors_origin =
            env::var("API_CORS_ORIGIN").unwrap_or_else(|_| "http://localhost:3000".to_string());

        // Performance settings
        let request_timeout = env::var("API_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        Ok(Self {
            host,
            port,
            google_api_key,
            freebusy_endpoint,
            log_level,
            cors_origin,
            request_timeout,
        })
    }

    /// Returns the server address as a string, e.g. "0.0.0.0:3000".
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
