//! # Freeslot API
//!
//! The API crate provides the web server for the expert free-slot service.
//! It exposes a read-only surface for discovering the fixed expert set and
//! the available 15-minute slots within a same-day window.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Implement request processing logic
//! - **Middleware**: Map domain errors to HTTP responses
//! - **Config**: Handle environment and application configuration
//!
//! The API uses Axum as the web framework; the external calendar service is
//! reached through the `freeslot-calendar` crate's [`BusyIntervalSource`]
//! interface.

/// Configuration module for API settings
pub mod config;
/// Request handlers that implement business logic
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;

use axum::Router;
use eyre::{Result, WrapErr};
use freeslot_calendar::BusyIntervalSource;
use freeslot_core::experts::ExpertDirectory;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers.
///
/// Both fields are immutable after startup: the expert directory is a fixed
/// lookup table and the calendar source is a shared client handle, so
/// concurrent requests never contend on shared mutable state.
pub struct ApiState {
    /// Immutable expert-to-calendar lookup
    pub experts: ExpertDirectory,
    /// External calendar source for busy-interval lookups
    pub calendar: Arc<dyn BusyIntervalSource>,
}

/// Builds the application router with all routes attached to the given
/// state.
///
/// Kept separate from [`start_server`] so tests can drive the full router
/// without binding a socket.
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Expert listing endpoint
        .merge(routes::experts::routes())
        // Slot discovery endpoint
        .merge(routes::slots::routes())
        // Attach shared state to all routes
        .with_state(state)
}

/// Starts the API server with the provided configuration and calendar
/// source.
///
/// Initializes logging, configures routes, CORS, access logging and the
/// request timeout, then serves until the process is stopped.
pub async fn start_server(
    config: config::ApiConfig,
    experts: ExpertDirectory,
    calendar: Arc<dyn BusyIntervalSource>,
) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Create shared state with dependencies
    let state = Arc::new(ApiState { experts, calendar });

    let app = router(state);

    // Cross-origin access is restricted to the single configured origin and
    // to GET requests.
    let cors = tower_http::cors::CorsLayer::new()
        .allow_methods([axum::http::Method::GET])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::AUTHORIZATION,
            axum::http::header::ACCEPT,
        ])
        .allow_origin(
            config
                .cors_origin
                .parse::<axum::http::HeaderValue>()
                .wrap_err("Invalid API_CORS_ORIGIN value")?,
        )
        .allow_credentials(true);
    let app = app.layer(cors);

    // Generic access log line per request; errors are not logged specially.
    let app = app.layer(tower_http::trace::TraceLayer::new_for_http());

    // Add request timeout middleware
    let app = app.layer(tower_http::timeout::TimeoutLayer::new(
        std::time::Duration::from_secs(config.request_timeout),
    ));

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
