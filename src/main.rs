use std::sync::Arc;

use color_eyre::eyre::Result;
use dotenv::dotenv;
use freeslot_api::config::ApiConfig;
use freeslot_calendar::google::GoogleCalendarClient;
use freeslot_core::experts::ExpertDirectory;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // Build the immutable expert directory and the calendar client once at
    // startup
    let experts = ExpertDirectory::builtin();
    let calendar = GoogleCalendarClient::new(
        config.freebusy_endpoint.clone(),
        config.google_api_key.clone(),
    );

    // Start API server
    freeslot_api::start_server(config, experts, Arc::new(calendar)).await?;

    Ok(())
}
