// HTTP client utilities
use crate::domain::error::OdlError;
use crate::infrastructure::config::ClientConfig;
use reqwest::Client;
use std::time::Duration;

/// Create the HTTP client used by both the request script and the DeepLX backend.
///
/// No timeout is set unless `timeout_secs` is configured.
pub fn create_client(config: &ClientConfig) -> Result<Client, OdlError> {
    let mut builder = Client::builder().user_agent(config.user_agent.as_str());
    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    Ok(builder.build()?)
}
