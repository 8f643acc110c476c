use crate::domain::error::OdlError;
use crate::domain::model::{EndpointReply, TranslationRequest};
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

/// Build the request URL by plain interpolation.
///
/// Values are not percent-encoded here, so a `&` or `#` inside the text ends
/// the `content` parameter early. The URL parser only fixes up what it must
/// (spaces, non-ASCII).
pub fn build_request_url(endpoint: &str, request: &TranslationRequest) -> String {
    format!(
        "{}?from={}&to={}&content={}",
        endpoint, request.from_lang, request.to_lang, request.text
    )
}

/// Issue one GET against the translation endpoint and decode the JSON body.
///
/// Network faults and non-JSON bodies are returned as errors; the status code
/// is not interpreted here.
pub async fn fetch_translation(
    client: &Client,
    endpoint: &str,
    request: &TranslationRequest,
) -> Result<EndpointReply, OdlError> {
    let url = build_request_url(endpoint, request);
    debug!(%url, "requesting translation");

    let response = client.get(&url).send().await?;
    let status = response.status().as_u16();
    let bytes = response.bytes().await?;
    let body: Value = serde_json::from_slice(&bytes)?;

    debug!(status, "translation endpoint replied");
    Ok(EndpointReply { status, body })
}
