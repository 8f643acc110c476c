use crate::domain::error::OdlError;
use crate::domain::model::{EndpointReply, TranslationRequest};
use crate::infrastructure::network::client::fetch_translation;
use crate::interfaces::prompt::ask;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use std::io::{BufRead, Write};
use std::time::Duration;

/// Values already given on the command line; the matching prompt is skipped.
#[derive(Debug, Default, Clone)]
pub struct Presets {
    pub from: Option<String>,
    pub to: Option<String>,
    pub text: Option<String>,
}

/// Ask for whatever `presets` leaves open, in the order from, to, text.
pub fn gather_request<R: BufRead, W: Write>(
    presets: Presets,
    input: &mut R,
    output: &mut W,
) -> Result<TranslationRequest, OdlError> {
    let from = match presets.from {
        Some(v) => v,
        None => ask(input, output, "Translate from")?,
    };
    let to = match presets.to {
        Some(v) => v,
        None => ask(input, output, "Translate to")?,
    };
    let text = match presets.text {
        Some(v) => v,
        None => ask(input, output, "Your text")?,
    };

    Ok(TranslationRequest::new(&from, &to, &text))
}

/// Send the request, showing a spinner on stderr while it is in flight.
pub async fn send_request(
    client: &Client,
    endpoint: &str,
    request: &TranslationRequest,
) -> Result<EndpointReply, OdlError> {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("Translating...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = fetch_translation(client, endpoint, request).await;
    spinner.finish_and_clear();
    result
}
