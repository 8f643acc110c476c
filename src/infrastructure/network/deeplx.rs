use crate::domain::error::OdlError;
use crate::domain::traits::Translator;
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use tracing::debug;

// DeepLX request/response structures
#[derive(Serialize, Debug)]
struct DeepLxRequest<'a> {
    text: &'a str,
    source_lang: String,
    target_lang: String,
}

#[derive(Deserialize, Debug)]
struct DeepLxResponse {
    code: i64,
    data: Option<String>,
    message: Option<String>,
}

/// Translator backed by a DeepLX-compatible HTTP service
pub struct DeepLxTranslator {
    client: Client,
    url: String,
}

impl DeepLxTranslator {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl Translator for DeepLxTranslator {
    async fn warm_up(&self) -> Result<(), OdlError> {
        Url::parse(&self.url)
            .map_err(|e| OdlError::Config(format!("Invalid DeepLX url '{}': {}", self.url, e)))?;
        Ok(())
    }

    async fn translate(
        &self,
        from: &str,
        to: &str,
        content: &str,
    ) -> Result<Option<String>, OdlError> {
        let body = DeepLxRequest {
            text: content,
            source_lang: from.to_uppercase(),
            target_lang: to.to_uppercase(),
        };

        debug!(url = %self.url, from, to, "forwarding to DeepLX");
        let response = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .await?
            .json::<DeepLxResponse>()
            .await?;

        if response.code != 200 {
            return Err(OdlError::Api(format!(
                "DeepLX Error {}: {}",
                response.code,
                response.message.as_deref().unwrap_or("Unknown error")
            )));
        }

        Ok(response.data.filter(|text| !text.is_empty()))
    }
}
