use crate::config::Config;
use crate::prelude::*;
use datasniper_core::cohere::{api_error, chat_request, reply_text, ChatResponse, CHAT_PATH};

/// Thin client for the Cohere chat endpoint.
#[derive(Debug, Clone)]
pub struct CohereClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    temperature: f32,
}

impl CohereClient {
    /// Create an authenticated client from the configuration.
    pub fn new(config: &Config) -> Result<Self> {
        use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", config.api_key))
                .map_err(|e| eyre!("Invalid header value: {}", e))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| eyre!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send a single-turn chat and return the reply text.
    ///
    /// When `schema` is set the model is asked for a JSON object matching it.
    pub async fn chat(&self, prompt: &str, schema: Option<serde_json::Value>) -> Result<String> {
        let url = format!("{}{}", self.base_url, CHAT_PATH);
        let request = chat_request(&self.model, prompt, self.temperature, schema);

        log::debug!(
            "POST {} model={} structured={}",
            url,
            self.model,
            request.response_format.is_some()
        );

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| eyre!("Failed to reach Cohere: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(eyre!("{}", api_error(status.as_u16(), &body)));
        }

        let response: ChatResponse = response
            .json()
            .await
            .map_err(|e| eyre!("Failed to parse Cohere response: {}", e))?;

        if let Some(id) = &response.id {
            log::debug!("Cohere response id={}", id);
        }

        reply_text(response).map_err(|e| eyre!("{}", e))
    }
}
