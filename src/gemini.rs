//! Gemini API クライアント（reqwest）

use crate::config::Config;
use crate::error::{InsightError, Result};
use image_insight_common::gemini::generate_content_url;
use image_insight_common::{CompletionService, FlowError, GeminiRequest, GeminiResponse, Part};
use std::time::Duration;

pub struct GeminiClient {
    http: reqwest::Client,
    url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(endpoint: &str, model: &str, api_key: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| InsightError::Http(e.to_string()))?;

        Ok(Self {
            http,
            url: generate_content_url(endpoint, model, api_key),
            model: model.to_string(),
        })
    }

    /// 設定からクライアントを作成（APIキーはここで読む）
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config.api_key()?;
        Self::new(
            &config.endpoint,
            &config.model,
            &api_key,
            Duration::from_secs(config.timeout_seconds),
        )
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl CompletionService for GeminiClient {
    async fn generate(&self, parts: Vec<Part>) -> std::result::Result<String, FlowError> {
        let request = GeminiRequest::new(parts);
        log::debug!("POST {} ({} chars)", self.model, request.approx_len());

        let response = self
            .http
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| FlowError::ServiceCall(format!("request failed: {}", e.without_url())))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FlowError::ServiceCall(format!("API error: {}: {}", status, body.trim())));
        }

        let payload: GeminiResponse = response
            .json()
            .await
            .map_err(|e| FlowError::ServiceCall(format!("invalid response: {}", e.without_url())))?;

        payload
            .first_text()
            .ok_or_else(|| FlowError::ServiceCall("Empty response".to_string()))
    }
}
