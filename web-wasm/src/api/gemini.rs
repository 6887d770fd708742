//! Gemini API連携（fetch）

use image_insight_common::gemini::{generate_content_url, DEFAULT_ENDPOINT, DEFAULT_MODEL};
use image_insight_common::{CompletionService, FlowError, GeminiRequest, GeminiResponse, Part};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// ブラウザのfetchで呼び出すGeminiクライアント
pub struct FetchGeminiClient {
    url: String,
}

impl FetchGeminiClient {
    pub fn new(api_key: &str) -> Result<Self, FlowError> {
        if api_key.trim().is_empty() {
            return Err(FlowError::ServiceCall("API key is not set".to_string()));
        }
        Ok(Self {
            url: generate_content_url(DEFAULT_ENDPOINT, DEFAULT_MODEL, api_key.trim()),
        })
    }

    async fn post(&self, request: &GeminiRequest) -> Result<String, JsValue> {
        let body = serde_json::to_string(request).map_err(|e| JsValue::from_str(&e.to_string()))?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_body(&JsValue::from_str(&body));

        let request = Request::new_with_str_and_init(&self.url, &opts)?;
        request.headers().set("Content-Type", "application/json")?;

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
        let resp: Response = resp_value.dyn_into()?;

        if !resp.ok() {
            let text = JsFuture::from(resp.text()?).await?.as_string().unwrap_or_default();
            return Err(JsValue::from_str(&format!("API error: {}: {}", resp.status(), text.trim())));
        }

        let json = JsFuture::from(resp.json()?).await?;
        let response: GeminiResponse = serde_wasm_bindgen::from_value(json)?;

        response
            .first_text()
            .ok_or_else(|| JsValue::from_str("Empty response"))
    }
}

impl CompletionService for FetchGeminiClient {
    async fn generate(&self, parts: Vec<Part>) -> Result<String, FlowError> {
        let request = GeminiRequest::new(parts);
        log::debug!("POST {} ({} chars)", DEFAULT_MODEL, request.approx_len());

        self.post(&request).await.map_err(|e| {
            let detail = e.as_string().unwrap_or_else(|| format!("{:?}", e));
            FlowError::ServiceCall(detail)
        })
    }
}
