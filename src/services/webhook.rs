//! Translation Webhook Client

use async_trait::async_trait;
use reqwest::Client;

use super::TranslationService;
use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use crate::models::{Translation, TranslationRequest, TranslationResponse};

/// POSTs `{"text": ...}` as JSON to the configured webhook
pub struct WebhookTranslator {
    http: Client,
    url: String,
}

impl WebhookTranslator {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            http: Client::new(),
            url: config.webhook_url.clone(),
        }
    }
}

#[async_trait(?Send)]
impl TranslationService for WebhookTranslator {
    async fn translate(&self, request: &TranslationRequest) -> AppResult<Translation> {
        let response = self
            .http
            .post(&self.url)
            .json(request)
            .send()
            .await
            .map_err(|e| AppError::Connection(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::Connection(format!("Failed to read body: {}", e)))?;

        log::debug!("[TRANSLATE] webhook replied {} ({} bytes)", status, body.len());
        parse_webhook_reply(status, &body)
    }
}

/// Classify a webhook reply by status code and body
pub fn parse_webhook_reply(status: u16, body: &str) -> AppResult<Translation> {
    if !(200..300).contains(&status) {
        return Err(AppError::Http { status, body: body.to_string() });
    }

    let response: TranslationResponse = serde_json::from_str(body)
        .map_err(|e| AppError::Connection(format!("Failed to parse reply: {}", e)))?;
    response.into_result()
}
