//! App Configuration

/// Webhook performing the actual translation
pub const DEFAULT_WEBHOOK_URL: &str = "https://vtri87.app.n8n.cloud/webhook-test/translate";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub webhook_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            webhook_url: DEFAULT_WEBHOOK_URL.to_string(),
        }
    }
}

impl AppConfig {
    #[cfg(test)]
    pub fn with_webhook_url(mut self, url: impl Into<String>) -> Self {
        self.webhook_url = url.into();
        self
    }
}
