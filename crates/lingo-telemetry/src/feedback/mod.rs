//! User feedback: the HTTP callable backend and the dialog form state.

mod form;

#[cfg(test)]
mod tests;

pub use form::{FeedbackForm, SubmitOutcome};

use async_trait::async_trait;
use lingo_core::{
    config::TelemetryConfig,
    error::LingoError,
    traits::{FeedbackRequest, FeedbackSink},
};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

use crate::analytics::APP_CHECK_HEADER;

/// Callable-function request envelope.
#[derive(Serialize)]
struct CallableRequest<'a> {
    data: &'a FeedbackRequest,
}

#[derive(Deserialize)]
struct CallableErrorBody {
    error: CallableError,
}

#[derive(Deserialize)]
struct CallableError {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Submits feedback to an HTTPS callable cloud function.
pub struct HttpFeedback {
    client: reqwest::Client,
    url: String,
    app_check_token: Option<String>,
}

impl HttpFeedback {
    pub fn new(
        url: String,
        app_check_token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, LingoError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LingoError::Config(format!("feedback: failed to build client: {e}")))?;
        Ok(Self {
            client,
            url,
            app_check_token: app_check_token.filter(|t| !t.is_empty()),
        })
    }

    /// Build from config. `None` when no project is configured.
    pub fn from_config(cfg: &TelemetryConfig) -> Result<Option<Self>, LingoError> {
        let Some(url) = cfg.feedback_url() else {
            return Ok(None);
        };
        Self::new(
            url,
            Some(cfg.app_check_token.clone()),
            Duration::from_secs(cfg.timeout_secs),
        )
        .map(Some)
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Human-readable reason from a callable error body, if it has one.
fn callable_error_message(body: &str) -> Option<String> {
    let parsed: CallableErrorBody = serde_json::from_str(body).ok()?;
    match (parsed.error.status, parsed.error.message) {
        (Some(status), Some(message)) => Some(format!("{status}: {message}")),
        (None, Some(message)) => Some(message),
        (Some(status), None) => Some(status),
        (None, None) => None,
    }
}

#[async_trait]
impl FeedbackSink for HttpFeedback {
    fn name(&self) -> &str {
        "http-feedback"
    }

    async fn submit(&self, request: &FeedbackRequest) -> Result<(), LingoError> {
        debug!("feedback: POST {}", self.url);
        let mut req = self
            .client
            .post(&self.url)
            .json(&CallableRequest { data: request });
        if let Some(token) = &self.app_check_token {
            req = req.header(APP_CHECK_HEADER, token);
        }
        let resp = req
            .send()
            .await
            .map_err(|e| LingoError::Feedback(format!("request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            let reason = callable_error_message(&text).unwrap_or(text);
            return Err(LingoError::Feedback(format!("function returned {status}: {reason}")));
        }
        info!("feedback submitted for {}", request.app_name);
        Ok(())
    }
}
