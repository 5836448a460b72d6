use crate::error::LingoError;
use async_trait::async_trait;
use serde::Serialize;
use std::collections::BTreeMap;

/// Key/value parameters attached to an analytic event.
pub type EventParams = BTreeMap<String, serde_json::Value>;

/// A single feedback submission as sent to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequest {
    pub app_name: String,
    #[serde(rename = "feedbackTitle")]
    pub title: String,
    #[serde(rename = "feedbackText")]
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Analytics backend: where named events end up.
///
/// Implementations are called from background tasks; callers never see
/// their errors.
#[async_trait]
pub trait AnalyticsSink: Send + Sync {
    /// Human-readable backend name.
    fn name(&self) -> &str;

    /// Record a named event with optional parameters.
    async fn log_event(&self, name: &str, params: &EventParams) -> Result<(), LingoError>;

    /// Record an application-open event.
    async fn log_app_open(&self) -> Result<(), LingoError> {
        self.log_event("app_open", &EventParams::new()).await
    }

    /// Check if the backend is reachable.
    async fn is_available(&self) -> bool {
        true
    }
}

/// Feedback backend: a remote call that stores user feedback.
#[async_trait]
pub trait FeedbackSink: Send + Sync {
    /// Human-readable backend name.
    fn name(&self) -> &str;

    /// Submit one feedback entry. No retry is attempted by callers.
    async fn submit(&self, request: &FeedbackRequest) -> Result<(), LingoError>;
}

/// Ordered device locale codes, most preferred first.
pub trait LocaleSource: Send + Sync {
    fn locales(&self) -> Vec<String>;
}
