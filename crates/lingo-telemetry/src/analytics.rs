//! Analytics client and the HTTP analytics backend.

use async_trait::async_trait;
use lingo_core::{
    error::LingoError,
    traits::{AnalyticsSink, EventParams},
};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::events::AnalyticEvent;

/// Header carrying the app attestation token.
pub const APP_CHECK_HEADER: &str = "X-Firebase-AppCheck";

/// Front door for analytic events.
///
/// Without a sink every call is a no-op, so callers never need to check
/// whether telemetry is configured.
#[derive(Clone, Default)]
pub struct Analytics {
    sink: Option<Arc<dyn AnalyticsSink>>,
}

impl Analytics {
    pub fn new(sink: Arc<dyn AnalyticsSink>) -> Self {
        Self { sink: Some(sink) }
    }

    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    pub fn sink(&self) -> Option<&Arc<dyn AnalyticsSink>> {
        self.sink.as_ref()
    }

    /// Log an event and wait for the backend.
    ///
    /// `application_start` is reported as an app-open, plus the event
    /// itself when it carries parameters.
    pub async fn log(
        &self,
        event: impl AsRef<str>,
        params: &EventParams,
    ) -> Result<(), LingoError> {
        let Some(sink) = &self.sink else {
            return Ok(());
        };
        log_to(sink.as_ref(), event.as_ref(), params).await
    }

    /// Log an event in the background. Failures are logged, never returned.
    ///
    /// Returns `None` when analytics is disabled or no tokio runtime is
    /// running.
    pub fn track(&self, event: impl AsRef<str>, params: EventParams) -> Option<JoinHandle<()>> {
        let sink = Arc::clone(self.sink.as_ref()?);
        let handle = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => {
                warn!("analytics: no runtime, dropping event {}", event.as_ref());
                return None;
            }
        };
        let name = event.as_ref().to_string();
        Some(handle.spawn(async move {
            if let Err(e) = log_to(sink.as_ref(), &name, &params).await {
                warn!("analytics: {} failed to log {name}: {e}", sink.name());
            }
        }))
    }
}

async fn log_to(
    sink: &dyn AnalyticsSink,
    name: &str,
    params: &EventParams,
) -> Result<(), LingoError> {
    debug!("analytics: {name} ({} params)", params.len());
    if name == AnalyticEvent::ApplicationStart.as_str() {
        sink.log_app_open().await?;
        if !params.is_empty() {
            sink.log_event(name, params).await?;
        }
        return Ok(());
    }
    sink.log_event(name, params).await
}

// --- HTTP backend ---

#[derive(Serialize)]
struct EventBatch<'a> {
    client_id: &'a str,
    timestamp_micros: i64,
    events: Vec<EventPayload<'a>>,
}

#[derive(Serialize)]
struct EventPayload<'a> {
    name: &'a str,
    params: &'a EventParams,
}

/// Posts events as JSON batches to a collection endpoint.
pub struct HttpAnalytics {
    client: reqwest::Client,
    endpoint: String,
    client_id: String,
    app_check_token: Option<String>,
}

impl HttpAnalytics {
    /// Create from config values. `client_id` is random per process.
    pub fn new(
        endpoint: String,
        app_check_token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, LingoError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LingoError::Config(format!("analytics: failed to build client: {e}")))?;
        Ok(Self {
            client,
            endpoint,
            client_id: uuid::Uuid::new_v4().to_string(),
            app_check_token: app_check_token.filter(|t| !t.is_empty()),
        })
    }

    fn batch<'a>(&'a self, name: &'a str, params: &'a EventParams) -> EventBatch<'a> {
        EventBatch {
            client_id: &self.client_id,
            timestamp_micros: chrono::Utc::now().timestamp_micros(),
            events: vec![EventPayload { name, params }],
        }
    }
}

#[async_trait]
impl AnalyticsSink for HttpAnalytics {
    fn name(&self) -> &str {
        "http-analytics"
    }

    async fn log_event(&self, name: &str, params: &EventParams) -> Result<(), LingoError> {
        let mut req = self.client.post(&self.endpoint).json(&self.batch(name, params));
        if let Some(token) = &self.app_check_token {
            req = req.header(APP_CHECK_HEADER, token);
        }
        let resp = req
            .send()
            .await
            .map_err(|e| LingoError::Analytics(format!("request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(LingoError::Analytics(format!(
                "endpoint returned {status}: {text}"
            )));
        }
        Ok(())
    }

    async fn is_available(&self) -> bool {
        // Any HTTP answer means the endpoint is reachable.
        match self.client.get(&self.endpoint).send().await {
            Ok(_) => true,
            Err(e) => {
                warn!("analytics endpoint not reachable: {e}");
                false
            }
        }
    }
}
