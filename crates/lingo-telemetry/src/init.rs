//! Telemetry startup: build backends from config and announce the app.

use lingo_core::{
    config::TelemetryConfig,
    error::LingoError,
    traits::{EventParams, FeedbackSink},
};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::analytics::{Analytics, HttpAnalytics};
use crate::events::AnalyticEvent;
use crate::feedback::HttpFeedback;

/// Configured analytics and feedback backends.
#[derive(Clone, Default)]
pub struct Telemetry {
    analytics: Analytics,
    feedback: Option<Arc<dyn FeedbackSink>>,
}

impl Telemetry {
    pub fn new(analytics: Analytics, feedback: Option<Arc<dyn FeedbackSink>>) -> Self {
        Self {
            analytics,
            feedback,
        }
    }

    /// Build backends from config. Disabled telemetry yields no-op
    /// analytics and no feedback backend.
    pub fn from_config(cfg: &TelemetryConfig) -> Result<Self, LingoError> {
        if !cfg.enabled {
            info!("telemetry disabled");
            return Ok(Self::default());
        }

        let analytics = if cfg.analytics_endpoint.is_empty() {
            Analytics::disabled()
        } else {
            Analytics::new(Arc::new(HttpAnalytics::new(
                cfg.analytics_endpoint.clone(),
                Some(cfg.app_check_token.clone()),
                Duration::from_secs(cfg.timeout_secs),
            )?))
        };

        let feedback = HttpFeedback::from_config(cfg)?
            .map(|f| Arc::new(f) as Arc<dyn FeedbackSink>);

        Ok(Self::new(analytics, feedback))
    }

    pub fn analytics(&self) -> &Analytics {
        &self.analytics
    }

    pub fn feedback(&self) -> Option<&Arc<dyn FeedbackSink>> {
        self.feedback.as_ref()
    }

    /// Check the analytics backend in the background and report
    /// `application_start` once it answers. The caller does not wait.
    pub fn start(&self, params: EventParams) -> Option<JoinHandle<()>> {
        let sink = Arc::clone(self.analytics.sink()?);
        let analytics = self.analytics.clone();
        let handle = tokio::runtime::Handle::try_current().ok()?;
        Some(handle.spawn(async move {
            if !sink.is_available().await {
                warn!("telemetry init: {} not available", sink.name());
                return;
            }
            info!("telemetry init complete ({})", sink.name());
            if let Err(e) = analytics.log(AnalyticEvent::ApplicationStart, &params).await {
                warn!("telemetry init: application_start failed: {e}");
            }
        }))
    }
}
