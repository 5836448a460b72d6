//! CLI command handlers: the glue between config, localizer, and telemetry.


use clap::ValueEnum;
use lingo_core::{
    config::{shellexpand, LanguageConfig},
    error::LingoError,
    language::CurrentLanguage,
    traits::{EventParams, FeedbackSink, LocaleSource},
};
use lingo_i18n::{Localizer, StringCatalog};
use lingo_telemetry::{
    categorize::{self, SizeKind},
    Analytics, FeedbackForm, SubmitOutcome,
};
use std::path::Path;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Value kinds accepted by `lingo categorize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CategoryKind {
    Count,
    Duration,
    Font,
    Stroke,
    Color,
    TextLength,
}

/// Built-in strings overlaid with the configured catalog file, if present.
pub fn build_catalog(cfg: &LanguageConfig) -> Result<StringCatalog, LingoError> {
    let mut catalog = StringCatalog::builtin();
    let path = shellexpand(&cfg.catalog_path);
    if Path::new(&path).exists() {
        catalog.merge(StringCatalog::load(&path)?);
    } else {
        debug!("catalog file {path} not found, using built-in strings");
    }
    Ok(catalog)
}

/// Load the catalog into `localizer` and resolve the active language.
pub fn setup_localizer(
    localizer: &Localizer,
    cfg: &LanguageConfig,
    setting: Option<i64>,
    locales: &dyn LocaleSource,
) -> Result<CurrentLanguage, LingoError> {
    localizer.init(build_catalog(cfg)?, CurrentLanguage::default());
    localizer.set_default_tag(cfg.default_tag.as_str());
    localizer.set_display_prefix(cfg.display_prefix.as_str());
    Ok(localizer.load_language(setting, locales))
}

/// JSON description of the active language and its layout tokens.
pub fn resolve_report(localizer: &Localizer) -> serde_json::Value {
    let current = localizer.current();
    serde_json::json!({
        "languageTag": current.language_tag().as_str(),
        "isRTL": current.is_rtl(),
        "catalogSlice": localizer.active_slice().map(|t| t.to_string()),
        "directions": localizer.row_directions(),
    })
}

pub fn translate(localizer: &Localizer, key: &str, args: &[String]) -> String {
    if args.is_empty() {
        localizer.translate(key)
    } else {
        localizer.f_translate(key, args)
    }
}

pub fn categorize(kind: CategoryKind, value: &str) -> anyhow::Result<&'static str> {
    let int = || -> anyhow::Result<u64> {
        value
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("'{value}' is not a non-negative integer: {e}"))
    };
    let float = || -> anyhow::Result<f64> {
        value
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("'{value}' is not a number: {e}"))
    };
    Ok(match kind {
        CategoryKind::Count => categorize::categorize_count(int()?),
        CategoryKind::Duration => categorize::categorize_duration(float()?),
        CategoryKind::Font => categorize::categorize_size(float()?, SizeKind::Font),
        CategoryKind::Stroke => categorize::categorize_size(float()?, SizeKind::Stroke),
        CategoryKind::Color => categorize::categorize_color(value),
        CategoryKind::TextLength => categorize::categorize_text_length(int()?),
    })
}

/// Parse `key=value` pairs into event parameters.
pub fn parse_params(pairs: &[String]) -> anyhow::Result<EventParams> {
    pairs
        .iter()
        .map(|pair| {
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| anyhow::anyhow!("expected key=value, got '{pair}'"))?;
            let key = key.trim();
            if key.is_empty() {
                anyhow::bail!("empty parameter name in '{pair}'");
            }
            Ok((key.to_string(), serde_json::Value::String(value.to_string())))
        })
        .collect()
}

/// Parameters sent with `application_start`.
pub fn startup_params(localizer: &Localizer) -> EventParams {
    let mut params = EventParams::new();
    params.insert(
        "language".to_string(),
        serde_json::Value::String(localizer.current().language_tag().to_string()),
    );
    params
}

/// Track an event and give the background task up to `wait_secs` to finish.
pub async fn send_event(analytics: &Analytics, name: &str, params: EventParams, wait_secs: u64) {
    wait_for(analytics.track(name, params), wait_secs).await;
}

/// Wait for a background telemetry task, bounded by `wait_secs`.
pub async fn wait_for(handle: Option<JoinHandle<()>>, wait_secs: u64) {
    let Some(handle) = handle else {
        return;
    };
    if tokio::time::timeout(Duration::from_secs(wait_secs), handle)
        .await
        .is_err()
    {
        warn!("telemetry task still running after {wait_secs}s, exiting anyway");
    }
}

/// Validate and submit feedback, returning the confirmation text.
pub async fn submit_feedback(
    localizer: &Localizer,
    sink: &dyn FeedbackSink,
    app_name: &str,
    title: &str,
    body: &str,
    email: Option<&str>,
) -> anyhow::Result<String> {
    let mut form = FeedbackForm::new();
    form.set_title(title);
    form.set_text(body);
    form.set_email(email.unwrap_or_default());

    match form.submit(app_name, sink, localizer).await {
        SubmitOutcome::Submitted { message } => Ok(message),
        SubmitOutcome::Invalid | SubmitOutcome::Failed => {
            let reason = form
                .title_error()
                .or(form.error())
                .or(form.email_error())
                .unwrap_or_default()
                .to_string();
            anyhow::bail!(reason)
        }
    }
}
