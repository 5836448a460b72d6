//! # lingo-telemetry
//!
//! Analytics events, the value bucketing applied before they are sent,
//! and user feedback submission.

pub mod analytics;
pub mod categorize;
pub mod events;
pub mod feedback;
pub mod init;

pub use analytics::{Analytics, HttpAnalytics};
pub use events::AnalyticEvent;
pub use feedback::{FeedbackForm, HttpFeedback, SubmitOutcome};
pub use init::Telemetry;
