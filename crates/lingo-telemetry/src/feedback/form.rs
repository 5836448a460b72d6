use lingo_core::traits::{FeedbackRequest, FeedbackSink};
use lingo_i18n::{FeedbackKey, Localizer};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::error;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Result of [`FeedbackForm::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A field failed validation; its error is set on the form.
    Invalid,
    /// Stored by the backend. Carries the confirmation to show.
    Submitted { message: String },
    /// The backend call failed; the form error is set.
    Failed,
}

/// State of the feedback dialog: three inputs and their error lines.
///
/// Setters cap input length the way the text fields do; validation
/// happens on submit and the first failing field wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackForm {
    title: String,
    text: String,
    email: String,
    title_error: Option<String>,
    error: Option<String>,
    email_error: Option<String>,
}

fn truncate(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

impl FeedbackForm {
    pub const TITLE_MIN: usize = 3;
    pub const TITLE_MAX: usize = 100;
    pub const TEXT_MIN: usize = 5;
    pub const TEXT_MAX: usize = 1000;
    pub const EMAIL_MAX: usize = 100;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = truncate(title, Self::TITLE_MAX);
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = truncate(text, Self::TEXT_MAX);
    }

    pub fn set_email(&mut self, email: &str) {
        self.email = truncate(email, Self::EMAIL_MAX);
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn title_error(&self) -> Option<&str> {
        self.title_error.as_deref()
    }

    /// Error shown under the feedback body (validation or submission).
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn email_error(&self) -> Option<&str> {
        self.email_error.as_deref()
    }

    fn clear_errors(&mut self) {
        self.title_error = None;
        self.error = None;
        self.email_error = None;
    }

    /// Empty optional email is valid.
    pub fn is_valid_email(email: &str) -> bool {
        let email = email.trim();
        email.is_empty() || EMAIL_RE.is_match(email)
    }

    /// Check all fields, setting the first failing field's error.
    pub fn validate(&mut self, localizer: &Localizer) -> bool {
        self.clear_errors();

        let title_len = self.title.trim().chars().count();
        if title_len < Self::TITLE_MIN {
            self.title_error = Some(localizer.translate(FeedbackKey::TitleMinLength));
            return false;
        }
        if title_len > Self::TITLE_MAX {
            self.title_error = Some(localizer.translate(FeedbackKey::TitleMaxLength));
            return false;
        }

        let text_len = self.text.trim().chars().count();
        if text_len < Self::TEXT_MIN {
            self.error = Some(localizer.translate(FeedbackKey::FeedbackMinLength));
            return false;
        }
        if text_len > Self::TEXT_MAX {
            self.error = Some(localizer.translate(FeedbackKey::FeedbackMaxLength));
            return false;
        }

        if !Self::is_valid_email(&self.email) {
            self.email_error = Some(localizer.translate(FeedbackKey::InvalidEmail));
            return false;
        }
        true
    }

    /// Trimmed request for the backend; blank email is omitted.
    pub fn request(&self, app_name: &str) -> FeedbackRequest {
        let email = self.email.trim();
        FeedbackRequest {
            app_name: app_name.to_string(),
            title: self.title.trim().to_string(),
            text: self.text.trim().to_string(),
            email: (!email.is_empty()).then(|| email.to_string()),
        }
    }

    /// Validate, then send once. No retry.
    ///
    /// On success the form is reset. On failure the inputs are kept and
    /// the generic translated error is shown.
    pub async fn submit(
        &mut self,
        app_name: &str,
        sink: &dyn FeedbackSink,
        localizer: &Localizer,
    ) -> SubmitOutcome {
        if !self.validate(localizer) {
            return SubmitOutcome::Invalid;
        }

        match sink.submit(&self.request(app_name)).await {
            Ok(()) => {
                *self = Self::default();
                SubmitOutcome::Submitted {
                    message: localizer.translate(FeedbackKey::FeedbackSubmitted),
                }
            }
            Err(e) => {
                error!("Feedback submission error: {e}");
                self.error = Some(localizer.translate(FeedbackKey::FeedbackError));
                SubmitOutcome::Failed
            }
        }
    }

    /// Dismiss the dialog: drop inputs and errors.
    pub fn close(&mut self) {
        *self = Self::default();
    }
}
