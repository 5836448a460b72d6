use super::*;
use lingo_core::language::CurrentLanguage;
use lingo_i18n::{Localizer, StringCatalog};
use std::sync::Mutex;

#[derive(Default)]
struct RecordingFeedback {
    sent: Mutex<Vec<FeedbackRequest>>,
    fail: bool,
}

#[async_trait]
impl FeedbackSink for RecordingFeedback {
    fn name(&self) -> &str {
        "recording"
    }

    async fn submit(&self, request: &FeedbackRequest) -> Result<(), LingoError> {
        if self.fail {
            return Err(LingoError::Feedback("unavailable".into()));
        }
        self.sent.lock().unwrap().push(request.clone());
        Ok(())
    }
}

fn english() -> Localizer {
    Localizer::new(StringCatalog::builtin(), CurrentLanguage::english())
}

fn filled(title: &str, text: &str, email: &str) -> FeedbackForm {
    let mut form = FeedbackForm::new();
    form.set_title(title);
    form.set_text(text);
    form.set_email(email);
    form
}

#[test]
fn test_title_too_short() {
    let l = english();
    let mut form = filled("  ab  ", "long enough text", "");
    assert!(!form.validate(&l));
    assert_eq!(form.title_error(), Some("Title must be at least 3 characters"));
    assert_eq!(form.error(), None);
}

#[test]
fn test_body_too_short() {
    let l = english();
    let mut form = filled("Crash", " hey ", "");
    assert!(!form.validate(&l));
    assert_eq!(form.title_error(), None);
    assert_eq!(form.error(), Some("Feedback must be at least 5 characters"));
}

#[test]
fn test_first_failure_wins() {
    let l = english();
    let mut form = filled("a", "b", "not-an-email");
    assert!(!form.validate(&l));
    assert!(form.title_error().is_some());
    assert!(form.error().is_none());
    assert!(form.email_error().is_none());
}

#[test]
fn test_invalid_email() {
    let l = english();
    let mut form = filled("Crash", "It crashes on save", "user@host");
    assert!(!form.validate(&l));
    assert_eq!(form.email_error(), Some("Invalid email address"));
}

#[test]
fn test_email_pattern() {
    assert!(FeedbackForm::is_valid_email(""));
    assert!(FeedbackForm::is_valid_email("   "));
    assert!(FeedbackForm::is_valid_email(" a@b.co "));
    assert!(!FeedbackForm::is_valid_email("a@b"));
    assert!(!FeedbackForm::is_valid_email("a b@c.d"));
    assert!(!FeedbackForm::is_valid_email("a@@b.c"));
}

#[test]
fn test_setters_cap_length() {
    let form = filled(&"t".repeat(150), &"x".repeat(1200), &"e".repeat(120));
    assert_eq!(form.title().chars().count(), FeedbackForm::TITLE_MAX);
    assert_eq!(form.text().chars().count(), FeedbackForm::TEXT_MAX);
    assert_eq!(form.email().chars().count(), FeedbackForm::EMAIL_MAX);
}

#[test]
fn test_lengths_count_characters() {
    let l = english();
    // Three Hebrew letters are six bytes but three characters.
    let mut form = filled("אבג", "שלום עולם", "");
    assert!(form.validate(&l));
}

#[test]
fn test_validation_messages_follow_language() {
    let l = Localizer::new(StringCatalog::builtin(), CurrentLanguage::arabic());
    let mut form = filled("", "", "");
    assert!(!form.validate(&l));
    assert_eq!(
        form.title_error(),
        Some("يجب أن يحتوي العنوان على 3 أحرف على الأقل")
    );
}

#[test]
fn test_request_trims_and_omits_blank_email() {
    let form = filled("  Crash  ", "  It crashes  ", "  ");
    let req = form.request("notes");
    assert_eq!(req.app_name, "notes");
    assert_eq!(req.title, "Crash");
    assert_eq!(req.text, "It crashes");
    assert_eq!(req.email, None);

    let json = serde_json::to_value(CallableRequest { data: &req }).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"data": {
            "appName": "notes",
            "feedbackTitle": "Crash",
            "feedbackText": "It crashes"
        }})
    );
}

#[tokio::test]
async fn test_submit_success_resets_form() {
    let l = english();
    let sink = RecordingFeedback::default();
    let mut form = filled("Crash", "It crashes on save", " me@example.com ");
    let outcome = form.submit("notes", &sink, &l).await;
    assert_eq!(
        outcome,
        SubmitOutcome::Submitted {
            message: "Thank you! Your feedback was sent.".into()
        }
    );
    assert_eq!(form, FeedbackForm::new());
    let sent = sink.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].email.as_deref(), Some("me@example.com"));
}

#[tokio::test]
async fn test_submit_invalid_does_not_call_backend() {
    let l = english();
    let sink = RecordingFeedback::default();
    let mut form = filled("Cr", "It crashes on save", "");
    assert_eq!(form.submit("notes", &sink, &l).await, SubmitOutcome::Invalid);
    assert!(sink.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_submit_failure_keeps_inputs() {
    let l = english();
    let sink = RecordingFeedback {
        fail: true,
        ..Default::default()
    };
    let mut form = filled("Crash", "It crashes on save", "");
    assert_eq!(form.submit("notes", &sink, &l).await, SubmitOutcome::Failed);
    assert_eq!(
        form.error(),
        Some("Could not send feedback. Please try again later.")
    );
    assert_eq!(form.title(), "Crash");
}

#[test]
fn test_close_clears_everything() {
    let l = english();
    let mut form = filled("a", "", "");
    form.validate(&l);
    form.close();
    assert_eq!(form, FeedbackForm::new());
}

#[test]
fn test_callable_error_message() {
    assert_eq!(
        callable_error_message(
            r#"{"error":{"status":"INVALID_ARGUMENT","message":"title required"}}"#
        )
        .as_deref(),
        Some("INVALID_ARGUMENT: title required")
    );
    assert_eq!(
        callable_error_message(r#"{"error":{"message":"boom"}}"#).as_deref(),
        Some("boom")
    );
    assert_eq!(callable_error_message("<html>502</html>"), None);
}

#[test]
fn test_from_config_requires_project() {
    let mut cfg = TelemetryConfig::default();
    assert!(HttpFeedback::from_config(&cfg).unwrap().is_none());
    cfg.project_id = "notes-app".into();
    let backend = HttpFeedback::from_config(&cfg).unwrap().unwrap();
    assert_eq!(
        backend.url(),
        "https://europe-west1-notes-app.cloudfunctions.net/addUserFeedback2"
    );
    assert!(backend.app_check_token.is_none());
}
