//! Typed translation keys for strings the library itself displays.
//!
//! Host apps keep using plain string keys; these exist so the feedback
//! dialog cannot typo a key.

/// Keys used by the feedback dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackKey {
    UserFeedback,
    FeedbackTitleLabel,
    FeedbackTitlePlaceholder,
    FeedbackPlaceholder,
    EmailTitle,
    EmailPlaceholder,
    BtnSubmitFeedback,
    BtnCancel,
    FeedbackSubmitted,
    FeedbackError,
    TitleMinLength,
    TitleMaxLength,
    FeedbackMinLength,
    FeedbackMaxLength,
    InvalidEmail,
}

impl FeedbackKey {
    pub const ALL: [FeedbackKey; 15] = [
        Self::UserFeedback,
        Self::FeedbackTitleLabel,
        Self::FeedbackTitlePlaceholder,
        Self::FeedbackPlaceholder,
        Self::EmailTitle,
        Self::EmailPlaceholder,
        Self::BtnSubmitFeedback,
        Self::BtnCancel,
        Self::FeedbackSubmitted,
        Self::FeedbackError,
        Self::TitleMinLength,
        Self::TitleMaxLength,
        Self::FeedbackMinLength,
        Self::FeedbackMaxLength,
        Self::InvalidEmail,
    ];

    /// Catalog key.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UserFeedback => "UserFeedback",
            Self::FeedbackTitleLabel => "FeedbackTitleLabel",
            Self::FeedbackTitlePlaceholder => "FeedbackTitlePlaceholder",
            Self::FeedbackPlaceholder => "FeedbackPlaceholder",
            Self::EmailTitle => "EmailTitle",
            Self::EmailPlaceholder => "EmailPlaceholder",
            Self::BtnSubmitFeedback => "BtnSubmitFeedback",
            Self::BtnCancel => "BtnCancel",
            Self::FeedbackSubmitted => "FeedbackSubmitted",
            Self::FeedbackError => "FeedbackError",
            Self::TitleMinLength => "TitleMinLength",
            Self::TitleMaxLength => "TitleMaxLength",
            Self::FeedbackMinLength => "FeedbackMinLength",
            Self::FeedbackMaxLength => "FeedbackMaxLength",
            Self::InvalidEmail => "InvalidEmail",
        }
    }

    /// Built-in (Hebrew, Arabic, English) strings for this key.
    pub(crate) fn builtin(self) -> [&'static str; 3] {
        match self {
            Self::UserFeedback => ["משוב", "ملاحظات", "Feedback"],
            Self::FeedbackTitleLabel => ["כותרת", "العنوان", "Title"],
            Self::FeedbackTitlePlaceholder => [
                "הזינו כותרת קצרה או נושא",
                "أدخل عنوانًا أو موضوعًا مختصرًا",
                "Enter a brief title or subject",
            ],
            Self::FeedbackPlaceholder => [
                "כתבו כאן את המשוב שלכם",
                "اكتب ملاحظاتك هنا",
                "Write your feedback here",
            ],
            Self::EmailTitle => [
                "אימייל (רשות)",
                "البريد الإلكتروني (اختياري)",
                "Email (optional)",
            ],
            Self::EmailPlaceholder => [
                "כתובת אימייל לתשובה",
                "بريدك الإلكتروني للرد",
                "Your email for a reply",
            ],
            Self::BtnSubmitFeedback => ["שליחה", "إرسال", "Submit"],
            Self::BtnCancel => ["ביטול", "إلغاء", "Cancel"],
            Self::FeedbackSubmitted => [
                "תודה! המשוב נשלח.",
                "شكرًا! تم إرسال ملاحظاتك.",
                "Thank you! Your feedback was sent.",
            ],
            Self::FeedbackError => [
                "שליחת המשוב נכשלה. נסו שוב מאוחר יותר.",
                "تعذر إرسال الملاحظات. حاول مرة أخرى لاحقًا.",
                "Could not send feedback. Please try again later.",
            ],
            Self::TitleMinLength => [
                "הכותרת חייבת להכיל לפחות 3 תווים",
                "يجب أن يحتوي العنوان على 3 أحرف على الأقل",
                "Title must be at least 3 characters",
            ],
            Self::TitleMaxLength => [
                "הכותרת חייבת להכיל פחות מ-100 תווים",
                "يجب أن يكون العنوان أقل من 100 حرف",
                "Title must be less than 100 characters",
            ],
            Self::FeedbackMinLength => [
                "המשוב חייב להכיל לפחות 5 תווים",
                "يجب أن تحتوي الملاحظات على 5 أحرف على الأقل",
                "Feedback must be at least 5 characters",
            ],
            Self::FeedbackMaxLength => [
                "המשוב חייב להכיל פחות מ-1000 תווים",
                "يجب أن تكون الملاحظات أقل من 1000 حرف",
                "Feedback must be less than 1000 characters",
            ],
            Self::InvalidEmail => [
                "כתובת האימייל אינה תקינה",
                "عنوان البريد الإلكتروني غير صالح",
                "Invalid email address",
            ],
        }
    }
}

impl AsRef<str> for FeedbackKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
