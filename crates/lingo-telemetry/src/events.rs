//! Named analytic events.

/// Events the app reports. Free-form names are accepted too, anywhere an
/// `impl AsRef<str>` is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalyticEvent {
    // App lifecycle
    ApplicationStart,

    // Settings
    SettingsOpen,
    SettingsClose,
    LanguageChanged,

    // Navigation & UI
    SearchPerformed,

    // Import/export
    BackupCreated,
    BackupRestored,
    FileImported,

    // Screens
    AboutScreenOpened,
}

impl AnalyticEvent {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ApplicationStart => "application_start",
            Self::SettingsOpen => "settings_open",
            Self::SettingsClose => "settings_close",
            Self::LanguageChanged => "language_changed",
            Self::SearchPerformed => "search_performed",
            Self::BackupCreated => "backup_created",
            Self::BackupRestored => "backup_restored",
            Self::FileImported => "file_imported",
            Self::AboutScreenOpened => "about_screen_opened",
        }
    }
}

impl AsRef<str> for AnalyticEvent {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
