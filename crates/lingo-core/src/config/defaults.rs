pub(super) fn default_app_name() -> String {
    "lingo".to_string()
}
pub(super) fn default_log_level() -> String {
    "info".to_string()
}
pub(super) fn default_tag() -> String {
    crate::language::DEFAULT_TAG.to_string()
}
pub(super) fn default_catalog_path() -> String {
    "strings.json".to_string()
}
pub(super) fn default_region() -> String {
    "europe-west1".to_string()
}
pub(super) fn default_feedback_function() -> String {
    "addUserFeedback2".to_string()
}
pub(super) fn default_timeout_secs() -> u64 {
    15
}
