pub(crate) const REMOTE_ENDPOINT: &str = "http://localhost:8000";
pub(crate) const LOG_FILE_PATH: &str = "/tmp/taskboard.log";

pub(crate) fn remote_endpoint() -> String {
    REMOTE_ENDPOINT.to_string()
}

pub(crate) fn log_level() -> Option<String> {
    Some("info".to_string())
}

pub(crate) fn log_file_path() -> String {
    LOG_FILE_PATH.to_string()
}
