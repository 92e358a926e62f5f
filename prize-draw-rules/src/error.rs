use thiserror::Error;

#[derive(Error, Debug)]
pub enum RulesError {
    #[error("failed to read rule file: {0}")]
    Io(#[from] std::io::Error),
    #[error("rule file is not a JSON array of appointment rules: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to watch rule file: {0}")]
    Watch(#[from] notify::Error),
}
