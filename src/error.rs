use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("profile incomplete for user {0}: complete the assessment first")]
    ProfileIncomplete(String),

    #[error("major not found: {0}")]
    MajorNotFound(String),

    #[error("invalid user id: {0}")]
    InvalidUserId(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("text generation unavailable: {0}")]
    GeneratorUnavailable(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MatchError {
    /// True for the one condition callers must surface to the user instead of
    /// treating as a runtime failure.
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::ProfileIncomplete(_))
    }
}

pub type Result<T> = std::result::Result<T, MatchError>;
