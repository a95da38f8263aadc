#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("{detail}")]
    Http { status: u16, detail: String },

    #[error("Data error: {0}")]
    DataError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Authentication error: {0}")]
    AuthError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Reasons a report form is rejected before any request is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("CDC file not uploaded")]
    MissingCdcFile,

    #[error("State file not uploaded")]
    MissingStateFile,

    #[error("Year not selected")]
    MissingYear,

    #[error("Year {0} is outside the selectable range")]
    YearOutOfRange(i32),
}
