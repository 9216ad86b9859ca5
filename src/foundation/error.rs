pub type XrnaResult<T> = Result<T, XrnaError>;

/// Fatal conditions that stop a validation pass before it produces a report.
///
/// Rule violations found in a document are never reported through this type; they are
/// collected into a [`crate::ValidationReport`].
#[derive(thiserror::Error, Debug)]
pub enum XrnaError {
    #[error("input error: {0}")]
    Input(String),

    #[error("schema error: {0}")]
    Schema(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl XrnaError {
    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }

    pub fn schema(msg: impl Into<String>) -> Self {
        Self::Schema(msg.into())
    }
}
