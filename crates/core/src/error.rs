/// Boxed error raised by a store adapter.
pub type StoreFault = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum RecipeError {
    #[error("Invalid ID: '{0}'")]
    InvalidIdentifier(String),
    #[error("{0} is required")]
    MissingRequiredField(&'static str),
    #[error("invalid value for {field}: {reason}")]
    InvalidFieldValue { field: String, reason: String },
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Recipe not found")]
    NotFound,
    #[error("store error: {0}")]
    Store(#[source] StoreFault),
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl RecipeError {
    /// Wraps any driver or adapter error as a store fault.
    pub fn store(err: impl Into<StoreFault>) -> Self {
        Self::Store(err.into())
    }

    pub(crate) fn invalid_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFieldValue {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<mongodb::error::Error> for RecipeError {
    fn from(err: mongodb::error::Error) -> Self {
        Self::store(err)
    }
}

pub type RecipeResult<T> = std::result::Result<T, RecipeError>;
