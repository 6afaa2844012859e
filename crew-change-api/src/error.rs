use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    ValidationError(String),
    
    #[error("Not found: {0}")]
    NotFound(String),
    
    #[error("Internal error: {0}")]
    InternalError(String),
    
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// The tracking API was resolved without an enclosing modify-mode provider.
    /// This is a wiring bug in the caller, never a runtime condition.
    #[error("Modify mode used outside of a provider scope: {0}")]
    OutsideScope(String),
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ApiError::ValidationError(errors.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
