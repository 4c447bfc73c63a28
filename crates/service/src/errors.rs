use thiserror::Error;
use uuid::Uuid;

/// Business errors for the rental bookkeeping workflows. All are terminal:
/// raised at the point of detection and surfaced to the boundary layer
/// unmodified, with no partial writes preceding them.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("user with id={0} not found")]
    UserNotFound(Uuid),
    #[error("item with id={0} not found")]
    ItemNotFound(Uuid),
    #[error("booking with id={0} not found")]
    BookingNotFound(Uuid),
    #[error("access denied: {0}")]
    AccessDenied(String),
    #[error("item with id={0} is unavailable")]
    ItemUnavailable(Uuid),
    #[error("booking with id={0} was already approved or rejected")]
    BookingUnavailable(Uuid),
    #[error("repository error: {0}")]
    Repository(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::Validation(_) | ServiceError::Model(_) => 1001,
            ServiceError::UserNotFound(_) => 1002,
            ServiceError::ItemNotFound(_) => 1003,
            ServiceError::BookingNotFound(_) => 1004,
            ServiceError::AccessDenied(_) => 1005,
            ServiceError::ItemUnavailable(_) => 1101,
            ServiceError::BookingUnavailable(_) => 1102,
            ServiceError::Repository(_) => 1200,
        }
    }
}
