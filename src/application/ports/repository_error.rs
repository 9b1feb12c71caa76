use crate::domain::JobTransitionError;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
    #[error("rejected transition: {0}")]
    InvalidTransition(#[from] JobTransitionError),
}
