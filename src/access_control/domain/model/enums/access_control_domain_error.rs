use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccessControlDomainError {
    #[error("user id must not be blank")]
    InvalidUserId,

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
