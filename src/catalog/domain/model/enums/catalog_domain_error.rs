use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogDomainError {
    #[error("title must be non-blank and between 3 and 50 characters long")]
    InvalidTitle,

    #[error("short description must be non-blank and between 3 and 100 characters long")]
    InvalidShortDescription,

    #[error("price must be greater than 0")]
    InvalidPrice,

    #[error("departament id must be greater than 0")]
    InvalidDepartament,

    #[error("product not found")]
    ProductNotFound,

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
