use super::error_code::ValidationErrors;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.invalid")]
    Invalid(ValidationErrors),
    #[error("product.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
