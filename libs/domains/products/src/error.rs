use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Id was invalidly set on request.")]
    IdSetOnRequest,

    #[error("Product name was not set on request.")]
    NameNotSet,

    #[error("Product {0} not found")]
    NotFound(i64),

    #[error(transparent)]
    Database(#[from] DbErr),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            e @ (ProductError::IdSetOnRequest | ProductError::NameNotSet) => {
                AppError::UnprocessableEntity(e.to_string())
            }
            ProductError::NotFound(id) => AppError::NotFound(format!("Product {} not found", id)),
            ProductError::Database(e) => AppError::Database(e),
        }
    }
}
