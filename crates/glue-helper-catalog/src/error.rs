use thiserror::Error;

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors from catalog operations.
/// The `&'static str` field of the object variants names the kind of
/// object, e.g. `"table"` or `"database"`.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("{0} not found: {1}")]
    NotFound(&'static str, String),
    #[error("{0} already exists: {1}")]
    AlreadyExists(&'static str, String),
    #[error("external error: {0}")]
    External(String),
}
