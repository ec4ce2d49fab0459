use thiserror::Error;

pub type CommonResult<T> = Result<T, CommonError>;

#[derive(Debug, Error)]
pub enum CommonError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("internal error: {0}")]
    InternalError(String),
}

impl CommonError {
    pub fn internal(message: impl Into<String>) -> Self {
        CommonError::InternalError(message.into())
    }
}
