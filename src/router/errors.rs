use crate::router::RouterOptionsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouterError {
    #[error("constraint rules for the variable '{variable}' were not found in route '{path}'")]
    MissingConstraint { variable: String, path: String },
    #[error("constraint for the variable '{variable}' in route '{path}' is invalid: {reason}")]
    InvalidConstraint {
        variable: String,
        path: String,
        pattern: String,
        reason: String,
    },
    #[error(transparent)]
    Options(#[from] RouterOptionsError),
}

pub type RouterResult<T> = Result<T, RouterError>;
