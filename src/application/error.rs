use crate::router::RouterError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("application was already started")]
    AlreadyStarted,
    #[error("application wasn't started")]
    NotStarted,
    #[error("to add new {what} the application must be stopped")]
    ModifyWhileStarted { what: &'static str },
    #[error(transparent)]
    Router(#[from] RouterError),
}

pub type ApplicationResult<T> = Result<T, ApplicationError>;
