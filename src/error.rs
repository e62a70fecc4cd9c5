use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid argument: `{argument}` is required")]
    InvalidArgument { argument: &'static str },

    #[error("precondition violated in `{operation}`: {reason}")]
    PreconditionViolation {
        operation: &'static str,
        reason: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
