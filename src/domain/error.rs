use thiserror::Error;

use crate::domain::UserId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// Occurs when the largest stored id is already the largest
    /// representable one, so no next id can be allocated.
    #[error("no user id left after {0}")]
    IdSpaceExhausted(UserId),
    /// Occurs when referencing a user by an id which is not in the store
    #[error("no such user id: {0}")]
    UnknownUser(UserId),
}

pub type DomainResult<T> = Result<T, DomainError>;
