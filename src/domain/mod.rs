pub mod user;
pub mod store;
pub mod error;

pub use user::{User, UserId, UserPayload};
pub use store::Store;
pub use error::{DomainError, DomainResult};
