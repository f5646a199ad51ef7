pub mod domain;
pub mod backend;
pub mod server;

pub use crate::domain::{Store, User, UserId};
