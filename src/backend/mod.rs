mod json_store;
mod interface;

pub use interface::{UserStore, Result, BackendError};
pub use json_store::JsonStore;
