use std::fmt;

use serde::{Serialize, Deserialize};

pub type UserId = i64;

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
}

impl User {
    pub fn new(id: UserId, name: &str) -> User {
        User { id, name: name.to_string() }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.id, self.name)
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "User {} ({})", self.id, self.name)
    }
}

/// Inbound body for create and update requests.
///
/// Carries no id: whatever `id` a client sends is dropped while decoding,
/// so the id is always decided by the server.
#[derive(Debug, Default, Deserialize)]
pub struct UserPayload {
    #[serde(default)]
    pub name: String,
}

impl UserPayload {
    /// Decode a raw request body. An empty body counts as an empty payload.
    pub fn from_slice(body: &[u8]) -> serde_json::Result<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(UserPayload::default());
        }
        serde_json::from_slice(body)
    }

    pub fn into_user(self, id: UserId) -> User {
        User { id, name: self.name }
    }
}
