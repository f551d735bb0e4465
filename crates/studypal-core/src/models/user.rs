//! User identity model.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A registered user. Credentials never leave the database layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Unique identifier (UUID v4)
    pub id: String,

    /// Email address used to sign in
    pub email: String,

    /// Timestamp when the account was created (UTC)
    pub created_at: Timestamp,
}
