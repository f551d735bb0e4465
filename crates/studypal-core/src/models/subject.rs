//! Subject model definition.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

/// A subject the user is revising for, together with its exam date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Subject {
    /// Unique identifier (UUID v4)
    pub id: String,

    /// Display name of the subject
    pub name: String,

    /// Calendar date of the exam
    pub exam_date: Date,

    /// ID of the owning user
    pub user_id: String,

    /// Timestamp when the subject was created (UTC)
    pub created_at: Timestamp,
}
