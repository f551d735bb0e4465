//! User accounts and the signed-in session.

use jiff::Timestamp;
use rand::Rng;
use rusqlite::{params, types::Type, OptionalExtension, Row};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use uuid::Uuid;

use crate::{
    error::{DatabaseResultExt, Result, StudyError},
    models::User,
};

const INSERT_USER_SQL: &str =
    "INSERT INTO users (id, email, password_hash, salt, created_at) VALUES (?1, ?2, ?3, ?4, ?5)";
const CHECK_EMAIL_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM users WHERE email = ?1)";
const SELECT_CREDENTIALS_SQL: &str =
    "SELECT id, email, created_at, password_hash, salt FROM users WHERE email = ?1";
const UPSERT_SESSION_SQL: &str = "INSERT INTO session (slot, user_id, signed_in_at) VALUES (1, ?1, ?2) \
     ON CONFLICT(slot) DO UPDATE SET user_id = excluded.user_id, signed_in_at = excluded.signed_in_at";
const DELETE_SESSION_SQL: &str = "DELETE FROM session";
const SELECT_SESSION_USER_SQL: &str = "SELECT u.id, u.email, u.created_at FROM session s \
     JOIN users u ON u.id = s.user_id WHERE s.slot = 1";

const MIN_PASSWORD_LEN: usize = 6;
const INVALID_CREDENTIALS: &str = "Invalid email or password";

fn password_digest(salt: &str, password: &str) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hasher.finalize().to_vec()
}

fn hash_password(salt: &str, password: &str) -> String {
    hex::encode(password_digest(salt, password))
}

/// Compares in constant time against a stored hex digest.
fn password_matches(salt: &str, password: &str, stored_hash: &str) -> bool {
    let Ok(stored) = hex::decode(stored_hash) else {
        return false;
    };
    password_digest(salt, password).ct_eq(&stored).into()
}

fn generate_salt() -> String {
    let mut bytes = [0u8; 16];
    rand::rng().fill(&mut bytes);
    hex::encode(bytes)
}

fn parse_timestamp(row: &Row<'_>, idx: usize) -> rusqlite::Result<Timestamp> {
    row.get::<_, String>(idx)?
        .parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

fn user_from_row(row: &Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        email: row.get(1)?,
        created_at: parse_timestamp(row, 2)?,
    })
}

fn validate_credentials(email: &str, password: &str) -> Result<()> {
    if !email.contains('@') {
        return Err(StudyError::invalid_input("email").with_reason("Email address is badly formatted"));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(StudyError::invalid_input("password")
            .with_reason(format!("Password must be at least {MIN_PASSWORD_LEN} characters")));
    }
    Ok(())
}

impl super::Database {
    /// Registers a new account. Emails are compared case-insensitively.
    pub fn create_user(&mut self, email: &str, password: &str) -> Result<User> {
        let email = email.trim();
        validate_credentials(email, password)?;

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(CHECK_EMAIL_EXISTS_SQL, params![email], |row| row.get(0))
            .db_context("Failed to check for existing account")?;
        if exists {
            return Err(StudyError::authentication(
                "An account with this email already exists",
            ));
        }

        let id = Uuid::new_v4().to_string();
        let salt = generate_salt();
        let hash = hash_password(&salt, password);
        let now = Timestamp::now();

        tx.execute(
            INSERT_USER_SQL,
            params![&id, email, &hash, &salt, now.to_string()],
        )
        .db_context("Failed to insert user")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(User {
            id,
            email: email.to_string(),
            created_at: now,
        })
    }

    /// Checks an email/password pair and returns the matching user.
    pub fn verify_credentials(&self, email: &str, password: &str) -> Result<User> {
        let record = self
            .connection
            .query_row(SELECT_CREDENTIALS_SQL, params![email.trim()], |row| {
                let user = user_from_row(row)?;
                let hash: String = row.get(3)?;
                let salt: String = row.get(4)?;
                Ok((user, hash, salt))
            })
            .optional()
            .db_context("Failed to query user")?;

        match record {
            Some((user, hash, salt)) if password_matches(&salt, password, &hash) => Ok(user),
            _ => Err(StudyError::authentication(INVALID_CREDENTIALS)),
        }
    }

    /// Makes `user_id` the signed-in user, replacing any previous session.
    pub fn start_session(&mut self, user_id: &str) -> Result<()> {
        self.connection
            .execute(UPSERT_SESSION_SQL, params![user_id, Timestamp::now().to_string()])
            .db_context("Failed to start session")?;
        Ok(())
    }

    /// Clears the session. Signing out twice is not an error.
    pub fn end_session(&mut self) -> Result<()> {
        self.connection
            .execute(DELETE_SESSION_SQL, [])
            .db_context("Failed to end session")?;
        Ok(())
    }

    /// The signed-in user, if any.
    pub fn session_user(&self) -> Result<Option<User>> {
        self.connection
            .query_row(SELECT_SESSION_USER_SQL, [], user_from_row)
            .optional()
            .db_context("Failed to query session")
    }

    /// ID of the signed-in user, or `StudyError::Unauthenticated`.
    pub fn require_user_id(&self) -> Result<String> {
        self.session_user()?
            .map(|user| user.id)
            .ok_or(StudyError::Unauthenticated)
    }
}
