//! Subject CRUD operations and queries.
//!
//! Every operation is scoped to an owner: callers pass the ID of the
//! signed-in user and records belonging to anyone else are rejected.

use jiff::{civil::Date, Timestamp};
use rusqlite::{params, types::Type, OptionalExtension, Row};
use uuid::Uuid;

use crate::{
    error::{DatabaseResultExt, Result, StudyError},
    models::Subject,
};

const INSERT_SUBJECT_SQL: &str =
    "INSERT INTO subjects (id, name, exam_date, user_id, created_at) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_SUBJECT_SQL: &str =
    "SELECT id, name, exam_date, user_id, created_at FROM subjects WHERE id = ?1";
const LIST_SUBJECTS_SQL: &str = "SELECT id, name, exam_date, user_id, created_at FROM subjects \
     WHERE user_id = ?1 ORDER BY exam_date ASC, created_at ASC";
const UPDATE_SUBJECT_SQL: &str = "UPDATE subjects SET name = ?1, exam_date = ?2 WHERE id = ?3";
const DELETE_SUBJECT_SQL: &str = "DELETE FROM subjects WHERE id = ?1";

fn subject_from_row(row: &Row<'_>) -> rusqlite::Result<Subject> {
    Ok(Subject {
        id: row.get(0)?,
        name: row.get(1)?,
        exam_date: row
            .get::<_, String>(2)?
            .parse::<Date>()
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e)))?,
        user_id: row.get(3)?,
        created_at: row
            .get::<_, String>(4)?
            .parse::<Timestamp>()
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e)))?,
    })
}

fn validate_name(name: &str) -> Result<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(StudyError::invalid_input("name").with_reason("Subject name must not be empty"));
    }
    Ok(name)
}

impl super::Database {
    /// Creates a subject owned by `user_id`.
    pub fn create_subject(&mut self, user_id: &str, name: &str, exam_date: Date) -> Result<Subject> {
        let name = validate_name(name)?;
        let id = Uuid::new_v4().to_string();
        let now = Timestamp::now();

        self.connection
            .execute(
                INSERT_SUBJECT_SQL,
                params![&id, name, exam_date.to_string(), user_id, now.to_string()],
            )
            .db_context("Failed to insert subject")?;

        Ok(Subject {
            id,
            name: name.to_string(),
            exam_date,
            user_id: user_id.to_string(),
            created_at: now,
        })
    }

    /// Retrieves a subject by ID regardless of owner.
    pub fn get_subject(&self, id: &str) -> Result<Option<Subject>> {
        self.connection
            .query_row(SELECT_SUBJECT_SQL, params![id], subject_from_row)
            .optional()
            .db_context("Failed to query subject")
    }

    /// Lists the subjects owned by `user_id`, earliest exam first.
    pub fn list_subjects(&self, user_id: &str) -> Result<Vec<Subject>> {
        let mut stmt = self
            .connection
            .prepare(LIST_SUBJECTS_SQL)
            .db_context("Failed to prepare query")?;

        let subjects = stmt
            .query_map(params![user_id], subject_from_row)
            .db_context("Failed to query subjects")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read subjects")?;
        Ok(subjects)
    }

    /// Fetches a subject and checks that `user_id` owns it.
    fn owned_subject(&self, user_id: &str, id: &str) -> Result<Subject> {
        let subject = self
            .get_subject(id)?
            .ok_or_else(|| StudyError::SubjectNotFound { id: id.to_string() })?;
        if subject.user_id != user_id {
            return Err(StudyError::Unauthorized { id: id.to_string() });
        }
        Ok(subject)
    }

    /// Updates the name and/or exam date of a subject owned by `user_id`.
    /// Fields left as `None` keep their stored value.
    pub fn update_subject(
        &mut self,
        user_id: &str,
        id: &str,
        name: Option<&str>,
        exam_date: Option<Date>,
    ) -> Result<Subject> {
        let current = self.owned_subject(user_id, id)?;

        let name = match name {
            Some(name) => validate_name(name)?.to_string(),
            None => current.name,
        };
        let exam_date = exam_date.unwrap_or(current.exam_date);

        self.connection
            .execute(UPDATE_SUBJECT_SQL, params![&name, exam_date.to_string(), id])
            .db_context("Failed to update subject")?;

        Ok(Subject {
            name,
            exam_date,
            ..current
        })
    }

    /// Deletes a subject owned by `user_id` and returns it.
    pub fn delete_subject(&mut self, user_id: &str, id: &str) -> Result<Subject> {
        let subject = self.owned_subject(user_id, id)?;
        self.connection
            .execute(DELETE_SUBJECT_SQL, params![id])
            .db_context("Failed to delete subject")?;
        Ok(subject)
    }
}
