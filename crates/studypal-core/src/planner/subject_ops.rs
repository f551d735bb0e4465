//! Subject operations for the StudyPlanner.
//!
//! All operations act on behalf of the signed-in user and fail with
//! `StudyError::Unauthenticated` when nobody is signed in.

use log::{debug, info};

use super::StudyPlanner;
use crate::{
    error::Result,
    models::Subject,
    params::{CreateSubject, SubjectId, UpdateSubject},
};

impl StudyPlanner {
    /// Adds a subject owned by the current user.
    pub async fn add_subject(&self, params: &CreateSubject) -> Result<Subject> {
        let CreateSubject { name, exam_date } = params.clone();
        debug!("Adding subject {name} with exam date {exam_date}");

        let subject = self
            .with_db(move |db| {
                let user_id = db.require_user_id()?;
                db.create_subject(&user_id, &name, exam_date)
            })
            .await?;

        info!("Saved subject {}", subject.id);
        Ok(subject)
    }

    /// Updates a subject owned by the current user.
    pub async fn update_subject(&self, params: &UpdateSubject) -> Result<Subject> {
        let UpdateSubject {
            id,
            name,
            exam_date,
        } = params.clone();

        self.with_db(move |db| {
            let user_id = db.require_user_id()?;
            db.update_subject(&user_id, &id, name.as_deref(), exam_date)
        })
        .await
    }

    /// Deletes a subject owned by the current user and returns it.
    pub async fn delete_subject(&self, params: &SubjectId) -> Result<Subject> {
        let id = params.id.clone();

        let subject = self
            .with_db(move |db| {
                let user_id = db.require_user_id()?;
                db.delete_subject(&user_id, &id)
            })
            .await?;

        info!("Deleted subject {}", subject.id);
        Ok(subject)
    }

    /// Lists the current user's subjects, earliest exam first.
    pub async fn list_subjects(&self) -> Result<Vec<Subject>> {
        let subjects = self
            .with_db(|db| {
                let user_id = db.require_user_id()?;
                db.list_subjects(&user_id)
            })
            .await?;

        debug!("Loaded {} subjects", subjects.len());
        Ok(subjects)
    }
}
