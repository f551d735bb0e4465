//! User session operations for the StudyPlanner.

use log::{debug, info};

use super::StudyPlanner;
use crate::{error::Result, models::User, params::Credentials};

impl StudyPlanner {
    /// Registers a new account and signs it in.
    pub async fn sign_up(&self, params: &Credentials) -> Result<User> {
        let Credentials { email, password } = params.clone();
        info!("Signing up user: {email}");

        let user = self
            .with_db(move |db| {
                let user = db.create_user(&email, &password)?;
                db.start_session(&user.id)?;
                Ok(user)
            })
            .await?;

        info!("Sign up successful for user: {}", user.id);
        Ok(user)
    }

    /// Signs in with an email and password.
    pub async fn sign_in(&self, params: &Credentials) -> Result<User> {
        let Credentials { email, password } = params.clone();
        info!("Signing in user: {email}");

        let user = self
            .with_db(move |db| {
                let user = db.verify_credentials(&email, &password)?;
                db.start_session(&user.id)?;
                Ok(user)
            })
            .await?;

        info!("Sign in successful for user: {}", user.id);
        Ok(user)
    }

    /// Signs out the current user, if any.
    pub async fn sign_out(&self) -> Result<()> {
        self.with_db(|db| db.end_session()).await?;
        info!("Signed out");
        Ok(())
    }

    /// The currently signed-in user.
    pub async fn current_user(&self) -> Result<Option<User>> {
        let user = self.with_db(|db| db.session_user()).await?;
        debug!(
            "Current user: {}",
            user.as_ref().map_or("<none>", |u| u.id.as_str())
        );
        Ok(user)
    }
}
