use std::path::Path;

use crate::api::ApiClient;
use crate::error::{ClientError, Result};
use crate::models::{AvatarUpload, CreateUser, Credentials, ProfileForm, User};
use crate::services::{SessionService, UserService};

/// In-memory holder of the signed-in user.
///
/// Mutations go through `&mut self`, so concurrent updates are serialized by
/// whoever owns the store; the last write wins.
pub struct SessionStore {
    api: ApiClient,
    users: UserService,
    sessions: SessionService,
    user: Option<User>,
    max_avatar_bytes: u64,
}

impl SessionStore {
    pub fn new(api: ApiClient, max_avatar_bytes: u64) -> Self {
        Self {
            users: UserService::new(api.clone()),
            sessions: SessionService::new(api.clone()),
            api,
            user: None,
            max_avatar_bytes,
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Signs in and keeps the returned identity. On failure whatever was
    /// stored before stays untouched.
    pub async fn sign_in(&mut self, email: &str, password: &str) -> Result<&User> {
        let credentials = Credentials::new(email.trim(), password);
        credentials.validate()?;

        let session = self.sessions.create(&credentials).await?;
        tracing::info!("Signed in as {}", session.user.email);

        self.api.set_token(session.token).await;
        Ok(self.user.insert(session.user))
    }

    pub async fn sign_up(&mut self, new_user: &CreateUser) -> Result<&User> {
        new_user.validate()?;
        self.users.create(new_user).await?;
        tracing::info!("Created account for {}", new_user.email);

        let credentials = new_user.credentials();
        self.sign_in(&credentials.email, &credentials.password).await
    }

    pub async fn sign_out(&mut self) {
        if let Some(user) = self.user.take() {
            tracing::info!("Signed out {}", user.email);
        }
        self.api.set_token(None).await;
    }

    pub fn update_user_profile(&mut self, user: User) {
        self.user = Some(user);
    }

    /// Sends the profile form and, once the server accepts it, renames the
    /// stored user.
    pub async fn update_profile(&mut self, form: &ProfileForm) -> Result<&User> {
        let mut user = self.user.clone().ok_or(ClientError::Unauthenticated)?;
        let update = form.validate()?;

        self.users.update(&update).await?;

        user.name = update.name;
        self.update_user_profile(user);
        self.user.as_ref().ok_or(ClientError::Unauthenticated)
    }

    pub async fn update_avatar(&mut self, path: &Path) -> Result<&User> {
        let current = self.user.as_ref().ok_or(ClientError::Unauthenticated)?;
        let upload = AvatarUpload::from_path(path, &current.name, self.max_avatar_bytes).await?;

        let updated = self.users.update_avatar(upload).await?;
        tracing::info!("Avatar for {} is now {:?}", updated.email, updated.avatar);

        Ok(self.user.insert(updated))
    }
}
