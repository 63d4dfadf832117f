use reqwest::Method;

use crate::api::ApiClient;
use crate::error::Result;
use crate::models::{AvatarUpload, CreateUser, UpdateUser, User};

#[derive(Clone)]
pub struct UserService {
    api: ApiClient,
}

impl UserService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<User>> {
        self.api.get_json(&["users"]).await
    }

    pub async fn find_by_id(&self, id: &str) -> Result<User> {
        self.api.get_json(&["users", id]).await
    }

    /// Registers a new account. The response body is not used; sign in
    /// afterwards to get the user.
    pub async fn create(&self, user: &CreateUser) -> Result<()> {
        self.api.send_json(Method::POST, &["users"], user).await?;
        Ok(())
    }

    /// Updates the signed-in user's name and, optionally, password.
    pub async fn update(&self, update: &UpdateUser) -> Result<()> {
        self.api.send_json(Method::PUT, &["users"], update).await?;
        Ok(())
    }

    /// Uploads a new avatar and returns the user as the server now sees it.
    pub async fn update_avatar(&self, upload: AvatarUpload) -> Result<User> {
        tracing::debug!("Uploading avatar {} ({} bytes)", upload.file_name, upload.bytes.len());
        let form = upload.into_form()?;
        let request = self
            .api
            .request(Method::PATCH, &["users", "avatar"])
            .multipart(form);
        let response = self.api.send(request).await?;
        Ok(response.json().await?)
    }
}
