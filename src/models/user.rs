use std::path::Path;

use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};

use super::id::deserialize_id;
use crate::error::{ClientError, Result};
use crate::messages;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SessionResponse {
    pub user: User,
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.email.trim().is_empty() {
            return Err(ClientError::Validation(messages::EMAIL_REQUIRED.to_string()));
        }
        if self.password.is_empty() {
            return Err(ClientError::Validation(
                messages::PASSWORD_REQUIRED.to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl CreateUser {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ClientError::Validation(messages::NAME_REQUIRED.to_string()));
        }
        Credentials::new(self.email.as_str(), self.password.as_str()).validate()?;
        if self.password.chars().count() < messages::MIN_PASSWORD_LEN {
            return Err(ClientError::Validation(
                messages::PASSWORD_TOO_SHORT.to_string(),
            ));
        }
        Ok(())
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.email.as_str(), self.password.as_str())
    }
}

/// Body of `PUT /users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateUser {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// What the profile screen collects. Password fields left empty mean the
/// password stays as it is.
#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    pub name: String,
    pub old_password: String,
    pub password: String,
    pub confirm_password: String,
}

impl ProfileForm {
    pub fn validate(&self) -> Result<UpdateUser> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ClientError::Validation(messages::NAME_REQUIRED.to_string()));
        }

        if self.password.is_empty() {
            return Ok(UpdateUser {
                name: name.to_string(),
                old_password: None,
                password: None,
            });
        }

        if self.password.chars().count() < messages::MIN_PASSWORD_LEN {
            return Err(ClientError::Validation(
                messages::PASSWORD_TOO_SHORT.to_string(),
            ));
        }
        if self.password != self.confirm_password {
            return Err(ClientError::Validation(
                messages::PASSWORD_MISMATCH.to_string(),
            ));
        }
        if self.old_password.is_empty() {
            return Err(ClientError::Validation(
                messages::OLD_PASSWORD_REQUIRED.to_string(),
            ));
        }

        Ok(UpdateUser {
            name: name.to_string(),
            old_password: Some(self.old_password.clone()),
            password: Some(self.password.clone()),
        })
    }
}

/// An image file ready to be sent as the `avatar` multipart field.
#[derive(Debug, Clone)]
pub struct AvatarUpload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl AvatarUpload {
    /// Reads `path` and names the upload after its owner, e.g. `john doe.png`.
    /// Files over `max_bytes` are refused before anything is read.
    pub async fn from_path(path: &Path, owner_name: &str, max_bytes: u64) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .filter(|ext| !ext.is_empty())
            .map(str::to_lowercase)
            .ok_or_else(|| {
                ClientError::Validation(messages::AVATAR_EXTENSION_REQUIRED.to_string())
            })?;

        let size = tokio::fs::metadata(path).await?.len();
        if size > max_bytes {
            tracing::info!("Avatar {} is {} bytes, limit {}", path.display(), size, max_bytes);
            return Err(ClientError::Validation(messages::avatar_too_large(
                max_bytes,
            )));
        }

        let bytes = tokio::fs::read(path).await?;

        Ok(Self {
            file_name: format!("{}.{}", owner_name, extension).to_lowercase(),
            mime_type: format!("image/{}", extension),
            bytes,
        })
    }

    pub fn into_form(self) -> Result<Form> {
        let part = Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str(&self.mime_type)?;
        Ok(Form::new().part("avatar", part))
    }
}
