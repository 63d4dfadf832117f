use reqwest::Method;

use crate::api::ApiClient;
use crate::error::Result;
use crate::models::{Credentials, SessionResponse};

#[derive(Clone)]
pub struct SessionService {
    api: ApiClient,
}

impl SessionService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Exchange credentials for the user and a bearer token.
    pub async fn create(&self, credentials: &Credentials) -> Result<SessionResponse> {
        let response = self
            .api
            .send_json(Method::POST, &["sessions"], credentials)
            .await?;
        Ok(response.json().await?)
    }
}
