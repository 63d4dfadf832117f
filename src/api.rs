use std::sync::Arc;

use reqwest::{Method, RequestBuilder, Response, Url};
use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::RwLock;

use crate::config::Config;
use crate::error::{classify, ClientError, Result};
use crate::version;

/// The one configured HTTP client every resource service goes through.
///
/// Clones share the underlying connection pool and the bearer token, so a
/// token set after sign-in is seen by every service built from this client.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    token: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ClientError::Validation(format!("Invalid API URL {base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::Validation(format!(
                "Invalid API URL {base_url}: not a base URL"
            )));
        }

        let http = reqwest::Client::builder()
            .user_agent(version::user_agent())
            .build()?;

        Ok(Self {
            http,
            base_url,
            token: Arc::default(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.api_url)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Base URL with `segments` appended, each one percent-encoded.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    pub fn avatar_url(&self, avatar: &str) -> Url {
        self.endpoint(&["avatar", avatar])
    }

    pub fn exercise_thumb_url(&self, thumb: &str) -> Url {
        self.endpoint(&["exercise", "thumb", thumb])
    }

    pub fn exercise_demo_url(&self, demo: &str) -> Url {
        self.endpoint(&["exercise", "demo", demo])
    }

    pub async fn set_token(&self, token: Option<String>) {
        *self.token.write().await = token;
    }

    pub async fn token(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    pub(crate) fn request(&self, method: Method, segments: &[&str]) -> RequestBuilder {
        self.http.request(method, self.endpoint(segments))
    }

    /// Sends a request and runs the failure classification on anything that
    /// is not a 2xx.
    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let request = match self.token().await {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await.map_err(|e| {
            tracing::warn!("Request failed without a response: {}", e);
            ClientError::Transport(e)
        })?;

        let status = response.status();
        let url = response.url().clone();
        tracing::debug!("{} {}", status, url);

        let Some(status_error) = response.error_for_status_ref().err() else {
            return Ok(response);
        };

        let error = match response.bytes().await {
            Ok(body) => classify(status, &body, status_error),
            Err(e) => {
                tracing::debug!("Could not read error body from {}: {}", url, e);
                ClientError::Transport(status_error)
            }
        };
        tracing::warn!("{} {} rejected: {}", status, url, error);
        Err(error)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        let response = self.send(self.request(Method::GET, segments)).await?;
        Ok(response.json().await?)
    }

    pub(crate) async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        segments: &[&str],
        body: &B,
    ) -> Result<Response> {
        self.send(self.request(method, segments).json(body)).await
    }
}
