use reqwest::Method;

use crate::api::ApiClient;
use crate::error::Result;
use crate::models::{CreateHistory, HistoryByDay};

#[derive(Clone)]
pub struct HistoryService {
    api: ApiClient,
}

impl HistoryService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Mark an exercise as done now.
    pub async fn create(&self, exercise_id: &str) -> Result<()> {
        self.api
            .send_json(Method::POST, &["history"], &CreateHistory { exercise_id })
            .await?;
        Ok(())
    }

    /// History grouped by day, most recent first as the server orders it.
    pub async fn by_day(&self) -> Result<Vec<HistoryByDay>> {
        self.api.get_json(&["history"]).await
    }
}
