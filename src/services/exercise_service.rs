use crate::api::ApiClient;
use crate::error::Result;
use crate::models::Exercise;

#[derive(Clone)]
pub struct ExerciseService {
    api: ApiClient,
}

impl ExerciseService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Muscle group names, e.g. "costas", "bíceps".
    pub async fn groups(&self) -> Result<Vec<String>> {
        self.api.get_json(&["groups"]).await
    }

    pub async fn by_group(&self, group: &str) -> Result<Vec<Exercise>> {
        self.api.get_json(&["exercises", "bygroup", group]).await
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Exercise> {
        self.api.get_json(&["exercises", id]).await
    }
}
