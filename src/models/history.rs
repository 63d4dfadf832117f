use serde::{Deserialize, Serialize};

use super::id::deserialize_id;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    pub group: String,
    pub hour: String,
    pub created_at: String,
}

/// One day of history as the server groups it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryByDay {
    pub title: String,
    pub data: Vec<HistoryRecord>,
}

#[derive(Debug, Serialize)]
pub struct CreateHistory<'a> {
    pub exercise_id: &'a str,
}
