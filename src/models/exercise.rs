use serde::{Deserialize, Serialize};

use super::id::deserialize_id;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    pub series: u32,
    pub repetitions: u32,
    pub group: String,
    pub demo: String,
    pub thumb: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Exercise {
    pub fn summary(&self) -> String {
        format!(
            "{} séries x {} repetições",
            self.series, self.repetitions
        )
    }
}

/// Groups are matched ignoring case, the server is not consistent about it.
pub fn find_group<'a>(groups: &'a [String], name: &str) -> Option<&'a str> {
    groups
        .iter()
        .find(|g| g.to_lowercase() == name.to_lowercase())
        .map(String::as_str)
}
