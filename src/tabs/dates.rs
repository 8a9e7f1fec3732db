//! Dates tab payload

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// A single entry on the dates timeline
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct CourseDateBlock {
    pub date: Option<String>,
    pub date_type: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub learner_has_access: bool,
    pub link: Option<String>,
    pub link_text: Option<String>,
    pub title: Option<String>,
    pub first_component_block_id: Option<String>,
}

/// Dates tab payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct DatesTabData {
    #[serde(default)]
    pub course_date_blocks: Vec<CourseDateBlock>,
    #[serde(default)]
    pub dates_banner_info: JsonValue,
    #[serde(default)]
    pub has_ended: bool,
    #[serde(default)]
    pub learner_is_full_access: bool,
    pub user_timezone: Option<String>,
}
