//! Course home metadata

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::Result;

/// One tab of the course home navigation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseTab {
    pub slug: String,
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
struct TabWire {
    tab_id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    url: String,
}

#[derive(Debug, Clone, Deserialize)]
struct CourseHomeMetadataWire {
    #[serde(default)]
    title: String,
    #[serde(default)]
    number: Option<String>,
    #[serde(default)]
    org: Option<String>,
    #[serde(default)]
    is_self_paced: bool,
    #[serde(default)]
    is_enrolled: bool,
    #[serde(default)]
    tabs: Vec<TabWire>,
}

/// Course-level metadata driving the course home chrome
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseHomeMetadata {
    pub title: String,
    pub number: Option<String>,
    pub org: Option<String>,
    pub is_self_paced: bool,
    pub is_enrolled: bool,
    pub tabs: Vec<CourseTab>,
}

impl CourseHomeMetadata {
    /// Build from the raw metadata response.
    ///
    /// Upstream reuses the `courseware` slug for both courseware and the
    /// outline tab; it is rewritten to `outline` so the two stay
    /// distinguishable client-side.
    pub fn from_response(data: JsonValue) -> Result<Self> {
        let wire: CourseHomeMetadataWire = serde_json::from_value(data)?;

        let tabs = wire
            .tabs
            .into_iter()
            .map(|tab| CourseTab {
                slug: if tab.tab_id == "courseware" {
                    "outline".to_string()
                } else {
                    tab.tab_id
                },
                title: tab.title,
                url: tab.url,
            })
            .collect();

        Ok(Self {
            title: wire.title,
            number: wire.number,
            org: wire.org,
            is_self_paced: wire.is_self_paced,
            is_enrolled: wire.is_enrolled,
            tabs,
        })
    }
}
