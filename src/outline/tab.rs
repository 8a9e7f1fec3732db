//! Outline tab payload
//!
//! The outline endpoint returns the normalizable block snapshot alongside a
//! bundle of page-level widgets (upgrade messaging, resume pointer, dates
//! widget, welcome message). Fragments with a stable upstream shape are
//! typed; regions the view layer treats as opaque ride as raw JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::blocks::OutlineBlocks;
use super::normalize::{normalize_value, DiagnosticSink};
use crate::error::Result;
use crate::tabs::VerifiedMode;

/// Audit-access expiration window
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct AccessExpiration {
    pub expiration_date: Option<String>,
    pub upgrade_deadline: Option<String>,
    #[serde(default)]
    pub masquerading_expired_course: bool,
}

/// Discount offer shown in upgrade messaging
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Offer {
    pub code: Option<String>,
    pub expiration_date: Option<String>,
    pub original_price: Option<String>,
    pub discounted_price: Option<String>,
    pub percentage: Option<u32>,
    pub upgrade_url: Option<String>,
}

/// External tool linked from the course home sidebar
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct CourseTool {
    pub analytics_id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
}

/// Enrollment alert state for unenrolled visitors
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct EnrollAlert {
    #[serde(default)]
    pub can_enroll: bool,
    pub extra_text: Option<String>,
}

/// Resume-course pointer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ResumeCourse {
    #[serde(default)]
    pub has_visited_course: bool,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct CourseBlocksWire {
    blocks: JsonValue,
}

#[derive(Debug, Clone, Deserialize)]
struct OutlineTabWire {
    #[serde(default)]
    access_expiration: Option<AccessExpiration>,
    #[serde(default)]
    can_show_upgrade_sock: bool,
    #[serde(default)]
    course_blocks: Option<CourseBlocksWire>,
    #[serde(default)]
    course_goals: JsonValue,
    #[serde(default)]
    course_tools: Vec<CourseTool>,
    #[serde(default)]
    dates_banner_info: JsonValue,
    #[serde(default)]
    dates_widget: JsonValue,
    #[serde(default)]
    enroll_alert: Option<EnrollAlert>,
    #[serde(default)]
    handouts_html: Option<String>,
    #[serde(default)]
    has_ended: bool,
    #[serde(default)]
    offer: Option<Offer>,
    #[serde(default)]
    resume_course: Option<ResumeCourse>,
    #[serde(default)]
    verified_mode: Option<VerifiedMode>,
    #[serde(default)]
    welcome_message_html: Option<String>,
}

/// Assembled outline tab view model
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlineTabData {
    pub access_expiration: Option<AccessExpiration>,
    pub can_show_upgrade_sock: bool,
    pub course_blocks: OutlineBlocks,
    pub course_goals: JsonValue,
    pub course_tools: Vec<CourseTool>,
    pub dates_banner_info: JsonValue,
    pub dates_widget: JsonValue,
    pub enroll_alert: Option<EnrollAlert>,
    pub handouts_html: Option<String>,
    pub has_ended: bool,
    pub offer: Option<Offer>,
    pub resume_course: Option<ResumeCourse>,
    /// Server-clock offset derived from the response's Date header
    pub time_offset_millis: i64,
    pub verified_mode: Option<VerifiedMode>,
    pub welcome_message_html: Option<String>,
}

impl OutlineTabData {
    /// Build the view model from the raw outline response.
    ///
    /// A payload without `course_blocks` (e.g. for an unenrolled visitor)
    /// yields empty entity collections rather than an error.
    pub fn from_response(
        course_id: &str,
        data: JsonValue,
        time_offset_millis: i64,
        sink: &dyn DiagnosticSink,
    ) -> Result<Self> {
        let wire: OutlineTabWire = serde_json::from_value(data)?;

        let course_blocks = match wire.course_blocks {
            Some(course_blocks) => normalize_value(course_id, &course_blocks.blocks, sink)?,
            None => OutlineBlocks::default(),
        };

        Ok(Self {
            access_expiration: wire.access_expiration,
            can_show_upgrade_sock: wire.can_show_upgrade_sock,
            course_blocks,
            course_goals: wire.course_goals,
            course_tools: wire.course_tools,
            dates_banner_info: wire.dates_banner_info,
            dates_widget: wire.dates_widget,
            enroll_alert: wire.enroll_alert,
            handouts_html: wire.handouts_html,
            has_ended: wire.has_ended,
            offer: wire.offer,
            resume_course: wire.resume_course,
            time_offset_millis,
            verified_mode: wire.verified_mode,
            welcome_message_html: wire.welcome_message_html,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::TracingSink;
    use serde_json::json;

    #[test]
    fn builds_view_model_with_normalized_blocks() {
        let data = json!({
            "access_expiration": {
                "expiration_date": "2026-09-01T00:00:00Z",
            },
            "can_show_upgrade_sock": true,
            "course_blocks": {
                "blocks": {
                    "C": { "id": "C", "type": "course", "display_name": "Demo", "children": ["S1"] },
                    "S1": { "id": "S1", "type": "chapter", "display_name": "Week 1", "children": [] },
                },
            },
            "course_tools": [
                { "analytics_id": "edx.bookmarks", "title": "Bookmarks", "url": "/bookmarks" },
            ],
            "offer": {
                "percentage": 15,
                "upgrade_url": "https://ecommerce.example.com/upgrade",
            },
            "resume_course": { "has_visited_course": true, "url": "/resume" },
            "welcome_message_html": "<p>Welcome!</p>",
        });

        let tab =
            OutlineTabData::from_response("course-v1:edX+Demo+run", data, 250, &TracingSink)
                .unwrap();

        assert_eq!(tab.time_offset_millis, 250);
        assert!(tab.can_show_upgrade_sock);
        assert_eq!(tab.course_tools.len(), 1);
        assert_eq!(tab.offer.as_ref().unwrap().percentage, Some(15));
        assert!(tab.resume_course.as_ref().unwrap().has_visited_course);
        assert_eq!(
            tab.course_blocks.sections["S1"].course_id.as_deref(),
            Some("course-v1:edX+Demo+run")
        );
    }

    #[test]
    fn missing_course_blocks_yield_empty_collections() {
        let data = json!({ "has_ended": true });

        let tab = OutlineTabData::from_response("C", data, 0, &TracingSink).unwrap();

        assert!(tab.has_ended);
        assert!(tab.course_blocks.courses.is_empty());
        assert!(tab.course_blocks.sections.is_empty());
        assert!(tab.course_blocks.sequences.is_empty());
    }

    #[test]
    fn view_serialization_uses_camel_case() {
        let tab = OutlineTabData::from_response("C", json!({}), 0, &TracingSink).unwrap();
        let value = serde_json::to_value(&tab).unwrap();

        assert!(value.get("timeOffsetMillis").is_some());
        assert!(value.get("canShowUpgradeSock").is_some());
        assert!(value.get("courseBlocks").is_some());
    }
}
