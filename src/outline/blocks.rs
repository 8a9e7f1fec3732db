//! Outline block models
//!
//! Wire-level raw blocks as returned by the course outline API, and the
//! normalized entity models the view layer consumes. Wire field names are
//! lower snake case; entities serialize camelCase toward the view layer.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Raw course block as returned by the outline API
///
/// Fields vary by block type; everything beyond `id` and `type` is optional
/// on the wire. Unknown type tags are kept verbatim in `block_type` so
/// diagnostics can name them.
#[derive(Debug, Clone, Deserialize)]
pub struct RawBlock {
    pub id: String,
    #[serde(rename = "type")]
    pub block_type: String,
    #[serde(default)]
    pub display_name: String,
    /// Ordered child block ids; absent means no children
    #[serde(default)]
    pub children: Option<Vec<String>>,
    #[serde(default)]
    pub complete: Option<bool>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub due: Option<String>,
    #[serde(default)]
    pub effort_activities: Option<u32>,
    #[serde(default)]
    pub effort_time: Option<u32>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub legacy_web_url: Option<String>,
    #[serde(default)]
    pub resume_block: Option<bool>,
}

/// Closed classification of the wire-level `type` tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Course,
    Section,
    Sequence,
    Unknown,
}

impl BlockKind {
    pub fn classify(tag: &str) -> Self {
        match tag {
            "course" => BlockKind::Course,
            "chapter" => BlockKind::Section,
            "sequential" => BlockKind::Sequence,
            _ => BlockKind::Unknown,
        }
    }
}

/// Course entity, root of the outline tree
///
/// Identified by the externally supplied course id, not the block's own id.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseModel {
    pub id: String,
    pub title: String,
    pub effort_time: Option<u32>,
    pub effort_activities: Option<u32>,
    /// Ordered child section ids, verbatim from the block's children list
    pub section_ids: Vec<String>,
}

/// Section (chapter) entity
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionModel {
    pub id: String,
    pub complete: bool,
    pub title: String,
    pub effort_time: Option<u32>,
    pub effort_activities: Option<u32>,
    pub resume_block: bool,
    /// Ordered child sequence ids, verbatim from the block's children list
    pub sequence_ids: Vec<String>,
    /// Owning course id, set once all entities exist
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_id: Option<String>,
}

/// Sequence (sequential) entity
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceModel {
    pub id: String,
    pub complete: bool,
    pub description: Option<String>,
    pub due: Option<String>,
    pub effort_time: Option<u32>,
    pub effort_activities: Option<u32>,
    pub icon: Option<String>,
    pub title: String,
    pub legacy_web_url: Option<String>,
    /// Whether the outline should render this sequence as a link; true iff
    /// the legacy URL is present and non-empty
    pub show_link: bool,
    /// Owning section id, set once all entities exist
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_id: Option<String>,
}

/// Normalized outline collections, each keyed by entity id
///
/// Rebuilt wholesale on every normalization call; back-references are
/// identifier-valued and non-owning.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OutlineBlocks {
    pub courses: HashMap<String, CourseModel>,
    pub sections: HashMap<String, SectionModel>,
    pub sequences: HashMap<String, SequenceModel>,
}
