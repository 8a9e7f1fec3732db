//! Progress tab payload

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::HashMap;

use super::VerifiedMode;

/// Counts of complete, incomplete, and gated units
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct CompletionSummary {
    #[serde(default)]
    pub complete_count: u32,
    #[serde(default)]
    pub incomplete_count: u32,
    #[serde(default)]
    pub locked_count: u32,
}

/// The learner's current course grade
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct CourseGrade {
    pub letter_grade: Option<String>,
    #[serde(default)]
    pub percent: f64,
    #[serde(default)]
    pub is_passing: bool,
}

/// Graded subsection scores within one section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct SectionScore {
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub subsections: Vec<SubsectionScore>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct SubsectionScore {
    pub assignment_type: Option<String>,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub has_graded_assignment: bool,
    #[serde(default)]
    pub num_points_earned: f64,
    #[serde(default)]
    pub num_points_possible: f64,
    #[serde(default)]
    pub percent_graded: f64,
    pub show_correctness: Option<String>,
    #[serde(default)]
    pub show_grades: bool,
    pub url: Option<String>,
}

/// One assignment type's weight in the grading policy
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct AssignmentPolicy {
    #[serde(default)]
    pub num_droppable: u32,
    #[serde(default)]
    pub num_total: u32,
    pub short_label: Option<String>,
    #[serde(rename = "type")]
    pub assignment_type: String,
    #[serde(default)]
    pub weight: f64,
}

/// Grading policy for the course
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct GradingPolicy {
    #[serde(default)]
    pub assignment_policies: Vec<AssignmentPolicy>,
    /// Cutoffs keyed by grade label. Keys are display values ("Pass", "A")
    /// and must pass through with their casing intact.
    #[serde(default)]
    pub grade_range: HashMap<String, f64>,
}

/// ID-verification state for certificate eligibility
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct VerificationData {
    pub link: Option<String>,
    #[serde(default)]
    pub status: String,
    pub status_date: Option<String>,
}

/// Progress tab payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ProgressTabData {
    pub end: Option<String>,
    #[serde(default)]
    pub certificate_data: JsonValue,
    #[serde(default)]
    pub completion_summary: CompletionSummary,
    #[serde(default)]
    pub course_grade: CourseGrade,
    #[serde(default)]
    pub section_scores: Vec<SectionScore>,
    pub enrollment_mode: Option<String>,
    #[serde(default)]
    pub grading_policy: GradingPolicy,
    #[serde(default)]
    pub has_scheduled_content: bool,
    pub studio_url: Option<String>,
    #[serde(default)]
    pub user_has_passing_grade: bool,
    #[serde(default)]
    pub verification_data: VerificationData,
    pub verified_mode: Option<VerifiedMode>,
}
