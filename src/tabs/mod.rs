//! Typed payloads for the course home tabs

mod dates;
mod metadata;
mod proctoring;
mod progress;

pub use dates::{CourseDateBlock, DatesTabData};
pub use metadata::{CourseHomeMetadata, CourseTab};
pub use proctoring::ProctoringInfo;
pub use progress::{
    AssignmentPolicy, CompletionSummary, CourseGrade, GradingPolicy, ProgressTabData,
    SectionScore, SubsectionScore, VerificationData,
};

use serde::{Deserialize, Serialize};

/// Verified-track upgrade details, shared by the outline and progress tabs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct VerifiedMode {
    pub access_expiration_date: Option<String>,
    pub currency: Option<String>,
    pub currency_symbol: Option<String>,
    pub price: Option<f64>,
    pub sku: Option<String>,
    pub upgrade_url: Option<String>,
}
