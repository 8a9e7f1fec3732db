//! Proctoring onboarding status

use serde::{Deserialize, Serialize};

/// Proctoring onboarding status for the current user.
///
/// A 404 from the proctoring API means the course has no proctored exams;
/// the client maps that to the default (all-empty) value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ProctoringInfo {
    pub onboarding_status: Option<String>,
    pub onboarding_link: Option<String>,
    pub expiration_date: Option<String>,
    pub onboarding_release_date: Option<String>,
}
