//! Normalized conference cycles and their deadlines.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeadlineKind {
    #[serde(rename = "Abstract Registration")]
    AbstractRegistration,
    #[serde(rename = "Paper Submission")]
    PaperSubmission,
}

impl DeadlineKind {
    pub fn label(self) -> &'static str {
        match self {
            DeadlineKind::AbstractRegistration => "Abstract Registration",
            DeadlineKind::PaperSubmission => "Paper Submission",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    #[serde(rename = "type")]
    pub kind: DeadlineKind,
    /// Wall-clock deadline in the cycle's own timezone.
    pub deadline: NaiveDateTime,
    /// Wall-clock deadline in the reference timezone (UTC+9).
    #[serde(rename = "deadlineKST")]
    pub deadline_reference: NaiveDateTime,
    pub comment: String,
    /// Set by the upcoming selector; `None` before selection.
    #[serde(default)]
    pub days_left: Option<i64>,
}

/// One conference cycle with at least one parsed deadline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conference {
    pub name: String,
    pub full_name: String,
    pub category: String,
    pub ccf_rank: String,
    pub year: String,
    pub place: String,
    pub date: String,
    pub timezone: String,
    pub link: String,
    pub timelines: Vec<TimelineEvent>,
    #[serde(default)]
    pub min_days_left: Option<i64>,
    pub source: String,
}
