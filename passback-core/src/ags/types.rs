//! AGS wire types
//!
//! Field names follow the AGS JSON format: camelCase members, PascalCase
//! progress states.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Score payload submitted against a line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    /// Learner the score belongs to
    pub user_id: String,
    /// Points awarded
    pub score_given: f64,
    /// Maximum the score is normalized against
    pub score_maximum: f64,
    /// Activity progress state
    pub activity_progress: ActivityProgress,
    /// Grading progress state
    pub grading_progress: GradingProgress,
    /// Optional feedback shown to the learner
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Submission time, ISO-8601 on the wire
    pub timestamp: DateTime<Utc>,
}

/// Activity progress states defined by AGS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityProgress {
    Initialized,
    Started,
    InProgress,
    Submitted,
    Completed,
}

/// Grading progress states defined by AGS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GradingProgress {
    FullyGraded,
    Pending,
    PendingManual,
    Failed,
    NotReady,
}

/// A gradebook column in the LMS.
///
/// `id` is absent on a creation request and server-assigned on the response;
/// listed line items always carry one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Platform-assigned line item URL/identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Column label shown in the gradebook
    pub label: String,
    /// Tool-assigned tag for finding the column again
    pub tag: String,
    /// Resource link the column is attached to
    pub resource_link_id: String,
    /// Maximum points for the column
    pub score_maximum: f64,
}

/// Query options for listing line items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemQuery {
    /// Scope the listing to the current launch's resource link
    pub resource_link_id: bool,
}
