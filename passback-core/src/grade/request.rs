//! Raw caller input for one grade submission

use serde::{Deserialize, Serialize};

/// Body of a grading request as callers send it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeRequest {
    /// The grade, as a JSON number or a numeric string
    pub grade: GradeValue,
    /// Optional feedback passed through to the score unaltered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Callers send the grade either as a JSON number or as a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GradeValue {
    Number(f64),
    Text(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_numeric_grade() {
        let request: GradeRequest = serde_json::from_str(r#"{"grade": 8}"#).unwrap();
        assert_eq!(request.grade, GradeValue::Number(8.0));
        assert!(request.comment.is_none());
    }

    #[test]
    fn deserializes_string_grade_with_comment() {
        let request: GradeRequest =
            serde_json::from_str(r#"{"grade": "8", "comment": "well done"}"#).unwrap();
        assert_eq!(request.grade, GradeValue::Text("8".to_string()));
        assert_eq!(request.comment.as_deref(), Some("well done"));
    }
}
