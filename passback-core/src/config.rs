//! Grade submission configuration

/// Defaults applied when building scores and lazily creating line items.
#[derive(Debug, Clone, PartialEq)]
pub struct GradeConfig {
    /// Every submitted score is normalized against this maximum, regardless
    /// of the maximum configured on the platform's line item. Kept from the
    /// original passback convention; see the open-question note in DESIGN.md.
    pub score_maximum: f64,
    /// Label for lazily created line items
    pub label: String,
    /// Tag for lazily created line items
    pub tag: String,
}

impl Default for GradeConfig {
    fn default() -> Self {
        Self {
            score_maximum: 10_000.0,
            label: "Grade".to_string(),
            tag: "grade".to_string(),
        }
    }
}

impl GradeConfig {
    /// Create a config with a custom score maximum
    pub fn with_score_maximum(score_maximum: f64) -> Self {
        Self {
            score_maximum,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_keeps_the_passback_constant() {
        let config = GradeConfig::default();
        assert_eq!(config.score_maximum, 10_000.0);
        assert_eq!(config.label, "Grade");
        assert_eq!(config.tag, "grade");
    }

    #[test]
    fn with_score_maximum_overrides_only_the_maximum() {
        let config = GradeConfig::with_score_maximum(100.0);
        assert_eq!(config.score_maximum, 100.0);
        assert_eq!(config.tag, "grade");
    }
}
