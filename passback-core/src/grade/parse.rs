//! Grade parsing
//!
//! The original passback tool coerced the caller's grade with `Number(...)`,
//! silently submitting `NaN` for junk input. Parsing here is explicit:
//! anything that is not a finite number is rejected up front.

use crate::error::GradeError;

use super::request::GradeValue;

/// Interpret the caller's grade as a finite number.
pub fn parse_grade(value: &GradeValue) -> Result<f64, GradeError> {
    match value {
        GradeValue::Number(n) => Ok(*n),
        GradeValue::Text(text) => {
            let parsed: f64 = text
                .trim()
                .parse()
                .map_err(|_| GradeError::InvalidGrade(text.clone()))?;
            if !parsed.is_finite() {
                return Err(GradeError::InvalidGrade(text.clone()));
            }
            Ok(parsed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_json_numbers() {
        assert_eq!(parse_grade(&GradeValue::Number(8.5)).unwrap(), 8.5);
        assert_eq!(parse_grade(&GradeValue::Number(0.0)).unwrap(), 0.0);
    }

    #[test]
    fn accepts_numeric_strings() {
        assert_eq!(parse_grade(&GradeValue::Text("8".to_string())).unwrap(), 8.0);
        assert_eq!(
            parse_grade(&GradeValue::Text("  73.25 ".to_string())).unwrap(),
            73.25
        );
    }

    #[test]
    fn rejects_non_numeric_strings() {
        let err = parse_grade(&GradeValue::Text("excellent".to_string())).unwrap_err();
        assert_eq!(err.to_string(), "grade is not a number: excellent");
    }

    #[test]
    fn rejects_non_finite_input() {
        assert!(parse_grade(&GradeValue::Text("inf".to_string())).is_err());
        assert!(parse_grade(&GradeValue::Text("NaN".to_string())).is_err());
    }

    #[test]
    fn rejects_empty_string() {
        assert!(parse_grade(&GradeValue::Text("".to_string())).is_err());
    }
}
