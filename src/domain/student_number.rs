use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

/// Institutional student-number format: two letters for the study program
/// followed by an 8-digit intake/serial code, e.g. "IF20210042".
static STUDENT_NUMBER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z]{2}\d{8}$").expect("student number regex is valid")
});

pub fn validate_student_number(number: &str) -> Result<(), ValidationError> {
    if STUDENT_NUMBER_RE.is_match(number) {
        return Ok(());
    }

    let mut error = ValidationError::new("student_number_format");
    error.message = Some("Must be two uppercase letters followed by 8 digits".into());
    Err(error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_canonical_format() {
        assert!(validate_student_number("IF20210042").is_ok());
        assert!(validate_student_number("SI20190001").is_ok());
    }

    #[test]
    fn rejects_wrong_shapes() {
        assert!(validate_student_number("if20210042").is_err());
        assert!(validate_student_number("IF2021").is_err());
        assert!(validate_student_number("IF2021000420").is_err());
        assert!(validate_student_number("20210042IF").is_err());
        assert!(validate_student_number("").is_err());
    }
}
