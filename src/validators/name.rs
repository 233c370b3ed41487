use super::ValidationError;

pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::NameEmpty);
    }

    if trimmed.len() > 200 {
        return Err(ValidationError::NameTooLong);
    }

    Ok(())
}

/// Optional free-form details attached to a project.
pub fn validate_details(details: &str) -> Result<(), ValidationError> {
    if details.len() > 2000 {
        return Err(ValidationError::DetailsTooLong);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(validate_name("Alpha").is_ok());
        assert!(validate_name("Q3 Launch Plan").is_ok());
        assert!(validate_name("プロジェクト").is_ok());
    }

    #[test]
    fn test_name_empty() {
        assert_eq!(validate_name("").unwrap_err(), ValidationError::NameEmpty);
        assert_eq!(validate_name("   ").unwrap_err(), ValidationError::NameEmpty);
    }

    #[test]
    fn test_name_too_long() {
        let long_name = "a".repeat(201);
        assert_eq!(
            validate_name(&long_name).unwrap_err(),
            ValidationError::NameTooLong
        );
    }

    #[test]
    fn test_details_bounds() {
        assert!(validate_details("").is_ok());
        assert!(validate_details(&"d".repeat(2000)).is_ok());
        assert_eq!(
            validate_details(&"d".repeat(2001)).unwrap_err(),
            ValidationError::DetailsTooLong
        );
    }
}
