use crate::utils::error::{GdapError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(GdapError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(GdapError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GdapError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Every entry of a configured exclusion list must carry some text, an empty
/// keyword would match (and drop) every dependency.
pub fn validate_non_empty_entries(field_name: &str, values: &[String]) -> Result<()> {
    for value in values {
        validate_non_empty_string(field_name, value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("input", "app/build.gradle").is_ok());
        assert!(validate_path("input", "").is_err());
        assert!(validate_path("input", "app/\0build.gradle").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("library_name", "GodotPlayGamesServices").is_ok());
        assert!(validate_non_empty_string("library_name", "   ").is_err());
    }

    #[test]
    fn test_validate_non_empty_entries() {
        let ok = vec!["firebase".to_string(), "leakcanary".to_string()];
        assert!(validate_non_empty_entries("filters.exclude_keywords", &ok).is_ok());

        let bad = vec!["firebase".to_string(), String::new()];
        assert!(validate_non_empty_entries("filters.exclude_keywords", &bad).is_err());
    }
}
