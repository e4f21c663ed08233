// file: src/utils/validation.rs
// description: input validation helpers for CLI arguments and sheet data
// reference: input validation patterns

use crate::error::{Result, SheetError};
use crate::models::Category;
use std::path::Path;

const IMPORT_EXTENSIONS: &[&str] = &["xlsx", "xls", "csv", "tsv", "txt"];

pub struct Validator;

impl Validator {
    pub fn validate_category(raw: &str) -> Result<Category> {
        raw.parse::<Category>().map_err(SheetError::Validation)
    }

    pub fn validate_import_file(path: &Path) -> Result<()> {
        if !path.is_file() {
            return Err(SheetError::Validation(format!(
                "Not a readable file: {}",
                path.display()
            )));
        }

        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if IMPORT_EXTENSIONS.contains(&ext.to_lowercase().as_str()) => Ok(()),
            _ => Err(SheetError::Validation(format!(
                "Unsupported import format (expected one of {}): {}",
                IMPORT_EXTENSIONS.join(", "),
                path.display()
            ))),
        }
    }

    pub fn validate_sheet_title(title: &str) -> Result<()> {
        if title.trim().is_empty() {
            return Err(SheetError::Validation(
                "Sheet title must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_weekly_frequency(frequency: u8) -> Result<()> {
        if !(1..=7).contains(&frequency) {
            return Err(SheetError::Validation(format!(
                "Weekly frequency must be between 1 and 7, got {frequency}"
            )));
        }
        Ok(())
    }

    pub fn validate_url(url: &str) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(SheetError::Validation(format!(
                "Invalid URL format: {url}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_validate_category() {
        assert_eq!(Validator::validate_category("b").unwrap(), Category::B);
        assert!(Validator::validate_category("x").is_err());
    }

    #[test]
    fn test_validate_import_file() {
        let temp = TempDir::new().unwrap();
        let good = temp.path().join("treino.xlsx");
        fs::write(&good, "x").unwrap();
        let bad = temp.path().join("treino.pdf");
        fs::write(&bad, "x").unwrap();

        assert!(Validator::validate_import_file(&good).is_ok());
        assert!(Validator::validate_import_file(&bad).is_err());
        assert!(Validator::validate_import_file(&temp.path().join("absent.tsv")).is_err());
    }

    #[test]
    fn test_validate_sheet_title() {
        assert!(Validator::validate_sheet_title("Hipertrofia").is_ok());
        assert!(Validator::validate_sheet_title("   ").is_err());
    }

    #[test]
    fn test_validate_weekly_frequency() {
        assert!(Validator::validate_weekly_frequency(3).is_ok());
        assert!(Validator::validate_weekly_frequency(0).is_err());
        assert!(Validator::validate_weekly_frequency(8).is_err());
    }

    #[test]
    fn test_validate_url() {
        assert!(Validator::validate_url("https://youtu.be/x").is_ok());
        assert!(Validator::validate_url("youtu.be/x").is_err());
    }
}
