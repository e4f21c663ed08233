// file: src/pipeline/importer.rs
// description: file-level import orchestration feeding the batch normalizer
// reference: https://docs.rs/calamine

use crate::error::{Result, SheetError};
use crate::ingest::{BatchNormalizer, patterns};
use crate::models::{Category, Exercise};
use calamine::{Data, Reader, open_workbook_auto};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

const TEXT_EXTENSIONS: &[&str] = &["csv", "tsv", "txt"];
const WORKBOOK_EXTENSIONS: &[&str] = &["xlsx", "xls"];

pub struct FileImporter {
    normalizer: BatchNormalizer,
}

impl FileImporter {
    pub fn new(normalizer: BatchNormalizer) -> Self {
        Self { normalizer }
    }

    /// Ingest one file. Workbooks are read worksheet by worksheet (a
    /// worksheet named like "Treino B" selects its own category); text
    /// files go through the free-text surface where "TREINO X" lines
    /// switch the category.
    pub fn import_file(
        &mut self,
        path: &Path,
        default_category: Category,
    ) -> Result<Vec<Exercise>> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        if WORKBOOK_EXTENSIONS.contains(&extension.as_str()) {
            self.import_workbook(path, default_category)
        } else if TEXT_EXTENSIONS.contains(&extension.as_str()) {
            self.import_text(path, default_category)
        } else {
            Err(SheetError::Validation(format!(
                "Unsupported file type: {}",
                path.display()
            )))
        }
    }

    /// Ingest an already-read pasted block (the stdin surface).
    pub fn import_paste(&mut self, text: &str, default_category: Category) -> Vec<Exercise> {
        self.normalizer.normalize_text(text, default_category)
    }

    fn import_text(&mut self, path: &Path, default_category: Category) -> Result<Vec<Exercise>> {
        let text = fs::read_to_string(path).map_err(|source| SheetError::FileOperation {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.normalizer.normalize_text(&text, default_category))
    }

    fn import_workbook(
        &mut self,
        path: &Path,
        default_category: Category,
    ) -> Result<Vec<Exercise>> {
        let mut workbook = open_workbook_auto(path)?;
        let sheet_names = workbook.sheet_names().to_vec();
        let mut exercises = Vec::new();

        for name in sheet_names {
            let range = workbook.worksheet_range(&name)?;
            let rows: Vec<Vec<String>> = range
                .rows()
                .map(|row| row.iter().map(cell_to_string).collect())
                .collect();

            let category =
                patterns::parse_category_marker(&name).unwrap_or(default_category);
            debug!(
                "Worksheet \"{}\": {} rows, category {}",
                name,
                rows.len(),
                category
            );

            exercises.extend(self.normalizer.normalize_rows(&rows, category));
        }

        info!(
            "Imported {} exercises from {}",
            exercises.len(),
            path.display()
        );
        Ok(exercises)
    }
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            // spreadsheets store "4" as 4.0; render integral floats without
            // the trailing fraction so the classifier sees bare digits
            if f.fract() == 0.0 && f.abs() < 1e15 {
                (*f as i64).to_string()
            } else {
                f.to_string()
            }
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::{IngestOptions, SequentialGenerator};
    use tempfile::TempDir;

    fn importer() -> FileImporter {
        FileImporter::new(BatchNormalizer::with_id_generator(
            IngestOptions::default(),
            Box::new(SequentialGenerator::new("im")),
        ))
    }

    #[test]
    fn test_import_text_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("treino.tsv");
        fs::write(&path, "TREINO B\nRosca direta\t\t3\t12\n").unwrap();

        let exercises = importer().import_file(&path, Category::A).unwrap();
        assert_eq!(exercises.len(), 1);
        assert_eq!(exercises[0].category, Category::B);
    }

    #[test]
    fn test_unsupported_extension() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("treino.pdf");
        fs::write(&path, "x").unwrap();

        assert!(matches!(
            importer().import_file(&path, Category::A),
            Err(SheetError::Validation(_))
        ));
    }

    #[test]
    fn test_missing_file_is_a_file_operation_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.txt");

        assert!(matches!(
            importer().import_file(&path, Category::A),
            Err(SheetError::FileOperation { .. })
        ));
    }

    #[test]
    fn test_paste_surface() {
        let exercises = importer().import_paste("Supino https://youtu.be/x", Category::C);
        assert_eq!(exercises.len(), 1);
        assert_eq!(exercises[0].name, "Supino");
        assert_eq!(exercises[0].category, Category::C);
    }

    #[test]
    fn test_float_cells_render_as_bare_digits() {
        assert_eq!(cell_to_string(&Data::Float(4.0)), "4");
        assert_eq!(cell_to_string(&Data::Float(2.5)), "2.5");
        assert_eq!(cell_to_string(&Data::Int(12)), "12");
        assert_eq!(cell_to_string(&Data::Empty), "");
    }
}
