// file: src/library/sheets.rs
// description: JSON-on-disk store for saved workout sheets
// reference: one pretty-printed file per sheet id under the library root

use crate::error::{Result, SheetError};
use crate::models::WorkoutSheet;
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

pub struct SheetStore {
    root: PathBuf,
}

#[derive(Debug, Clone)]
pub struct SheetSummary {
    pub id: String,
    pub title: String,
    pub student_name: Option<String>,
    pub exercise_count: usize,
    pub last_modified: DateTime<Utc>,
}

impl SheetStore {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|source| SheetError::FileOperation {
            path: root.clone(),
            source,
        })?;
        Ok(Self { root })
    }

    pub fn save(&self, sheet: &WorkoutSheet) -> Result<PathBuf> {
        let path = self.sheet_path(&sheet.id)?;
        let json = serde_json::to_string_pretty(sheet)?;
        fs::write(&path, json).map_err(|source| SheetError::FileOperation {
            path: path.clone(),
            source,
        })?;
        debug!("Saved sheet {} to {}", sheet.id, path.display());
        Ok(path)
    }

    pub fn load(&self, id: &str) -> Result<WorkoutSheet> {
        let path = self.sheet_path(id)?;
        if !path.is_file() {
            return Err(SheetError::SheetNotFound(id.to_string()));
        }
        let content = fs::read_to_string(&path).map_err(|source| SheetError::FileOperation {
            path: path.clone(),
            source,
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn delete(&self, id: &str) -> Result<()> {
        let path = self.sheet_path(id)?;
        if !path.is_file() {
            return Err(SheetError::SheetNotFound(id.to_string()));
        }
        fs::remove_file(&path).map_err(|source| SheetError::FileOperation { path, source })
    }

    /// Resolve a sheet by id, falling back to a unique case-insensitive
    /// title match.
    pub fn find(&self, key: &str) -> Result<WorkoutSheet> {
        match self.load(key) {
            Ok(sheet) => return Ok(sheet),
            Err(SheetError::SheetNotFound(_)) => {}
            Err(e) => return Err(e),
        }

        let lowered = key.to_lowercase();
        let matches: Vec<SheetSummary> = self
            .list()?
            .into_iter()
            .filter(|s| s.title.to_lowercase() == lowered)
            .collect();

        match matches.as_slice() {
            [only] => self.load(&only.id),
            [] => Err(SheetError::SheetNotFound(key.to_string())),
            _ => Err(SheetError::Library(format!(
                "Title \"{key}\" matches {} sheets, use the id",
                matches.len()
            ))),
        }
    }

    /// All stored sheets, most recently modified first. Unreadable files
    /// are skipped with a warning rather than failing the listing.
    pub fn list(&self) -> Result<Vec<SheetSummary>> {
        let mut summaries = Vec::new();

        for entry in WalkDir::new(&self.root)
            .max_depth(1)
            .follow_links(false)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !entry.file_type().is_file()
                || path.extension().and_then(|e| e.to_str()) != Some("json")
            {
                continue;
            }

            match Self::read_summary(path) {
                Ok(summary) => summaries.push(summary),
                Err(e) => warn!("Skipping unreadable sheet {}: {}", path.display(), e),
            }
        }

        summaries.sort_by(|a, b| b.last_modified.cmp(&a.last_modified));
        Ok(summaries)
    }

    fn read_summary(path: &Path) -> Result<SheetSummary> {
        let content = fs::read_to_string(path).map_err(|source| SheetError::FileOperation {
            path: path.to_path_buf(),
            source,
        })?;
        let sheet: WorkoutSheet = serde_json::from_str(&content)?;
        Ok(SheetSummary {
            id: sheet.id,
            title: sheet.title,
            student_name: sheet.student_name,
            exercise_count: sheet.exercises.len(),
            last_modified: sheet.last_modified,
        })
    }

    fn sheet_path(&self, id: &str) -> Result<PathBuf> {
        if id.is_empty() || id.contains(['/', '\\', '.']) {
            return Err(SheetError::Validation(format!("Invalid sheet id: {id:?}")));
        }
        Ok(self.root.join(format!("{id}.json")))
    }
}
