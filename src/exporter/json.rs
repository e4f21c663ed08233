// file: src/exporter/json.rs
// description: json export of stored workout sheets with a manifest

use crate::error::{Result, SheetError};
use crate::library::SheetStore;
use crate::models::WorkoutSheet;
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone)]
pub struct JsonExporter {
    output_dir: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct ExportManifest {
    pub exported_at: String,
    pub total_sheets: usize,
    pub total_exercises: usize,
    pub files: Vec<String>,
}

impl JsonExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir).map_err(|source| SheetError::FileOperation {
            path: output_dir.clone(),
            source,
        })?;
        Ok(Self { output_dir })
    }

    pub fn export_sheet(&self, sheet: &WorkoutSheet, pretty: bool) -> Result<PathBuf> {
        let path = self.output_dir.join(format!("{}.json", sheet.id));
        self.write_json(&path, sheet, pretty)?;
        Ok(path)
    }

    /// Export every stored sheet plus a manifest.json describing the batch.
    pub fn export_all(&self, store: &SheetStore, pretty: bool) -> Result<ExportManifest> {
        info!("Starting JSON export to {}", self.output_dir.display());

        let mut files = Vec::new();
        let mut total_exercises = 0;

        for summary in store.list()? {
            let sheet = store.load(&summary.id)?;
            total_exercises += sheet.exercises.len();
            let path = self.export_sheet(&sheet, pretty)?;
            files.push(
                path.file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default(),
            );
        }

        let manifest = ExportManifest {
            exported_at: Utc::now().to_rfc3339(),
            total_sheets: files.len(),
            total_exercises,
            files,
        };
        self.write_json(&self.output_dir.join("manifest.json"), &manifest, true)?;

        info!(
            "Export complete: {} sheets, {} exercises",
            manifest.total_sheets, manifest.total_exercises
        );
        Ok(manifest)
    }

    fn write_json<T: Serialize>(&self, path: &Path, value: &T, pretty: bool) -> Result<()> {
        let json = if pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        fs::write(path, json).map_err(|source| SheetError::FileOperation {
            path: path.to_path_buf(),
            source,
        })
    }
}
