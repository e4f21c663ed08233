// file: src/library/exercises.rs
// description: persisted library of reusable exercise templates
// reference: fingerprint-based deduplication on repeated imports

use crate::error::{Result, SheetError};
use crate::models::Exercise;
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

pub struct ExerciseLibrary {
    path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AddOutcome {
    pub added: usize,
    pub duplicates: usize,
}

impl ExerciseLibrary {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// All stored templates; an absent library file is an empty library.
    pub fn load_all(&self) -> Result<Vec<Exercise>> {
        if !self.path.is_file() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).map_err(|source| {
            SheetError::FileOperation {
                path: self.path.clone(),
                source,
            }
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Append templates, skipping entries whose name + video link
    /// fingerprint is already stored. Re-importing the same paste twice
    /// therefore leaves the library unchanged.
    pub fn add_many(&self, candidates: Vec<Exercise>) -> Result<AddOutcome> {
        let mut stored = self.load_all()?;
        let mut seen: HashSet<String> = stored.iter().map(fingerprint).collect();
        let mut outcome = AddOutcome::default();

        for exercise in candidates {
            if seen.insert(fingerprint(&exercise)) {
                stored.push(exercise);
                outcome.added += 1;
            } else {
                outcome.duplicates += 1;
            }
        }

        if outcome.added > 0 {
            self.write_all(&stored)?;
        }
        debug!(
            "Exercise library: {} added, {} duplicates skipped",
            outcome.added, outcome.duplicates
        );
        Ok(outcome)
    }

    fn write_all(&self, exercises: &[Exercise]) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| SheetError::FileOperation {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let json = serde_json::to_string_pretty(exercises)?;
        fs::write(&self.path, json).map_err(|source| SheetError::FileOperation {
            path: self.path.clone(),
            source,
        })
    }
}

fn fingerprint(exercise: &Exercise) -> String {
    let mut hasher = Sha256::new();
    hasher.update(exercise.name.trim().to_lowercase().as_bytes());
    hasher.update(b"|");
    hasher.update(exercise.video_link.trim().as_bytes());
    format!("{:x}", hasher.finalize())
}
