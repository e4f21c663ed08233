// file: src/models/sheet.rs
// description: workout sheet model with student metadata
// reference: internal data structures

use crate::models::{Category, Exercise};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Masculino,
    Feminino,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Iniciante,
    Intermediario,
    Avancado,
}

/// A complete workout sheet for one student: up to five categories of
/// exercises plus the metadata printed on the exported document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSheet {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_name: Option<String>,
    pub gender: Gender,
    pub weekly_frequency: u8,
    pub level: Level,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objective: Option<String>,
    pub exercises: Vec<Exercise>,
    pub created_at: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
}

impl WorkoutSheet {
    pub fn new(id: String, title: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            title,
            student_name: None,
            gender: Gender::Masculino,
            weekly_frequency: 3,
            level: Level::Iniciante,
            objective: None,
            exercises: Vec::new(),
            created_at: now,
            last_modified: now,
        }
    }

    /// Exercises of one category, in insertion order.
    pub fn exercises_for(&self, category: Category) -> Vec<&Exercise> {
        self.exercises
            .iter()
            .filter(|e| e.category == category)
            .collect()
    }

    /// Categories that contain at least one exercise, in A-E order.
    pub fn categories_in_use(&self) -> Vec<Category> {
        Category::all()
            .iter()
            .copied()
            .filter(|c| self.exercises.iter().any(|e| e.category == *c))
            .collect()
    }

    pub fn add_exercises(&mut self, exercises: Vec<Exercise>) {
        self.exercises.extend(exercises);
        self.touch();
    }

    pub fn touch(&mut self) {
        self.last_modified = Utc::now();
    }

    /// Stable fingerprint of the sheet content, independent of timestamps.
    pub fn content_hash(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.title.as_bytes());
        for exercise in &self.exercises {
            hasher.update(exercise.name.as_bytes());
            hasher.update(exercise.category.as_str().as_bytes());
            hasher.update(exercise.repetitions.as_bytes());
            hasher.update(exercise.series.to_le_bytes());
        }
        format!("{:x}", hasher.finalize())
    }
}
