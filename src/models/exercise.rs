// file: src/models/exercise.rs
// description: exercise record and workout category enumeration
// reference: internal data structures

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Workout category, one of the five named sub-workouts of a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    A,
    B,
    C,
    D,
    E,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::A => "A",
            Category::B => "B",
            Category::C => "C",
            Category::D => "D",
            Category::E => "E",
        }
    }

    pub fn all() -> &'static [Category] {
        &[
            Category::A,
            Category::B,
            Category::C,
            Category::D,
            Category::E,
        ]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Category::A),
            "B" => Ok(Category::B),
            "C" => Ok(Category::C),
            "D" => Ok(Category::D),
            "E" => Ok(Category::E),
            other => Err(format!("Unknown workout category: {other}")),
        }
    }
}

/// One row of a workout sheet: a named movement with prescribed sets,
/// repetitions and rest. Produced by the ingestion normalizer or by manual
/// entry; never partially mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub series: u32,
    pub repetitions: String,
    pub rest: String,
    #[serde(default)]
    pub video_link: String,
    #[serde(default)]
    pub notes: String,
    pub category: Category,
}

impl Exercise {
    pub fn new(id: String, name: String, category: Category) -> Self {
        Self {
            id,
            name,
            series: 1,
            repetitions: String::new(),
            rest: String::new(),
            video_link: String::new(),
            notes: String::new(),
            category,
        }
    }

    pub fn has_video(&self) -> bool {
        !self.video_link.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parsing() {
        assert_eq!("a".parse::<Category>().unwrap(), Category::A);
        assert_eq!(" E ".parse::<Category>().unwrap(), Category::E);
        assert!("F".parse::<Category>().is_err());
        assert!("".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_roundtrip() {
        for category in Category::all() {
            assert_eq!(
                category.as_str().parse::<Category>().unwrap(),
                *category
            );
        }
    }

    #[test]
    fn test_exercise_serialization_uses_camel_case() {
        let mut exercise = Exercise::new("x1".to_string(), "Supino".to_string(), Category::A);
        exercise.video_link = "https://youtu.be/abc".to_string();

        let json = serde_json::to_string(&exercise).unwrap();
        assert!(json.contains("\"videoLink\""));
        assert!(json.contains("\"category\":\"A\""));
    }

    #[test]
    fn test_exercise_deserialization_defaults_optional_fields() {
        let json = r#"{
            "id": "x1",
            "name": "Remada curvada",
            "series": 3,
            "repetitions": "12",
            "rest": "60s",
            "category": "B"
        }"#;

        let exercise: Exercise = serde_json::from_str(json).unwrap();
        assert_eq!(exercise.video_link, "");
        assert_eq!(exercise.notes, "");
        assert_eq!(exercise.category, Category::B);
    }
}
