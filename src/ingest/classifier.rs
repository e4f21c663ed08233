// file: src/ingest/classifier.rs
// description: heuristic classification of row cells into exercise fields
// reference: ordered first-match-wins rules over pasted column data

use crate::ingest::patterns;

/// Classified values for the cells of one row beyond the name cell.
/// Required fields are always populated; `notes` collects every cell no
/// rule claimed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedFields {
    pub series: u32,
    pub repetitions: String,
    pub rest: String,
    pub video_link: String,
    pub notes: String,
}

/// Applies the canonical rule order {video link, rest duration, series,
/// repetitions, notes} to each cell. The column layout of pasted data is
/// only a convention, so every cell is pattern-matched instead of trusting
/// its position; position only breaks the tie between two bare-digit cells
/// (the earlier one is the series count).
pub struct FieldClassifier {
    default_series: u32,
    default_repetitions: String,
}

impl FieldClassifier {
    pub fn new(default_series: u32, default_repetitions: impl Into<String>) -> Self {
        Self {
            default_series,
            default_repetitions: default_repetitions.into(),
        }
    }

    pub fn classify(&self, cells: &[String]) -> ClassifiedFields {
        let mut video_link: Option<&str> = None;
        let mut series: Option<u32> = None;
        let mut repetitions: Option<&str> = None;
        let mut rest: Option<&str> = None;
        let mut notes: Vec<&str> = Vec::new();

        for cell in cells {
            let cell = cell.trim();
            if cell.is_empty() {
                continue;
            }

            if cell.starts_with("http") && video_link.is_none() {
                video_link = Some(cell);
                continue;
            }

            if patterns::is_duration(cell) {
                rest = Some(cell);
                continue;
            }

            if patterns::is_bare_number(cell) && series.is_none() {
                series = Some(cell.parse().unwrap_or(self.default_series));
                continue;
            }

            if patterns::is_reps_shape(cell) && repetitions.is_none() {
                repetitions = Some(cell);
                continue;
            }

            notes.push(cell);
        }

        ClassifiedFields {
            series: series.unwrap_or(self.default_series),
            repetitions: repetitions
                .map(str::to_string)
                .unwrap_or_else(|| self.default_repetitions.clone()),
            rest: rest.unwrap_or_default().to_string(),
            video_link: video_link.unwrap_or_default().to_string(),
            notes: notes.join(" "),
        }
    }
}

impl Default for FieldClassifier {
    fn default() -> Self {
        Self::new(1, "10")
    }
}
