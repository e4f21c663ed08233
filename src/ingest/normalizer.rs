// file: src/ingest/normalizer.rs
// description: batch normalization of pasted text and row sequences into exercises
// reference: single shared ingestion path for every import surface

use crate::ingest::classifier::FieldClassifier;
use crate::ingest::id::{IdGenerator, UuidGenerator};
use crate::ingest::link::extract_name_and_link;
use crate::ingest::patterns;
use crate::ingest::tokenizer;
use crate::models::{Category, Exercise};
use tracing::warn;

#[derive(Debug, Clone)]
pub struct IngestOptions {
    pub default_series: u32,
    pub default_repetitions: String,
    /// Upper bound on ingested rows per call; 0 disables the cap.
    pub max_rows: usize,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            default_series: 1,
            default_repetitions: "10".to_string(),
            max_rows: 0,
        }
    }
}

/// Converts loosely structured input into `Exercise` records. Both
/// ingestion surfaces share one output contract: output order equals input
/// order minus skipped lines, every field is populated, ids are pairwise
/// distinct, and no input can make normalization fail: malformed cells
/// degrade into notes or defaults.
pub struct BatchNormalizer {
    classifier: FieldClassifier,
    ids: Box<dyn IdGenerator>,
    max_rows: usize,
}

impl BatchNormalizer {
    pub fn new(options: IngestOptions) -> Self {
        Self::with_id_generator(options, Box::new(UuidGenerator))
    }

    pub fn with_id_generator(options: IngestOptions, ids: Box<dyn IdGenerator>) -> Self {
        Self {
            classifier: FieldClassifier::new(options.default_series, options.default_repetitions),
            ids,
            max_rows: options.max_rows,
        }
    }

    /// Free-text paste surface. Lines may carry a sticky "TREINO X"
    /// directive that switches the category applied to subsequent lines
    /// until the next directive or end of input.
    pub fn normalize_text(&mut self, text: &str, default_category: Category) -> Vec<Exercise> {
        let rows = tokenizer::tokenize_block(text);
        let mut current = default_category;
        let mut exercises = Vec::new();

        for cells in self.capped(&rows) {
            if let Some(category) = marker_category(cells) {
                current = category;
                continue;
            }
            if is_header_row(cells) {
                continue;
            }
            if let Some(exercise) = self.normalize_row(cells, current) {
                exercises.push(exercise);
            }
        }

        exercises
    }

    /// Pre-tokenized row surface (one sheet = one category, assigned by the
    /// caller). Directive-looking and header rows are skipped as titles;
    /// they never change the category here.
    pub fn normalize_rows(&mut self, rows: &[Vec<String>], category: Category) -> Vec<Exercise> {
        let mut exercises = Vec::new();

        for cells in self.capped(rows) {
            if is_header_row(cells) {
                continue;
            }
            if let Some(exercise) = self.normalize_row(cells, category) {
                exercises.push(exercise);
            }
        }

        exercises
    }

    fn normalize_row(&mut self, cells: &[String], category: Category) -> Option<Exercise> {
        let first = cells.first().map(|c| c.trim()).unwrap_or_default();
        if first.is_empty() {
            return None;
        }

        let (name, link_from_name) = extract_name_and_link(first);
        let fields = self.classifier.classify(cells.get(1..).unwrap_or(&[]));

        // a link embedded in the name cell wins over a link column
        let video_link = if link_from_name.is_empty() {
            fields.video_link
        } else {
            link_from_name
        };

        Some(Exercise {
            id: self.ids.next_id(),
            name,
            series: fields.series,
            repetitions: fields.repetitions,
            rest: fields.rest,
            video_link,
            notes: fields.notes,
            category,
        })
    }

    fn capped<'a>(&self, rows: &'a [Vec<String>]) -> &'a [Vec<String>] {
        if self.max_rows > 0 && rows.len() > self.max_rows {
            warn!(
                "Input has {} rows, ingesting only the first {}",
                rows.len(),
                self.max_rows
            );
            &rows[..self.max_rows]
        } else {
            rows
        }
    }
}

fn marker_category(cells: &[String]) -> Option<Category> {
    let category = patterns::parse_category_marker(cells.first()?)?;
    if cells[1..].iter().all(|c| c.trim().is_empty()) {
        Some(category)
    } else {
        None
    }
}

// A first cell that parses as a directive always makes the row a title row,
// even when trailing cells carry data; only a pure directive row switches
// the category, and only on the text surface.
fn is_header_row(cells: &[String]) -> bool {
    cells.first().is_some_and(|first| {
        patterns::is_header_cell(first) || patterns::parse_category_marker(first).is_some()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::id::SequentialGenerator;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    fn normalizer() -> BatchNormalizer {
        BatchNormalizer::with_id_generator(
            IngestOptions::default(),
            Box::new(SequentialGenerator::new("ex")),
        )
    }

    #[test]
    fn test_full_row_with_video_column() {
        let mut normalizer = normalizer();
        let text = "Leg press 45\thttps://www.youtube.com/watch?v=abc\t4\t15\t1 min.";
        let exercises = normalizer.normalize_text(text, Category::A);

        assert_eq!(exercises.len(), 1);
        let exercise = &exercises[0];
        assert_eq!(exercise.name, "Leg press 45");
        assert_eq!(exercise.video_link, "https://www.youtube.com/watch?v=abc");
        assert_eq!(exercise.series, 4);
        assert_eq!(exercise.repetitions, "15");
        assert_eq!(exercise.rest, "1 min.");
        assert_eq!(exercise.notes, "");
        assert_eq!(exercise.category, Category::A);
    }

    #[test]
    fn test_sticky_category_marker() {
        let mut normalizer = normalizer();
        let text = "TREINO B\nRosca direta\t\t3\t12";
        let exercises = normalizer.normalize_text(text, Category::A);

        assert_eq!(exercises.len(), 1);
        assert_eq!(exercises[0].category, Category::B);
        assert_eq!(exercises[0].video_link, "");
        assert_eq!(exercises[0].series, 3);
        assert_eq!(exercises[0].repetitions, "12");
    }

    #[test]
    fn test_marker_applies_until_next_marker() {
        let mut normalizer = normalizer();
        let text = "Supino\nTREINO C\nRemada\nCrucifixo\ntreino a\nRosca";
        let exercises = normalizer.normalize_text(text, Category::B);

        let categories: Vec<Category> = exercises.iter().map(|e| e.category).collect();
        assert_eq!(
            categories,
            vec![Category::B, Category::C, Category::C, Category::A]
        );
    }

    #[test]
    fn test_name_and_link_in_one_cell() {
        let mut normalizer = normalizer();
        let exercises = normalizer.normalize_text("Supino https://youtu.be/xyz", Category::A);

        assert_eq!(exercises.len(), 1);
        assert_eq!(exercises[0].name, "Supino");
        assert_eq!(exercises[0].video_link, "https://youtu.be/xyz");
        assert_eq!(exercises[0].series, 1);
        assert_eq!(exercises[0].repetitions, "10");
    }

    #[test]
    fn test_header_only_input_produces_nothing() {
        let mut normalizer = normalizer();
        let exercises = normalizer.normalize_text("Exercício\tVídeo\tSéries", Category::A);
        assert!(exercises.is_empty());
    }

    #[test]
    fn test_row_surface_matches_text_surface() {
        let mut normalizer = normalizer();
        let rows = vec![vec![
            "Agachamento".to_string(),
            "".to_string(),
            "4".to_string(),
            "10-12".to_string(),
            "90s".to_string(),
            "cuidado com o joelho".to_string(),
        ]];
        let exercises = normalizer.normalize_rows(&rows, Category::A);

        assert_eq!(exercises.len(), 1);
        let exercise = &exercises[0];
        assert_eq!(exercise.series, 4);
        assert_eq!(exercise.repetitions, "10-12");
        assert_eq!(exercise.rest, "90s");
        assert_eq!(exercise.notes, "cuidado com o joelho");
        assert_eq!(exercise.video_link, "");
    }

    #[test]
    fn test_row_surface_never_switches_category() {
        let mut normalizer = normalizer();
        let rows = vec![
            vec!["TREINO B".to_string()],
            vec!["Remada".to_string()],
        ];
        let exercises = normalizer.normalize_rows(&rows, Category::D);

        assert_eq!(exercises.len(), 1);
        assert_eq!(exercises[0].category, Category::D);
    }

    #[test]
    fn test_output_order_matches_input_order() {
        let mut normalizer = normalizer();
        let text = "Primeiro\nSegundo\n\nTerceiro";
        let names: Vec<String> = normalizer
            .normalize_text(text, Category::A)
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["Primeiro", "Segundo", "Terceiro"]);
    }

    #[test]
    fn test_ids_unique_across_calls() {
        let mut normalizer = normalizer();
        let mut ids = HashSet::new();
        for _ in 0..3 {
            for exercise in normalizer.normalize_text("Supino\nRemada", Category::A) {
                assert!(ids.insert(exercise.id));
            }
        }
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn test_row_cap_truncates() {
        let options = IngestOptions {
            max_rows: 2,
            ..IngestOptions::default()
        };
        let mut normalizer = BatchNormalizer::with_id_generator(
            options,
            Box::new(SequentialGenerator::new("ex")),
        );
        let exercises = normalizer.normalize_text("a\nb\nc\nd", Category::A);
        assert_eq!(exercises.len(), 2);
    }

    #[test]
    fn test_rows_with_empty_name_cell_skipped() {
        let mut normalizer = normalizer();
        let rows = vec![
            vec!["".to_string(), "4".to_string(), "12".to_string()],
            vec!["Remada".to_string(), "4".to_string(), "12".to_string()],
        ];
        let exercises = normalizer.normalize_rows(&rows, Category::A);
        assert_eq!(exercises.len(), 1);
        assert_eq!(exercises[0].name, "Remada");
    }

    #[test]
    fn test_marker_with_trailing_data_is_not_a_marker() {
        let mut normalizer = normalizer();
        // "TREINO B" followed by data cells reads as a header row, not a
        // directive: category must stay A and no exercise is produced
        let text = "TREINO B\t4\t12\nSupino";
        let exercises = normalizer.normalize_text(text, Category::A);
        assert_eq!(exercises.len(), 1);
        assert_eq!(exercises[0].name, "Supino");
        assert_eq!(exercises[0].category, Category::A);
    }
}
