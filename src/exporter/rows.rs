// file: src/exporter/rows.rs
// description: canonical row tables handed to document sinks
// reference: column layout of the printed workout sheet

use crate::models::{Category, Exercise};

/// Column headers of the rendered document, numbering column included.
pub const DISPLAY_HEADER: [&str; 7] = [
    "#",
    "Exercício",
    "Vídeo",
    "Séries",
    "Repetições",
    "Pausa",
    "Observações",
];

/// Column headers of the paste/ingestion layout: the first column is the
/// exercise name, so this table feeds straight back into the normalizer.
pub const PASTE_HEADER: [&str; 6] = [
    "Exercício",
    "Vídeo",
    "Séries",
    "Repetições",
    "Pausa",
    "Observações",
];

/// Group exercises by category in A-E order, preserving insertion order
/// within each group. Categories without exercises are omitted.
pub fn sections(exercises: &[Exercise]) -> Vec<(Category, Vec<&Exercise>)> {
    Category::all()
        .iter()
        .filter_map(|category| {
            let group: Vec<&Exercise> = exercises
                .iter()
                .filter(|e| e.category == *category)
                .collect();
            if group.is_empty() {
                None
            } else {
                Some((*category, group))
            }
        })
        .collect()
}

/// Numbered data rows for one category, ready for a document sink.
pub fn display_rows(exercises: &[&Exercise]) -> Vec<Vec<String>> {
    exercises
        .iter()
        .enumerate()
        .map(|(index, e)| {
            vec![
                (index + 1).to_string(),
                e.name.clone(),
                e.video_link.clone(),
                e.series.to_string(),
                e.repetitions.clone(),
                e.rest.clone(),
                e.notes.clone(),
            ]
        })
        .collect()
}

/// Tab-separated text in the ingestion layout, with one "TREINO X" section
/// per category. The output re-imports cleanly through the normalizer.
pub fn to_tsv(exercises: &[Exercise]) -> String {
    let mut out = String::new();

    for (category, group) in sections(exercises) {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&format!("TREINO {category}\n"));
        out.push_str(&PASTE_HEADER.join("\t"));
        out.push('\n');

        for e in group {
            let series = e.series.to_string();
            let cells = [
                e.name.as_str(),
                e.video_link.as_str(),
                series.as_str(),
                e.repetitions.as_str(),
                e.rest.as_str(),
                e.notes.as_str(),
            ];
            out.push_str(&cells.join("\t"));
            out.push('\n');
        }
    }

    out
}
