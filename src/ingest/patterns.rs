// file: src/ingest/patterns.rs
// description: compiled regex patterns for exercise field classification
// reference: https://docs.rs/regex

use crate::models::Category;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Video-hosting URLs (watch, shorts and short-link path shapes),
    // terminated by whitespace or end of input
    pub static ref VIDEO_URL: Regex = Regex::new(
        r"(?i)(https?://(?:www\.)?(?:youtube\.com/(?:watch\?\S*|shorts/\S*)|youtu\.be/\S*))(?:\s|$)"
    ).expect("VIDEO_URL regex is valid");

    // Fallback for any http(s) URL
    pub static ref ANY_URL: Regex = Regex::new(
        r"(?i)(https?://\S+)"
    ).expect("ANY_URL regex is valid");

    // Whole-line category directive, e.g. "TREINO B"
    pub static ref CATEGORY_MARKER: Regex = Regex::new(
        r"(?i)^\s*TREINO\s+([A-E])\s*$"
    ).expect("CATEGORY_MARKER regex is valid");

    // Rest durations: "90s", "1 min.", "30 seg", "45-60s"
    pub static ref DURATION: Regex = Regex::new(
        r"(?i)^\d+\s*(?:-\s*\d+\s*)?(?:s|seg|min)\.?$"
    ).expect("DURATION regex is valid");

    // Repetition prescriptions: "12", "10-12", "12,10,8", "3x12"
    pub static ref REPS: Regex = Regex::new(
        r"(?i)^\d+(?:\s*[-,x]\s*\d+)*$"
    ).expect("REPS regex is valid");

    pub static ref BARE_NUMBER: Regex = Regex::new(
        r"^\d+$"
    ).expect("BARE_NUMBER regex is valid");
}

// Cell texts that mark a pasted header/title row rather than exercise data
const HEADER_KEYWORDS: &[&str] = &["exercício", "exercicio", "exercise"];

pub fn is_duration(cell: &str) -> bool {
    DURATION.is_match(cell)
}

pub fn is_reps_shape(cell: &str) -> bool {
    REPS.is_match(cell)
}

pub fn is_bare_number(cell: &str) -> bool {
    BARE_NUMBER.is_match(cell)
}

/// Parse a sticky category directive line ("TREINO A" .. "TREINO E").
pub fn parse_category_marker(cell: &str) -> Option<Category> {
    CATEGORY_MARKER
        .captures(cell)
        .and_then(|captures| captures.get(1))
        .and_then(|letter| letter.as_str().parse().ok())
}

/// True for cells that belong to a column-header or section-title row.
/// "treino" counts as a header keyword only when the cell is not a valid
/// category directive.
pub fn is_header_cell(cell: &str) -> bool {
    let lowered = cell.trim().to_lowercase();
    if lowered.is_empty() {
        return false;
    }

    if HEADER_KEYWORDS.iter().any(|keyword| lowered.contains(keyword)) {
        return true;
    }

    lowered.contains("treino") && parse_category_marker(cell).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_url_pattern() {
        assert!(VIDEO_URL.is_match("https://www.youtube.com/watch?v=abc"));
        assert!(VIDEO_URL.is_match("https://youtube.com/shorts/xyz123"));
        assert!(VIDEO_URL.is_match("https://youtu.be/xyz"));
        assert!(!VIDEO_URL.is_match("https://vimeo.com/12345"));
    }

    #[test]
    fn test_duration_pattern() {
        assert!(is_duration("90s"));
        assert!(is_duration("1 min."));
        assert!(is_duration("30 seg"));
        assert!(is_duration("45-60s"));
        assert!(!is_duration("10-12"));
        assert!(!is_duration("12"));
        assert!(!is_duration("leve"));
    }

    #[test]
    fn test_reps_pattern() {
        assert!(is_reps_shape("12"));
        assert!(is_reps_shape("10-12"));
        assert!(is_reps_shape("12,10,8"));
        assert!(is_reps_shape("3x12"));
        assert!(!is_reps_shape("ate a falha"));
        assert!(!is_reps_shape("12abc"));
    }

    #[test]
    fn test_category_marker() {
        assert_eq!(parse_category_marker("TREINO A"), Some(Category::A));
        assert_eq!(parse_category_marker("treino e"), Some(Category::E));
        assert_eq!(parse_category_marker("  Treino C  "), Some(Category::C));
        assert_eq!(parse_category_marker("TREINO F"), None);
        assert_eq!(parse_category_marker("TREINO A de peito"), None);
    }

    #[test]
    fn test_header_detection() {
        assert!(is_header_cell("Exercício"));
        assert!(is_header_cell("EXERCISE NAME"));
        assert!(is_header_cell("Planilha de treino"));
        assert!(!is_header_cell("TREINO B"));
        assert!(!is_header_cell("Leg press 45"));
        assert!(!is_header_cell(""));
    }
}
