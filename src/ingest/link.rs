// file: src/ingest/link.rs
// description: splitting exercise names from embedded video links
// reference: spreadsheet paste behavior where name and URL share one cell

use crate::ingest::patterns::{ANY_URL, VIDEO_URL};
use regex::Regex;

/// Split a raw name cell into a clean exercise name and an optional video
/// link. Tries the recognized video-hosting shapes first, then any http(s)
/// URL. Total: the worst case returns the trimmed input as the name with an
/// empty link.
pub fn extract_name_and_link(raw: &str) -> (String, String) {
    for pattern in [&*VIDEO_URL, &*ANY_URL] {
        if let Some((name, link)) = split_at_first_match(pattern, raw) {
            return (name, link);
        }
    }

    (raw.trim().to_string(), String::new())
}

fn split_at_first_match(pattern: &Regex, raw: &str) -> Option<(String, String)> {
    let captures = pattern.captures(raw)?;
    let link = captures.get(1)?;

    let name = raw[..link.start()].trim();
    // Stripping the URL must never leave an empty name for non-empty input
    let name = if name.is_empty() { raw.trim() } else { name };

    Some((name.to_string(), link.as_str().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_with_watch_link() {
        let (name, link) =
            extract_name_and_link("Leg press 45 https://www.youtube.com/watch?v=abc");
        assert_eq!(name, "Leg press 45");
        assert_eq!(link, "https://www.youtube.com/watch?v=abc");
    }

    #[test]
    fn test_name_with_short_link() {
        let (name, link) = extract_name_and_link("Supino https://youtu.be/xyz");
        assert_eq!(name, "Supino");
        assert_eq!(link, "https://youtu.be/xyz");
    }

    #[test]
    fn test_name_with_shorts_link() {
        let (name, link) =
            extract_name_and_link("Agachamento sumô https://youtube.com/shorts/q1w2e3");
        assert_eq!(name, "Agachamento sumô");
        assert_eq!(link, "https://youtube.com/shorts/q1w2e3");
    }

    #[test]
    fn test_fallback_to_generic_url() {
        let (name, link) = extract_name_and_link("Remada baixa https://vimeo.com/123");
        assert_eq!(name, "Remada baixa");
        assert_eq!(link, "https://vimeo.com/123");
    }

    #[test]
    fn test_no_link() {
        let (name, link) = extract_name_and_link("  Rosca direta  ");
        assert_eq!(name, "Rosca direta");
        assert_eq!(link, "");
    }

    #[test]
    fn test_link_only_keeps_input_as_name() {
        let raw = "https://youtu.be/xyz";
        let (name, link) = extract_name_and_link(raw);
        assert_eq!(name, raw);
        assert_eq!(link, raw);
    }

    #[test]
    fn test_link_round_trip() {
        // For any name without embedded URLs and a well-formed video URL,
        // "name SPACE url" splits back into exactly (name, url)
        let cases = [
            ("Leg press 45", "https://www.youtube.com/watch?v=abc&t=10"),
            ("Rosca martelo", "https://youtu.be/dQw4w9WgXcQ"),
            ("Elevação lateral", "https://youtube.com/shorts/abcdef"),
        ];
        for (name, url) in cases {
            let joined = format!("{name} {url}");
            assert_eq!(
                extract_name_and_link(&joined),
                (name.to_string(), url.to_string())
            );
        }
    }
}
