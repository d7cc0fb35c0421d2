//! `dcterms:coverage` note derivation.

use crate::model::Place;
use once_cell::sync::Lazy;
use regex::Regex;

static BATLAS_CITATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"cited: BAtlas (\d+) (\w+)").expect("valid regex"));

/// Coverage note for a place, or `None` when there is nothing to say.
///
/// The modern location wins; otherwise a Barrington Atlas citation in the
/// description is turned into `Barrington Atlas grid <map> <Cell>`.
pub fn coverage_note(place: &Place) -> Option<String> {
    let note = match place.modern_location.as_deref().filter(|m| !m.is_empty()) {
        Some(modern) => modern.to_string(),
        None => {
            let description = place.meta.description.as_deref().unwrap_or("");
            let caps = BATLAS_CITATION.captures(description)?;
            format!("Barrington Atlas grid {} {}", &caps[1], capitalize(&caps[2]))
        }
    };
    let note = note.replace(['\u{00AE}', '\u{2192}'], "\u{2194}");
    (!note.is_empty()).then_some(note)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(modern: Option<&str>, description: Option<&str>) -> Place {
        let mut p = Place {
            modern_location: modern.map(str::to_string),
            ..Default::default()
        };
        p.meta.description = description.map(str::to_string);
        p
    }

    #[test]
    fn test_modern_location_wins() {
        let p = place(Some("Rome, Italy"), Some("cited: BAtlas 43 B2 Roma"));
        assert_eq!(coverage_note(&p).as_deref(), Some("Rome, Italy"));
    }

    #[test]
    fn test_barrington_citation() {
        let p = place(Some(""), Some("An ancient place, cited: BAtlas 43 b2 Roma"));
        assert_eq!(
            coverage_note(&p).as_deref(),
            Some("Barrington Atlas grid 43 B2")
        );
        let p = place(None, Some("cited: BAtlas 65 UNL"));
        assert_eq!(
            coverage_note(&p).as_deref(),
            Some("Barrington Atlas grid 65 Unl")
        );
    }

    #[test]
    fn test_arrow_characters_are_normalized() {
        let p = place(Some("Tarsus \u{00AE} Adana \u{2192} Sis"), None);
        assert_eq!(
            coverage_note(&p).as_deref(),
            Some("Tarsus \u{2194} Adana \u{2194} Sis")
        );
    }

    #[test]
    fn test_nothing_to_say() {
        assert_eq!(coverage_note(&place(None, None)), None);
        assert_eq!(coverage_note(&place(None, Some("A town."))), None);
    }
}
