//! Duplicate-aware counting over extracted cache items.
//!
//! The serving side deduplicates articles on normalized title+link before
//! caching; the inspector only COUNTS what a dedup pass would leave, it
//! never rewrites anything.

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

lazy_static! {
    static ref HTML_TAG: Regex = Regex::new(r"<[^>]+>").expect("static regex");
    static ref HTML_ENTITY: Regex = Regex::new(r"(?i)&[a-z]+;").expect("static regex");
    static ref WHITESPACE: Regex = Regex::new(r"\s+").expect("static regex");
}

fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'ä' | 'â' => 'a',
        'é' | 'è' | 'ë' | 'ê' => 'e',
        'í' | 'ì' | 'ï' | 'î' => 'i',
        'ó' | 'ò' | 'ö' | 'ô' => 'o',
        'ú' | 'ù' | 'ü' | 'û' => 'u',
        'ñ' => 'n',
        _ => c,
    }
}

/// Lowercase, fold Spanish accents, drop HTML tags and entities, collapse
/// whitespace. Mirrors what the serving side does before comparing titles.
pub fn normalize_text(text: &str) -> String {
    let lowered: String = text.to_lowercase().chars().map(fold_accent).collect();
    let stripped = HTML_TAG.replace_all(&lowered, "");
    let stripped = HTML_ENTITY.replace_all(&stripped, "");
    WHITESPACE.replace_all(&stripped, " ").trim().to_string()
}

/// Items that survive a title+link dedup pass. Items exposing neither
/// field cannot be compared and each count as distinct.
pub fn unique_count(items: &[Value]) -> usize {
    let mut seen = HashSet::new();
    let mut distinct = 0;
    for item in items {
        let title = item.get("title").and_then(Value::as_str).unwrap_or("");
        let link = item.get("link").and_then(Value::as_str).unwrap_or("");
        if title.is_empty() && link.is_empty() {
            distinct += 1;
            continue;
        }
        let key = format!("{}|{}", normalize_text(title), normalize_text(link));
        if seen.insert(key) {
            distinct += 1;
        }
    }
    distinct
}

#[cfg(test)]
mod tests {
    use super::{normalize_text, unique_count};
    use serde_json::json;

    #[test]
    fn normalize_folds_accents_and_markup() {
        assert_eq!(normalize_text("  <b>MÚSICA</b> &amp; Farándula "), "musica farandula");
        assert_eq!(normalize_text("Ni\u{00f1}o"), "nino");
    }

    #[test]
    fn accent_and_case_variants_are_duplicates() {
        let items = vec![
            json!({"title": "Música en vivo", "link": "https://ejemplo.com/a"}),
            json!({"title": "MUSICA EN VIVO", "link": "https://ejemplo.com/a"}),
            json!({"title": "Otra cosa", "link": "https://ejemplo.com/b"}),
        ];
        assert_eq!(unique_count(&items), 2);
    }

    #[test]
    fn keyless_items_stay_distinct() {
        let items = vec![json!(1), json!(1), json!({"other": true})];
        assert_eq!(unique_count(&items), 3);
    }

    #[test]
    fn empty_is_zero() {
        assert_eq!(unique_count(&[]), 0);
    }
}
