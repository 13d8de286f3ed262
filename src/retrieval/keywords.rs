// Query keyword extraction

use once_cell::sync::Lazy;
use regex::Regex;

/// Tokens this short (in characters) are dropped before punctuation stripping
const MIN_TOKEN_CHARS: usize = 4;

static PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.,?!;:]").expect("valid regex"));

/// Lower-case, split on whitespace, drop short tokens, strip `.,?!;:`
///
/// The length filter runs before stripping, so "sad." survives as "sad" and
/// "????" becomes the empty keyword, which matches every entry.
pub fn extract_keywords(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .filter(|w| w.chars().count() >= MIN_TOKEN_CHARS)
        .map(|w| PUNCTUATION.replace_all(w, "").into_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_tokens_dropped() {
        assert_eq!(
            extract_keywords("I'm feeling stressed"),
            vec!["feeling", "stressed"]
        );
    }

    #[test]
    fn test_punctuation_stripped_after_length_filter() {
        assert_eq!(extract_keywords("so sad. really?"), vec!["sad", "really"]);
    }

    #[test]
    fn test_apostrophes_and_hyphens_kept() {
        assert_eq!(
            extract_keywords("don't skip self-care!"),
            vec!["don't", "skip", "self-care"]
        );
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert!(extract_keywords("").is_empty());
        assert!(extract_keywords("   \t\n ").is_empty());
    }

    #[test]
    fn test_pure_punctuation_becomes_empty_keyword() {
        assert_eq!(extract_keywords("????"), vec![""]);
        assert_eq!(extract_keywords("???? ...!"), vec!["", ""]);
        // Too short to survive the length filter
        assert!(extract_keywords("?? ...").is_empty());
    }
}
