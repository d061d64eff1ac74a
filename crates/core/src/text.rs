//! Small text primitives shared by the generators.
//!
//! Lengths are measured in characters, not bytes.

/// Sentences shorter than this (after trimming) are ignored.
pub const MIN_SENTENCE_CHARS: usize = 20;

/// Split on runs of `.`, `!` and `?`, trim, and keep sentences longer than
/// [`MIN_SENTENCE_CHARS`].
#[must_use]
pub fn sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| char_len(s) > MIN_SENTENCE_CHARS)
        .collect()
}

/// Number of whitespace-delimited tokens.
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[must_use]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[must_use]
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Upper-case the first character, leave the rest untouched.
#[must_use]
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Prefix of at most `max` characters.
#[must_use]
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Words `[center - before, center + after)` clamped to the slice, joined by
/// single spaces.
#[must_use]
pub fn word_window(words: &[&str], center: usize, before: usize, after: usize) -> String {
    let start = center.saturating_sub(before);
    let end = words.len().min(center.saturating_add(after));
    words[start.min(end)..end].join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentences_drop_short_fragments() {
        let text = "Short one. This sentence is clearly long enough!! Tiny? \
                    Another sentence that passes the filter";
        let got = sentences(text);
        assert_eq!(
            got,
            vec![
                "This sentence is clearly long enough",
                "Another sentence that passes the filter"
            ]
        );
    }

    #[test]
    fn sentence_of_exactly_twenty_chars_is_dropped() {
        let twenty = "abcdefghij klmnopqrs";
        assert_eq!(char_len(twenty), 20);
        assert!(sentences(twenty).is_empty());
    }

    #[test]
    fn capitalize_handles_empty_and_unicode() {
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("évolution"), "Évolution");
        assert_eq!(capitalize_first("cells divide"), "Cells divide");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("abc", 10), "abc");
    }

    #[test]
    fn word_window_clamps_both_ends() {
        let words = ["a", "b", "c", "d", "e"];
        assert_eq!(word_window(&words, 1, 3, 2), "a b c");
        assert_eq!(word_window(&words, 4, 1, 8), "d e");
    }

    #[test]
    fn case_insensitive_contains() {
        assert!(contains_ignore_case("Photosynthesis in Plants", "plants"));
        assert!(!contains_ignore_case("cells", "genetics"));
    }
}
