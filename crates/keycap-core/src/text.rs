//! Text helpers for reading around the cursor.

const WORD_DELIMITERS: &[char] = &[
    '.', ',', ';', ':', '!', '?', '¡', '¿', '(', ')', '[', ']', '{', '}', '<', '>', '"', '«',
    '»', '“', '”', '/', '\\', '|', '…',
];

const SENTENCE_DELIMITERS: &[char] = &['.', '!', '?', '¡', '¿', '…'];

pub fn is_word_delimiter(c: char) -> bool {
    c.is_whitespace() || WORD_DELIMITERS.contains(&c)
}

/// The word touching the cursor: trailing word characters before it plus
/// leading word characters after it.
///
/// `None` when both sides are absent or no word touches the cursor.
pub fn current_word(before: Option<&str>, after: Option<&str>) -> Option<String> {
    if before.is_none() && after.is_none() {
        return None;
    }
    let before = before.unwrap_or_default();
    let after = after.unwrap_or_default();

    let head_start = before
        .char_indices()
        .rev()
        .take_while(|(_, c)| !is_word_delimiter(*c))
        .last()
        .map_or(before.len(), |(i, _)| i);
    let tail_end = after
        .char_indices()
        .find(|(_, c)| is_word_delimiter(*c))
        .map_or(after.len(), |(i, _)| i);

    let word = format!("{}{}", &before[head_start..], &after[..tail_end]);
    if word.is_empty() {
        None
    } else {
        Some(word)
    }
}

/// Whether text typed next starts a new sentence.
pub fn is_cursor_at_new_sentence(before: Option<&str>) -> bool {
    let Some(before) = before else { return true };
    if before.is_empty() {
        return true;
    }
    // A sentence only ends once whitespace follows the delimiter.
    if !before.ends_with(char::is_whitespace) {
        return false;
    }
    match before.trim_end().chars().last() {
        None => true,
        Some(c) => SENTENCE_DELIMITERS.contains(&c),
    }
}

/// Lowercase and distinguishable from its uppercase form.
pub fn is_lowercased(text: &str) -> bool {
    text.to_lowercase() == text && text.to_uppercase() != text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_word_joins_both_sides() {
        assert_eq!(current_word(Some("foo"), Some("bar")).as_deref(), Some("foobar"));
        assert_eq!(
            current_word(Some("hello wor"), Some("ld again")).as_deref(),
            Some("world")
        );
    }

    #[test]
    fn test_current_word_one_side_missing() {
        assert_eq!(current_word(Some("so fo"), None).as_deref(), Some("fo"));
        assert_eq!(current_word(None, Some("bar baz")).as_deref(), Some("bar"));
    }

    #[test]
    fn test_current_word_absent() {
        assert_eq!(current_word(None, None), None);
        assert_eq!(current_word(Some("hello "), Some("")), None);
        assert_eq!(current_word(Some("end."), None), None);
    }

    #[test]
    fn test_current_word_multibyte() {
        assert_eq!(current_word(Some("å smörg"), Some("ås!")).as_deref(), Some("smörgås"));
    }

    #[test]
    fn test_new_sentence() {
        assert!(is_cursor_at_new_sentence(None));
        assert!(is_cursor_at_new_sentence(Some("")));
        assert!(is_cursor_at_new_sentence(Some("Done. ")));
        assert!(is_cursor_at_new_sentence(Some("  ")));
        assert!(!is_cursor_at_new_sentence(Some("Done.")));
        assert!(!is_cursor_at_new_sentence(Some("and ")));
    }

    #[test]
    fn test_is_lowercased() {
        assert!(is_lowercased("a"));
        assert!(is_lowercased("ö"));
        assert!(!is_lowercased("A"));
        assert!(!is_lowercased("1"));
        assert!(!is_lowercased(","));
    }
}
