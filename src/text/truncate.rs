use thiserror::Error;

/// Marker appended to shortened text when no other suffix is given.
pub const DEFAULT_SUFFIX: &str = "...";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TruncateError {
    #[error("Suffix of {suffix_len} characters does not fit in max length {max_length}")]
    SuffixTooLong { suffix_len: usize, max_length: usize },
}

/// Bound `text` to at most `max_length` characters, signalling the cut with `suffix`.
///
/// Lengths are counted in `char`s. Text that already fits is returned
/// unchanged and never gets the suffix. Otherwise the result is exactly
/// `max_length` characters long: a prefix of `text` followed by `suffix`.
///
/// Fails only when a cut is needed and `suffix` alone is longer than
/// `max_length`.
pub fn try_truncate(text: &str, max_length: usize, suffix: &str) -> Result<String, TruncateError> {
    if text.char_indices().nth(max_length).is_none() {
        return Ok(text.to_string());
    }

    let suffix_len = suffix.chars().count();
    let keep = max_length
        .checked_sub(suffix_len)
        .ok_or(TruncateError::SuffixTooLong {
            suffix_len,
            max_length,
        })?;

    // `text` is longer than max_length >= keep, so the nth char exists.
    let end = text
        .char_indices()
        .nth(keep)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len());

    let mut out = String::with_capacity(end + suffix.len());
    out.push_str(&text[..end]);
    out.push_str(suffix);
    Ok(out)
}

/// Infallible form of [`try_truncate`].
///
/// When the suffix cannot fit, the result clamps to the empty string so the
/// output still never exceeds `max_length`.
pub fn truncate(text: &str, max_length: usize, suffix: &str) -> String {
    try_truncate(text, max_length, suffix).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorter_than_max() {
        assert_eq!(truncate("Hello", 10, DEFAULT_SUFFIX), "Hello");
    }

    #[test]
    fn test_default_suffix() {
        assert_eq!(truncate("Hello World", 8, DEFAULT_SUFFIX), "Hello...");
    }

    #[test]
    fn test_custom_suffix() {
        assert_eq!(truncate("Hello World", 9, "…"), "Hello Wo…");
    }

    #[test]
    fn test_exact_length() {
        assert_eq!(truncate("Hello", 5, DEFAULT_SUFFIX), "Hello");
    }

    #[test]
    fn test_suffix_equal_to_max() {
        assert_eq!(truncate("Hello World", 3, DEFAULT_SUFFIX), "...");
    }

    #[test]
    fn test_fitting_text_ignores_oversized_suffix() {
        assert_eq!(try_truncate("Hi", 2, "[truncated]"), Ok("Hi".to_string()));
    }

    #[test]
    fn test_oversized_suffix_is_an_error() {
        assert_eq!(
            try_truncate("Hello World", 2, DEFAULT_SUFFIX),
            Err(TruncateError::SuffixTooLong {
                suffix_len: 3,
                max_length: 2,
            })
        );
    }

    #[test]
    fn test_oversized_suffix_clamps_to_empty() {
        assert_eq!(truncate("Hello World", 2, DEFAULT_SUFFIX), "");
        assert_eq!(truncate("Hello World", 0, DEFAULT_SUFFIX), "");
    }

    #[test]
    fn test_zero_length_empty_text() {
        assert_eq!(truncate("", 0, DEFAULT_SUFFIX), "");
    }

    #[test]
    fn test_multibyte_characters_counted_as_chars() {
        assert_eq!(truncate("日本語テスト文字列", 6, DEFAULT_SUFFIX), "日本語...");
        assert_eq!(truncate("👋🌍🎉", 3, DEFAULT_SUFFIX), "👋🌍🎉");
        assert_eq!(truncate("👋🌍🎉x", 3, "…"), "👋🌍…");
    }
}
