/// Number of whitespace-delimited tokens in `text`.
///
/// Surrounding whitespace is ignored and any run of whitespace counts as a
/// single separator, so blank input yields 0.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}
