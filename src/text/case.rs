/// Uppercase the first character and lowercase the rest.
///
/// A first character whose uppercase form spans several characters
/// (`'ß'` -> `"SS"`) is left as is, which keeps the operation idempotent.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut out = String::with_capacity(text.len());
    let mut upper = first.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => out.push(single),
        _ => out.push(first),
    }
    out.push_str(&chars.as_str().to_lowercase());
    out
}
