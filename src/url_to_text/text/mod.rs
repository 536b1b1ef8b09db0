/// Trim every line and drop the blank ones.
///
/// Idempotent: cleaning already-cleaned text returns it unchanged.
pub fn clean(text: &str) -> String {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
