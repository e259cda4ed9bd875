//! Surrounding-text excerpts.

const ELLIPSIS: &str = "...";

/// Excerpt of `text` around the byte span `[start, end)`.
///
/// Takes up to `radius` characters on each side, trims whitespace, and
/// marks a side with `...` when the excerpt stops short of that end of
/// `text`.
pub fn context_window(text: &str, start: usize, end: usize, radius: usize) -> String {
    let window_start = text[..start]
        .char_indices()
        .rev()
        .nth(radius.saturating_sub(1))
        .map(|(i, _)| i)
        .unwrap_or(0);
    let window_start = if radius == 0 { start } else { window_start };

    let window_end = text[end..]
        .char_indices()
        .nth(radius)
        .map(|(i, _)| end + i)
        .unwrap_or(text.len());

    let mut out = String::new();
    if window_start > 0 {
        out.push_str(ELLIPSIS);
    }
    out.push_str(text[window_start..window_end].trim());
    if window_end < text.len() {
        out.push_str(ELLIPSIS);
    }
    out
}
