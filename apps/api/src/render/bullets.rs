use once_cell::sync::Lazy;
use regex::Regex;

static SENTENCE_BOUNDARY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.\s+").expect("static regex"));
static BULLET_MARKER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:•|-)\s+").expect("static regex"));

/// Sentence fragments this short (in chars) are dropped as noise.
const MIN_SENTENCE_CHARS: usize = 10;

/// Turns a description into a `<ul class="bullet-list">`.
///
/// Text with no `•` or `-` anywhere is split into sentences; otherwise the
/// existing markers are used as split points. Exactly one strategy applies.
pub fn normalize_bullets(description: &str) -> String {
    let items: Vec<String> = if !description.contains('•') && !description.contains('-') {
        SENTENCE_BOUNDARY_RE
            .split(description)
            .filter(|s| s.chars().count() > MIN_SENTENCE_CHARS)
            .map(|s| {
                if s.ends_with('.') {
                    s.to_string()
                } else {
                    format!("{s}.")
                }
            })
            .collect()
    } else {
        BULLET_MARKER_RE
            .split(description)
            .filter(|b| !b.trim().is_empty())
            .map(str::to_string)
            .collect()
    };

    let list_items: String = items.iter().map(|item| format!("<li>{item}</li>")).collect();
    format!(r#"<ul class="bullet-list">{list_items}</ul>"#)
}
