//! Tag stripping for resumes pasted back in as HTML.

use once_cell::sync::Lazy;
use regex::Regex;

static STYLE_BLOCK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<style[^>]*>.*?</style>").expect("static regex"));
static SCRIPT_BLOCK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<script[^>]*>.*?</script>").expect("static regex"));
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("static regex"));
static BLANK_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").expect("static regex"));

/// Markers that make a submitted resume count as HTML.
const HTML_MARKERS: &[&str] = &["<html", "<body", "<div"];

pub fn looks_like_html(text: &str) -> bool {
    let lowered = text.to_lowercase();
    HTML_MARKERS.iter().any(|marker| lowered.contains(marker))
}

/// Reduces an HTML document to newline-separated text.
///
/// Every tag becomes a line break, so block structure survives as lines for
/// the section splitter.
pub fn strip_html(html: &str) -> String {
    let text = STYLE_BLOCK_RE.replace_all(html, "");
    let text = SCRIPT_BLOCK_RE.replace_all(&text, "");
    let text = TAG_RE.replace_all(&text, "\n");
    let text = BLANK_RUN_RE.replace_all(&text, "\n");
    decode_entities(text.trim())
}

/// Decodes the entities produced by `render::escape`. `&amp;` goes last so
/// `&amp;lt;` stays a literal `&lt;`.
fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

/// Returns the text unchanged unless it looks like HTML.
pub fn plain_text(resume: &str) -> String {
    if looks_like_html(resume) {
        strip_html(resume)
    } else {
        resume.to_string()
    }
}
