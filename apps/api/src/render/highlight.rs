use regex::{Captures, Regex};

use crate::parsing::keywords::KeywordSet;

/// Wraps whole-word, case-insensitive keyword matches in a highlight span.
///
/// Keywords are applied one after another in extraction order, and each pass
/// sees the output of the previous one. Markup inserted by an earlier keyword
/// is therefore fair game for a later one: a keyword that also occurs inside
/// the span markup or inside an already highlighted phrase gets wrapped again.
/// Output consumers rely on this, so it is kept.
///
/// HTML entities (`&amp;`, `&#39;`, ...) are matched first and passed through
/// untouched, so a keyword like "amp" never splits an escaped character.
///
/// Word boundaries are ASCII-only: "Reacté" still highlights "React".
///
/// Only keywords longer than `min_len` chars are applied.
pub fn highlight_keywords(
    text: &str,
    keywords: &KeywordSet,
    min_len: usize,
) -> Result<String, regex::Error> {
    let mut highlighted = text.to_string();

    for keyword in keywords.iter().filter(|k| k.chars().count() > min_len) {
        let re = Regex::new(&format!(
            r"(&(?:#[0-9]+|#x[0-9a-fA-F]+|[A-Za-z][A-Za-z0-9]*);)|(?i:(?-u:\b){}(?-u:\b))",
            regex::escape(keyword)
        ))?;
        highlighted = re
            .replace_all(&highlighted, |caps: &Captures| match caps.get(1) {
                Some(entity) => entity.as_str().to_string(),
                None => format!(r#"<span class="highlight">{}</span>"#, &caps[0]),
            })
            .into_owned();
    }

    Ok(highlighted)
}
