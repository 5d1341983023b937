// HTML side of the resume pipeline: keyword highlighting, bullet
// normalisation, entry/skill fragments and the final document template.
// Everything here builds strings; nothing touches I/O.

pub mod bullets;
pub mod escape;
pub mod fragments;
pub mod highlight;
pub mod template;

use std::borrow::Cow;

use crate::config::Config;

/// Per-request rendering switches, derived from `Config`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// HTML-escape user-supplied text before interpolation.
    pub escape_user_text: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            escape_user_text: true,
        }
    }
}

impl RenderOptions {
    /// Verbatim interpolation, byte-compatible with the legacy form output.
    pub fn legacy() -> Self {
        RenderOptions {
            escape_user_text: false,
        }
    }

    /// Prepares one piece of user text for interpolation into markup.
    pub fn user_text<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.escape_user_text {
            escape::escape_html(text)
        } else {
            Cow::Borrowed(text)
        }
    }
}

impl From<&Config> for RenderOptions {
    fn from(config: &Config) -> Self {
        if config.escape_user_text {
            RenderOptions::default()
        } else {
            RenderOptions::legacy()
        }
    }
}
