// Text-side stages of the resume pipeline: keyword extraction, entry and
// section parsing, skill lists, HTML stripping. Pure functions over &str.

pub mod entries;
pub mod html;
pub mod keywords;
pub mod sections;
pub mod skills;
