use crate::error::{IconsError, Result};
use regex::Regex;
use std::sync::OnceLock;

static WRAPPER_RE: OnceLock<Regex> = OnceLock::new();

fn wrapper_re() -> &'static Regex {
    // (?s) so the inner markup may span lines.
    WRAPPER_RE.get_or_init(|| Regex::new(r"(?s)<svg[^>]*>(.*)</svg>").unwrap())
}

/// Strip the outermost `<svg>` wrapper and return the trimmed inner markup.
///
/// This is deliberately not an SVG parser: providers ship well-formed files
/// and all we need is the drawable content to re-wrap in the Liquid template.
pub fn extract_inner(svg: &str, icon: &str) -> Result<String> {
    let inner = wrapper_re()
        .captures(svg)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
        .ok_or_else(|| IconsError::SvgParse(icon.to_string()))?;

    if inner.is_empty() {
        return Err(IconsError::SvgParse(icon.to_string()));
    }
    Ok(inner.to_string())
}
