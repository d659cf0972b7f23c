//! Cleanup of raw model output.
//!
//! The model is told not to use markdown fences but sometimes does anyway.
//! Fence layers (an opener, a closer, or both) are peeled off until none are
//! left; anything else is returned as-is apart from surrounding whitespace.

use crate::tailoring::format::OutputFormat;

const FENCE: &str = "```";

/// Strips leading ```` ```<tag> ```` openers and trailing ```` ``` ```` closers,
/// then trims. Stops at the first pass that changes nothing, so running it on
/// its own output is a no-op.
pub fn sanitize_output(raw: &str, format: OutputFormat) -> String {
    let mut text = raw.trim();
    loop {
        let stripped = strip_fence_layer(text, format.fence_tags());
        if stripped.len() == text.len() {
            break;
        }
        text = stripped;
    }
    text.to_string()
}

fn strip_fence_layer<'a>(text: &'a str, tags: &[&str]) -> &'a str {
    let text = strip_opening_fence(text, tags);
    let text = text.strip_suffix(FENCE).unwrap_or(text);
    text.trim()
}

/// An opener is three backticks followed by one of `tags` (any case) and then
/// whitespace or the end of input, or by a bare line break. Fences naming some
/// other language, `text` for LaTeX output included, are left in place.
fn strip_opening_fence<'a>(text: &'a str, tags: &[&str]) -> &'a str {
    let Some(rest) = text.strip_prefix(FENCE) else {
        return text;
    };

    for tag in tags {
        let Some(head) = rest.get(..tag.len()) else {
            continue;
        };
        let after = &rest[tag.len()..];
        if head.eq_ignore_ascii_case(tag)
            && (after.is_empty() || after.starts_with(char::is_whitespace))
        {
            return after;
        }
    }

    if rest.starts_with('\n') || rest.starts_with("\r\n") {
        return rest;
    }
    text
}
