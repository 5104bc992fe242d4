//! Recovery of posts whose body holds an embedded JSON document
//!
//! An earlier generation pipeline sometimes stored the model's raw JSON reply
//! (`{"title": ..., "body": ...}`), occasionally inside a ```json fence, as
//! the post body. [`normalize_body`] pulls the title and body back out of such
//! text and leaves ordinary prose alone.

use serde::Serialize;

/// Marker that opens a fenced code block
const FENCE: &str = "```";

/// Title/body recovered from an embedded JSON body.
///
/// Either field may be missing from the embedded document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NormalizedContent {
    pub title: Option<String>,
    pub body: Option<String>,
}

/// Try to recover title and body from a raw post body.
///
/// Returns `None` when the text is empty, has no `{ ... }` span, or the span
/// does not parse as a JSON object. The span is always the outermost one,
/// from the first `{` to the last `}`, so prose containing several brace
/// groups is captured as a whole (and then usually fails to parse).
pub fn normalize_body(raw: &str) -> Option<NormalizedContent> {
    if raw.is_empty() {
        return None;
    }

    let mut text = raw.trim();

    if text.starts_with(FENCE) {
        if let Some(span) = brace_span(text) {
            text = span;
        }
    }

    let candidate = brace_span(text)?;

    let value: serde_json::Value = match serde_json::from_str(candidate) {
        Ok(value) => value,
        Err(e) => {
            log::debug!("Body looks like JSON but does not parse, keeping raw: {}", e);
            return None;
        }
    };

    let object = value.as_object()?;

    Some(NormalizedContent {
        title: string_field(object, "title"),
        body: string_field(object, "body"),
    })
}

/// Slice from the first `{` through the last `}`, if they are in order
fn brace_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end <= start {
        return None;
    }
    Some(&text[start..=end])
}

fn string_field(object: &serde_json::Map<String, serde_json::Value>, key: &str) -> Option<String> {
    object.get(key)?.as_str().map(str::to_string)
}
