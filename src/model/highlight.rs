//! Highlight entity.

use std::fmt;

use serde::Serialize;

use crate::geometry::Rect;

/// Unique identifier for a highlight.
///
/// Allocated from a per-store counter, so two highlights created within the
/// same millisecond still get distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct HighlightId(u64);

impl HighlightId {
    pub(crate) fn new(value: u64) -> Self {
        Self(value)
    }

    /// Raw numeric value.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for HighlightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hl-{}", self.0)
    }
}

/// A recorded text selection with its category and overlay position.
///
/// Immutable once created: the store hands out clones or shared references
/// only, and fields are read through accessors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Highlight {
    id: HighlightId,
    text: String,
    position: Rect,
    category: String,
    created_at_ms: u64,
}

impl Highlight {
    pub(crate) fn new(
        id: HighlightId,
        text: String,
        position: Rect,
        category: String,
        created_at_ms: u64,
    ) -> Self {
        Self {
            id,
            text,
            position,
            category,
            created_at_ms,
        }
    }

    pub fn id(&self) -> HighlightId {
        self.id
    }

    /// The selected text exactly as captured.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Overlay rectangle, relative to the container's top-left corner.
    pub fn position(&self) -> Rect {
        self.position
    }

    /// Name of the (resolved) category.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Wall-clock creation time in milliseconds since the Unix epoch.
    pub fn created_at_ms(&self) -> u64 {
        self.created_at_ms
    }
}

/// Current wall-clock time in milliseconds since the Unix epoch.
pub(crate) fn now_millis() -> u64 {
    let duration = web_time::SystemTime::now()
        .duration_since(web_time::SystemTime::UNIX_EPOCH)
        .unwrap_or_default();
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        assert_eq!(HighlightId::new(7).to_string(), "hl-7");
        assert_eq!(HighlightId::new(7).get(), 7);
    }

    #[test]
    fn test_id_serializes_as_number() {
        let json = serde_json::to_string(&HighlightId::new(42)).unwrap();
        assert_eq!(json, "42");
    }

    #[test]
    fn test_highlight_serializes_one_way() {
        let highlight = Highlight::new(
            HighlightId::new(3),
            "quoted".to_string(),
            Rect::new(5.0, 6.0, 7.0, 8.0),
            "Question".to_string(),
            12,
        );

        let value = serde_json::to_value(&highlight).unwrap();
        assert_eq!(value["id"], 3);
        assert_eq!(value["category"], "Question");
        assert_eq!(value["position"]["height"], 8.0);
    }

    #[test]
    fn test_accessors() {
        let rect = Rect::new(1.0, 2.0, 3.0, 4.0);
        let highlight = Highlight::new(
            HighlightId::new(1),
            "  padded ".to_string(),
            rect,
            "Note".to_string(),
            1_700_000_000_000,
        );

        assert_eq!(highlight.id(), HighlightId::new(1));
        assert_eq!(highlight.text(), "  padded ");
        assert_eq!(highlight.position(), rect);
        assert_eq!(highlight.category(), "Note");
        assert_eq!(highlight.created_at_ms(), 1_700_000_000_000);
    }

    #[test]
    fn test_now_millis_is_recent() {
        // 2020-01-01 in ms
        assert!(now_millis() > 1_577_836_800_000);
    }
}
