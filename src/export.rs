//! Exporting the highlight list as text.
//!
//! Export only formats a string and hands it to a [`Clipboard`]; whether the
//! write succeeds is the clipboard's business.

use serde::Serialize;
use thiserror::Error;

use crate::geometry::Rect;
use crate::model::{Highlight, HighlightId};

/// Errors that can occur while formatting an export.
#[derive(Error, Debug)]
pub enum ExportError {
    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Write-only clipboard capability.
///
/// Fire-and-forget: implementations surface or swallow their own failures.
pub trait Clipboard {
    fn write_text(&mut self, text: String);
}

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// `Category: "text"` entries separated by blank lines
    #[default]
    PlainText,
    /// Pretty-printed JSON array
    Json,
}

impl ExportFormat {
    /// Unique identifier for this format.
    pub fn id(&self) -> &'static str {
        match self {
            ExportFormat::PlainText => "text",
            ExportFormat::Json => "json",
        }
    }

    /// Human-readable name for UI display.
    pub fn display_name(&self) -> &'static str {
        match self {
            ExportFormat::PlainText => "Plain text",
            ExportFormat::Json => "JSON",
        }
    }

    /// File extension used when saving this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::PlainText => "txt",
            ExportFormat::Json => "json",
        }
    }

    /// Get all export formats.
    pub fn all() -> &'static [ExportFormat] {
        &[ExportFormat::PlainText, ExportFormat::Json]
    }

    /// Format highlights, given in insertion order.
    pub fn format(&self, highlights: &[Highlight]) -> Result<String, ExportError> {
        match self {
            ExportFormat::PlainText => Ok(format_plain_text(highlights)),
            ExportFormat::Json => format_json(highlights),
        }
    }
}

/// Plain-text export: one `Category: "text"` entry per highlight, separated
/// by a blank line.
pub fn format_plain_text(highlights: &[Highlight]) -> String {
    highlights
        .iter()
        .map(|h| format!("{}: \"{}\"", h.category(), h.text()))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[derive(Serialize)]
struct JsonEntry<'a> {
    id: HighlightId,
    text: &'a str,
    category: &'a str,
    position: Rect,
    created_at_ms: u64,
}

fn format_json(highlights: &[Highlight]) -> Result<String, ExportError> {
    let entries: Vec<JsonEntry<'_>> = highlights
        .iter()
        .map(|h| JsonEntry {
            id: h.id(),
            text: h.text(),
            category: h.category(),
            position: h.position(),
            created_at_ms: h.created_at_ms(),
        })
        .collect();
    Ok(serde_json::to_string_pretty(&entries)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CategoryRegistry;
    use crate::store::HighlightStore;

    fn sample() -> Vec<Highlight> {
        let registry = CategoryRegistry::default();
        let mut store = HighlightStore::new();
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        store.add("alpha", rect, "Important", &registry).unwrap();
        store.add("beta gamma", rect, "Note", &registry).unwrap();
        store.list()
    }

    #[test]
    fn test_plain_text_format() {
        assert_eq!(
            format_plain_text(&sample()),
            "Important: \"alpha\"\n\nNote: \"beta gamma\""
        );
    }

    #[test]
    fn test_plain_text_empty_and_single() {
        assert_eq!(format_plain_text(&[]), "");
        let highlights = sample();
        assert_eq!(
            format_plain_text(&highlights[..1]),
            "Important: \"alpha\""
        );
    }

    #[test]
    fn test_json_format() {
        let json = ExportFormat::Json.format(&sample()).expect("JSON export");
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["text"], "alpha");
        assert_eq!(entries[0]["category"], "Important");
        assert_eq!(entries[1]["category"], "Note");
        assert_eq!(entries[1]["position"]["width"], 10.0);
        assert!(entries[0]["id"].is_u64());
    }

    #[test]
    fn test_format_metadata() {
        assert_eq!(ExportFormat::default(), ExportFormat::PlainText);
        assert_eq!(ExportFormat::PlainText.extension(), "txt");
        assert_eq!(ExportFormat::Json.id(), "json");
        assert_eq!(ExportFormat::all().len(), 2);
    }
}
