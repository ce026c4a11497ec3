//! Capturing the live text selection as highlight input.
//!
//! The document renderer owns the real selection and layout; it is reached
//! through [`SelectionSource`] and the container rect handed to [`capture`].

use crate::geometry::{Rect, to_relative};

/// Snapshot of the user's current text selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    /// Selected text content
    pub text: String,
    /// Bounding rect of each selected range, in viewport coordinates
    pub ranges: Vec<Rect>,
}

impl Selection {
    pub fn new(text: impl Into<String>, ranges: Vec<Rect>) -> Self {
        Self {
            text: text.into(),
            ranges,
        }
    }

    /// A selection of a single range.
    pub fn single(text: impl Into<String>, rect: Rect) -> Self {
        Self::new(text, vec![rect])
    }

    /// True when there is no non-whitespace text selected.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Access to the live selection of the document view.
pub trait SelectionSource {
    /// Read the current selection. May be empty.
    fn selection(&self) -> Selection;

    /// Drop the live selection.
    fn clear_selection(&mut self);
}

/// A selection held in memory.
///
/// Stands in for a real document view in headless drivers.
#[derive(Debug, Clone, Default)]
pub struct StaticSelection {
    current: Selection,
}

impl StaticSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current selection.
    pub fn select(&mut self, selection: Selection) {
        self.current = selection;
    }
}

impl SelectionSource for StaticSelection {
    fn selection(&self) -> Selection {
        self.current.clone()
    }

    fn clear_selection(&mut self) {
        self.current = Selection::default();
    }
}

/// Text and container-relative geometry of a captured selection.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedSelection {
    pub text: String,
    pub rect: Rect,
}

/// Read the current selection and map it into container coordinates.
///
/// Returns `None` without touching the selection when it is blank, when
/// the container rect is missing or non-finite, or when the resulting rect
/// has no area. Only the first range is used for geometry when several
/// disjoint ranges are selected. On success the live selection is cleared.
pub fn capture<S>(source: &mut S, container: Option<Rect>) -> Option<CapturedSelection>
where
    S: SelectionSource + ?Sized,
{
    let selection = source.selection();
    if selection.is_blank() {
        log::debug!("Empty selection, nothing to highlight");
        return None;
    }

    let Some(container) = container.filter(Rect::is_finite) else {
        log::warn!("Container geometry unavailable, skipping highlight");
        return None;
    };

    let Some(&first) = selection.ranges.first() else {
        log::warn!("Selection has text but no range geometry, skipping highlight");
        return None;
    };
    if selection.ranges.len() > 1 {
        log::debug!(
            "Selection has {} ranges, using the first",
            selection.ranges.len()
        );
    }

    let rect = to_relative(first, container);
    if !rect.is_finite() || !rect.has_area() {
        log::debug!("Selection collapses to zero area, skipping highlight");
        return None;
    }

    source.clear_selection();
    Some(CapturedSelection {
        text: selection.text,
        rect,
    })
}
