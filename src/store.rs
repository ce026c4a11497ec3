//! Ordered storage for the highlights of one viewing session.

use crate::geometry::Rect;
use crate::model::{CategoryRegistry, Highlight, HighlightId, now_millis};

/// Storage for highlights, in insertion order.
///
/// Insertion order is the display order: later highlights stack on top of
/// earlier ones and appear below them in the sidebar.
#[derive(Debug, Clone)]
pub struct HighlightStore {
    highlights: Vec<Highlight>,
    /// Counter for generating unique highlight IDs.
    next_id: u64,
    /// Dirty flag - set whenever the contents change.
    /// Used to avoid rebuilding the overlay on every render.
    dirty: bool,
}

impl HighlightStore {
    pub fn new() -> Self {
        Self {
            highlights: Vec::new(),
            next_id: 1,
            dirty: true, // Start dirty so the first overlay build happens
        }
    }

    /// Check if the store has been modified since last clear_dirty().
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the dirty flag. Call after rebuilding the overlay.
    #[inline]
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    #[inline]
    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Create a highlight and append it to the store.
    ///
    /// `category` is resolved through the registry; unknown names fall back
    /// to the default category. `position` is container-relative.
    ///
    /// Returns `None` without consuming an ID when the text is blank or the
    /// rect is non-finite, negative or has no area.
    pub fn add(
        &mut self,
        text: &str,
        position: Rect,
        category: &str,
        registry: &CategoryRegistry,
    ) -> Option<Highlight> {
        if text.trim().is_empty() {
            log::debug!("Skipping highlight with blank text");
            return None;
        }
        if !position.is_finite() || !position.has_valid_size() || !position.has_area() {
            log::warn!("Skipping highlight with invalid position {:?}", position);
            return None;
        }

        let id = HighlightId::new(self.next_id);
        self.next_id += 1;

        let category = registry.resolve(category).name.clone();
        let highlight = Highlight::new(id, text.to_string(), position, category, now_millis());
        log::debug!(
            "✏️  Added highlight {} [{}] at ({:.1}, {:.1}) {:.1}x{:.1}",
            id,
            highlight.category(),
            position.left,
            position.top,
            position.width,
            position.height
        );

        self.highlights.push(highlight.clone());
        self.mark_dirty();
        Some(highlight)
    }

    /// Remove a highlight by ID.
    ///
    /// Returns whether anything was removed. Unknown IDs are a no-op, so a
    /// repeated delete is harmless.
    pub fn remove(&mut self, id: HighlightId) -> bool {
        match self.highlights.iter().position(|h| h.id() == id) {
            Some(index) => {
                self.highlights.remove(index);
                self.mark_dirty();
                log::debug!("🗑️  Removed highlight {}", id);
                true
            }
            None => {
                log::debug!("Highlight {} not found, nothing to remove", id);
                false
            }
        }
    }

    /// Clear all highlights.
    pub fn clear(&mut self) {
        if !self.highlights.is_empty() {
            log::debug!("🧹 Cleared {} highlights", self.highlights.len());
            self.mark_dirty();
        }
        self.highlights.clear();
    }

    /// Snapshot of all highlights in insertion order.
    pub fn list(&self) -> Vec<Highlight> {
        self.highlights.clone()
    }

    /// Get all highlights in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Highlight> {
        self.highlights.iter()
    }

    /// Get a highlight by ID.
    pub fn get(&self, id: HighlightId) -> Option<&Highlight> {
        self.highlights.iter().find(|h| h.id() == id)
    }

    /// Get the number of highlights.
    pub fn len(&self) -> usize {
        self.highlights.len()
    }

    /// Check if there are no highlights.
    pub fn is_empty(&self) -> bool {
        self.highlights.is_empty()
    }
}

impl Default for HighlightStore {
    fn default() -> Self {
        Self::new()
    }
}
