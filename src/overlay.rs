//! Overlay and sidebar rendering.
//!
//! Turns the stored highlights into plain draw data: one absolutely
//! positioned rectangle per highlight, layered above the document text,
//! plus the entries of the sidebar list. Colors are looked up here, at
//! render time, from the category and the active theme.

use crate::color::ColorSpec;
use crate::geometry::Rect;
use crate::message::Message;
use crate::model::{CategoryRegistry, Highlight, HighlightId};
use crate::theme::ThemeMode;

/// Default overlay opacity, so the text beneath stays readable.
pub const DEFAULT_OVERLAY_OPACITY: f32 = 0.7;

/// Stacking level of the document text. Overlays always sit above it.
pub const TEXT_LAYER_Z: u32 = 0;

/// A highlight rectangle ready to be drawn.
///
/// Overlays never take pointer or selection events; the text underneath
/// has to stay selectable.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayRect {
    /// Highlight this rect belongs to
    pub highlight_id: HighlightId,
    /// Position relative to the container's top-left corner
    pub rect: Rect,
    /// Fill color for the active theme
    pub color: ColorSpec,
    /// Fill opacity (0.0-1.0)
    pub opacity: f32,
    /// Stacking order; later highlights get higher values
    pub z_index: u32,
}

impl OverlayRect {
    /// Whether the overlay reacts to pointer input. Always false.
    pub fn is_interactive(&self) -> bool {
        false
    }

    /// Inline CSS for an absolutely positioned overlay element.
    pub fn css_style(&self) -> String {
        format!(
            "position:absolute;top:{}px;left:{}px;width:{}px;height:{}px;\
             background-color:{};pointer-events:none;user-select:none;z-index:{}",
            self.rect.top,
            self.rect.left,
            self.rect.width,
            self.rect.height,
            self.color.to_css_rgba(self.opacity),
            self.z_index
        )
    }
}

/// One row of the sidebar list.
#[derive(Debug, Clone, PartialEq)]
pub struct SidebarEntry {
    pub id: HighlightId,
    /// Category label
    pub category: String,
    /// Highlighted text wrapped in double quotes
    pub quoted_text: String,
    /// Message sent by the row's delete control
    pub on_delete: Message,
}

impl SidebarEntry {
    /// Single-line label, e.g. `Note: "some text"`.
    pub fn label(&self) -> String {
        format!("{}: {}", self.category, self.quoted_text)
    }
}

/// Everything needed to draw the highlights for one theme.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayFrame {
    pub theme: ThemeMode,
    /// Overlay rects in insertion order (bottom to top)
    pub rects: Vec<OverlayRect>,
    /// Sidebar rows in insertion order
    pub sidebar: Vec<SidebarEntry>,
}

impl OverlayFrame {
    /// The sidebar section is only shown once something is highlighted.
    pub fn show_sidebar(&self) -> bool {
        !self.sidebar.is_empty()
    }
}

/// Builds overlay frames from highlights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayRenderer {
    opacity: f32,
}

impl OverlayRenderer {
    /// Create a renderer with the given fill opacity (clamped to 0.0-1.0).
    /// NaN and infinities fall back to [`DEFAULT_OVERLAY_OPACITY`].
    pub fn new(opacity: f32) -> Self {
        let opacity = if opacity.is_finite() {
            opacity.clamp(0.0, 1.0)
        } else {
            log::warn!(
                "Overlay opacity {} is not finite, using {}",
                opacity,
                DEFAULT_OVERLAY_OPACITY
            );
            DEFAULT_OVERLAY_OPACITY
        };
        Self { opacity }
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Render highlights, given in insertion order, for the active theme.
    pub fn render<'a, I>(
        &self,
        highlights: I,
        registry: &CategoryRegistry,
        theme: ThemeMode,
    ) -> OverlayFrame
    where
        I: IntoIterator<Item = &'a Highlight>,
    {
        let mut rects = Vec::new();
        let mut sidebar = Vec::new();

        for (z_index, highlight) in (TEXT_LAYER_Z + 1..).zip(highlights) {
            rects.push(OverlayRect {
                highlight_id: highlight.id(),
                rect: highlight.position(),
                color: registry.color_for(highlight.category(), theme),
                opacity: self.opacity,
                z_index,
            });
            sidebar.push(SidebarEntry {
                id: highlight.id(),
                category: highlight.category().to_string(),
                quoted_text: format!("\"{}\"", highlight.text()),
                on_delete: Message::DeleteHighlight(highlight.id()),
            });
        }

        log::trace!("Rendered {} overlays ({})", rects.len(), theme.name());
        OverlayFrame {
            theme,
            rects,
            sidebar,
        }
    }
}

impl Default for OverlayRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_OVERLAY_OPACITY)
    }
}
