//! The highlighter session: owned state plus message handling.
//!
//! A [`Highlighter`] owns the highlight store, the category catalog, the
//! active theme and the category chosen for new highlights. The document
//! view it is attached to is reached through a [`Host`].

use crate::config::{ConfigError, SessionConfig};
use crate::export::{Clipboard, ExportError, ExportFormat};
use crate::geometry::Rect;
use crate::message::Message;
use crate::model::{CategoryRegistry, Highlight, HighlightId};
use crate::overlay::{OverlayFrame, OverlayRenderer};
use crate::selection::{SelectionSource, capture};
use crate::store::HighlightStore;
use crate::theme::ThemeMode;

/// The document view a highlighter is attached to.
///
/// Bundles the capabilities the session consumes: the live selection, the
/// container's viewport geometry and a clipboard.
pub trait Host: SelectionSource + Clipboard {
    /// Bounding rect of the element hosting the document text, in viewport
    /// coordinates. `None` while the element is not mounted.
    fn container_rect(&self) -> Option<Rect>;
}

/// Highlighting state for one document-viewing session.
#[derive(Debug, Clone)]
pub struct Highlighter {
    store: HighlightStore,
    registry: CategoryRegistry,
    renderer: OverlayRenderer,
    theme: ThemeMode,
    current_category: String,
    /// Last rendered frame, reused while nothing changed
    frame: Option<OverlayFrame>,
}

impl Highlighter {
    /// Create an empty session.
    pub fn new(registry: CategoryRegistry, renderer: OverlayRenderer, theme: ThemeMode) -> Self {
        let current_category = registry.default_category().name.clone();
        Self {
            store: HighlightStore::new(),
            registry,
            renderer,
            theme,
            current_category,
            frame: None,
        }
    }

    /// Create an empty session from a loaded configuration.
    pub fn from_config(config: &SessionConfig) -> Result<Self, ConfigError> {
        let prefs = &config.preferences;
        let mut highlighter = Self::new(
            config.to_registry()?,
            OverlayRenderer::new(prefs.checked_opacity()?),
            prefs.theme(),
        );
        if let Some(name) = &prefs.default_category {
            highlighter.select_category(name);
        }
        Ok(highlighter)
    }

    pub fn store(&self) -> &HighlightStore {
        &self.store
    }

    pub fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    /// Category assigned to new highlights.
    pub fn current_category(&self) -> &str {
        &self.current_category
    }

    /// Snapshot of all highlights in display order.
    pub fn highlights(&self) -> Vec<Highlight> {
        self.store.list()
    }

    /// Apply a message.
    ///
    /// None of the messages can fail except clipboard export, whose error
    /// is logged rather than returned.
    pub fn update<H: Host + ?Sized>(&mut self, message: Message, host: &mut H) {
        match message {
            Message::HighlightSelection => {
                self.highlight_selection(host);
            }
            Message::ClearHighlights => self.clear(),
            Message::CopyToClipboard(format) => {
                if let Err(e) = self.copy_to_clipboard(format, host) {
                    log::error!("Failed to export highlights as {}: {}", format.id(), e);
                }
            }
            Message::DeleteHighlight(id) => {
                self.delete(id);
            }
            Message::CategorySelected(name) => self.select_category(&name),
            Message::ToggleTheme => self.set_theme(self.theme.toggled()),
            Message::SetTheme(theme) => self.set_theme(theme),
        }
    }

    /// Highlight the host's current selection with the current category.
    ///
    /// Returns `None` when there is nothing usable to highlight.
    pub fn highlight_selection<H: Host + ?Sized>(&mut self, host: &mut H) -> Option<Highlight> {
        let container = host.container_rect();
        let captured = capture(host, container)?;
        self.store.add(
            &captured.text,
            captured.rect,
            &self.current_category,
            &self.registry,
        )
    }

    /// Delete one highlight. Unknown IDs are ignored.
    pub fn delete(&mut self, id: HighlightId) -> bool {
        self.store.remove(id)
    }

    /// Delete all highlights.
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Choose the category for new highlights, falling back to the default
    /// for unknown names. Existing highlights keep their category.
    pub fn select_category(&mut self, name: &str) {
        let resolved = self.registry.resolve(name).name.clone();
        log::debug!("🏷️  Current category: {}", resolved);
        self.current_category = resolved;
    }

    /// Switch the theme. Existing overlays are recolored on the next render.
    pub fn set_theme(&mut self, theme: ThemeMode) {
        if self.theme != theme {
            log::debug!("🎨 Theme: {}", theme.name());
            self.theme = theme;
        }
    }

    /// Current overlay frame, rebuilt only when highlights or theme changed.
    pub fn frame(&mut self) -> &OverlayFrame {
        let frame = match self.frame.take() {
            Some(frame) if !self.store.is_dirty() && frame.theme == self.theme => frame,
            _ => {
                let frame = self
                    .renderer
                    .render(self.store.iter(), &self.registry, self.theme);
                self.store.clear_dirty();
                frame
            }
        };
        self.frame.insert(frame)
    }

    /// Format all highlights and hand the text to the clipboard.
    pub fn copy_to_clipboard<C: Clipboard + ?Sized>(
        &self,
        format: ExportFormat,
        clipboard: &mut C,
    ) -> Result<(), ExportError> {
        let text = format.format(&self.store.list())?;
        log::debug!(
            "📋 Copying {} highlights as {}",
            self.store.len(),
            format.display_name()
        );
        clipboard.write_text(text);
        Ok(())
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new(
            CategoryRegistry::default(),
            OverlayRenderer::default(),
            ThemeMode::default(),
        )
    }
}
