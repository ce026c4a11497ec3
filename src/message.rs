//! Message types for the highlighter.
//!
//! All user actions are represented as messages in the Elm architecture
//! style and applied through `Highlighter::update`.

use crate::export::ExportFormat;
use crate::model::HighlightId;
use crate::theme::ThemeMode;

/// Messages that can be sent to update highlighter state.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // Toolbar
    /// Turn the current selection into a highlight
    HighlightSelection,
    /// Remove every highlight
    ClearHighlights,
    /// Copy the highlight list to the clipboard
    CopyToClipboard(ExportFormat),

    // Sidebar
    /// Delete button of one sidebar entry
    DeleteHighlight(HighlightId),

    // Category picker
    /// Category chosen for new highlights, by name
    CategorySelected(String),

    // Appearance
    /// Flip between light and dark mode
    ToggleTheme,
    /// Set the theme explicitly
    SetTheme(ThemeMode),
}
