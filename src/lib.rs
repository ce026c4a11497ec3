//! textmark - text highlighting core
//!
//! Captures a text selection inside a document view, stores it as a
//! categorized highlight and renders it back as a non-interactive overlay
//! rectangle plus a sidebar list. The document renderer, clipboard and
//! theme toggle are external; they plug in through [`Host`].

pub mod color;
pub mod config;
pub mod export;
pub mod geometry;
pub mod message;
pub mod model;
pub mod overlay;
pub mod selection;
pub mod session;
pub mod store;
pub mod theme;

pub use color::ColorSpec;
pub use config::SessionConfig;
pub use export::{Clipboard, ExportFormat};
pub use geometry::{Rect, to_relative};
pub use message::Message;
pub use model::{Category, CategoryRegistry, Highlight, HighlightId};
pub use overlay::{OverlayFrame, OverlayRect, OverlayRenderer, SidebarEntry};
pub use selection::{Selection, SelectionSource, StaticSelection, capture};
pub use session::{Highlighter, Host};
pub use store::HighlightStore;
pub use theme::ThemeMode;
