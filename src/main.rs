//! Headless demo of the textmark highlighting core.
//!
//! Lays the sample document out on a fixed monospace grid, feeds a few
//! synthetic selections through a [`Highlighter`] and prints the resulting
//! overlays, sidebar and clipboard export.
//!
//! Usage: `textmark-demo [config.json]`

use std::path::Path;

use textmark::{
    Clipboard, ExportFormat, Highlighter, Host, Message, Rect, Selection, SelectionSource,
    SessionConfig, StaticSelection,
};

const SAMPLE_TEXT: &str = "three funds: one fund that is actively investing, \
one fund that is harvesting, and one fund that is raising capital.";

/// Glyph advance of the demo grid, in pixels
const CHAR_WIDTH: f32 = 8.0;
/// Line height of the demo grid, in pixels
const LINE_HEIGHT: f32 = 20.0;
/// Inner padding between container edge and text
const PADDING: f32 = 24.0;

/// Document view backed by an in-memory selection and stdout clipboard.
struct DemoHost {
    selection: StaticSelection,
    container: Option<Rect>,
}

impl DemoHost {
    /// Select the first occurrence of `needle`, with viewport geometry from
    /// the monospace grid. Selects nothing if the text is absent.
    fn select_text(&mut self, needle: &str) {
        let (Some(container), Some(start)) = (self.container, SAMPLE_TEXT.find(needle)) else {
            self.selection.select(Selection::default());
            return;
        };

        let column = SAMPLE_TEXT[..start].chars().count() as f32;
        let width = needle.chars().count() as f32 * CHAR_WIDTH;
        let rect = Rect::new(
            container.top + PADDING,
            container.left + PADDING + column * CHAR_WIDTH,
            width,
            LINE_HEIGHT,
        );
        self.selection.select(Selection::single(needle, rect));
    }

    fn select_raw(&mut self, text: &str) {
        self.selection.select(Selection::single(
            text,
            Rect::new(0.0, 0.0, CHAR_WIDTH, LINE_HEIGHT),
        ));
    }
}

impl SelectionSource for DemoHost {
    fn selection(&self) -> Selection {
        self.selection.selection()
    }

    fn clear_selection(&mut self) {
        self.selection.clear_selection();
    }
}

impl Clipboard for DemoHost {
    fn write_text(&mut self, text: String) {
        println!("--- clipboard ---\n{text}\n-----------------");
    }
}

impl Host for DemoHost {
    fn container_rect(&self) -> Option<Rect> {
        self.container
    }
}

fn load_config() -> Result<SessionConfig, String> {
    match std::env::args_os().nth(1) {
        Some(path) => SessionConfig::load_from_path(Path::new(&path))
            .map_err(|e| format!("Failed to load config {:?}: {}", path, e)),
        None => Ok(SessionConfig::load_from_default_path().unwrap_or_default()),
    }
}

fn print_frame(highlighter: &mut Highlighter) {
    let frame = highlighter.frame();
    println!("[{} theme] {} overlays", frame.theme.name(), frame.rects.len());
    for rect in &frame.rects {
        println!("  {} {}", rect.highlight_id, rect.css_style());
    }
    if frame.show_sidebar() {
        println!("Highlighted Text");
        for entry in &frame.sidebar {
            println!("  - {} [delete: {}]", entry.label(), entry.id);
        }
    }
}

fn main() {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    env_logger::Builder::new()
        .filter_level(config.preferences.log_level.to_level_filter())
        .parse_default_env()
        .init();

    let mut highlighter = match Highlighter::from_config(&config) {
        Ok(highlighter) => highlighter,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };
    log::info!(
        "Started {} with {} categories",
        config.app_name,
        highlighter.registry().len()
    );

    let mut host = DemoHost {
        selection: StaticSelection::new(),
        container: Some(Rect::new(100.0, 50.0, 800.0, 600.0)),
    };

    host.select_text("three funds");
    highlighter.update(Message::HighlightSelection, &mut host);

    host.select_text("actively investing");
    highlighter.update(Message::CategorySelected("Note".to_string()), &mut host);
    highlighter.update(Message::HighlightSelection, &mut host);

    // Whitespace-only selection is ignored
    host.select_raw("   ");
    highlighter.update(Message::HighlightSelection, &mut host);

    host.select_text("raising capital");
    highlighter.update(Message::CategorySelected("Question".to_string()), &mut host);
    highlighter.update(Message::HighlightSelection, &mut host);

    print_frame(&mut highlighter);

    highlighter.update(Message::ToggleTheme, &mut host);
    print_frame(&mut highlighter);

    if let Some(first) = highlighter.frame().sidebar.first().map(|e| e.on_delete.clone()) {
        highlighter.update(first, &mut host);
    }

    for &format in ExportFormat::all() {
        println!("Copy as {} (.{})", format.display_name(), format.extension());
        highlighter.update(Message::CopyToClipboard(format), &mut host);
    }

    highlighter.update(Message::ClearHighlights, &mut host);
    print_frame(&mut highlighter);
}
