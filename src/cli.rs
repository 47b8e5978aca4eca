//! Command-line front end.
//!
//! Boots a viewer over one file, replays the requested input through the
//! action builders and prints the visible window.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::Serialize;

use crate::clipboard::{ClipboardHandler, ClipboardSink, MemoryClipboard};
use crate::config::Config;
use crate::geometry::{row_count, ScrollPolicy};
use crate::hex::{format_offset, to_display_char, HexDocument};
use crate::viewer::{
    apply_effects, dispatch, Focus, HistoryEntry, RenderEffect, SearchStep, Store, Viewer,
};

/// Inspect a file as a hex/ASCII grid
#[derive(Parser, Debug)]
#[command(name = "hexlens", version, about = "Inspect a file as a hex/ASCII grid")]
pub struct CliArgs {
    /// File to open
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Config file (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// FILE holds space-separated hex pairs instead of raw bytes
    #[arg(long)]
    pub hex_text: bool,

    /// Fixed bytes per row
    #[arg(long, value_name = "N")]
    pub columns: Option<usize>,

    /// Visible rows
    #[arg(long, value_name = "N", default_value_t = 16)]
    pub rows: u32,

    /// Offset to jump to, e.g. 0x1F0
    #[arg(long, value_name = "OFFSET")]
    pub goto: Option<String>,

    /// Scroll policy used by --goto
    #[arg(long, value_name = "POLICY", default_value = "top", value_parser = parse_policy)]
    pub policy: ScrollPolicy,

    /// Search for a hex or text pattern
    #[arg(long, value_name = "PATTERN")]
    pub search: Option<String>,

    /// Step to the next search result N times
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub next: usize,

    /// Comma-separated keys, e.g. down,shift+right,pagedown
    #[arg(long, value_name = "SEQ", value_delimiter = ',')]
    pub keys: Vec<String>,

    /// Copy the selection (or cursor byte) to the clipboard
    #[arg(long)]
    pub copy: bool,

    /// Print the store as JSON
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

fn parse_policy(value: &str) -> Result<ScrollPolicy, String> {
    ScrollPolicy::parse(value).ok_or_else(|| {
        let names: Vec<&str> = ScrollPolicy::ALL.iter().map(|p| p.name()).collect();
        format!("unknown policy '{}' (expected one of: {})", value, names.join(", "))
    })
}

/// Parse a key name such as `down`, `shift+right` or `ctrl+c`.
pub fn parse_key(name: &str) -> Option<KeyEvent> {
    let mut modifiers = KeyModifiers::NONE;
    let mut parts: Vec<&str> = name.trim().split('+').collect();
    let key = parts.pop()?.trim().to_ascii_lowercase();

    for part in parts {
        match part.trim().to_ascii_lowercase().as_str() {
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "alt" => modifiers |= KeyModifiers::ALT,
            "cmd" | "super" => modifiers |= KeyModifiers::SUPER,
            _ => return None,
        }
    }

    let code = match key.as_str() {
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "pageup" | "pgup" => KeyCode::PageUp,
        "pagedown" | "pgdn" => KeyCode::PageDown,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        single if single.chars().count() == 1 => KeyCode::Char(single.chars().next()?),
        _ => return None,
    };
    Some(KeyEvent::new(code, modifiers))
}

#[derive(Serialize)]
struct Report<'a> {
    store: &'a Store,
    history: Vec<&'a HistoryEntry>,
}

/// Run the CLI and return what it prints on stdout.
pub fn run(args: &CliArgs) -> Result<String> {
    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "falling back to default config");
            Config::default()
        }),
    };
    if args.columns.is_some() {
        config.layout.columns = args.columns;
    }
    config.validate()?;

    let mut viewer = open_viewer(&args.file, args.hex_text, &config)?;

    let width = config
        .layout
        .columns
        .map(|columns| columns as u32 * config.layout.cell_width_px);
    let height = Some(args.rows.max(1) * config.layout.row_height_px);
    let location = match &args.goto {
        Some(text) => Some(
            dispatch::parse_offset(text, config.offsets.base)
                .with_context(|| format!("invalid offset '{}'", text))?,
        ),
        None => None,
    };

    let mut effects = viewer.boot(location, width, height);
    effects.extend(viewer.dispatch(dispatch::focus(Focus::Body)));

    if location.is_some() && args.policy != ScrollPolicy::Top {
        // The deep link placed the cursor and scrolled it to the top; the
        // policy starts over from the first row.
        let actions = [
            dispatch::scroll_to_index(0, ScrollPolicy::Top),
            location.and_then(|offset| {
                dispatch::scroll_to_index(i64::try_from(offset).ok()?, args.policy)
            }),
        ];
        effects.extend(viewer.dispatch_all(actions.into_iter().flatten()));
    }

    if let Some(pattern) = &args.search {
        let now = Instant::now();
        viewer.submit_search(pattern.clone(), now);
        effects.extend(viewer.flush(now));
        for _ in 0..args.next {
            match dispatch::search_navigate(viewer.store(), SearchStep::Next) {
                Some(action) => effects.extend(viewer.dispatch(action)),
                None => break,
            }
        }
    }

    for name in &args.keys {
        let key = parse_key(name).with_context(|| format!("unknown key '{}'", name))?;
        match dispatch::body_key_down(viewer.store(), &key) {
            Some(action) => effects.extend(viewer.submit(action, Instant::now())),
            None => tracing::debug!(key = %name, "key ignored"),
        }
    }
    effects.extend(viewer.flush(Instant::now()));

    if args.copy {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        if let Some(action) = dispatch::copy_key_down(viewer.store(), &key) {
            effects.extend(viewer.dispatch(action));
        }
    }
    tracing::debug!(effects = effects.len(), "input replayed");

    let copied = viewer.store().copy.text.clone();
    if copied.is_some() {
        let mut clipboard = system_clipboard();
        let mut view: Vec<RenderEffect> = Vec::new();
        if apply_effects(&effects, &mut view, clipboard.as_mut()).is_err() {
            tracing::warn!("copied text was not delivered to the clipboard");
        }
    }

    if args.json {
        let report = Report {
            store: viewer.store(),
            history: viewer.history().entries().collect(),
        };
        return Ok(serde_json::to_string_pretty(&report)?);
    }

    let mut out = render_window(viewer.store(), viewer.document())?;
    out.push_str(&status_line(viewer.store()));
    if let Some(text) = copied {
        out.push_str(&format!("\ncopied: {}", text));
    }
    Ok(out)
}

fn system_clipboard() -> Box<dyn ClipboardSink> {
    match ClipboardHandler::new() {
        Ok(handler) => Box::new(handler),
        Err(err) => {
            tracing::warn!(error = %err, "using in-memory clipboard");
            Box::new(MemoryClipboard::default())
        }
    }
}

fn open_viewer(path: &Path, hex_text: bool, config: &Config) -> Result<Viewer> {
    let bytes = std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "document loaded");

    if hex_text {
        let mut viewer = Viewer::with_config(HexDocument::default(), config);
        viewer.load_hex_text(&String::from_utf8_lossy(&bytes));
        Ok(viewer)
    } else {
        Ok(Viewer::with_config(HexDocument::from_bytes(bytes), config))
    }
}

/// Offset / hex / ASCII listing of the visible rows.
///
/// Cell prefixes: `>` cursor, `*` selected, `+` search match.
pub fn render_window(store: &Store, document: &HexDocument) -> Result<String> {
    let columns = store.layout.column.size;
    let first_row = store.scroll.index;
    let last_row = (first_row + store.layout.row.size).min(row_count(document.len(), columns));
    let selection = store.selection.ordered();
    let match_len = store.search.pattern_len.max(1);

    let mut out = String::new();
    for row in first_row..last_row {
        let start = row * columns;
        out.push_str(&format_offset(
            start,
            store.settings.offset_base,
            store.settings.offset_width,
        )?);
        out.push(' ');

        let mut ascii = String::with_capacity(columns);
        for index in start..start + columns {
            match document.byte(index) {
                Some(byte) => {
                    let is_match = store
                        .search
                        .results
                        .iter()
                        .any(|&m| index >= m && index < m + match_len);
                    let marker = if store.cursor.index == Some(index) {
                        '>'
                    } else if selection.is_some_and(|(s, e)| index >= s && index <= e) {
                        '*'
                    } else if is_match {
                        '+'
                    } else {
                        ' '
                    };
                    out.push(marker);
                    out.push_str(document.hex_value(index));
                    ascii.push(to_display_char(byte));
                }
                None => out.push_str("   "),
            }
        }
        out.push_str("  |");
        out.push_str(&ascii);
        out.push_str("|\n");
    }
    Ok(out)
}

fn status_line(store: &Store) -> String {
    let total_rows = row_count(store.layout.byte_count, store.layout.column.size);
    let mut parts = vec![format!(
        "rows {}-{} of {}",
        store.scroll.index,
        (store.scroll.index + store.layout.row.size).min(total_rows),
        total_rows
    )];
    if let Some(cursor) = store.cursor.index {
        parts.push(format!("cursor {:#x}", cursor));
    }
    if let Some((start, end)) = store.selection.ordered() {
        parts.push(format!("selection {:#x}-{:#x}", start, end));
    }
    if let Some(selected) = store.search.selected_result {
        parts.push(format!(
            "match {}/{}",
            selected + 1,
            store.search.match_count()
        ));
    }
    if store.loading.is_invalid_data {
        parts.push("invalid data".to_string());
    }
    parts.join("  ")
}
