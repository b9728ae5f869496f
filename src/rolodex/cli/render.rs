//! # Rendering
//!
//! Turns `CmdResult` data into terminal text. Layout math (column widths,
//! padding) is done on plain strings with Unicode display widths, and styling
//! is applied afterwards so escape codes never skew alignment.

use super::styles::ROLODEX_THEME;
use colored::Colorize;
use rolodex::api::{CmdMessage, MessageLevel};
use rolodex::config::RolodexConfig;
use rolodex::index::DisplayEntry;
use rolodex::model::FavoriteMarker;
use unicode_width::UnicodeWidthStr;

const COLUMN_GAP: &str = "  ";
const EMPTY_LIST: &str = "No entries found.";
const LAST_COLUMN: usize = 4;

/// Renders entries as an aligned table with a header row.
pub fn render_entry_table(entries: &[DisplayEntry], marker: &FavoriteMarker) -> String {
    if entries.is_empty() {
        return format!("{}\n", ROLODEX_THEME.muted.apply_to(EMPTY_LIST));
    }

    let theme = &*ROLODEX_THEME;
    let headers = ["#", marker.as_str(), "Name", "Phone", "Email"];

    let rows: Vec<[String; 5]> = entries
        .iter()
        .map(|de| {
            [
                de.index.to_string(),
                marker.render(de.entry.favorite).to_string(),
                de.entry.name.clone(),
                de.entry.phone.clone(),
                de.entry.email.clone(),
            ]
        })
        .collect();

    let mut widths = headers.map(|h| h.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.width());
        }
    }

    let mut output = String::new();

    let header_cells: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(col, h)| {
            let padded = pad_cell(h, widths[col], col);
            theme.header.apply_to(padded).to_string()
        })
        .collect();
    output.push_str(header_cells.join(COLUMN_GAP).trim_end());
    output.push('\n');

    for row in &rows {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(col, cell)| {
                let padded = pad_cell(cell, widths[col], col);
                match col {
                    0 => theme.index.apply_to(padded).to_string(),
                    1 => theme.favorite.apply_to(padded).to_string(),
                    2 => theme.name.apply_to(padded).to_string(),
                    _ => padded,
                }
            })
            .collect();
        output.push_str(cells.join(COLUMN_GAP).trim_end());
        output.push('\n');
    }

    output
}

/// Index column is right-aligned, the last column is never padded.
fn pad_cell(text: &str, width: usize, col: usize) -> String {
    let padding = " ".repeat(width.saturating_sub(text.width()));
    match col {
        0 => format!("{}{}", padding, text),
        LAST_COLUMN => text.to_string(),
        _ => format!("{}{}", text, padding),
    }
}

/// One `key = value` line per config entry.
pub fn render_config(config: &RolodexConfig, key: Option<&str>) -> String {
    let mut output = String::new();
    for (k, v) in config.list_all() {
        if key.is_some_and(|wanted| wanted != k) {
            continue;
        }
        if key.is_some() {
            output.push_str(&format!("{}\n", v));
        } else {
            output.push_str(&format!("{} = {}\n", k, v));
        }
    }
    output
}

/// Renders messages, one per line. Info messages only show when `verbose`.
pub fn render_messages(messages: &[CmdMessage], verbose: bool) -> String {
    let mut output = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info if !verbose => continue,
            MessageLevel::Info => message.content.dimmed().to_string(),
            MessageLevel::Success => message.content.green().to_string(),
            MessageLevel::Warning => message.content.yellow().to_string(),
            MessageLevel::Error => message.content.red().to_string(),
        };
        output.push_str(&line);
        output.push('\n');
    }
    output
}

pub fn render_error(error: &impl std::fmt::Display) -> String {
    format!("{}\n", format!("Error: {}", error).red())
}

pub fn print_messages(messages: &[CmdMessage], verbose: bool) {
    print!("{}", render_messages(messages, verbose));
}
