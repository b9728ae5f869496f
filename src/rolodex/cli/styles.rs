//! Named styles for terminal output.
//!
//! Code asks for a style by what the text *is* (an index, a favorite marker,
//! a column header) rather than by color, so the look can change in one place.
//! `console` drops the escape codes on its own when stdout is not a terminal.

use console::Style;
use once_cell::sync::Lazy;

pub struct Theme {
    pub header: Style,
    pub index: Style,
    pub favorite: Style,
    pub name: Style,
    pub muted: Style,
    pub prompt: Style,
}

pub static ROLODEX_THEME: Lazy<Theme> = Lazy::new(|| Theme {
    header: Style::new().bold().underlined(),
    index: Style::new().yellow(),
    favorite: Style::new().yellow().bold(),
    name: Style::new().bold(),
    muted: Style::new().color256(246).italic(),
    prompt: Style::new().cyan(),
});
