//! Styles for the tesis CLI.
//!
//! Templates never name colors. They tag text with a semantic style name
//! (`{{ record.year | style("year") }}`) and the theme below decides what that
//! looks like. Changing the look of the CLI means editing this file only.
//!
//! When the terminal does not support colors (pipes, `TERM=dumb`) styles are
//! skipped and the text is passed through unchanged. A style name missing from
//! the theme is flagged with [`MISSING_STYLE_INDICATOR`] so typos in templates
//! show up in the output.

use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const REGULAR: &str = "regular";
    pub const MUTED: &str = "muted";
    pub const FAINT: &str = "faint";
    pub const TITLE: &str = "title";
    pub const HEADER: &str = "header";
    pub const ID: &str = "id";
    pub const YEAR: &str = "year";
    pub const CHIP: &str = "chip";
    pub const CURRENT_PAGE: &str = "current-page";
    pub const LABEL: &str = "label";
    pub const ERROR: &str = "error";
    pub const WARNING: &str = "warning";
    pub const SUCCESS: &str = "success";
    pub const INFO: &str = "info";
}

/// A named collection of styles.
#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<&'static str, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &'static str, style: Style) -> Self {
        self.styles.insert(name, style);
        self
    }

    /// Styles `text`, or only checks the name when `use_color` is off.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.apply_to(text).force_styling(true).to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }
}

pub static TESIS_THEME: Lazy<Theme> = Lazy::new(|| {
    let muted = Style::new().color256(245);
    Theme::new()
        .add(names::REGULAR, Style::new())
        .add(names::MUTED, muted.clone())
        .add(names::FAINT, Style::new().color256(240))
        .add(names::TITLE, Style::new().bold())
        .add(names::HEADER, Style::new().cyan().bold())
        .add(names::ID, Style::new().yellow())
        .add(names::YEAR, muted.clone().italic())
        .add(names::CHIP, Style::new().black().on_color256(153))
        .add(names::CURRENT_PAGE, Style::new().bold().underlined())
        .add(names::LABEL, muted.clone())
        .add(names::ERROR, Style::new().red().bold())
        .add(names::WARNING, Style::new().yellow().bold())
        .add(names::SUCCESS, Style::new().green())
        .add(names::INFO, muted)
});
