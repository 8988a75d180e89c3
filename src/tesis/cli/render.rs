//! # Rendering
//!
//! Turns command results into terminal text through the minijinja templates in
//! `templates/`. The `style` filter maps semantic style names to the theme in
//! `styles.rs` and degrades to plain text when stdout has no color support.
//!
//! Layout math (truncation, padding) stays in Rust because it needs
//! Unicode-aware widths; templates only arrange the pieces.

use super::styles::{names, TESIS_THEME};
use super::templates;
use console::Term;
use minijinja::{Environment, Value};
use serde::Serialize;
use tesis::commands::{CatalogListing, CmdMessage, MessageLevel};
use tesis::config::{TesisConfig, CONFIG_KEYS};
use tesis::filters::ActiveFilter;
use tesis::model::Record;
use tesis::page::{Page, PageSlot};
use tesis::recent::RecentItems;
use tesis::validation::FieldErrors;
use unicode_width::UnicodeWidthStr;

pub const LINE_WIDTH: usize = 100;
const YEAR_WIDTH: usize = 4;
const SEPARATOR: &str = "────────────────────────────────";

#[derive(Serialize)]
struct RecordLine {
    id: String,
    title: String,
    padding: String,
    year: String,
    indent: String,
    meta: String,
}

#[derive(Serialize)]
struct NavSlot {
    label: String,
    current: bool,
}

#[derive(Serialize)]
struct ResultsData {
    chips: Vec<String>,
    empty: bool,
    rows: Vec<RecordLine>,
    showing: String,
    nav: Vec<NavSlot>,
    related: Vec<RecordLine>,
}

#[derive(Serialize)]
struct PreviewEntry {
    id: String,
    title: String,
    author: String,
    year: String,
    career: String,
    kind: String,
    tutor: String,
    area: String,
    keywords: String,
    summary: String,
    document_url: String,
    download_name: String,
}

#[derive(Serialize)]
struct PreviewData {
    records: Vec<PreviewEntry>,
    separator: &'static str,
}

#[derive(Serialize)]
struct RecentData {
    items: Vec<RecordLine>,
}

#[derive(Serialize)]
struct CatalogRow {
    indent: &'static str,
    code: String,
    padding: String,
    label: String,
}

#[derive(Serialize)]
struct CatalogSection {
    title: &'static str,
    entries: Vec<CatalogRow>,
}

#[derive(Serialize)]
struct CatalogsData {
    sections: Vec<CatalogSection>,
    years: String,
}

#[derive(Serialize)]
struct ConfigEntry {
    key: &'static str,
    value: String,
}

#[derive(Serialize)]
struct ConfigData {
    entries: Vec<ConfigEntry>,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: String,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

#[derive(Serialize)]
struct FieldErrorData {
    field: &'static str,
    message: String,
}

#[derive(Serialize)]
struct FieldErrorsData {
    errors: Vec<FieldErrorData>,
}

fn environment(use_color: bool) -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_keep_trailing_newline(true);
    for (name, source) in templates::ALL {
        env.add_template(name, source)?;
    }
    let theme = &*TESIS_THEME;
    env.add_filter("style", move |value: Value, name: String| -> String {
        theme.apply(&name, &value.to_string(), use_color)
    });
    Ok(env)
}

fn render<T: Serialize>(
    name: &str,
    data: &T,
    use_color: Option<bool>,
) -> Result<String, minijinja::Error> {
    let use_color = use_color.unwrap_or_else(|| Term::stdout().features().colors_supported());
    let env = environment(use_color)?;
    env.get_template(name)?.render(data)
}

/// A page of results with its filter chips, navigation and related records.
pub fn render_results(page: &Page<Record>, chips: &[ActiveFilter], related: &[Record]) -> String {
    render_results_internal(page, chips, related, None)
}

fn render_results_internal(
    page: &Page<Record>,
    chips: &[ActiveFilter],
    related: &[Record],
    use_color: Option<bool>,
) -> String {
    let id_width = id_column_width(&page.items);
    let showing = match page.showing() {
        Some((start, end)) => format!("Showing {}-{} of {}", start, end, page.total_results),
        None => format!("Page {} is empty", page.number),
    };

    let data = ResultsData {
        chips: chips.iter().map(ToString::to_string).collect(),
        empty: page.total_results == 0,
        rows: page
            .items
            .iter()
            .map(|r| record_line(r, id_width))
            .collect(),
        showing,
        nav: navigation(page),
        related: related
            .iter()
            .map(|r| record_line(r, id_column_width(related)))
            .collect(),
    };

    render(templates_name::RESULTS, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Full previews of records, as shown by `tesis show`.
pub fn render_previews(records: &[Record]) -> String {
    render_previews_internal(records, None)
}

fn render_previews_internal(records: &[Record], use_color: Option<bool>) -> String {
    let data = PreviewData {
        records: records.iter().map(preview_entry).collect(),
        separator: SEPARATOR,
    };
    render(templates_name::PREVIEW, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn render_recent(recent: &RecentItems) -> String {
    render_recent_internal(recent, None)
}

fn render_recent_internal(recent: &RecentItems, use_color: Option<bool>) -> String {
    let width = id_column_width(recent.items());
    let data = RecentData {
        items: recent
            .items()
            .iter()
            .map(|r| record_line(r, width))
            .collect(),
    };
    render(templates_name::RECENT, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn render_catalogs(catalog: &CatalogListing) -> String {
    render_catalogs_internal(catalog, None)
}

fn render_catalogs_internal(catalog: &CatalogListing, use_color: Option<bool>) -> String {
    let flat = |title: &'static str, entries: Vec<(&'static str, String, String)>| {
        let width = entries.iter().map(|(_, code, _)| code.width()).max().unwrap_or(0);
        CatalogSection {
            title,
            entries: entries
                .into_iter()
                .map(|(indent, code, label)| CatalogRow {
                    indent,
                    padding: " ".repeat(width.saturating_sub(code.width()) + 2),
                    code,
                    label,
                })
                .collect(),
        }
    };
    let top = |code: &str, label: &str| ("  ", code.to_string(), label.to_string());

    let mut areas = Vec::new();
    for area in &catalog.areas {
        areas.push(top(area.code, area.label));
        for sub in &area.subareas {
            areas.push(("    ", sub.code.to_string(), sub.label.to_string()));
        }
    }

    let data = CatalogsData {
        sections: vec![
            flat(
                "Careers",
                catalog.careers.iter().map(|c| top(c.code, c.label)).collect(),
            ),
            flat(
                "Modalities",
                catalog.modalities.iter().map(|m| top(m.code, m.label)).collect(),
            ),
            flat("Areas", areas),
            flat(
                "Sort orders",
                catalog.sorts.iter().map(|s| top(s.code, s.label)).collect(),
            ),
        ],
        years: catalog
            .years
            .iter()
            .map(|y| y.to_string())
            .collect::<Vec<_>>()
            .join(" "),
    };
    render(templates_name::CATALOGS, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn render_config(config: &TesisConfig) -> String {
    render_config_internal(config, None)
}

fn render_config_internal(config: &TesisConfig, use_color: Option<bool>) -> String {
    let data = ConfigData {
        entries: CONFIG_KEYS
            .into_iter()
            .map(|key| ConfigEntry {
                key,
                value: config.get(key).unwrap_or_default(),
            })
            .collect(),
    };
    render(templates_name::CONFIG, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Renders command messages using the template system with themed styles.
pub fn render_messages(messages: &[CmdMessage]) -> String {
    render_messages_internal(messages, None)
}

fn render_messages_internal(messages: &[CmdMessage], use_color: Option<bool>) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let data = MessagesData {
        messages: messages
            .iter()
            .map(|msg| {
                let style = match msg.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Warning => names::WARNING,
                    MessageLevel::Error => names::ERROR,
                };
                MessageData {
                    content: msg.content.clone(),
                    style: style.to_string(),
                }
            })
            .collect(),
    };

    render(templates_name::MESSAGES, &data, use_color).unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}

/// One line per invalid field, for stderr.
pub fn render_field_errors(errors: &FieldErrors) -> String {
    render_field_errors_internal(errors, None)
}

fn render_field_errors_internal(errors: &FieldErrors, use_color: Option<bool>) -> String {
    let data = FieldErrorsData {
        errors: errors
            .messages()
            .into_iter()
            .map(|(field, message)| FieldErrorData {
                field: field.name(),
                message,
            })
            .collect(),
    };
    render(templates_name::FIELD_ERRORS, &data, use_color).unwrap_or_else(|_| errors.to_string())
}

mod templates_name {
    pub const RESULTS: &str = "results.tmp";
    pub const PREVIEW: &str = "preview.tmp";
    pub const RECENT: &str = "recent.tmp";
    pub const CATALOGS: &str = "catalogs.tmp";
    pub const CONFIG: &str = "config.tmp";
    pub const MESSAGES: &str = "messages.tmp";
    pub const FIELD_ERRORS: &str = "field_errors.tmp";
}

fn id_column_width(records: &[Record]) -> usize {
    records.iter().map(|r| r.id.width()).max().unwrap_or(0)
}

fn record_line(record: &Record, id_width: usize) -> RecordLine {
    let id = format!("{:>width$}", record.id, width = id_width);
    let fixed = id.width() + 1 + 2 + YEAR_WIDTH;
    let available = LINE_WIDTH.saturating_sub(fixed);
    let title = truncate_to_width(&record.title, available);
    let padding = " ".repeat(available.saturating_sub(title.width()) + 2);
    let meta = format!("{} · {} · {}", record.author, record.career, record.kind);

    RecordLine {
        indent: " ".repeat(id.width() + 1),
        id,
        title,
        padding,
        year: record.year.clone(),
        meta: truncate_to_width(&meta, available),
    }
}

fn navigation(page: &Page<Record>) -> Vec<NavSlot> {
    if page.total_pages <= 1 {
        return Vec::new();
    }
    let mut slots = Vec::new();
    if page.has_previous() {
        slots.push(NavSlot {
            label: "‹".to_string(),
            current: false,
        });
    }
    slots.extend(page.window().into_iter().map(|slot| match slot {
        PageSlot::Number(n) => NavSlot {
            label: n.to_string(),
            current: n == page.number,
        },
        PageSlot::Gap => NavSlot {
            label: "…".to_string(),
            current: false,
        },
    }));
    if page.has_next() {
        slots.push(NavSlot {
            label: "›".to_string(),
            current: false,
        });
    }
    slots
}

fn preview_entry(record: &Record) -> PreviewEntry {
    PreviewEntry {
        id: record.id.clone(),
        title: record.title.clone(),
        author: record.author.clone(),
        year: record.year.clone(),
        career: record.career.clone(),
        kind: record.kind.clone(),
        tutor: record.tutor_or_placeholder().to_string(),
        area: record.area_display(),
        keywords: record
            .keywords
            .as_ref()
            .map(|k| k.join(", "))
            .unwrap_or_default(),
        summary: record.summary_or_placeholder().to_string(),
        document_url: record.document_url(),
        download_name: record.download_file_name(),
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
