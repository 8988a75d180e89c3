//! # CLI Templates
//!
//! Terminal output is produced from minijinja templates kept as standalone
//! files under `templates/` and embedded at compile time. Keeping them out of
//! the Rust code makes layout changes easy to edit and diff.
//!
//! Conventions:
//!
//! 1. Block tags (`{% if %}`, `{% for %}`) never emit their own line break; the
//!    environment trims them. A blank line in a template is a blank line in the
//!    output.
//! 2. Width math (truncation, padding) is done in Rust and handed to templates
//!    as ready strings. Templates decide structure and style names only.
//! 3. Shared fragments are separate templates pulled in with `{% include %}`.

pub const RESULTS_TEMPLATE: &str = include_str!("templates/results.tmp");
pub const RECORD_LINE_TEMPLATE: &str = include_str!("templates/record_line.tmp");
pub const PREVIEW_TEMPLATE: &str = include_str!("templates/preview.tmp");
pub const RECENT_TEMPLATE: &str = include_str!("templates/recent.tmp");
pub const CATALOGS_TEMPLATE: &str = include_str!("templates/catalogs.tmp");
pub const CONFIG_TEMPLATE: &str = include_str!("templates/config.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const FIELD_ERRORS_TEMPLATE: &str = include_str!("templates/field_errors.tmp");

/// `(name, source)` of every template, registered together so includes resolve.
pub const ALL: [(&str, &str); 8] = [
    ("results.tmp", RESULTS_TEMPLATE),
    ("record_line.tmp", RECORD_LINE_TEMPLATE),
    ("preview.tmp", PREVIEW_TEMPLATE),
    ("recent.tmp", RECENT_TEMPLATE),
    ("catalogs.tmp", CATALOGS_TEMPLATE),
    ("config.tmp", CONFIG_TEMPLATE),
    ("messages.tmp", MESSAGES_TEMPLATE),
    ("field_errors.tmp", FIELD_ERRORS_TEMPLATE),
];
