//! # CLI Behavior
//!
//! One UI client for tesis. It is the only place that knows about terminal
//! I/O, exit codes and output formatting; see the crate-level docs of the
//! library for the layers underneath.
//!
//! ## Naked Execution (`tesis`)
//!
//! Running `tesis` with no arguments lists the first page of the whole
//! catalog, sorted by the configured default order.
//!
//! ## Searching
//!
//! `tesis search <words> [--career C]... [--from Y] [--to Y] [--area A]
//! [--subarea S] [--modality M]... [--tutor NAME] [--sort KEY] [--page N]`
//!
//! Codes for every option are listed by `tesis catalogs`. Invalid filters are
//! reported field by field on stderr and exit with status 1.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call the API and print the result
//! - `render`: Template rendering
//! - `setup`: Argument parsing via clap
//! - `styles`: Terminal styling
//! - `templates`: Output templates

mod commands;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::{print_error, run};
