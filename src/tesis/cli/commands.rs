//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_logging()`: Sets up the tracing subscriber
//! - `handle_*()`: Per-command handlers that call the API and print the result
//! - `print_error()`: Turns a failed run into stderr output

use super::render::{
    print_messages, render_catalogs, render_config, render_field_errors, render_previews,
    render_recent, render_results,
};
use super::setup::{Cli, Commands, SearchArgs};
use chrono::Datelike;
use clap::Parser;
use colored::*;
use tesis::api::{CatalogApi, ConfigAction, SearchRequest};
use tesis::error::{Result, TesisError};
use tesis::init::{initialize, TesisContext};
use tesis::store::fs::JsonStore;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "TESIS_LOG";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = initialize(cli.data.as_deref())?;

    match cli.command {
        Some(Commands::Search(args)) => handle_search(&ctx, &args),
        Some(Commands::Show { ids }) => handle_show(&mut ctx.api, &ids),
        Some(Commands::Catalogs) => handle_catalogs(&ctx.api),
        Some(Commands::Config { key, value }) => handle_config(&ctx.api, key, value),
        None => handle_search(&ctx, &SearchArgs::default()),
    }
}

/// Logs go to stderr so they never mix with rendered output. `TESIS_LOG`
/// takes precedence; otherwise warnings only, or debug with `--verbose`.
fn init_logging(verbose: bool) {
    let fallback = if verbose { "tesis=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}

fn handle_search(ctx: &TesisContext, args: &SearchArgs) -> Result<()> {
    let filters = args
        .to_filters()
        .map_err(|e| TesisError::Api(e.to_string()))?;
    let request = SearchRequest {
        filters,
        sort: args.sort.unwrap_or(ctx.config.default_sort),
        page: args.page,
    };

    let result = ctx.api.search(&request)?;
    if let Some(page) = &result.page {
        print!(
            "{}",
            render_results(page, &result.active_filters, &result.related)
        );
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(api: &mut CatalogApi<JsonStore>, ids: &[String]) -> Result<()> {
    let result = api.preview(ids)?;
    print!("{}", render_previews(&result.listed_records));
    print!("{}", render_recent(&result.recent));
    print_messages(&result.messages);
    Ok(())
}

fn handle_catalogs(api: &CatalogApi<JsonStore>) -> Result<()> {
    let result = api.catalogs(chrono::Local::now().year())?;
    if let Some(catalog) = &result.catalog {
        print!("{}", render_catalogs(catalog));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(
    api: &CatalogApi<JsonStore>,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    let show_all = key.is_none();
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(config));
        }
    }
    print_messages(&result.messages);
    Ok(())
}

/// Writes a failed run to stderr. Invalid filters are listed field by field.
pub fn print_error(err: &TesisError) {
    match err {
        TesisError::Validation(errors) => {
            eprintln!("{} invalid filters", "Error:".red().bold());
            eprint!("{}", render_field_errors(errors));
        }
        other => eprintln!("{} {}", "Error:".red().bold(), other),
    }
}
