//! # Tesis Architecture
//!
//! Tesis is a **UI-agnostic search library** over a catalog of theses and degree
//! projects. The `tesis` binary is one client of it; a browser or TUI front-end
//! would call the same functions.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders templates, handles terminal I/O│
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the recent list          │
//! │  - Returns structured Result<CmdResult> values              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - search, preview, catalogs, config                        │
//! │  - Built on the pure core: validation, query, page, recent  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecordStore trait                                        │
//! │  - JsonStore (file or bundled data), InMemoryStore (tests)  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The search pipeline
//!
//! A user edits a draft [`filters::FilterState`]. On commit, the draft passes
//! through [`validation::validate_filters`]; only a valid draft becomes the
//! committed state. [`query::query`] filters and sorts the records against the
//! committed state, [`page`] slices the result, and [`query::related`] picks
//! a few records to suggest. [`session::Session`] holds all of this for an
//! interactive front-end.
//!
//! Selections are stored as catalog codes ([`catalog`]) while records carry
//! display labels. The query engine is the only place that maps one to the other.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments and returns regular
//! Rust types. It never prints and never exits. The query engine cannot fail at
//! all; validation failures are values, not errors.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: The [`model::Record`] type
//! - [`catalog`]: Career, modality, area and subarea tables
//! - [`filters`]: Filter state and active filter chips
//! - [`validation`]: Free-text and modality rules
//! - [`query`]: Filtering and sorting
//! - [`page`]: Pagination
//! - [`recent`]: Recently viewed records
//! - [`session`]: Draft/committed state for interactive clients
//! - [`config`]: Configuration management
//! - [`init`]: Context setup for clients
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod filters;
pub mod init;
pub mod model;
pub mod page;
pub mod query;
pub mod recent;
pub mod session;
pub mod store;
pub mod validation;
