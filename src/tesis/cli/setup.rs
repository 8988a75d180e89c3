use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tesis::catalog::{Area, Career, Modality, Subarea};
use tesis::filters::{FilterState, SelectionError};
use tesis::query::SortKey;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "tesis", bin_name = "tesis", version = get_version())]
#[command(about = "Search a catalog of theses and degree projects", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Records file to search (overrides the configured data file)
    #[arg(long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search the catalog
    #[command(alias = "s", display_order = 1)]
    Search(SearchArgs),

    /// Preview one or more records by id
    #[command(alias = "preview", display_order = 2)]
    Show {
        /// Record ids, previewed in order
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// List careers, modalities, areas, sort orders and years
    #[command(display_order = 3)]
    Catalogs,

    /// Get or set configuration
    #[command(display_order = 4)]
    Config {
        /// Configuration key (data-file, default-sort)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Search words (joined with spaces)
    pub term: Vec<String>,

    /// Career code, repeatable (see `tesis catalogs`)
    #[arg(long = "career", value_name = "CODE")]
    pub careers: Vec<Career>,

    /// Earliest year, inclusive
    #[arg(long, value_name = "YEAR")]
    pub from: Option<u32>,

    /// Latest year, inclusive
    #[arg(long, value_name = "YEAR")]
    pub to: Option<u32>,

    /// Area code
    #[arg(long, value_name = "CODE")]
    pub area: Option<Area>,

    /// Subarea code; implies its area when --area is not given
    #[arg(long, value_name = "CODE")]
    pub subarea: Option<Subarea>,

    /// Modality code, repeatable. All modalities when omitted
    #[arg(long = "modality", value_name = "CODE")]
    pub modalities: Vec<Modality>,

    /// Tutor name (substring)
    #[arg(long, value_name = "NAME")]
    pub tutor: Option<String>,

    /// relevance, date_desc, date_asc or title (default from config)
    #[arg(long)]
    pub sort: Option<SortKey>,

    /// Page number
    #[arg(long, default_value_t = 1)]
    pub page: usize,
}

impl Default for SearchArgs {
    /// What a bare `tesis` runs: everything, first page.
    fn default() -> Self {
        Self {
            term: Vec::new(),
            careers: Vec::new(),
            from: None,
            to: None,
            area: None,
            subarea: None,
            modalities: Vec::new(),
            tutor: None,
            sort: None,
            page: 1,
        }
    }
}

impl SearchArgs {
    /// The filter state these arguments describe.
    pub fn to_filters(&self) -> Result<FilterState, SelectionError> {
        let mut filters = FilterState::new();
        filters.search_term = self.term.join(" ");
        filters.selected_careers = self.careers.iter().copied().collect();
        filters.year_from = self.from;
        filters.year_to = self.to;
        if !self.modalities.is_empty() {
            filters.selected_modalities = self.modalities.iter().copied().collect();
        }
        filters.tutor_name = self.tutor.clone().unwrap_or_default();

        filters.set_area(self.area.or(self.subarea.map(Subarea::area)));
        filters.set_subarea(self.subarea)?;
        Ok(filters)
    }
}
