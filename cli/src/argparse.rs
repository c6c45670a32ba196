use clap::{Args, Parser, Subcommand};
use seedbank_filters::{FieldKey, SearchDirection};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sbf",
    about = "Seed bank search filter tool",
    version,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Facility to scope requests to, overrides SEEDBANK_FACILITY_ID
    #[arg(long, global = true)]
    pub facility_id: Option<i64>,

    /// Pick which subcommand to use
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the filterable fields
    Catalog(CatalogArgs),
    /// Encode one field's UI state into a filter tree
    Encode(EncodeArgs),
    /// Decode a filter tree back into a field's UI state
    Decode(DecodeArgs),
    /// Build a filter set from UI states of several fields
    Compose(ComposeArgs),
    /// Restore the UI state of every field from a saved filter set
    Restore(RestoreArgs),
    /// Resolve select options from field-values responses
    Options(OptionsArgs),
}

#[derive(Args)]
pub struct CatalogArgs {
    /// Print the catalog as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct EncodeArgs {
    /// Field key, e.g. storageLocation
    #[arg(long)]
    pub field: FieldKey,

    /// JSON file holding the field state
    #[arg(long)]
    pub state_file: PathBuf,
}

#[derive(Args)]
pub struct DecodeArgs {
    /// Field key, e.g. totalQuantity
    #[arg(long)]
    pub field: FieldKey,

    /// JSON file holding the filter tree
    #[arg(long)]
    pub node_file: PathBuf,
}

#[derive(Args)]
pub struct ComposeArgs {
    /// JSON file mapping field keys to field states
    #[arg(long)]
    pub states_file: PathBuf,

    /// What to print
    #[arg(long, value_enum, default_value_t = ComposeOutput::Filters)]
    pub output: ComposeOutput,

    /// Result fields of the search request
    #[arg(long, value_delimiter = ',')]
    pub fields: Vec<String>,

    /// Sort field, overrides SEEDBANK_SORT_FIELD
    #[arg(long)]
    pub sort_field: Option<String>,

    /// Sort direction, overrides SEEDBANK_SORT_DIRECTION
    #[arg(long)]
    pub sort_direction: Option<SearchDirection>,

    /// Page size, overrides SEEDBANK_SEARCH_COUNT
    #[arg(long)]
    pub count: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ComposeOutput {
    /// The filter set keyed by field
    Filters,
    /// Active filter summary
    Pills,
    /// Body of a search request
    Search,
    /// Body of an export request
    Export,
    /// Body of a field-values request for the option fields
    Values,
}

#[derive(Args)]
pub struct RestoreArgs {
    /// JSON file holding a saved filter set
    #[arg(long)]
    pub filters_file: PathBuf,

    /// Include fields without an active filter
    #[arg(long)]
    pub all: bool,
}

#[derive(Args)]
pub struct OptionsArgs {
    /// Field-values response without filters
    #[arg(long)]
    pub all_file: PathBuf,

    /// Field-values response under the current filters
    #[arg(long)]
    pub available_file: PathBuf,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
