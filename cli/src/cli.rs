use clap::{Parser, Subcommand, ValueHint};
use rdf_console::QuerySolutions;
use std::path::PathBuf;

#[derive(Parser)]
#[command(about, version, name = "rdf-console")]
/// Administration toolkit for capability expressions and SPARQL query results
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Inspect, validate and normalize capability expressions
    #[command(subcommand)]
    Capability(CapabilityCommand),
    /// Convert and window SPARQL query results documents
    #[command(subcommand)]
    Results(ResultsCommand),
}

#[derive(Subcommand)]
pub enum CapabilityCommand {
    /// Parse an expression and print its components
    Parse {
        /// The expression, e.g. "capability(rdf(code),'CRUD')"
        expression: String,
        /// Also require the expression to grant at least one action
        #[arg(long)]
        check_actions: bool,
    },
    /// Build the canonical serialized form from its components
    Format {
        /// The permission area, e.g. "rdf"
        #[arg(long)]
        area: String,
        /// The sub-resource the capability is restricted to
        #[arg(long)]
        subject: Option<String>,
        /// The second qualifier next to the subject
        #[arg(long, requires = "subject")]
        scope: Option<String>,
        /// The granted actions as letters, e.g. "CRUD"
        #[arg(long)]
        actions: String,
    },
}

#[derive(Subcommand)]
pub enum ResultsCommand {
    /// Convert a SPARQL JSON results document to CSV, TSV or JSON
    Convert {
        /// File to convert from
        ///
        /// If no file is given, stdin is read.
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        from_file: Option<PathBuf>,
        /// File to convert to
        ///
        /// If no file is given, stdout is written.
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        to_file: Option<PathBuf>,
        /// The format to convert to
        ///
        /// It can be an extension like "tsv" or a MIME type like "text/csv".
        ///
        /// By default the format is guessed from the target file extension.
        #[arg(long, required_unless_present = "to_file")]
        to_format: Option<String>,
        /// Sort the rows by the value of this variable before writing
        #[arg(long)]
        sort_by: Option<String>,
        /// Sort largest value first
        #[arg(long, requires = "sort_by")]
        descending: bool,
        /// Write only the given zero-based page of rows
        ///
        /// By default all rows are written.
        #[arg(long)]
        page: Option<usize>,
        /// Number of rows per page
        #[arg(long, requires = "page", default_value_t = QuerySolutions::DEFAULT_PAGE_SIZE)]
        page_size: usize,
    },
}
