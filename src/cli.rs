//! Command-line interface for json-fold.

use std::path::PathBuf;

use clap::Parser;

/// json-fold - render JSON as a collapsible, syntax-highlighted tree
#[derive(Parser, Debug)]
#[command(name = "json-fold")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON file to display (reads stdin when omitted)
    pub file: Option<PathBuf>,

    /// Render the bundled example document instead of reading input
    #[arg(long, conflicts_with = "file")]
    pub example: bool,

    /// Print the document compacted to a single line and exit
    #[arg(long)]
    pub compact: bool,

    /// Print the document pretty-printed (2-space indent) and exit
    #[arg(long, conflicts_with = "compact")]
    pub pretty: bool,

    /// Collapse every container nested at or below DEPTH (the root is depth 0)
    #[arg(long, value_name = "DEPTH")]
    pub collapse_depth: Option<usize>,

    /// Collapse the container at PATH (repeatable, e.g. --collapse details.skills)
    #[arg(long, value_name = "PATH")]
    pub collapse: Vec<String>,

    /// Collapse every container in the document
    #[arg(long)]
    pub collapse_all: bool,

    /// Disable ANSI colors and hyperlinks
    #[arg(long)]
    pub no_color: bool,

    /// Hide the `// N keys` / `// N items` annotations
    #[arg(long)]
    pub no_counts: bool,

    /// Copy the pretty-printed document to the clipboard after rendering
    #[cfg(feature = "clipboard")]
    #[arg(long)]
    pub copy: bool,
}
