//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Course catalog manager: validated CSV loading, ordered listing, and course lookup
#[derive(Parser, Debug)]
#[command(name = "coursecat")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase logging verbosity (-d, -dd, -ddd)
    #[arg(short = 'd', long = "debug", action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Override the field delimiter from config (default ',')
    #[arg(long, global = true)]
    pub delimiter: Option<char>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a course file without loading it
    Validate {
        /// Course file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Print every course in alphanumeric order
    List {
        /// Course file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Look up one course by number (case-insensitive)
    Show {
        /// Course file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Course number to look up
        number: String,
    },

    /// Show the catalog's search-tree shape
    Tree {
        /// Course file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Interactive course planner menu
    Shell {
        /// Course file preselected for menu option 1
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
