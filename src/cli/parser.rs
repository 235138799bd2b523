use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for messlog
/// CLI application to track student meal attendance in CSV files
#[derive(Parser)]
#[command(
    name = "messlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple mess attendance CLI: register students and mark breakfast/lunch attendance",
    long_about = None
)]
pub struct Cli {
    /// Keep all data files (roster, attendance, internal log) in this directory
    #[arg(global = true, long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the data files
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal operation log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log")]
        print: bool,
    },

    /// Register a new student
    Add {
        /// Student name (surrounding whitespace is trimmed)
        name: String,
    },

    /// Show a student and their attendance counters
    Search {
        /// Student ID
        id: String,
    },

    /// Mark a student present for a meal
    Mark {
        /// Student ID
        id: String,

        #[arg(long, short, help = "Meal: breakfast (b) or lunch (l)")]
        meal: String,

        #[arg(
            long = "at",
            value_name = "TIMESTAMP",
            help = "Marking time (YYYY-MM-DDTHH:MM:SS), defaults to now"
        )]
        at: Option<String>,
    },

    /// Show the attendance summary for today (or a given day)
    Today {
        #[arg(long, value_name = "DATE", help = "Day to summarize (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long, help = "Print the summary as JSON")]
        json: bool,
    },

    /// List students or attendance records
    List {
        #[arg(long, help = "List the student roster instead of attendance")]
        students: bool,

        #[arg(
            long,
            short,
            help = "Filter by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, start:end, all)"
        )]
        range: Option<String>,
    },

    /// Delete a student and all of their attendance records
    Del {
        /// Student ID
        id: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Back up the data files
    Backup {
        #[arg(long, value_name = "DIR", help = "Destination directory (absolute path)")]
        dir: String,

        #[arg(long, help = "Compress the backup (zip on Windows, tar.gz elsewhere)")]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export attendance records
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
