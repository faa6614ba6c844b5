use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand, ValueEnum};

/// Command-line interface definition for dailylog
/// CLI application to keep a daily log of four measurements with SQLite
#[derive(Parser)]
#[command(
    name = "dailylog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple daily log CLI: record four measurements per entry, summarize them per day and month using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// The four measurement values. Aliases follow the default labels.
#[derive(Args, Debug, Default, Clone)]
pub struct MeasureArgs {
    #[arg(long = "v1", visible_alias = "urine", value_name = "N", allow_hyphen_values = true)]
    pub v1: Option<String>,

    #[arg(long = "v2", visible_alias = "stoma", value_name = "N", allow_hyphen_values = true)]
    pub v2: Option<String>,

    #[arg(long = "v3", visible_alias = "water", value_name = "N", allow_hyphen_values = true)]
    pub v3: Option<String>,

    #[arg(long = "v4", visible_alias = "walk", value_name = "N", allow_hyphen_values = true)]
    pub v4: Option<String>,
}

impl MeasureArgs {
    pub fn as_array(&self) -> [Option<&String>; 4] {
        [
            self.v1.as_ref(),
            self.v2.as_ref(),
            self.v3.as_ref(),
            self.v4.as_ref(),
        ]
    }
}

/// A value field that `edit --clear` can reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MeasureField {
    V1,
    V2,
    V3,
    V4,
}

impl MeasureField {
    pub fn index(self) -> usize {
        match self {
            MeasureField::V1 => 0,
            MeasureField::V2 => 1,
            MeasureField::V3 => 2,
            MeasureField::V4 => 3,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, edit or complete it)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Add missing fields to the configuration file")]
        check: bool,

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

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Create missing tables and set the schema version")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Record a new entry
    Add {
        /// Date of the entry (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<String>,

        /// Local time of day (HH:MM, default: now)
        #[arg(long)]
        time: Option<String>,

        #[command(flatten)]
        values: MeasureArgs,
    },

    /// List entries grouped by date
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        #[arg(long, help = "Show a single date (YYYY-MM-DD)")]
        date: Option<String>,
    },

    /// Show a single entry
    Show {
        #[arg(long)]
        id: i64,
    },

    /// Change an existing entry in place
    Edit {
        #[arg(long)]
        id: i64,

        #[arg(long, help = "New date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long, help = "New local time of day (HH:MM)")]
        time: Option<String>,

        #[command(flatten)]
        values: MeasureArgs,

        #[arg(
            long,
            value_enum,
            value_delimiter = ',',
            help = "Clear one or more values, e.g. --clear v1,v3"
        )]
        clear: Vec<MeasureField>,
    },

    /// Delete an entry by id
    Del {
        #[arg(long)]
        id: i64,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Per-date totals with a grand total
    Summary {
        #[arg(long, help = "Only this date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,
    },

    /// Month calendar with the days that have entries
    Calendar {
        #[arg(long, value_name = "YYYY-MM", help = "Month to show (default: current)")]
        month: Option<String>,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Export entries to CSV or JSON
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

    /// Import entries from a CSV file (all or nothing)
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },
}
