use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rMaintLog
#[derive(Parser)]
#[command(
    name = "rmaintlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple maintenance log CLI: record repairs, costs and technicians, export to CSV",
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

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
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

    /// Show the configured maintenance categories
    Categories,

    /// Log a new maintenance record
    Add {
        /// Maintenance item / category (see `categories`)
        item: String,

        /// Cost of the work
        #[arg(allow_hyphen_values = true)]
        price: String,

        /// Technician who did the work
        technician: String,

        /// Free text notes
        #[arg(long, short = 'n', default_value = "")]
        notes: String,

        /// Date the work was done (YYYY-MM-DD)
        #[arg(long = "service-date")]
        service_date: Option<String>,

        /// Time the work was done (HH:MM, requires --service-date)
        #[arg(long = "service-time", requires = "service_date")]
        service_time: Option<String>,
    },

    /// Edit an existing record; omitted fields keep their value
    Edit {
        /// Record id (see `list`)
        id: i64,

        #[arg(long)]
        item: Option<String>,

        #[arg(long, allow_hyphen_values = true)]
        price: Option<String>,

        #[arg(long)]
        technician: Option<String>,

        #[arg(long, short = 'n')]
        notes: Option<String>,

        /// Date the work was done (YYYY-MM-DD)
        #[arg(long = "service-date", conflicts_with = "clear_service")]
        service_date: Option<String>,

        /// Time the work was done (HH:MM, requires --service-date)
        #[arg(long = "service-time", requires = "service_date")]
        service_time: Option<String>,

        /// Remove the service date/time
        #[arg(long = "clear-service")]
        clear_service: bool,

        /// Do not ask for confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Delete a record by id
    Del {
        /// Record id (see `list`)
        id: i64,

        /// Do not ask for confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// List records with a cost summary
    List {
        /// Only this category ("all" for every category)
        #[arg(long, short = 'c')]
        category: Option<String>,

        /// Case-insensitive search in technician and notes
        #[arg(long, short = 's', default_value = "")]
        search: String,
    },

    /// Show total cost and per-category subtotals
    Summary {
        #[arg(long, short = 'c')]
        category: Option<String>,

        #[arg(long, short = 's', default_value = "")]
        search: String,
    },

    /// Export records (optionally filtered) to a file
    Export {
        /// Export format
        #[arg(long, value_enum, value_name = "FORMAT", default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute). Defaults to maintenance-report-YYYYMMDD.<ext>
        /// in the current directory.
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        #[arg(long, short = 'c')]
        category: Option<String>,

        #[arg(long, short = 's', default_value = "")]
        search: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
