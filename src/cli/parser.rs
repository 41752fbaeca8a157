use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rPosDesk
#[derive(Parser)]
#[command(
    name = "rposdesk",
    version = env!("CARGO_PKG_VERSION"),
    about = "A POS counter CLI: till calculator, shift and break timer, cart checkout on SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Only print warnings, errors and command output
    #[arg(global = true, long = "quiet", short = 'q')]
    pub quiet: bool,

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

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with default values")]
        migrate: bool,

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
        #[arg(long = "migrate", help = "Run pending database migrations")]
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

    /// Press calculator keys and print the display
    ///
    /// Keys: digits (or whole numbers like 12.5), ".", "+", "-", "*"/"x",
    /// "/", "mod", "=", "%", "+/-" (or "neg"), "C".
    Calc {
        #[arg(required = true, num_args = 1..)]
        keys: Vec<String>,

        #[arg(long = "trace", help = "Print the display after every key")]
        trace: bool,
    },

    /// Manage the product catalogue
    Product {
        #[command(subcommand)]
        action: ProductAction,
    },

    /// Ring up a sale: each product id adds one unit to the cart
    Sale {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<i64>,

        #[arg(long = "dec", help = "Decrease the quantity of a product (never below 1)")]
        dec: Vec<i64>,

        #[arg(long = "remove", help = "Remove a product from the cart")]
        remove: Vec<i64>,

        #[arg(long = "dry-run", help = "Print the receipt without recording the sale")]
        dry_run: bool,
    },

    /// List recorded sales
    Sales,

    /// Clock in, clock out or show the current shift
    Clock {
        #[command(subcommand)]
        action: ClockAction,
    },

    /// Start or end a break during the current shift
    Break {
        #[command(subcommand)]
        action: BreakAction,
    },

    /// Show the running shift and break timers, updated every tick
    Watch {
        #[arg(long = "ticks", help = "Stop after N updates")]
        ticks: Option<u32>,

        #[arg(long = "interval-ms", help = "Tick interval (default: tick_interval_ms)")]
        interval_ms: Option<u64>,
    },

    /// List completed shifts
    Shifts,

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export recorded sales
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum ProductAction {
    /// Add a product to the catalogue
    Add {
        #[arg(long)]
        name: String,

        /// Selling price, e.g. 2.50
        #[arg(long)]
        price: String,
    },

    /// List the catalogue
    List,

    /// Delete a product by id
    Del {
        #[arg(long)]
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum ClockAction {
    /// Start a shift now
    In,
    /// End the current shift now
    Out,
    /// Show the current shift and break
    Status,
}

#[derive(Subcommand)]
pub enum BreakAction {
    /// Start a break (default type from config)
    Start {
        #[arg(long = "type", value_name = "lunch|short")]
        kind: Option<String>,
    },
    /// End the running break
    End,
}
