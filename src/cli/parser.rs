use clap::{Parser, Subcommand};

/// Command-line interface definition for worktime
#[derive(Parser)]
#[command(
    name = "worktime",
    version = env!("CARGO_PKG_VERSION"),
    about = "Tracks your working times: worktime, overtime, weekly sums and vacation from a CSV ledger",
    long_about = None
)]
pub struct Cli {
    /// Override the ledger file (worktime.csv)
    #[arg(global = true, long = "file", short = 'f')]
    pub file: Option<String>,

    /// Write an export copy of the ledger with header row
    #[arg(global = true, long = "export", short = 'e')]
    pub export: Option<String>,

    /// Show durations in minutes instead of HH:MM:SS
    #[arg(global = true, long = "minutes", short = 'm')]
    pub minutes: bool,

    /// Vacation days accrued per month
    #[arg(global = true, long = "vacation")]
    pub vacation: Option<f64>,

    /// Process the ledger as of this date (YYYY-MM-DD)
    #[arg(global = true, long = "cutoff")]
    pub cutoff: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty ledger
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

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Reconcile the ledger and print the report (default)
    Report {
        #[arg(long = "json", help = "Print the summary as JSON")]
        json: bool,

        #[arg(long = "holidays", help = "Print the holiday/comment frequency table")]
        holidays: bool,

        #[arg(long = "quiet", short = 'q', help = "Do not list every ledger line")]
        quiet: bool,
    },

    /// Run unattended: back up, reconcile and rewrite the ledger periodically
    Service {
        #[arg(long = "once", help = "Run a single tick and exit")]
        once: bool,

        #[arg(long = "interval", value_name = "SECS", help = "Seconds between ticks")]
        interval: Option<u64>,
    },

    /// List the public holidays of a year
    Holidays {
        /// Year (default: current year)
        year: Option<i32>,
    },
}
