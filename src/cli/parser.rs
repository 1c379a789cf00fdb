use clap::{Parser, Subcommand};

use crate::export::ExportFormat;

/// Command-line interface definition for runsheet
/// CLI tool to plan wedding day-of schedules
#[derive(Parser)]
#[command(
    name = "runsheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "Plan wedding day-of schedules: timed events, conflict checks, printable run sheets",
    long_about = None
)]
pub struct Cli {
    /// Override data file path (useful for tests or custom files)
    #[arg(global = true, long = "file", id = "data_file_override")]
    pub file: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty data file
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "path", help = "Print the configuration file path")]
        path: bool,
    },

    /// Manage schedule days
    Day {
        #[command(subcommand)]
        action: DayAction,
    },

    /// Manage events on a schedule day
    Event {
        #[command(subcommand)]
        action: EventAction,
    },

    /// Show the timeline for one day or for all days
    List {
        /// Day id; omitted = all days
        day: Option<i64>,

        #[arg(long = "details", help = "Include owner and notes columns")]
        details: bool,

        #[arg(long = "no-conflicts", help = "Skip conflict detection")]
        no_conflicts: bool,
    },

    /// Apply the stock wedding-day program to a day
    Template {
        /// Day id receiving the template events
        day: i64,
    },

    /// Manage vendor contacts
    Vendor {
        #[command(subcommand)]
        action: VendorAction,
    },

    /// Export the run sheet to a file
    Export {
        /// Output file path (absolute)
        file: String,

        #[arg(long = "format", value_enum, default_value = "pdf")]
        format: ExportFormat,

        /// Restrict to these day ids, comma separated (e.g. "1,3")
        #[arg(long = "days")]
        days: Option<String>,

        #[arg(long = "detail", help = "Include owner and notes columns")]
        detail: bool,

        #[arg(long = "contacts", help = "Append the confirmed-vendor contact table")]
        contacts: bool,

        #[arg(long = "no-conflicts", help = "Skip conflict detection entirely")]
        no_conflicts: bool,

        #[arg(long = "force", help = "Overwrite the output file without asking")]
        force: bool,
    },

    /// Back up the data file
    Backup {
        /// Destination file path
        dest: String,

        #[arg(long = "compress", help = "Compress the backup into a .zip archive")]
        compress: bool,

        #[arg(long = "force", help = "Overwrite the destination without asking")]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum DayAction {
    /// Add a schedule day
    Add {
        /// Display name, e.g. "Hochzeitstag"
        name: String,

        /// Calendar date (YYYY-MM-DD); omit while the date is still open
        #[arg(long = "date")]
        date: Option<String>,
    },

    /// Edit a schedule day
    Edit {
        id: i64,

        #[arg(long = "name")]
        name: Option<String>,

        /// New calendar date (YYYY-MM-DD)
        #[arg(long = "date", conflicts_with = "clear_date")]
        date: Option<String>,

        #[arg(long = "clear-date", help = "Remove the calendar date")]
        clear_date: bool,

        /// Position among days (lower sorts first)
        #[arg(long = "order")]
        order: Option<i64>,
    },

    /// Delete a schedule day and all of its events
    Del { id: i64 },

    /// List schedule days
    List,
}

#[derive(Subcommand)]
pub enum EventAction {
    /// Add an event to a day
    Add {
        /// Owning day id
        day: i64,

        /// Event title
        title: String,

        /// Start time (HH:MM, 24h)
        start: String,

        /// End time (HH:MM); an end before the start runs past midnight
        #[arg(long = "end")]
        end: Option<String>,

        #[arg(long = "location")]
        location: Option<String>,

        #[arg(long = "notes")]
        notes: Option<String>,

        #[arg(long = "owner")]
        owner: Option<String>,

        #[arg(long = "visibility")]
        visibility: Option<String>,
    },

    /// Edit an event; empty string values clear optional fields
    Edit {
        id: i64,

        #[arg(long = "title")]
        title: Option<String>,

        #[arg(long = "start")]
        start: Option<String>,

        #[arg(long = "end", conflicts_with = "clear_end")]
        end: Option<String>,

        #[arg(long = "clear-end", help = "Remove the end time")]
        clear_end: bool,

        #[arg(long = "location")]
        location: Option<String>,

        #[arg(long = "notes")]
        notes: Option<String>,

        #[arg(long = "owner")]
        owner: Option<String>,

        #[arg(long = "visibility")]
        visibility: Option<String>,

        /// Tie-break position among events sharing a start time
        #[arg(long = "order")]
        order: Option<i64>,
    },

    /// Delete an event
    Del { id: i64 },
}

#[derive(Subcommand)]
pub enum VendorAction {
    /// Add a vendor contact
    Add {
        name: String,
        category: String,

        #[arg(long = "contact")]
        contact: Option<String>,

        #[arg(long = "email")]
        email: Option<String>,

        #[arg(long = "phone")]
        phone: Option<String>,

        /// Booking status; only "booked" vendors reach the printed
        /// contact table
        #[arg(long = "status", default_value = "booked")]
        status: String,
    },

    /// List vendor contacts
    List,

    /// Delete a vendor contact by name
    Del { name: String },
}
