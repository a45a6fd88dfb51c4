//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "eventify")]
#[command(about = "Terminal calendar event manager", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new calendar
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Default event category (personal, work, casual)
        #[arg(short, long, default_value = "personal")]
        category: String,
    },

    /// Add an event
    Add {
        /// Event date (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        /// Start time (HH:MM, 24-hour clock)
        #[arg(long)]
        start: String,

        /// End time (HH:MM, 24-hour clock)
        #[arg(long)]
        end: String,

        /// Event title
        #[arg(long)]
        title: String,

        /// Event category (personal, work, casual); defaults from config
        #[arg(long)]
        category: Option<String>,

        /// Optional description
        #[arg(long, default_value = "")]
        description: String,
    },

    /// Edit an event, replacing it by id
    Edit {
        /// Id of the event to edit
        id: String,

        /// New date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// New start time (HH:MM)
        #[arg(long)]
        start: Option<String>,

        /// New end time (HH:MM)
        #[arg(long)]
        end: Option<String>,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New category
        #[arg(long)]
        category: Option<String>,

        /// New description
        #[arg(long)]
        description: Option<String>,
    },

    /// Delete an event by id
    Delete {
        /// Id of the event to delete
        id: String,
    },

    /// List events
    List {
        /// Only events on this date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// Only events in this month (1-12; defaults to the current month)
        #[arg(long)]
        month: Option<u32>,

        /// Year for --month (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,
    },

    /// Show a month as a calendar grid
    Month {
        /// Month to show (1-12; defaults to the current month)
        #[arg(long)]
        month: Option<u32>,

        /// Year to show (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,

        /// Step this many months back from the selected month
        #[arg(long, default_value_t = 0, conflicts_with = "next")]
        prev: u32,

        /// Step this many months forward from the selected month
        #[arg(long, default_value_t = 0)]
        next: u32,
    },

    /// Export a month of events to a file
    Export {
        /// Output format (json, csv)
        format: String,

        /// Month to export (1-12; defaults to the current month)
        #[arg(long)]
        month: Option<u32>,

        /// Year to export (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,

        /// Output file (defaults to events.json / events.csv)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
