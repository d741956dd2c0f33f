use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "postbook")]
#[command(about = "File-backed post-office customer records", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the data file (overrides the configured one)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all records
    #[command(alias = "ls")]
    List,

    /// Add a new record (the id is assigned automatically)
    Add {
        #[arg(long)]
        name: String,

        /// Age in years, 1-120
        #[arg(long)]
        age: String,

        #[arg(long)]
        street: String,

        #[arg(long)]
        city: String,

        #[arg(long)]
        postal_code: String,

        #[arg(long)]
        country: String,

        /// Digits only, at least 10 of them
        #[arg(long)]
        phone: String,

        #[arg(long)]
        email: String,
    },

    /// Amend fields of an existing record; omitted flags keep their value
    Amend {
        /// Id of the record to amend
        id: u32,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        age: Option<String>,

        #[arg(long)]
        street: Option<String>,

        #[arg(long)]
        city: Option<String>,

        #[arg(long)]
        postal_code: Option<String>,

        #[arg(long)]
        country: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        email: Option<String>,
    },

    /// Delete a record
    #[command(alias = "rm")]
    Delete {
        /// Id of the record to delete
        id: u32,
    },

    /// Display a single record
    #[command(alias = "view")]
    Show {
        /// Id of the record to display
        id: u32,
    },

    /// Search records by keyword, across every field
    Search { term: String },

    /// Create an empty data file
    Init,

    /// Get or set configuration (keys: data-file, log-file)
    Config {
        key: Option<String>,

        /// Value to set (if omitted, prints the current value)
        value: Option<String>,
    },
}
