use crate::core::query::ListMode;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for Rolo
/// CLI rolodex to keep track of friends, where they work, and their shifts
#[derive(Parser)]
#[command(
    name = "rolo",
    version = env!("CARGO_PKG_VERSION"),
    about = "A personal rolodex CLI: contacts, workplaces and shifts in local storage",
    long_about = None
)]
pub struct Cli {
    /// Override storage path (useful for tests or custom locations)
    #[arg(global = true, long = "store")]
    pub store: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the storage and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or a custom path)"
        )]
        editor: Option<String>,
    },

    /// Add a new contact, or edit one with --edit
    Add {
        /// First name (required unless editing)
        #[arg(required_unless_present = "edit_reference")]
        name: Option<String>,

        #[arg(long, help = "Workplace or restaurant label")]
        restaurant: Option<String>,

        #[arg(long, help = "Phone number")]
        phone: Option<String>,

        #[arg(long, help = "Instagram handle (a leading @ is stripped)")]
        instagram: Option<String>,

        #[arg(long, help = "Free-text notes")]
        notes: Option<String>,

        /// Work shift, repeatable (e.g. --shift mon:am --shift tue:eve)
        #[arg(long = "shift", value_name = "DAY:PERIOD")]
        shifts: Vec<String>,

        /// Edit the contact with this id (or unique name) instead of
        /// creating a new one
        #[arg(long = "edit", value_name = "ID")]
        edit_reference: Option<String>,

        /// Drop all stored shifts before applying --shift values
        #[arg(long = "clear-shifts", requires = "edit_reference")]
        clear_shifts: bool,
    },

    /// Delete a contact by id or unique name
    Del {
        id: String,

        #[arg(long = "yes", help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// Show a contact's full card
    Show { id: String },

    /// List contacts grouped the rolodex way
    List {
        #[arg(long, short, help = "Free-text search over names and workplaces")]
        search: Option<String>,

        #[arg(
            long,
            help = "Category tab: an alphabetic range (name mode) or a workplace label"
        )]
        category: Option<String>,

        #[arg(long, value_enum, help = "Group by name ranges or by workplace")]
        mode: Option<ListMode>,

        #[arg(long = "tabs", help = "Print the derived category tabs instead of the list")]
        tabs: bool,
    },

    /// Review or resolve the one-time legacy import
    Import {
        #[arg(long, help = "Append the decoded legacy contacts to the collection")]
        accept: bool,

        #[arg(long, conflicts_with = "accept", help = "Discard the legacy contacts")]
        decline: bool,
    },

    /// Export the contact collection
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the storage file
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
