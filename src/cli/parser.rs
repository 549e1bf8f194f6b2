use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for gerenciador
/// CLI application to keep a registry of clients and legal cases in a CSV file
#[derive(Parser)]
#[command(
    name = "gerenciador",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small client/case registry: list, add, edit, delete and search records kept in a CSV file",
    long_about = None
)]
pub struct Cli {
    /// Override the data file path (useful for tests or a second registry)
    #[arg(global = true, long = "file", value_name = "CSV")]
    pub file: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Record fields accepted by `add` and `edit`.
/// On `edit`, only the options given replace the stored values.
#[derive(Args, Debug, Clone, Default)]
pub struct RecordFields {
    /// Client name (Nome)
    #[arg(long)]
    pub name: Option<String>,

    /// CPF or CNPJ, with or without punctuation
    #[arg(long = "tax-id", value_name = "CPF/CNPJ")]
    pub tax_id: Option<String>,

    /// Birthdate, stored as typed
    #[arg(long)]
    pub birthdate: Option<String>,

    /// Phone number
    #[arg(long)]
    pub phone: Option<String>,

    /// Court process number
    #[arg(long = "process-number", value_name = "NUMBER")]
    pub process_number: Option<String>,

    /// Process type (see `gerenciador types`)
    #[arg(long = "type", value_name = "TYPE")]
    pub process_type: Option<String>,

    /// Free-text description
    #[arg(long)]
    pub description: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the data file
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

    /// List every record (long values are truncated)
    List,

    /// Show every field of one record
    Show {
        /// Row number as printed by `list` or `search`. Rows below a deleted
        /// one move up, so a number copied before a delete may point elsewhere
        id: u64,
    },

    /// Add a record
    Add {
        #[command(flatten)]
        fields: RecordFields,
    },

    /// Edit a record; options not given keep their current value
    Edit {
        /// Row number as printed by `list` or `search`. Rows below a deleted
        /// one move up, so a number copied before a delete may point elsewhere
        id: u64,

        #[command(flatten)]
        fields: RecordFields,

        /// Refuse to act unless the row's CPF/CNPJ matches (punctuation ignored)
        #[arg(long = "expect-tax-id", value_name = "CPF/CNPJ")]
        expect_tax_id: Option<String>,
    },

    /// Delete a record
    Del {
        /// Row number as printed by `list` or `search`. Rows below a deleted
        /// one move up, so a number copied before a delete may point elsewhere
        id: u64,

        /// Delete without asking for confirmation
        #[arg(long, short = 'f')]
        force: bool,

        /// Refuse to act unless the row's CPF/CNPJ matches (punctuation ignored)
        #[arg(long = "expect-tax-id", value_name = "CPF/CNPJ")]
        expect_tax_id: Option<String>,
    },

    /// Find records by CPF/CNPJ (dots and hyphens are ignored)
    Search {
        /// CPF or CNPJ to look for
        tax_id: String,
    },

    /// Print the available process types
    Types,
}
