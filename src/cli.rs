use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "country-browser")]
#[command(about = "Terminal browser for the REST Countries dataset with searchable, sortable, selectable tables")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive browser (default)
    Tui {
        /// Override the country dataset endpoint
        #[arg(long)]
        endpoint: Option<String>,
    },

    /// Fetch the country dataset and print it to stdout
    Fetch {
        /// Override the country dataset endpoint
        #[arg(long)]
        endpoint: Option<String>,

        /// Print rows as JSON instead of formatted text
        #[arg(long)]
        json: bool,

        /// Maximum number of rows to print (0 means all)
        #[arg(short, long, default_value = "0")]
        limit: usize,
    },
}
