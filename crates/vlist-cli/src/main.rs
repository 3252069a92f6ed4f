//! VList CLI
//!
//! Opens (and on first run seeds) the row store, then shows it through either
//! list flavour.

use clap::{Parser, Subcommand, ValueEnum};
use vlist_core::logging_facility::{self, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "vlist")]
#[command(about = "VList - eager vs. virtual list rendering over SQLite", long_about = None)]
struct Cli {
    #[command(flatten)]
    store: commands::StoreOpts,

    /// Log output format (written to stderr)
    #[arg(long, value_enum, default_value_t = LogFormat::Dev, global = true)]
    log: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Dev,
    Json,
}

impl From<LogFormat> for Profile {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Dev => Profile::Development,
            LogFormat::Json => Profile::Production,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the number of rows
    Count,
    /// Print one row by identifier
    Get(commands::get::GetArgs),
    /// Load every row into the list, then show it
    Normal(commands::normal::NormalArgs),
    /// Declare the row count and fetch only visible cells
    #[command(name = "virtual")]
    Virtual(commands::virtual_list::VirtualArgs),
}

fn main() {
    let cli = Cli::parse();
    logging_facility::init(cli.log.into());

    let result = match cli.command {
        Commands::Count => commands::count::execute(&cli.store),
        Commands::Get(args) => commands::get::execute(args, &cli.store),
        Commands::Normal(args) => commands::normal::execute(args, &cli.store),
        Commands::Virtual(args) => commands::virtual_list::execute(args, &cli.store),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
