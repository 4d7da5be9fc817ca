mod commands;
mod config;
mod prompt;
mod render;
mod tui;

use anyhow::Result;
use agenda_core::sort::{SortKey, SortOrder, SortSpec};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "agenda")]
#[command(about = "Manage your events against an agenda server")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and store a session
    Login {
        /// Email to log in with (prompted if omitted)
        #[arg(short, long)]
        email: Option<String>,
    },
    /// Create a new account
    Register,
    /// Discard the stored session
    Logout,
    /// List your events
    List {
        /// Field to sort by
        #[arg(long, value_enum, default_value_t = SortKeyArg::Date)]
        sort: SortKeyArg,

        /// Sort direction
        #[arg(long, value_enum, default_value_t = SortOrderArg::Asc)]
        order: SortOrderArg,
    },
    /// Create an event
    New,
    /// Edit an event
    Edit {
        /// Event id (see `agenda list`)
        id: i64,
    },
    /// Delete an event
    Delete {
        /// Event id (see `agenda list`)
        id: i64,
    },
    /// Show one event in full
    Show {
        /// Event id (see `agenda list`)
        id: i64,
    },
    /// Show the logged-in user
    Whoami,
}

#[derive(Clone, Copy, ValueEnum)]
enum SortKeyArg {
    Date,
    Title,
    Location,
}

#[derive(Clone, Copy, ValueEnum)]
enum SortOrderArg {
    Asc,
    Desc,
}

impl From<SortKeyArg> for SortKey {
    fn from(arg: SortKeyArg) -> Self {
        match arg {
            SortKeyArg::Date => SortKey::Date,
            SortKeyArg::Title => SortKey::Title,
            SortKeyArg::Location => SortKey::Location,
        }
    }
}

impl From<SortOrderArg> for SortOrder {
    fn from(arg: SortOrderArg) -> Self {
        match arg {
            SortOrderArg::Asc => SortOrder::Ascending,
            SortOrderArg::Desc => SortOrder::Descending,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Login { email } => commands::login::run(email).await,
        Commands::Register => commands::register::run().await,
        Commands::Logout => commands::logout::run(),
        Commands::List { sort, order } => {
            let spec = SortSpec {
                key: sort.into(),
                order: order.into(),
            };
            commands::list::run(spec).await
        }
        Commands::New => commands::new::run().await,
        Commands::Edit { id } => commands::edit::run(id).await,
        Commands::Delete { id } => commands::delete::run(id).await,
        Commands::Show { id } => commands::show::run(id).await,
        Commands::Whoami => commands::whoami::run(),
    }
}
