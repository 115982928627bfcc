mod items;
mod resolve;

use clap::{Parser, Subcommand};

use crate::items::ItemsCommands;

#[derive(Debug, Parser)]
#[command(name = "tripkit-cli")]
#[command(about = "Trip planning command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Resolve a shared maps link into a normalized place
    Resolve {
        /// Shareable Google Maps link
        link: String,
        /// Print the resolved place as JSON
        #[arg(long)]
        json: bool,
    },
    /// Work with saved trip items
    Items {
        #[command(subcommand)]
        command: ItemsCommands,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = tripkit_core::load_app_config()?;

    match cli.command {
        Some(Commands::Resolve { link, json }) => resolve::run_resolve(&config, &link, json).await,
        Some(Commands::Items { command }) => match command {
            ItemsCommands::List { json } => items::run_items_list(&config, json).await,
            ItemsCommands::Add { title, notes } => {
                items::run_items_add(&config, &title, &notes).await
            }
        },
        None => {
            println!("no command given; try `tripkit-cli resolve <LINK>` or `tripkit-cli items list`");
            Ok(())
        }
    }
}
