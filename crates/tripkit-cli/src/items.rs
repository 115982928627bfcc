//! Saved item command handlers for the CLI.

use clap::Subcommand;
use tripkit_core::AppConfig;
use tripkit_store::ItemStore;

/// Sub-commands available under `items`.
#[derive(Debug, Subcommand)]
pub enum ItemsCommands {
    /// List saved items, newest first
    List {
        /// Print the raw JSON list instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Add a new saved item
    Add {
        /// Item title
        title: String,
        /// Free-form notes
        #[arg(long, default_value = "")]
        notes: String,
    },
}

/// List saved items, newest first.
///
/// # Errors
///
/// Returns an error if the items file cannot be read or parsed.
pub(crate) async fn run_items_list(config: &AppConfig, as_json: bool) -> anyhow::Result<()> {
    let store = ItemStore::open(&config.items_path).await?;
    let items = store.list().await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    if items.is_empty() {
        println!("no saved items; run `items add <TITLE>` first");
        return Ok(());
    }

    let header = format!("{:<38}{:<18}{:<30}NOTES", "ID", "CREATED", "TITLE");
    println!("{header}");
    for item in &items {
        let id = item.id.to_string();
        let created = item.created_at.format("%Y-%m-%d %H:%M").to_string();
        let title_display = if item.title.chars().count() > 25 {
            format!("{}...", item.title.chars().take(25).collect::<String>())
        } else {
            item.title.clone()
        };
        println!(
            "{:<38}{:<18}{:<30}{}",
            id, created, title_display, item.notes
        );
    }

    Ok(())
}

/// Add a new saved item.
///
/// # Errors
///
/// Returns an error if the title is blank or the items file cannot be written.
pub(crate) async fn run_items_add(
    config: &AppConfig,
    title: &str,
    notes: &str,
) -> anyhow::Result<()> {
    let title = title.trim();
    if title.is_empty() {
        anyhow::bail!("title must not be empty");
    }

    let store = ItemStore::open(&config.items_path).await?;
    let item = store.create(title, notes).await?;

    println!("saved '{}' ({})", item.title, item.id);
    Ok(())
}
