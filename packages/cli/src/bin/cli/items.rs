use anyhow::Context;
use clap::Subcommand;
use colored::*;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};
use listkeeper_cli::ChecklistClient;
use listkeeper_core::ChecklistItem;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum ItemsCommands {
    /// List all checklist items
    List,
    /// Show item details
    Show {
        /// Item ID to show
        id: i64,
    },
    /// Add a new item
    Add {
        /// Item title (at least 3 characters)
        title: String,
        /// Item description
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Mark an item as completed
    Done {
        id: i64,
    },
    /// Mark an item as not completed
    Undo {
        id: i64,
    },
    /// Change an item's title or description
    Edit {
        /// Item ID to edit
        id: i64,
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Delete an item
    Delete {
        /// Item ID to delete
        id: i64,
    },
    /// Find items whose title contains a keyword (case-insensitive)
    Search {
        keyword: String,
    },
    /// Create every item from a JSON array file in one batch
    Import {
        file: PathBuf,
    },
}

pub async fn handle_items_command(
    client: &ChecklistClient,
    command: ItemsCommands,
) -> anyhow::Result<()> {
    match command {
        ItemsCommands::List => {
            let items = client.list_items().await?;
            print_items(&items, "Checklist");
        }
        ItemsCommands::Show { id } => {
            let item = client.get_item(id).await?;
            println!("{}", format!("Checklist item #{}", id).blue().bold());
            println!();
            print_item_details(&item);
        }
        ItemsCommands::Add { title, description } => {
            let mut item = ChecklistItem::new(title);
            item.description = description;
            let created = client.create_item(&item).await?;
            println!("{} Created item", "✓".green());
            print_item_details(&created);
        }
        ItemsCommands::Done { id } => {
            let item = client.set_completed(id, true).await?;
            println!("{} Completed: {}", "✓".green(), item.title);
        }
        ItemsCommands::Undo { id } => {
            let item = client.set_completed(id, false).await?;
            println!("{} Reopened: {}", "↺".yellow(), item.title);
        }
        ItemsCommands::Edit {
            id,
            title,
            description,
        } => {
            if title.is_none() && description.is_none() {
                anyhow::bail!("Nothing to change: pass --title and/or --description");
            }
            let item = client.edit_item(id, title, description).await?;
            println!("{} Updated item", "✓".green());
            print_item_details(&item);
        }
        ItemsCommands::Delete { id } => {
            let message = client.delete_item(id).await?;
            println!("{} {}", "✓".green(), message);
        }
        ItemsCommands::Search { keyword } => {
            let items = client.search_items(&keyword).await?;
            print_items(&items, &format!("Items matching '{}'", keyword));
        }
        ItemsCommands::Import { file } => {
            let content = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let items: Vec<ChecklistItem> = serde_json::from_str(&content)
                .with_context(|| format!("{} is not a JSON array of items", file.display()))?;

            let created = client.create_items(&items).await?;
            println!("{} Imported {} items", "✓".green(), created.len());
        }
    }

    Ok(())
}

fn print_items(items: &[ChecklistItem], heading: &str) {
    if items.is_empty() {
        println!("{}", "No items found".yellow());
        println!("{}", "Use 'listkeeper items add' to create one".dimmed());
        return;
    }

    println!("{}", heading.blue().bold());
    println!();

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec!["ID", "Done", "Title", "Description", "Version"]);

    for item in items {
        table.add_row(vec![
            item.id.map(|id| id.to_string()).unwrap_or_default(),
            if item.completed { "✓" } else { "" }.to_string(),
            truncate(&item.title, 40),
            truncate(item.description.as_deref().unwrap_or("—"), 40),
            item.version.to_string(),
        ]);
    }

    println!("{}", table);
    let done = items.iter().filter(|i| i.completed).count();
    println!(
        "Total: {} items ({} done)",
        items.len().to_string().cyan(),
        done.to_string().green()
    );
}

fn print_item_details(item: &ChecklistItem) {
    if let Some(id) = item.id {
        println!("{:<15} {}", "ID:".cyan(), id);
    }
    println!("{:<15} {}", "Title:".cyan(), item.title);

    if let Some(description) = &item.description {
        if !description.trim().is_empty() {
            println!("{:<15} {}", "Description:".cyan(), description);
        }
    }

    let status = if item.completed {
        "Completed".green()
    } else {
        "Open".yellow()
    };
    println!("{:<15} {}", "Status:".cyan(), status);
    println!("{:<15} {}", "Version:".cyan(), item.version);
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
