use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "shumi", about = concat!("[+] shumi v", env!("CARGO_PKG_VERSION"), " - track your hobbies from the terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different data directory
    #[arg(short = 'C', long = "data-dir", global = true)]
    pub data_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the catalog, optionally filtered
    List(ListArgs),
    /// Search items by name (shorthand for list --search)
    Search(SearchArgs),
    /// Add an item to a category
    Add(AddArgs),
    /// Set an item's status
    Status(StatusArgs),
    /// Mark an item in progress (shortcut for status <NAME> 進行中)
    Start(StartArgs),
    /// Mark an item done (shortcut for status <NAME> 完了)
    Done(DoneArgs),
    /// Show overall and per-category progress
    Progress,
    /// List categories with item counts
    Categories,
    /// Export the full status list as JSON
    Export(ExportArgs),
    /// Replace the catalog from an exported JSON document
    Import(ImportArgs),
    /// Discard custom items and statuses, restoring the seed catalog
    Reset,
}

#[derive(Args)]
pub struct ListArgs {
    /// Only items whose name contains this text (case-insensitive)
    #[arg(long)]
    pub search: Option<String>,

    /// Only this category
    #[arg(long)]
    pub category: Option<String>,

    /// Only items with this status (未着手/進行中/完了 or not-started/in-progress/done)
    #[arg(long)]
    pub status: Option<String>,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Text to look for in item names
    pub text: String,

    /// Only this category
    #[arg(long)]
    pub category: Option<String>,

    /// Only items with this status
    #[arg(long)]
    pub status: Option<String>,
}

#[derive(Args)]
pub struct AddArgs {
    /// Item name
    pub name: String,

    /// Category to add the item to (created if new)
    #[arg(short, long)]
    pub category: String,

    /// Initial status (default 未着手)
    #[arg(short, long)]
    pub status: Option<String>,
}

#[derive(Args)]
pub struct StatusArgs {
    /// Item name
    pub name: String,

    /// New status (未着手/進行中/完了 or not-started/in-progress/done)
    pub status: String,
}

#[derive(Args)]
pub struct StartArgs {
    /// Item name
    pub name: String,
}

#[derive(Args)]
pub struct DoneArgs {
    /// Item name
    pub name: String,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,
}

#[derive(Args)]
pub struct ImportArgs {
    /// JSON document produced by `shumi export`
    pub file: String,
}
