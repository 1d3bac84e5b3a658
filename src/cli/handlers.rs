use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::model::catalog::Catalog;
use crate::model::item::{HobbyItem, HobbyStatus};
use crate::ops::filter::{self, ViewFilter};
use crate::ops::progress;
use crate::store::FileStore;
use crate::store::config;
use crate::util::unicode::{display_width, pad_to_width};

/// Data directory name used when neither -C nor SHUMI_DATA_DIR is given.
const DEFAULT_DATA_DIR: &str = ".shumi";

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;

    match cli.command {
        // Read commands
        Commands::List(args) => cmd_list(&data_dir, args, json),
        Commands::Search(args) => cmd_list(
            &data_dir,
            ListArgs {
                search: Some(args.text),
                category: args.category,
                status: args.status,
            },
            json,
        ),
        Commands::Progress => cmd_progress(&data_dir, json),
        Commands::Categories => cmd_categories(&data_dir, json),
        Commands::Export(args) => cmd_export(&data_dir, args),

        // Write commands
        Commands::Add(args) => cmd_add(&data_dir, args),
        Commands::Status(args) => {
            cmd_set_status(&data_dir, &args.name, parse_status(&args.status)?)
        }
        Commands::Start(args) => cmd_set_status(&data_dir, &args.name, HobbyStatus::InProgress),
        Commands::Done(args) => cmd_set_status(&data_dir, &args.name, HobbyStatus::Done),
        Commands::Import(args) => cmd_import(&data_dir, args),
        Commands::Reset => cmd_reset(&data_dir),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn resolve_data_dir(flag: Option<&str>) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Some(dir) = flag {
        return Ok(PathBuf::from(dir));
    }
    if let Ok(dir) = std::env::var("SHUMI_DATA_DIR")
        && !dir.is_empty()
    {
        return Ok(PathBuf::from(dir));
    }
    Ok(std::env::current_dir()?.join(DEFAULT_DATA_DIR))
}

fn load_catalog(data_dir: &Path) -> Result<Catalog, Box<dyn std::error::Error>> {
    let config = config::load_config(data_dir)?;
    let seed = config::load_seed(data_dir, &config)?;
    let store = FileStore::new(data_dir);
    Ok(Catalog::load(seed, Box::new(store)))
}

fn parse_status(s: &str) -> Result<HobbyStatus, String> {
    HobbyStatus::parse_arg(s)
        .ok_or_else(|| format!("unknown status: {s} (use 未着手, 進行中 or 完了)"))
}

// ---------------------------------------------------------------------------
// Read command handlers
// ---------------------------------------------------------------------------

fn cmd_list(data_dir: &Path, args: ListArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = load_catalog(data_dir)?;
    let view_filter = ViewFilter {
        search: args.search.unwrap_or_default(),
        category: args.category,
        status: args.status.as_deref().map(parse_status).transpose()?,
    };
    let views = filter::apply(&catalog, &view_filter);

    if json {
        println!("{}", serde_json::to_string_pretty(&views)?);
        return Ok(());
    }

    if views.is_empty() {
        println!("(no matching items)");
        return Ok(());
    }
    let mut first = true;
    for view in &views {
        if !first {
            println!();
        }
        first = false;
        let category_progress = progress::for_category(&catalog, &view.category);
        for line in format_category(view, &category_progress) {
            println!("{line}");
        }
    }
    Ok(())
}

fn cmd_progress(data_dir: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = load_catalog(data_dir)?;
    let overall = progress::overall(&catalog.export_items());

    if json {
        let report = ProgressReportJson {
            overall: progress_to_json(&overall),
            categories: catalog
                .categories()
                .keys()
                .map(|category| CategoryProgressJson {
                    category: category.clone(),
                    progress: progress_to_json(&progress::for_category(&catalog, category)),
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", format_progress_line(&overall));
    let width = catalog
        .categories()
        .keys()
        .map(|c| display_width(c))
        .max()
        .unwrap_or(0);
    for category in catalog.categories().keys() {
        let category_progress = progress::for_category(&catalog, category);
        println!(
            "{}  {}",
            pad_to_width(category, width),
            format_progress_line(&category_progress)
        );
    }
    Ok(())
}

fn cmd_categories(data_dir: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = load_catalog(data_dir)?;

    if json {
        let infos: Vec<CategoryInfoJson> = catalog
            .categories()
            .iter()
            .map(|(category, items)| CategoryInfoJson {
                category: category.clone(),
                count: items.len(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&infos)?);
        return Ok(());
    }

    for (category, items) in catalog.categories() {
        println!("{} ({})", category, items.len());
    }
    Ok(())
}

fn cmd_export(data_dir: &Path, args: ExportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = load_catalog(data_dir)?;
    let items = catalog.export_items();
    let text = serde_json::to_string_pretty(&items)?;

    match args.output {
        Some(path) => {
            fs::write(&path, text)?;
            println!("exported {} items to {}", items.len(), path);
        }
        None => println!("{text}"),
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Write command handlers
// ---------------------------------------------------------------------------

fn cmd_add(data_dir: &Path, args: AddArgs) -> Result<(), Box<dyn std::error::Error>> {
    let status = match args.status.as_deref() {
        Some(s) => parse_status(s)?,
        None => HobbyStatus::NotStarted,
    };
    let mut catalog = load_catalog(data_dir)?;
    catalog.add_item(&args.name, &args.category, status)?;
    println!(
        "added {} to {} ({})",
        args.name.trim(),
        args.category.trim(),
        status.label()
    );
    Ok(())
}

fn cmd_set_status(
    data_dir: &Path,
    name: &str,
    status: HobbyStatus,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut catalog = load_catalog(data_dir)?;
    catalog.set_status(name, status)?;
    println!("{}: {}", name, status.label());
    Ok(())
}

fn cmd_import(data_dir: &Path, args: ImportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let text = fs::read_to_string(&args.file)?;
    // Validate before touching the catalog: a bad document must not apply
    // partially.
    let items: Vec<HobbyItem> = serde_json::from_str(&text).map_err(|e| {
        format!(
            "invalid import document ({e}); expected [{{\"name\": …, \"status\": 未着手|進行中|完了}}]"
        )
    })?;

    let mut catalog = load_catalog(data_dir)?;
    let count = items.len();
    catalog.import_items(items);
    catalog.persist()?;
    println!("imported {count} items");
    Ok(())
}

fn cmd_reset(data_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut catalog = load_catalog(data_dir)?;
    catalog.reset()?;
    println!("catalog reset: custom items and statuses cleared");
    Ok(())
}
