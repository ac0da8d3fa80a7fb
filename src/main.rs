mod api;
mod category;
mod config;
mod guards;
mod layout;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::BackendClient;
use config::{AppConfig, RuntimeConfig};
use layout::Link;

#[derive(Parser, Debug)]
#[command(name = "portalctl")]
#[command(version = "0.1.0")]
#[command(about = "A terminal companion for genomics data portal deployments")]
struct Args {
    /// Environment marker (overrides PORTAL_ENV and the config file)
    #[arg(short, long, global = true)]
    env: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Probe the backend and print a JSON status line
    Status,

    /// Print a link list laid out in balanced columns
    Links {
        /// JSON file holding an array of {label, url} records
        file: PathBuf,

        /// Column threshold override
        #[arg(short, long)]
        threshold: Option<usize>,
    },

    /// Flatten a workflow-category catalog file and print the rows
    Workflows {
        /// JSON file holding an array of workflow categories
        file: PathBuf,
    },

    /// Print the filter category registry, or look up a single key
    Categories {
        /// Category key to look up
        key: Option<String>,
    },

    /// Print the resolved configuration
    Config {
        /// Write the current preferences to the config file
        #[arg(long)]
        init: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let app_config = AppConfig::load()?;
    let runtime = RuntimeConfig::resolve(&app_config, args.env.as_deref());

    match args.command {
        Command::Status => print_status(&runtime).await,
        Command::Links { file, threshold } => {
            print_links(&file, threshold.or(runtime.column_threshold))
        }
        Command::Workflows { file } => print_workflows(&file),
        Command::Categories { key } => print_categories(key.as_deref()),
        Command::Config { init } => print_config(&app_config, &runtime, init),
    }
}

async fn print_status(runtime: &RuntimeConfig) -> Result<()> {
    let client = BackendClient::new(runtime.endpoints.api_base_url.as_str());
    let status = client.version().await;

    let class = if status.is_connected() {
        "connected"
    } else {
        "disconnected"
    };

    let output = serde_json::json!({
        "connected": status.is_connected(),
        "version": status.version(),
        "class": class,
        "environment": runtime.environment.name(),
        "api": runtime.endpoints.api_base_url,
    });

    println!("{}", serde_json::to_string(&output)?);
    Ok(())
}

fn print_links(file: &Path, threshold: Option<usize>) -> Result<()> {
    let content = std::fs::read_to_string(file)?;
    let raw: serde_json::Value = serde_json::from_str(&content)?;

    let items = raw
        .as_array()
        .ok_or_else(|| anyhow::anyhow!("Expected a JSON array of links"))?;

    // Reject malformed records up front so the layout never sees them
    for (i, item) in items.iter().enumerate() {
        let valid = match (item.get("label"), item.get("url")) {
            (Some(label), Some(url)) => guards::is_string(label) && guards::is_string(url),
            _ => false,
        };
        if !valid {
            anyhow::bail!("Link {} is missing a string label or url", i);
        }
        if let Some(description) = item.get("description") {
            if !guards::is_string_or_null(description) {
                anyhow::bail!("Link {} has a non-string description", i);
            }
        }
        if let Some(tags) = item.get("tags") {
            if !guards::is_string_array(tags) {
                anyhow::bail!("Link {} has a malformed tag list", i);
            }
        }
    }

    let links: Vec<Link> = serde_json::from_value(raw)?;
    let columns = match threshold {
        Some(t) => layout::split_columns_at(&links, t),
        None => layout::split_columns(&links),
    };

    let label_width = links.iter().map(|l| l.label.len()).max().unwrap_or(0);
    let rows = columns.iter().map(|c| c.len()).max().unwrap_or(0);

    for row in 0..rows {
        let line: Vec<String> = columns
            .iter()
            .filter_map(|column| column.get(row))
            .map(|link| format!("{:label_width$}  {}", link.label, link.url))
            .collect();
        println!("{}", line.join("    "));
    }

    Ok(())
}

fn print_workflows(file: &Path) -> Result<()> {
    let content = std::fs::read_to_string(file)?;
    let categories: Vec<category::WorkflowCategory> = serde_json::from_str(&content)?;
    let rows = category::flatten_workflows(&categories);

    tracing::info!("Flattened {} workflows from {} categories", rows.len(), categories.len());

    for row in &rows {
        let marker = if row.disabled { " (coming soon)" } else { "" };
        println!(
            "{}\t{}\t{}{}",
            row.category, row.name, row.taxonomy_id, marker
        );
    }

    Ok(())
}

fn print_categories(key: Option<&str>) -> Result<()> {
    if let Some(key) = key {
        let category = category::category_by_key(key)
            .ok_or_else(|| anyhow::anyhow!("Unknown category key: {}", key))?;
        println!("{}", category.label);
        return Ok(());
    }

    let key_width = category::CATEGORIES
        .iter()
        .map(|c| c.key.len())
        .max()
        .unwrap_or(0);

    for category in category::CATEGORIES {
        println!("{:key_width$}  {}", category.key, category.label);
    }

    Ok(())
}

fn print_config(app_config: &AppConfig, runtime: &RuntimeConfig, init: bool) -> Result<()> {
    if init {
        app_config.save()?;
        tracing::info!("Wrote preferences to the config file");
    }

    println!("environment        {}", runtime.environment.name());
    println!("galaxy instance    {}", runtime.endpoints.galaxy_instance_url);
    println!("api base url       {}", runtime.endpoints.api_base_url);
    println!(
        "column threshold   {}",
        runtime
            .column_threshold
            .unwrap_or(layout::DEFAULT_COLUMN_THRESHOLD)
    );

    Ok(())
}
