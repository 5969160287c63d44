mod check;
mod config;
mod output;

use std::collections::BTreeMap;

use anyhow::Context;
use clap::{Parser, Subcommand};
use cxx_fhir_urls::{find, lookup, system::patient::gender_coding, GenderType, ShortName};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{CliConfig, OutputFormat};

#[derive(Parser)]
#[command(name = "cxx-urls")]
#[command(about = "Browse the CentraXX FHIR URL registry")]
struct Cli {
    /// Output format (overrides CXX_URLS_FORMAT)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List every URL in a namespace, in declaration order
    List {
        /// Dotted namespace path, e.g. extension.sprec
        path: Option<String>,
    },
    /// Show the namespace tree with URL counts
    Tree {
        /// Dotted namespace path
        path: Option<String>,
    },
    /// Resolve a short name to its full URL
    Resolve {
        /// Dotted namespace path
        path: String,
        /// Last path segment of the URL, e.g. warmIschTime
        name: String,
    },
    /// Print the short name map of a namespace
    SubExtensions {
        /// Dotted namespace path
        path: String,
    },
    /// Export namespaces with their domains as JSON or YAML
    Export {
        /// Dotted namespace path
        path: Option<String>,
    },
    /// Check the registry for duplicate URLs and short name collisions
    Check,
    /// Print the coding for a patient gender
    Gender {
        /// Gender type, e.g. female
        value: String,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let filter = config::log_filter_from_env_value(std::env::var("RUST_LOG").ok());
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_new(filter)?)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = CliConfig::from_env(cli.format).context("reading CXX_URLS_* environment")?;
    let format = config.format();
    let default_path = |path: Option<String>| path.unwrap_or_else(|| config.namespace().to_owned());

    match cli.command {
        Some(Commands::List { path }) => {
            let path = default_path(path);
            let domains = find(&path)?.all_domains();
            tracing::debug!(%path, count = domains.len(), "listing domains");
            print!("{}", output::render_list(&domains, format)?);
        }
        Some(Commands::Tree { path }) => {
            let path = default_path(path);
            let label = if path.is_empty() { "registry" } else { path.as_str() };
            print!("{}", output::render_tree(find(&path)?, label));
        }
        Some(Commands::Resolve { path, name }) => {
            let name = ShortName::new(&name)?;
            let url = cxx_fhir_urls::resolve(&path, &name)?;
            println!("{url}");
        }
        Some(Commands::SubExtensions { path }) => {
            let node = find(&path)?;
            let map = match node.sub_extensions() {
                Some(map) => map,
                None => {
                    tracing::info!(%path, "no curated map, deriving from all domains");
                    lookup::sub_extensions(node.all_domains())
                }
            };
            let sorted: BTreeMap<_, _> = map.into_iter().collect();
            print!("{}", output::render_map(&sorted, format)?);
        }
        Some(Commands::Export { path }) => {
            let path = default_path(path);
            let entries = cxx_fhir_urls::entries(&path)?;
            tracing::info!(%path, namespaces = entries.len(), "exporting");
            print!("{}", output::render_entries(&entries, format)?);
        }
        Some(Commands::Check) => {
            let report = check::check_registry();
            for (path, collision) in &report.collisions {
                tracing::warn!(
                    %path,
                    key = collision.key,
                    urls = ?collision.urls,
                    "short name collision"
                );
            }
            for (path, urls) in &report.duplicates {
                tracing::error!(%path, ?urls, "duplicate urls");
            }
            for (path, err) in &report.curated_collisions {
                tracing::error!(%path, %err, "curated sub-extension map is ambiguous");
            }
            if !report.is_ok() {
                anyhow::bail!(
                    "registry check failed: {} namespaces with duplicates, {} ambiguous maps",
                    report.duplicates.len(),
                    report.curated_collisions.len()
                );
            }
            println!(
                "registry ok: {} urls, {} short name collisions",
                cxx_fhir_urls::all_domains().len(),
                report.collisions.len()
            );
        }
        Some(Commands::Gender { value }) => {
            let gender: GenderType = value.parse()?;
            let (system, code) = gender_coding(gender);
            println!("{system}|{code}");
        }
        None => {
            println!("Use 'cxx-urls --help' for commands");
        }
    }

    Ok(())
}
