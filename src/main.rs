use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crowdfund::config::{CatalogConfig, Config};
use crowdfund::render::{render_categories, render_controls, render_page};
use crowdfund::{Catalog, Listing, ListingKind, MemoryCatalog};
use crowdfund_core::{compute_view, ListOptions, MAX_NEIGHBOR_RADIUS};

/// Browse the crowdfunding catalog from the terminal
#[derive(Parser, Debug)]
#[command(name = "crowdfund")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Catalog seed file (JSON)
    #[arg(long, value_name = "PATH")]
    seed: Option<PathBuf>,

    /// Projects per page on the public listing
    #[arg(long, value_name = "N")]
    page_size: Option<u32>,

    /// Pages shown on each side of the current one
    #[arg(
        long,
        value_name = "N",
        global = true,
        value_parser = clap::value_parser!(u32).range(0..=MAX_NEIGHBOR_RADIUS as i64)
    )]
    radius: Option<u32>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Public project listing
    Projects {
        /// Search title, summary and creator
        #[arg(short, long)]
        query: Option<String>,
        /// Category slug
        #[arg(long)]
        category: Option<String>,
        /// Page number (1-indexed)
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },
    /// Back-office listings
    Admin {
        #[command(subcommand)]
        listing: AdminListing,
    },
    /// Categories with project counts
    Categories,
    /// Print the pagination control for arbitrary numbers
    Window {
        #[arg(long)]
        current: u32,
        #[arg(long)]
        total: u32,
    },
}

#[derive(Subcommand, Debug)]
enum AdminListing {
    /// Every project, including closed ones
    Projects {
        #[arg(short, long)]
        query: Option<String>,
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },
    /// Registered users
    Users {
        #[arg(short, long)]
        query: Option<String>,
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },
}

/// Log filter used when `RUST_LOG` is unset
const DEFAULT_LOG_FILTER: &str = "warn,crowdfund=info";

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration
    let config = Config::load(
        args.config.as_ref(),
        args.seed.as_ref(),
        args.page_size,
        args.radius,
    )?;
    let radius = config.pagination.neighbor_radius;

    info!(
        "Configuration loaded: page_size={} admin_page_size={} radius={}",
        config.pagination.page_size, config.pagination.admin_page_size, radius
    );

    let (kind, options) = match args.command {
        Command::Window { current, total } => {
            let view = compute_view(current, total, radius);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                println!("{}", render_controls(&view));
            }
            return Ok(());
        }
        Command::Categories => {
            let categories = open_catalog(&config)?.categories()?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&categories)?);
            } else {
                println!("{}", render_categories(&categories));
            }
            return Ok(());
        }
        Command::Projects {
            query,
            category,
            page,
        } => (
            ListingKind::Projects,
            ListOptions {
                query,
                category,
                page,
                per_page: config.pagination.page_size,
            },
        ),
        Command::Admin { listing } => {
            let (kind, query, page) = match listing {
                AdminListing::Projects { query, page } => (ListingKind::AdminProjects, query, page),
                AdminListing::Users { query, page } => (ListingKind::AdminUsers, query, page),
            };
            let options = ListOptions {
                query,
                category: None,
                page,
                per_page: config.pagination.admin_page_size,
            };
            (kind, options)
        }
    };

    let catalog = open_catalog(&config)?;
    let mut listing = Listing::new(kind, options, radius);
    let page = listing.load(catalog.as_ref())?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&page)?);
    } else {
        println!("{}", render_page(&page));
    }

    Ok(())
}

/// Create the catalog described by the configuration
fn open_catalog(config: &Config) -> anyhow::Result<Arc<dyn Catalog>> {
    let catalog: Arc<dyn Catalog> = match &config.catalog {
        CatalogConfig::Memory { seed: Some(path) } => {
            info!("Using catalog seed at: {}", path.display());
            Arc::new(MemoryCatalog::from_path(path)?)
        }
        CatalogConfig::Memory { seed: None } => Arc::new(MemoryCatalog::builtin()?),
    };
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn default_log_filter_parses() {
        assert!(tracing_subscriber::EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
    }

    #[test]
    fn cli_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn radius_above_cap_is_rejected() {
        let too_big = (MAX_NEIGHBOR_RADIUS + 1).to_string();
        let args = ["crowdfund", "window", "--current", "1", "--total", "10", "--radius"];
        assert!(Args::try_parse_from(args.iter().copied().chain([too_big.as_str()])).is_err());

        let args = Args::try_parse_from([
            "crowdfund", "window", "--current", "1", "--total", "10", "--radius", "3",
        ])
        .unwrap();
        assert_eq!(args.radius, Some(3));
    }
}
