use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use storefront_state::cli::{Config, logging};
use storefront_state::{Catalog, Language, Localizer, Params, Storefront};

#[derive(Parser)]
#[command(name = "storefront-state")]
#[command(about = "Inspect persisted storefront state and check translation tables")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, global = true, env = "STOREFRONT_CONFIG")]
    config: Option<PathBuf>,

    /// Store path (overrides the configuration file)
    #[arg(long, global = true, env = "STOREFRONT_STORE")]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that every language has the same keys and placeholders
    Check {
        /// Directory with <code>.json tables (bundled tables if omitted)
        #[arg(long)]
        locales: Option<PathBuf>,
    },

    /// Resolve a dotted translation key
    Resolve {
        /// Dotted key path, e.g. cart.itemCount
        key: String,

        /// Language code (configured default if omitted)
        #[arg(long)]
        lang: Option<String>,

        /// Named parameter as name=value (repeatable)
        #[arg(short, long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },

    /// List supported languages
    Languages,

    /// Print a persisted collection as JSON
    Show {
        collection: Collection,
    },

    /// Empty a persisted collection
    Clear {
        collection: Collection,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Collection {
    Cart,
    Wishlist,
    Recent,
    Compare,
    Pending,
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected name=value, got '{}'", raw))
}

fn load_catalog(config: &Config, locales: Option<PathBuf>) -> anyhow::Result<Catalog> {
    let dir = locales.or_else(|| config.i18n.locales_dir.clone());
    let catalog = match dir {
        Some(dir) => Catalog::from_dir(&dir)
            .with_context(|| format!("loading translations from {}", dir.display()))?,
        None => Catalog::bundled()?,
    };
    Ok(catalog)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    logging::init(&config.logging)?;

    let store_path = cli.store.unwrap_or_else(|| config.store.path.clone());

    match cli.command {
        Commands::Check { locales } => {
            let catalog = load_catalog(&config, locales)?;
            let report = catalog.check_consistency();
            println!("{}", report);
            if !report.is_consistent() {
                return Err(anyhow!(
                    "translation check failed with {} violation(s)",
                    report.violations.len()
                ));
            }
        }

        Commands::Resolve { key, lang, params } => {
            let language = match lang {
                Some(code) => code.parse::<Language>()?,
                None => config.default_language()?,
            };
            let mut localizer = Localizer::new(load_catalog(&config, None)?);
            localizer.set_language(language)?;
            let params: Params = params.into_iter().collect();
            println!("{}", localizer.resolve(&key, &params));
        }

        Commands::Languages => {
            for language in Language::all() {
                let info = language.info();
                println!(
                    "{} {}  {} ({}) {}",
                    info.flag, info.code, info.name, info.native_name, info.direction
                );
            }
        }

        Commands::Show { collection } => {
            let storefront = Storefront::open(&store_path)?;
            let json = match collection {
                Collection::Cart => {
                    let cart = storefront.cart();
                    serde_json::json!({ "lines": cart.lines(), "totals": cart.totals() })
                }
                Collection::Wishlist => serde_json::to_value(storefront.wishlist().items())?,
                Collection::Recent => serde_json::to_value(storefront.recently_viewed().items())?,
                Collection::Compare => serde_json::to_value(storefront.comparison().items())?,
                Collection::Pending => serde_json::to_value(storefront.pending_actions().peek())?,
            };
            println!("{}", serde_json::to_string_pretty(&json)?);
        }

        Commands::Clear { collection } => {
            let storefront = Storefront::open(&store_path)?;
            match collection {
                Collection::Cart => storefront.cart().clear()?,
                Collection::Wishlist => storefront.wishlist().clear()?,
                Collection::Recent => storefront.recently_viewed().clear()?,
                Collection::Compare => storefront.comparison().clear()?,
                Collection::Pending => storefront.pending_actions().clear()?,
            }
            println!("cleared {:?}", collection);
        }
    }

    Ok(())
}
