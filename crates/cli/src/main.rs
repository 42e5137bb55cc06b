//! Marigold CLI - the storefront from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! marigold list
//! marigold list --search pol --category nails
//!
//! # Work the cart
//! marigold add Haircut
//! marigold add Polish --kind item
//! marigold qty Mug --kind item -- -1
//! marigold remove Haircut --kind service
//! marigold show
//!
//! # Place the order
//! marigold checkout
//! ```
//!
//! The cart survives between runs in the file named by `MARIGOLD_CART_PATH`
//! (default: `marigold-cart.json`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand, ValueEnum};
use marigold_cart::{CartStore, EventSink, JsonFileStorage, Severity};
use marigold_core::EntryKind;

mod catalog;
mod commands;
mod config;

use commands::cart::CommandError;
use config::CliConfig;

#[derive(Parser)]
#[command(name = "marigold")]
#[command(author, version, about = "Marigold storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the catalog
    List {
        /// Only show products whose name contains this text
        #[arg(short, long)]
        search: Option<String>,

        /// Only show products in this category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Add a catalog product to the cart
    Add {
        /// Product name, as shown by `list`
        name: String,

        /// Item or service, needed when the name is offered as both
        #[arg(short, long)]
        kind: Option<KindArg>,
    },
    /// Adjust the quantity of a cart line
    Qty {
        /// Product name of the cart line
        name: String,

        /// Item or service
        #[arg(short, long)]
        kind: KindArg,

        /// Change in units, negative to take units out
        #[arg(allow_hyphen_values = true)]
        delta: i64,
    },
    /// Remove a cart line
    Remove {
        /// Product name of the cart line
        name: String,

        /// Item or service
        #[arg(short, long)]
        kind: KindArg,
    },
    /// Show the cart
    Show,
    /// Check out the cart and print the receipt
    Checkout,
    /// Empty the cart
    Clear,
}

/// Entry kind as a command-line value.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum KindArg {
    Item,
    Service,
}

impl From<KindArg> for EntryKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Item => Self::Item,
            KindArg::Service => Self::Service,
        }
    }
}

/// Sink that prints toast messages to the terminal.
struct ToastSink;

impl EventSink for ToastSink {
    #[allow(clippy::print_stdout)]
    fn notify(&self, message: &str, severity: Severity) {
        match severity {
            Severity::Success => println!("{message}"),
            Severity::Error => println!("! {message}"),
        }
    }
}

fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CommandError> {
    match cli.command {
        Commands::List { search, category } => {
            commands::cart::list(search.as_deref(), category.as_deref());
        }
        Commands::Add { name, kind } => {
            commands::cart::add(&mut open_store(), &name, kind.map(EntryKind::from))?;
        }
        Commands::Qty { name, kind, delta } => {
            let mut store = open_store();
            commands::cart::change_quantity(&mut store, &name, kind.into(), delta)?;
            commands::cart::show(&store);
        }
        Commands::Remove { name, kind } => {
            let mut store = open_store();
            commands::cart::remove(&mut store, &name, kind.into())?;
            commands::cart::show(&store);
        }
        Commands::Show => commands::cart::show(&open_store()),
        Commands::Checkout => commands::cart::checkout(&mut open_store()),
        Commands::Clear => commands::cart::clear(&mut open_store()),
    }
    Ok(())
}

/// Open the cart store over the configured slot, toasting to the terminal.
fn open_store() -> CartStore {
    let config = CliConfig::from_env();
    let storage = JsonFileStorage::new(config.cart_path);
    CartStore::open(Box::new(storage), Box::new(ToastSink))
}
