//! Cartside CLI - cart operations from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Add one unit of product 1 to the cart
//! cartside add 1
//!
//! # Set product 1's quantity to 3
//! cartside update 1 3
//!
//! # Remove product 1 from the cart
//! cartside remove 1
//!
//! # Show the cart
//! cartside show
//!
//! # Empty the cart
//! cartside clear
//! ```
//!
//! # Environment Variables
//!
//! - `CATALOG_BASE_URL` - Base URL of the catalog REST API (required)
//! - `CART_STORE_PATH` - Path of the durable cart slot file
//!
//! Failed operations print a short notification on stderr and exit
//! non-zero; the underlying error goes to the log.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use clap::{Parser, Subcommand};

use cartside_cart::cart::{CartError, CartState};
use cartside_cart::catalog::CatalogClient;
use cartside_cart::config::CartConfig;
use cartside_cart::store::FileStore;
use cartside_core::ProductId;

mod render;

#[derive(Parser)]
#[command(name = "cartside")]
#[command(author, version, about = "Cartside cart CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add one unit of a product to the cart
    Add {
        /// Product ID
        id: i64,
    },
    /// Remove a product from the cart
    Remove {
        /// Product ID
        id: i64,
    },
    /// Set a product's quantity
    Update {
        /// Product ID
        id: i64,
        /// New quantity (0 is ignored)
        quantity: u32,
    },
    /// Show the cart
    Show,
    /// Empty the cart
    Clear,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = CartConfig::from_env()?;
    let catalog = Arc::new(CatalogClient::new(&config.catalog)?);
    let store = Arc::new(FileStore::new(&config.store_path));
    let cart = CartState::new(catalog, store)?;

    match cli.command {
        Commands::Add { id } => {
            let snapshot = cart
                .add_product(ProductId::new(id))
                .await
                .map_err(|e| notify(e, "failed to add product"))?;
            render::cart_table(&snapshot);
        }
        Commands::Remove { id } => {
            let snapshot = cart
                .remove_product(ProductId::new(id))
                .await
                .map_err(|e| notify(e, "failed to remove product"))?;
            render::cart_table(&snapshot);
        }
        Commands::Update { id, quantity } => {
            let snapshot = cart
                .update_product_quantity(ProductId::new(id), quantity)
                .await
                .map_err(|e| notify(e, "failed to change product quantity"))?;
            render::cart_table(&snapshot);
        }
        Commands::Show => {
            render::cart_table(&cart.snapshot().await);
        }
        Commands::Clear => {
            cart.clear().await?;
            render::cart_table(&cart.snapshot().await);
        }
    }
    Ok(())
}

/// Print the user-facing notification for a failed operation.
///
/// Stock shortfalls get their own message; every other failure falls back to
/// the operation's generic notification.
#[allow(clippy::print_stderr)]
fn notify(error: CartError, fallback: &str) -> CartError {
    let message = match &error {
        CartError::OutOfStock { .. } => "requested quantity exceeds stock",
        _ => fallback,
    };
    eprintln!("{message}");
    error
}
