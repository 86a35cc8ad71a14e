//! glowcart inspector.
//!
//! Reads and edits the persisted cart and compare list in the data directory
//! (`GLOWCART_DATA_DIR`).
//!
//! ```bash
//! glowcart show
//! glowcart add-to-cart product.json --quantity 2
//! glowcart add-to-compare product.json
//! glowcart clear-cart
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};

use glowcart_catalog::Product;
use glowcart_storefront::{Storefront, StorefrontConfig, report};

#[derive(Parser)]
#[command(name = "glowcart")]
#[command(version, about = "Inspect and edit the persisted glowcart lists")]
struct Cli {
    /// Override the data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the cart, its order summary and the compare list
    Show,
    /// Add a product (JSON snapshot file) to the cart
    AddToCart {
        product: PathBuf,
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Add a product (JSON snapshot file) to the compare list
    AddToCompare { product: PathBuf },
    /// Empty the cart
    ClearCart,
    /// Empty the compare list
    ClearCompare,
}

fn main() {
    glowcart_observability::init();

    if let Err(e) = run(Cli::parse()) {
        tracing::error!(error = %format!("{e:#}"), "command failed");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = StorefrontConfig::from_env().context("invalid configuration")?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    let mut shop = Storefront::open(&config)?;

    match cli.command {
        Command::Show => print!("{}", report::render(&shop)),
        Command::AddToCart { product, quantity } => {
            let product = read_product(&product)?;
            shop.cart_mut().add_to_cart(&product, quantity);
            announce(shop.cart().notification());
        }
        Command::AddToCompare { product } => {
            let product = read_product(&product)?;
            shop.compare_mut().add_to_compare(&product);
            announce(shop.compare().notification());
        }
        Command::ClearCart => {
            shop.cart_mut().clear_cart();
            println!("cart cleared");
        }
        Command::ClearCompare => {
            shop.compare_mut().clear_compare_list();
            announce(shop.compare().notification());
        }
    }
    Ok(())
}

fn read_product(path: &Path) -> anyhow::Result<Product> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("{} is not a product snapshot", path.display()))
}

fn announce(notification: Option<&glowcart_notify::Notification>) {
    if let Some(n) = notification {
        println!("[{}] {}", n.kind, n.message);
    }
}
