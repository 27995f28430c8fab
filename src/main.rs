//! Command-line front end for the Boomerang returns engine.
//!
//! A plain request/response interface: structured arguments in, tables and
//! figures out.

use std::{
    error::Error,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use rusty_money::{Money, iso};
use tabled::{Table, Tabled, settings::Style};

use boomerang::prelude::*;

#[derive(Debug, Parser)]
#[command(name = "boomerang", about = "Return fee estimation and resale valuation")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Quote the return of a catalogued product.
    Estimate {
        /// Path to the product dataset CSV.
        #[arg(long, default_value = "data/sample_data.csv")]
        catalog: PathBuf,

        /// Identifier of the product being returned.
        #[arg(long)]
        product_id: u32,

        /// Return distance in kilometres.
        #[arg(long)]
        distance_km: Decimal,

        /// Resale channel; valuing the item for resale is skipped without it.
        #[arg(long)]
        channel: Option<String>,

        /// Condition of the returned item.
        #[arg(long, default_value = "Used")]
        condition: String,
    },

    /// Ballpark fee from distance alone; ignores product attributes.
    Quick {
        /// Return distance in kilometres.
        #[arg(long)]
        distance_km: Decimal,
    },

    /// Inspect or extend the resale marketplace listings.
    Listings {
        #[command(subcommand)]
        command: ListingsCommand,
    },
}

#[derive(Debug, Subcommand)]
enum ListingsCommand {
    /// Show every listing in the store.
    List {
        /// Path to the listings CSV.
        #[arg(long, default_value = "data/thrift_listings.csv")]
        store: PathBuf,
    },

    /// Validate and append a new listing.
    Add {
        /// Path to the listings CSV.
        #[arg(long, default_value = "data/thrift_listings.csv")]
        store: PathBuf,

        /// Product name.
        #[arg(long)]
        name: String,

        /// Product category.
        #[arg(long)]
        category: String,

        /// Condition of the item.
        #[arg(long)]
        condition: String,

        /// Asking price.
        #[arg(long)]
        price: Decimal,
    },
}

#[derive(Tabled)]
struct ProductRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Weight (kg)")]
    weight: String,
    #[tabled(rename = "Stock")]
    stock: String,
}

#[derive(Tabled)]
struct ListingRow {
    #[tabled(rename = "Product Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Condition")]
    condition: String,
    #[tabled(rename = "Price")]
    price: String,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    match Cli::parse().command {
        Command::Estimate {
            catalog,
            product_id,
            distance_km,
            channel,
            condition,
        } => estimate(&catalog, ProductId(product_id), distance_km, channel.as_deref(), &condition),
        Command::Quick { distance_km } => quick(distance_km),
        Command::Listings { command } => match command {
            ListingsCommand::List { store } => list_listings(&store),
            ListingsCommand::Add {
                store,
                name,
                category,
                condition,
                price,
            } => add_listing(&store, name, &category, &condition, price),
        },
    }
}

fn estimate(
    catalog_path: &Path,
    id: ProductId,
    distance_km: Decimal,
    channel: Option<&str>,
    condition: &str,
) -> Result<(), Box<dyn Error>> {
    let catalog = Catalog::from_csv_path(catalog_path)?;
    let quote = quote_return(&catalog, id, distance_km)?;

    println!("{}", product_table(&quote.product));
    println!();
    println!("Return distance:      {distance_km} km");
    println!("Estimated return fee: {}", money(quote.fee));
    println!("Recommendation:       {}", quote.recommendation);

    if let Some(channel) = channel {
        let resale = quote.resale(Channel::from(channel), Condition::from(condition))?;

        println!();
        println!("Resale value ({channel}, {condition}): {}", money(resale.value));
        println!("Merchant payout:      {}", money(resale.payout));
    }

    Ok(())
}

fn quick(distance_km: Decimal) -> Result<(), Box<dyn Error>> {
    let fee = quick_estimate_fee(distance_km, &mut rand::thread_rng())?;

    println!("Quick estimate (non-binding): {}", money(fee));

    Ok(())
}

fn list_listings(store_path: &Path) -> Result<(), Box<dyn Error>> {
    let store = CsvListingStore::open(store_path)?;
    let listings = store.list_all()?;

    if listings.is_empty() {
        println!("No products listed yet.");
        return Ok(());
    }

    let rows = listings.iter().map(|listing| ListingRow {
        name: listing.name.clone(),
        category: listing.category.to_string(),
        condition: listing.condition.to_string(),
        price: money(listing.price),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());

    println!("{table}");

    Ok(())
}

fn add_listing(
    store_path: &Path,
    name: String,
    category: &str,
    condition: &str,
    price: Decimal,
) -> Result<(), Box<dyn Error>> {
    let listing = ResaleListing::new(
        name,
        Category::from(category),
        Condition::from(condition),
        price,
    )?;

    let mut store = CsvListingStore::open(store_path)?;
    store.append(&listing)?;

    println!("Listed '{}' at {}.", listing.name, money(listing.price));

    Ok(())
}

fn product_table(product: &Product) -> String {
    let row = ProductRow {
        id: product.id.to_string(),
        name: product.name.clone(),
        category: product.category.to_string(),
        price: money(product.price),
        weight: product.weight_kg.to_string(),
        stock: match product.stock {
            Some(stock) => stock.to_string(),
            None => "-".to_owned(),
        },
    };

    let mut table = Table::new([row]);
    table.with(Style::rounded());

    table.to_string()
}

fn money(amount: Decimal) -> String {
    Money::from_decimal(amount, iso::USD).to_string()
}
