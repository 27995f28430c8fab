//! Resale marketplace listings.
//!
//! Listings are created once and appended to a store; no update or delete
//! operation exists. The store is an injected capability so the valuation
//! logic never touches a file format or path directly. The bundled CSV store
//! is a shared, lock-free, append-only flat file: concurrent writers race
//! with last-writer-wins semantics, which is accepted at this layer.

use std::{
    fs::{self, OpenOptions},
    path::{Path, PathBuf},
};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{products::Category, resale::Condition};

/// Errors raised while creating or storing listings.
#[derive(Debug, Error)]
pub enum ListingError {
    /// The listing had no product name.
    #[error("listing name must not be empty")]
    EmptyName,

    /// The asking price was zero or negative.
    #[error("listing price must be positive, got {0}")]
    NonPositivePrice(Decimal),

    /// Underlying file system error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Underlying CSV read or write error.
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// One item offered for resale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResaleListing {
    /// Product name as entered by the seller
    #[serde(rename = "Product Name")]
    pub name: String,

    /// Product category
    #[serde(rename = "Category")]
    pub category: Category,

    /// Condition of the item
    #[serde(rename = "Condition")]
    pub condition: Condition,

    /// Asking price, strictly positive
    #[serde(rename = "Price")]
    pub price: Decimal,
}

impl ResaleListing {
    /// Create a validated listing.
    ///
    /// # Errors
    ///
    /// - [`ListingError::EmptyName`]: `name` was empty or whitespace.
    /// - [`ListingError::NonPositivePrice`]: `price` was zero or negative.
    pub fn new(
        name: impl Into<String>,
        category: Category,
        condition: Condition,
        price: Decimal,
    ) -> Result<Self, ListingError> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(ListingError::EmptyName);
        }

        if price <= Decimal::ZERO {
            return Err(ListingError::NonPositivePrice(price));
        }

        Ok(ResaleListing {
            name,
            category,
            condition,
            price,
        })
    }
}

/// Storage capability for resale listings.
pub trait ListingStore {
    /// Append one listing to the store.
    ///
    /// # Errors
    ///
    /// Returns a [`ListingError`] if the listing could not be persisted.
    fn append(&mut self, listing: &ResaleListing) -> Result<(), ListingError>;

    /// Return every listing in insertion order.
    ///
    /// # Errors
    ///
    /// Returns a [`ListingError`] if the store could not be read.
    fn list_all(&self) -> Result<Vec<ResaleListing>, ListingError>;
}

/// Append-only CSV-backed listing store.
///
/// The file carries the headers `Product Name`, `Category`, `Condition` and
/// `Price`, and is created with them on open if absent.
#[derive(Debug)]
pub struct CsvListingStore {
    path: PathBuf,
}

impl CsvListingStore {
    /// Open the store at `path`, creating the file with headers if absent.
    ///
    /// # Errors
    ///
    /// - [`ListingError::Io`]: the file or its parent directory could not be
    ///   created.
    /// - [`ListingError::Csv`]: the header row could not be written.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ListingError> {
        let path = path.into();

        if !path.exists() {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)?;
            }

            let mut writer = csv::Writer::from_path(&path)?;
            writer.write_record(["Product Name", "Category", "Condition", "Price"])?;
            writer.flush()?;
        }

        Ok(CsvListingStore { path })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ListingStore for CsvListingStore {
    fn append(&mut self, listing: &ResaleListing) -> Result<(), ListingError> {
        let file = OpenOptions::new().append(true).open(&self.path)?;

        // Headers were written at open time; only the record goes here.
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        writer.serialize(listing)?;
        writer.flush()?;

        Ok(())
    }

    fn list_all(&self) -> Result<Vec<ResaleListing>, ListingError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(&self.path)?;

        let mut listings = Vec::new();

        for row in reader.deserialize() {
            listings.push(row?);
        }

        Ok(listings)
    }
}

/// In-memory listing store for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryListingStore {
    listings: Vec<ResaleListing>,
}

impl MemoryListingStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ListingStore for MemoryListingStore {
    fn append(&mut self, listing: &ResaleListing) -> Result<(), ListingError> {
        self.listings.push(listing.clone());

        Ok(())
    }

    fn list_all(&self) -> Result<Vec<ResaleListing>, ListingError> {
        Ok(self.listings.clone())
    }
}
