//! Product catalog lookup.
//!
//! The catalog is an in-memory index over the product dataset, a flat CSV
//! with columns `product_id`, `product_name`, `category`, `price`, `weight`
//! and an optional `stock`. A lookup either returns exactly one product or
//! nothing; a miss is a normal outcome, not an error.

use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use thiserror::Error;

use crate::products::{Category, Product, ProductId};

/// Errors raised while loading the product dataset.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The dataset file could not be opened or read.
    #[error("failed to open product dataset {path}: {source}")]
    Open {
        /// Path that was attempted.
        path: PathBuf,

        /// Underlying reader error.
        source: csv::Error,
    },

    /// A row did not match the dataset schema.
    #[error("invalid product row: {0}")]
    Row(#[from] csv::Error),
}

/// One row of the product dataset, as serialized on disk.
#[derive(Debug, Deserialize)]
struct ProductRow {
    product_id: u32,
    product_name: String,
    category: Category,
    price: Decimal,
    weight: Decimal,
    #[serde(default)]
    stock: Option<u32>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: ProductId(row.product_id),
            name: row.product_name,
            category: row.category,
            price: row.price,
            weight_kg: row.weight,
            stock: row.stock,
        }
    }
}

/// Read-only index of products keyed by identifier.
#[derive(Debug, Default)]
pub struct Catalog {
    products: FxHashMap<ProductId, Product>,
}

impl Catalog {
    /// Build a catalog from already-loaded products.
    ///
    /// Identifiers are unique by invariant; should a duplicate slip in, the
    /// first occurrence wins, matching a first-match scan over the dataset.
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> Self {
        let mut index = FxHashMap::default();

        for product in products {
            index.entry(product.id).or_insert(product);
        }

        Catalog { products: index }
    }

    /// Load a catalog from a CSV dataset at `path`.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Open`]: the file could not be opened.
    /// - [`CatalogError::Row`]: a row failed to parse against the schema.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(|source| CatalogError::Open {
                path: path.to_path_buf(),
                source,
            })?;

        let mut index = FxHashMap::default();

        for row in reader.deserialize() {
            let row: ProductRow = row?;
            let product = Product::from(row);

            index.entry(product.id).or_insert(product);
        }

        Ok(Catalog { products: index })
    }

    /// Look up a product by identifier.
    ///
    /// Returns `None` when no product matches; callers must treat that as a
    /// normal outcome and skip any downstream fee or valuation work.
    pub fn lookup(&self, id: ProductId) -> Option<&Product> {
        self.products.get(&id)
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check whether the catalog holds no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use testresult::TestResult;

    use super::*;

    fn sample_product(id: u32, price: i64) -> Product {
        Product {
            id: ProductId(id),
            name: format!("Product {id}"),
            category: Category::Electronics,
            price: Decimal::new(price, 0),
            weight_kg: Decimal::ONE,
            stock: None,
        }
    }

    #[test]
    fn lookup_hits_and_misses() {
        let catalog = Catalog::from_products([sample_product(1, 100), sample_product(2, 200)]);

        assert_eq!(catalog.len(), 2);
        assert!(catalog.lookup(ProductId(2)).is_some());
        assert!(catalog.lookup(ProductId(99)).is_none());
    }

    #[test]
    fn lookup_on_empty_catalog_misses() {
        let catalog = Catalog::default();

        assert!(catalog.is_empty());
        assert!(catalog.lookup(ProductId(1)).is_none());
    }

    #[test]
    fn duplicate_identifiers_keep_the_first_row() {
        let mut second = sample_product(1, 100);
        second.name = "Duplicate".to_owned();

        let catalog = Catalog::from_products([sample_product(1, 100), second]);

        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.lookup(ProductId(1)).map(|p| p.name.as_str()),
            Some("Product 1")
        );
    }

    #[test]
    fn loads_products_from_csv() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("sample_data.csv");

        let mut file = std::fs::File::create(&path)?;
        writeln!(file, "product_id,product_name,category,price,weight,stock")?;
        writeln!(file, "1,Wireless Headphones,Electronics,1000,2,14")?;
        writeln!(file, "2,Linen Shirt,Clothing,500,1,")?;
        writeln!(file, "3,Garden Gnome,Novelty,80,1.5,3")?;
        drop(file);

        let catalog = Catalog::from_csv_path(&path)?;

        assert_eq!(catalog.len(), 3);

        let headphones = catalog.lookup(ProductId(1)).ok_or("missing product 1")?;
        assert_eq!(headphones.category, Category::Electronics);
        assert_eq!(headphones.price, Decimal::new(1000, 0));
        assert_eq!(headphones.stock, Some(14));

        let shirt = catalog.lookup(ProductId(2)).ok_or("missing product 2")?;
        assert_eq!(shirt.stock, None);

        // Unrecognised category text falls back to the default variant.
        let gnome = catalog.lookup(ProductId(3)).ok_or("missing product 3")?;
        assert_eq!(gnome.category, Category::Other);
        assert_eq!(gnome.weight_kg, Decimal::new(15, 1));

        Ok(())
    }

    #[test]
    fn loads_without_a_stock_column() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("no_stock.csv");

        let mut file = std::fs::File::create(&path)?;
        writeln!(file, "product_id,product_name,category,price,weight")?;
        writeln!(file, "7,Oak Table,Furniture,350,18")?;
        drop(file);

        let catalog = Catalog::from_csv_path(&path)?;
        let table = catalog.lookup(ProductId(7)).ok_or("missing product 7")?;

        assert_eq!(table.stock, None);

        Ok(())
    }

    #[test]
    fn missing_file_reports_the_path() {
        let result = Catalog::from_csv_path("does/not/exist.csv");

        assert!(matches!(result, Err(CatalogError::Open { .. })));
    }

    #[test]
    fn malformed_row_is_an_error() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("bad.csv");

        let mut file = std::fs::File::create(&path)?;
        writeln!(file, "product_id,product_name,category,price,weight")?;
        writeln!(file, "not-a-number,Chair,Furniture,120,7")?;
        drop(file);

        assert!(matches!(
            Catalog::from_csv_path(&path),
            Err(CatalogError::Row(_))
        ));

        Ok(())
    }
}
