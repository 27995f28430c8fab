//! Products

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Unique product identifier within a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Merchandise category.
///
/// Categories arrive as free text from the dataset; anything outside the
/// known set collapses to [`Category::Other`], keeping the fallback
/// behaviour of a keyed lookup table while staying a closed enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    /// Consumer electronics
    Electronics,

    /// Clothing and apparel
    Clothing,

    /// Furniture and large household goods
    Furniture,

    /// Small accessories
    Accessories,

    /// Anything not covered by the categories above
    Other,
}

impl Category {
    /// Canonical dataset spelling of the category.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
            Category::Furniture => "Furniture",
            Category::Accessories => "Accessories",
            Category::Other => "Other",
        }
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        match value {
            "Electronics" => Category::Electronics,
            "Clothing" => Category::Clothing,
            "Furniture" => Category::Furniture,
            "Accessories" => Category::Accessories,
            _ => Category::Other,
        }
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        Category::from(value.as_str())
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        value.as_str().to_owned()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Product
///
/// A snapshot of one catalog row. Immutable once loaded; prices and weights
/// are taken at face value here and validated at estimation time.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Product identifier
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// Product category
    pub category: Category,

    /// Original sale price, in major currency units
    pub price: Decimal,

    /// Shipping weight in kilograms
    pub weight_kg: Decimal,

    /// Units in stock, when the dataset carries the column
    pub stock: Option<u32>,
}
