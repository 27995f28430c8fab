//! Boomerang prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    catalog::{Catalog, CatalogError},
    fees::{FeeError, estimate_return_fee, quick_estimate_fee},
    inputs::InputError,
    listings::{CsvListingStore, ListingError, ListingStore, MemoryListingStore, ResaleListing},
    products::{Category, Product, ProductId},
    quote::{QuoteError, ResaleQuote, ReturnQuote, quote_return},
    recommend::{DEFAULT_PRICE_THRESHOLD, Recommendation, recommend},
    resale::{Channel, Condition, ResaleError, merchant_payout, resale_value},
};
