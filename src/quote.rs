//! Quote orchestration.
//!
//! Ties lookup, fee estimation and the recommendation policy together for a
//! single return. A lookup miss blocks everything downstream: no fee, no
//! valuation, no recommendation.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    catalog::Catalog,
    fees::{FeeError, estimate_return_fee},
    products::{Product, ProductId},
    recommend::{Recommendation, recommend},
    resale::{Channel, Condition, ResaleError, merchant_payout, resale_value},
};

/// Errors raised while quoting a return.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuoteError {
    /// No product in the catalog matches the identifier.
    #[error("product {0} not found in catalog")]
    ProductNotFound(ProductId),

    /// Fee estimation rejected the inputs.
    #[error(transparent)]
    Fee(#[from] FeeError),
}

/// A priced return for one product over one distance.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnQuote {
    /// The product being returned.
    pub product: Product,

    /// Return distance in kilometres.
    pub distance_km: Decimal,

    /// Estimated return fee.
    pub fee: Decimal,

    /// Whether the return is worth carrying out.
    pub recommendation: Recommendation,
}

impl ReturnQuote {
    /// Value this quote's product for a secondary channel.
    ///
    /// # Errors
    ///
    /// - [`ResaleError::Input`]: the stored price or fee was negative.
    pub fn resale(&self, channel: Channel, condition: Condition) -> Result<ResaleQuote, ResaleError> {
        let value = resale_value(self.product.price, channel, condition)?;
        let payout = merchant_payout(value, self.fee)?;

        Ok(ResaleQuote { value, payout })
    }
}

/// Resale figures derived from a [`ReturnQuote`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResaleQuote {
    /// Estimated sale price through the chosen channel.
    pub value: Decimal,

    /// Net amount credited to the merchant.
    pub payout: Decimal,
}

/// Quote the return of product `id` over `distance_km`.
///
/// # Errors
///
/// - [`QuoteError::ProductNotFound`]: the catalog has no such product.
/// - [`QuoteError::Fee`]: fee estimation rejected the inputs, for example a
///   negative distance.
pub fn quote_return(
    catalog: &Catalog,
    id: ProductId,
    distance_km: Decimal,
) -> Result<ReturnQuote, QuoteError> {
    let product = catalog
        .lookup(id)
        .ok_or(QuoteError::ProductNotFound(id))?
        .clone();

    let fee = estimate_return_fee(product.price, product.weight_kg, product.category, distance_km)?;
    let recommendation = recommend(fee, Some(product.price));

    Ok(ReturnQuote {
        product,
        distance_km,
        fee,
        recommendation,
    })
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::products::Category;

    use super::*;

    fn catalog() -> Catalog {
        Catalog::from_products([
            Product {
                id: ProductId(1),
                name: "Wireless Headphones".to_owned(),
                category: Category::Electronics,
                price: Decimal::new(1000, 0),
                weight_kg: Decimal::TWO,
                stock: Some(14),
            },
            Product {
                id: ProductId(2),
                name: "Pocket Torch".to_owned(),
                category: Category::Accessories,
                price: Decimal::new(5, 0),
                weight_kg: Decimal::new(2, 1),
                stock: None,
            },
        ])
    }

    #[test]
    fn quotes_a_known_product() -> TestResult {
        let quote = quote_return(&catalog(), ProductId(1), Decimal::new(250, 0))?;

        assert_eq!(quote.fee, Decimal::new(45000, 2));
        assert_eq!(quote.recommendation, Recommendation::Proceed);

        Ok(())
    }

    #[test]
    fn recommends_resale_when_fee_exceeds_price() -> TestResult {
        // (0.25 + 20 + 250) x 0.6 = 162.15, far above the 5.00 price.
        let quote = quote_return(&catalog(), ProductId(2), Decimal::new(500, 0))?;

        assert_eq!(quote.fee, Decimal::new(16215, 2));
        assert_eq!(quote.recommendation, Recommendation::ResellOrDiscount);

        Ok(())
    }

    #[test]
    fn unknown_product_blocks_the_quote() {
        let result = quote_return(&catalog(), ProductId(99), Decimal::TEN);

        assert_eq!(result, Err(QuoteError::ProductNotFound(ProductId(99))));
    }

    #[test]
    fn negative_distance_surfaces_as_a_fee_error() {
        let result = quote_return(&catalog(), ProductId(1), Decimal::NEGATIVE_ONE);

        assert!(matches!(result, Err(QuoteError::Fee(_))));
    }

    #[test]
    fn resale_quote_builds_on_the_return_quote() -> TestResult {
        let quote = quote_return(&catalog(), ProductId(1), Decimal::new(250, 0))?;
        let resale = quote.resale(Channel::FedexThrift, Condition::Used)?;

        // 1000 x 0.6 x 0.7 = 420; 420 - 0.25 x 450 = 307.5
        assert_eq!(resale.value, Decimal::new(42000, 2));
        assert_eq!(resale.payout, Decimal::new(30750, 2));

        Ok(())
    }
}
