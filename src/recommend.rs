//! Recommendation policy.

use std::fmt;

use rust_decimal::Decimal;

/// Comparison threshold used when no product price is available.
pub const DEFAULT_PRICE_THRESHOLD: Decimal = Decimal::ONE_HUNDRED;

/// Recommended course of action for a return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    /// The return fee is within the value of the item.
    Proceed,

    /// Returning would cost more than the item is worth.
    ResellOrDiscount,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::Proceed => f.write_str("proceed with standard return"),
            Recommendation::ResellOrDiscount => f.write_str("not feasible; resell or discount"),
        }
    }
}

/// Decide whether a return is worth carrying out.
///
/// A return is infeasible only when the fee strictly exceeds the price; at
/// equality the return still proceeds. When the price is unknown the fee is
/// compared against [`DEFAULT_PRICE_THRESHOLD`].
pub fn recommend(estimated_fee: Decimal, price: Option<Decimal>) -> Recommendation {
    let threshold = price.unwrap_or(DEFAULT_PRICE_THRESHOLD);

    if estimated_fee > threshold {
        Recommendation::ResellOrDiscount
    } else {
        Recommendation::Proceed
    }
}
