//! Return fee estimation.
//!
//! Two estimators live here and are deliberately kept apart:
//!
//! - [`estimate_return_fee`]: the deterministic, attribute-driven formula used
//!   for real quotes.
//! - [`quick_estimate_fee`]: a non-deterministic ballpark figure that ignores
//!   product attributes entirely. Display-only; never used for quoting.

use rand::Rng;
use rust_decimal::{Decimal, RoundingStrategy, prelude::FromPrimitive};
use thiserror::Error;

use crate::{
    inputs::{InputError, non_negative},
    products::Category,
};

/// Errors specific to fee estimation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeeError {
    /// An argument was outside its documented range.
    #[error(transparent)]
    Input(#[from] InputError),

    /// The random weight factor could not be represented as a decimal.
    #[error("weight factor was not representable as a decimal")]
    WeightFactorConversion,
}

/// Estimates the fee for shipping a returned item back through the network.
///
/// The fee is `(0.05 x price + 100 x weight + 0.5 x distance)` scaled by a
/// per-category multiplier, rounded to two decimal places half-to-even.
/// Deterministic: identical inputs always produce the identical rounded fee.
///
/// # Errors
///
/// - [`FeeError::Input`]: `price`, `weight_kg` or `distance_km` was negative.
pub fn estimate_return_fee(
    price: Decimal,
    weight_kg: Decimal,
    category: Category,
    distance_km: Decimal,
) -> Result<Decimal, FeeError> {
    let price = non_negative("price", price)?;
    let weight_kg = non_negative("weight_kg", weight_kg)?;
    let distance_km = non_negative("distance_km", distance_km)?;

    let base_rate = price * Decimal::new(5, 2);
    let weight_charge = weight_kg * Decimal::ONE_HUNDRED;
    let distance_charge = distance_km * Decimal::new(5, 1);

    let fee = (base_rate + weight_charge + distance_charge) * category_multiplier(category);

    Ok(round_currency(fee))
}

/// Ballpark return fee from distance alone.
///
/// `50 + distance x 0.1 x weight_factor`, where the weight factor is drawn
/// uniformly from `[0.5, 1.5)` because the real weight is unknown at this
/// point. Rounded to two decimal places half-to-even.
///
/// # Errors
///
/// - [`FeeError::Input`]: `distance_km` was negative.
/// - [`FeeError::WeightFactorConversion`]: the drawn factor had no decimal
///   representation.
pub fn quick_estimate_fee<R: Rng + ?Sized>(
    distance_km: Decimal,
    rng: &mut R,
) -> Result<Decimal, FeeError> {
    let distance_km = non_negative("distance_km", distance_km)?;

    let weight_factor = Decimal::from_f64(rng.gen_range(0.5_f64..1.5))
        .ok_or(FeeError::WeightFactorConversion)?;

    let fee = Decimal::new(50, 0) + distance_km * Decimal::new(1, 1) * weight_factor;

    Ok(round_currency(fee))
}

/// Scaling factor applied to the base fee for a product category.
fn category_multiplier(category: Category) -> Decimal {
    match category {
        Category::Electronics => Decimal::new(12, 1),
        Category::Clothing => Decimal::new(8, 1),
        Category::Furniture => Decimal::new(15, 1),
        Category::Accessories => Decimal::new(6, 1),
        Category::Other => Decimal::ONE,
    }
}

/// Round a monetary amount to two decimal places, half-to-even.
pub(crate) fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
}
