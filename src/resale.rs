//! Resale valuation.
//!
//! Values returned goods for a secondary sales channel and computes the net
//! amount credited back to the merchant.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    fees::round_currency,
    inputs::{InputError, non_negative},
};

/// Errors specific to resale valuation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResaleError {
    /// An argument was outside its documented range.
    #[error(transparent)]
    Input(#[from] InputError),
}

/// Secondary sales channel for returned goods.
///
/// Free text outside the known set collapses to [`Channel::Other`], which
/// carries its own recovery rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Channel {
    /// In-house thrift marketplace
    FedexThrift,

    /// Third-party local reseller
    LocalReseller,

    /// International return-and-resell programme
    FedexGlobalReturn,

    /// Any other channel
    Other,
}

impl Channel {
    /// Canonical spelling of the channel.
    pub fn as_str(self) -> &'static str {
        match self {
            Channel::FedexThrift => "FedEx Thrift",
            Channel::LocalReseller => "Local Reseller",
            Channel::FedexGlobalReturn => "FedEx Global Return",
            Channel::Other => "Other",
        }
    }

    /// Fraction of the original price recoverable through this channel.
    fn recovery_rate(self) -> Decimal {
        match self {
            Channel::FedexThrift => Decimal::new(6, 1),
            Channel::LocalReseller => Decimal::new(7, 1),
            Channel::FedexGlobalReturn => Decimal::new(8, 1),
            Channel::Other => Decimal::new(65, 2),
        }
    }
}

impl From<&str> for Channel {
    fn from(value: &str) -> Self {
        match value {
            "FedEx Thrift" => Channel::FedexThrift,
            "Local Reseller" => Channel::LocalReseller,
            "FedEx Global Return" => Channel::FedexGlobalReturn,
            _ => Channel::Other,
        }
    }
}

impl From<String> for Channel {
    fn from(value: String) -> Self {
        Channel::from(value.as_str())
    }
}

impl From<Channel> for String {
    fn from(value: Channel) -> Self {
        value.as_str().to_owned()
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Physical condition of a returned item.
///
/// Marketplace forms have offered spellings like "Like New" and
/// "Refurbished"; those fall back to [`Condition::Other`] and take the
/// default discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Condition {
    /// Unopened, as sold
    New,

    /// Opened but unused
    OpenBox,

    /// Visibly used
    Used,

    /// Damaged or not fully functional
    Defective,

    /// Any other description
    Other,
}

impl Condition {
    /// Canonical spelling of the condition.
    pub fn as_str(self) -> &'static str {
        match self {
            Condition::New => "New",
            Condition::OpenBox => "Open-box",
            Condition::Used => "Used",
            Condition::Defective => "Defective",
            Condition::Other => "Other",
        }
    }

    /// Discount applied to the recoverable value for this condition.
    fn discount(self) -> Decimal {
        match self {
            Condition::New => Decimal::ONE,
            Condition::OpenBox => Decimal::new(85, 2),
            Condition::Used | Condition::Other => Decimal::new(7, 1),
            Condition::Defective => Decimal::new(4, 1),
        }
    }
}

impl From<&str> for Condition {
    fn from(value: &str) -> Self {
        match value {
            "New" => Condition::New,
            "Open-box" => Condition::OpenBox,
            "Used" => Condition::Used,
            "Defective" => Condition::Defective,
            _ => Condition::Other,
        }
    }
}

impl From<String> for Condition {
    fn from(value: String) -> Self {
        Condition::from(value.as_str())
    }
}

impl From<Condition> for String {
    fn from(value: Condition) -> Self {
        value.as_str().to_owned()
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Estimates the sale price of a returned item through a secondary channel.
///
/// `price x recovery_rate(channel) x discount(condition)`, rounded to two
/// decimal places half-to-even.
///
/// # Errors
///
/// - [`ResaleError::Input`]: `price` was negative.
pub fn resale_value(
    price: Decimal,
    channel: Channel,
    condition: Condition,
) -> Result<Decimal, ResaleError> {
    let price = non_negative("price", price)?;

    Ok(round_currency(
        price * channel.recovery_rate() * condition.discount(),
    ))
}

/// Net amount credited to the merchant after the return.
///
/// A quarter of the return fee is deducted from the resale value. The result
/// may be negative when the fee dwarfs the resale value; no floor is applied.
///
/// # Errors
///
/// - [`ResaleError::Input`]: `resale_value` or `return_fee` was negative.
pub fn merchant_payout(resale_value: Decimal, return_fee: Decimal) -> Result<Decimal, ResaleError> {
    let resale_value = non_negative("resale_value", resale_value)?;
    let return_fee = non_negative("return_fee", return_fee)?;

    Ok(round_currency(
        resale_value - Decimal::new(25, 2) * return_fee,
    ))
}
