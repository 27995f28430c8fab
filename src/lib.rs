//! Boomerang
//!
//! Boomerang is a returns-logistics engine: it estimates the cost of shipping
//! merchandise back through a returns network, values returned goods for a
//! secondary resale channel, and computes the resulting merchant payout.

pub mod catalog;
pub mod fees;
pub mod inputs;
pub mod listings;
pub mod prelude;
pub mod products;
pub mod quote;
pub mod recommend;
pub mod resale;
