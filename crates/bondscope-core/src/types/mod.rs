//! Domain types for bond analytics.
//!
//! - [`Date`]: Calendar date with period counting
//! - [`Frequency`]: Coupon payment frequency

mod date;
mod frequency;

pub use date::Date;
pub use frequency::Frequency;
