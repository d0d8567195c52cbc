//! # Bondscope Core
//!
//! Core types shared by the Bondscope bond analytics crates.
//!
//! - **Types**: [`Date`] with the whole-month / whole-year counting used by
//!   the period math, and [`Frequency`] for coupon schedules
//! - **Errors**: [`CoreError`] for invalid dates and frequencies
//!
//! ## Example
//!
//! ```rust
//! use bondscope_core::prelude::*;
//!
//! let settlement = Date::from_ymd(2020, 1, 1).unwrap();
//! let maturity = Date::from_ymd(2026, 1, 1).unwrap();
//!
//! assert_eq!(settlement.months_between(&maturity), 72);
//! assert_eq!(Frequency::SemiAnnual.months_per_period(), 6);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{Date, Frequency};
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{Date, Frequency};
