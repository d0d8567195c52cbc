//! # Bondscope Ext FRED
//!
//! Treasury benchmark rates from the FRED series observations API.
//!
//! The source performs one blocking request per lookup; the engine decides
//! how many dates to try.
//!
//! ```no_run
//! use std::sync::Arc;
//! use bondscope_ext_fred::FredSource;
//!
//! let source = Arc::new(FredSource::new("my-api-key").unwrap());
//! # let _ = source;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod client;

pub use client::{
    parse_observations_payload, status_error, FredSource, DEFAULT_BASE_URL,
    DEFAULT_REQUEST_TIMEOUT,
};
