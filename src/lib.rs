//! Three small algorithm and design-pattern demos:
//!
//! - [`forecast`]: compound growth by plain and memoized recursion
//! - [`document`]: Factory Method over a closed set of document kinds
//! - [`search`]: linear versus binary search over a product catalog
//!
//! Each has a matching binary under `src/bin`.

pub mod config;
pub mod document;
pub mod error;
pub mod forecast;
pub mod logging;
pub mod search;

pub use config::DemoConfig;
pub use error::{DemoError, Result};
