//! Request and response types for the Alpha Vantage query API.
//!
//! ## Organization
//!
//! - [`enums`] — Series function and interval enumerations
//! - [`symbols`] — The fixed company list offered for selection
//! - [`time_series`] — Query parameters, raw payload, and chart series
//!
//! All enums are re-exported at the module root via `pub use enums::*`.

pub mod enums;
pub mod symbols;
pub mod time_series;

pub use enums::*;
