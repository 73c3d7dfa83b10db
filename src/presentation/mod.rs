//! Helpers for the presentation layer.
//!
//! Calculator front ends collect figures as free-form text and show results
//! as grouped whole amounts with a currency suffix. These helpers do both
//! conversions so every caller renders the same way.

mod format;
mod input;

pub use format::format_currency;
pub use input::parse_amount;
