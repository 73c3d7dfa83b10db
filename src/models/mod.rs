//! Core data models for the Net Pay Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod breakdown;
mod calculation_result;
mod input_set;

pub use breakdown::{Breakdown, FormattedBreakdown};
pub use calculation_result::{AuditStep, AuditTrace, CalculationResult};
pub use input_set::InputSet;
