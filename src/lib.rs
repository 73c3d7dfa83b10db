//! Net Pay Engine
//!
//! This crate computes take-home pay from hourly wages, overtime, paid leave,
//! supplemental pay and a separately taxed maternity benefit. Income tax,
//! health contribution and pension contribution are deducted at the fixed
//! rates of one scheme, and a child tax credit is consumed against income tax
//! and then health contribution.
//!
//! The core is the pure function [`calculation::compute`]. The `config`,
//! `presentation` and `api` modules are thin shells around it.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod presentation;
