//! Configuration types for the deduction scheme.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from `scheme.yaml`.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Metadata about the deduction scheme.
#[derive(Debug, Clone, Deserialize)]
pub struct SchemeMetadata {
    /// Short identifier for the scheme (e.g., "HU-2025").
    pub code: String,
    /// The human-readable name of the scheme.
    pub name: String,
    /// The date from which the scheme's rates apply.
    pub effective_date: NaiveDate,
    /// Suffix appended to formatted currency amounts (e.g., "Ft").
    pub currency_suffix: String,
}

/// The rates applied by the net pay pipeline.
///
/// All percentages are expressed as fractions (0.15 means 15%).
///
/// # Example
///
/// ```
/// use net_pay_engine::config::DeductionRates;
/// use rust_decimal::Decimal;
///
/// let rates = DeductionRates::default();
/// assert_eq!(rates.income_tax, Decimal::new(15, 2));
/// assert_eq!(rates.overtime_multiplier, Decimal::from(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionRates {
    /// Income tax rate on the gross wage base.
    pub income_tax: Decimal,
    /// Health/social contribution rate on the gross wage base.
    pub health_contribution: Decimal,
    /// Pension contribution rate on the gross wage base.
    pub pension_contribution: Decimal,
    /// Pension-type withholding on a taxable maternity benefit.
    pub maternity_withholding: Decimal,
    /// Flat deemed rate used for the informational net split.
    pub informational_deduction: Decimal,
    /// Multiplier applied to the hourly wage for overtime hours.
    pub overtime_multiplier: Decimal,
}

impl Default for DeductionRates {
    /// The compiled-in rates of the one supported scheme.
    fn default() -> Self {
        Self {
            income_tax: Decimal::new(15, 2),
            health_contribution: Decimal::new(185, 3),
            pension_contribution: Decimal::new(10, 2),
            maternity_withholding: Decimal::new(10, 2),
            informational_deduction: Decimal::new(10, 2),
            overtime_multiplier: Decimal::from(2),
        }
    }
}

impl DeductionRates {
    /// Returns every fractional rate with its configuration name.
    ///
    /// The overtime multiplier is not a fraction and is not included.
    pub fn fractions(&self) -> [(&'static str, Decimal); 5] {
        [
            ("income_tax", self.income_tax),
            ("health_contribution", self.health_contribution),
            ("pension_contribution", self.pension_contribution),
            ("maternity_withholding", self.maternity_withholding),
            ("informational_deduction", self.informational_deduction),
        ]
    }
}

/// Layout of `scheme.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SchemeFile {
    /// Scheme metadata.
    pub scheme: SchemeMetadata,
    /// Deduction rates.
    pub rates: DeductionRates,
}

/// The complete scheme configuration.
#[derive(Debug, Clone)]
pub struct SchemeConfig {
    metadata: SchemeMetadata,
    rates: DeductionRates,
}

impl SchemeConfig {
    /// Creates a new SchemeConfig from its component parts.
    pub fn new(metadata: SchemeMetadata, rates: DeductionRates) -> Self {
        Self { metadata, rates }
    }

    /// Returns the scheme metadata.
    pub fn scheme(&self) -> &SchemeMetadata {
        &self.metadata
    }

    /// Returns the deduction rates.
    pub fn rates(&self) -> &DeductionRates {
        &self.rates
    }
}
