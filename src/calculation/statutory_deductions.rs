//! Statutory deductions on the gross wage base.
//!
//! Income tax, health contribution and pension contribution are each a flat
//! rate of the same base, rounded independently.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::DeductionRates;
use crate::models::AuditStep;

use super::rounding::apply_rate;

/// The three statutory deductions taken from wages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatutoryDeductions {
    /// Income tax.
    pub income_tax: Decimal,
    /// Health/social contribution.
    pub health_contribution: Decimal,
    /// Pension contribution.
    pub pension_contribution: Decimal,
}

impl StatutoryDeductions {
    /// Sum of all three deductions.
    pub fn total(&self) -> Decimal {
        self.income_tax + self.health_contribution + self.pension_contribution
    }
}

/// The result of calculating statutory deductions, including the audit step.
#[derive(Debug, Clone)]
pub struct StatutoryDeductionsResult {
    /// Deductions before any credit is applied.
    pub deductions: StatutoryDeductions,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the uncapped statutory deductions on `gross_wage_base`.
///
/// # Examples
///
/// ```
/// use net_pay_engine::calculation::calculate_statutory_deductions;
/// use net_pay_engine::config::DeductionRates;
/// use rust_decimal::Decimal;
///
/// let result = calculate_statutory_deductions(Decimal::from(692632), &DeductionRates::default(), 2);
/// assert_eq!(result.deductions.income_tax, Decimal::from(103895));
/// assert_eq!(result.deductions.health_contribution, Decimal::from(128137));
/// assert_eq!(result.deductions.pension_contribution, Decimal::from(69263));
/// ```
pub fn calculate_statutory_deductions(
    gross_wage_base: Decimal,
    rates: &DeductionRates,
    step_number: u32,
) -> StatutoryDeductionsResult {
    let deductions = StatutoryDeductions {
        income_tax: apply_rate(gross_wage_base, rates.income_tax),
        health_contribution: apply_rate(gross_wage_base, rates.health_contribution),
        pension_contribution: apply_rate(gross_wage_base, rates.pension_contribution),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "statutory_deductions".to_string(),
        rule_name: "Statutory Deductions".to_string(),
        input: serde_json::json!({
            "gross_wage_base": gross_wage_base.normalize().to_string(),
            "income_tax_rate": rates.income_tax.normalize().to_string(),
            "health_contribution_rate": rates.health_contribution.normalize().to_string(),
            "pension_contribution_rate": rates.pension_contribution.normalize().to_string()
        }),
        output: serde_json::json!({
            "income_tax": deductions.income_tax.to_string(),
            "health_contribution": deductions.health_contribution.to_string(),
            "pension_contribution": deductions.pension_contribution.to_string()
        }),
        reasoning: format!(
            "{base} x {} = {}; {base} x {} = {}; {base} x {} = {}",
            rates.income_tax.normalize(),
            deductions.income_tax,
            rates.health_contribution.normalize(),
            deductions.health_contribution,
            rates.pension_contribution.normalize(),
            deductions.pension_contribution,
            base = gross_wage_base.normalize()
        ),
    };

    StatutoryDeductionsResult {
        deductions,
        audit_step,
    }
}
