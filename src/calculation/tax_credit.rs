//! Child tax credit consumption.
//!
//! The credit is a running balance spent against income tax first and then
//! against health contribution. Each bucket absorbs at most its own value, so
//! neither can go negative. Pension contribution is never touched.

use rust_decimal::Decimal;

use crate::models::AuditStep;

use super::statutory_deductions::StatutoryDeductions;

/// The result of applying the child tax credit, including the audit step.
#[derive(Debug, Clone)]
pub struct TaxCreditResult {
    /// Deductions after the credit has been consumed.
    pub deductions: StatutoryDeductions,
    /// Credit absorbed by income tax.
    pub used_against_income_tax: Decimal,
    /// Credit absorbed by health contribution.
    pub used_against_health_contribution: Decimal,
    /// Total credit consumed.
    pub credit_used: Decimal,
    /// Credit left unused after both buckets.
    pub remaining_credit: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Moves as much of `remaining` into `bucket` as the bucket can absorb.
fn consume(remaining: &mut Decimal, bucket: &mut Decimal) -> Decimal {
    let used = (*remaining).min(*bucket);
    *bucket -= used;
    *remaining -= used;
    used
}

/// Applies `child_tax_credit` to the pre-credit `deductions`.
///
/// # Examples
///
/// ```
/// use net_pay_engine::calculation::{apply_tax_credit, StatutoryDeductions};
/// use rust_decimal::Decimal;
///
/// let deductions = StatutoryDeductions {
///     income_tax: Decimal::from(103895),
///     health_contribution: Decimal::from(128137),
///     pension_contribution: Decimal::from(69263),
/// };
/// let result = apply_tax_credit(deductions, Decimal::from(149800), 3);
///
/// assert_eq!(result.deductions.income_tax, Decimal::ZERO);
/// assert_eq!(result.deductions.health_contribution, Decimal::from(82232));
/// assert_eq!(result.deductions.pension_contribution, Decimal::from(69263));
/// assert_eq!(result.credit_used, Decimal::from(149800));
/// ```
pub fn apply_tax_credit(
    deductions: StatutoryDeductions,
    child_tax_credit: Decimal,
    step_number: u32,
) -> TaxCreditResult {
    let mut remaining_credit = child_tax_credit;
    let mut adjusted = deductions;

    let used_against_income_tax = consume(&mut remaining_credit, &mut adjusted.income_tax);
    let used_against_health_contribution =
        consume(&mut remaining_credit, &mut adjusted.health_contribution);
    let credit_used = child_tax_credit - remaining_credit;

    let reasoning = if child_tax_credit.is_zero() {
        "No child tax credit to apply".to_string()
    } else if remaining_credit.is_zero() {
        format!(
            "Credit {} fully used: {} against income tax, {} against health contribution",
            child_tax_credit, used_against_income_tax, used_against_health_contribution
        )
    } else {
        format!(
            "Credit {} exceeds income tax and health contribution: {} used, {} unused",
            child_tax_credit, credit_used, remaining_credit
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "child_tax_credit".to_string(),
        rule_name: "Child Tax Credit".to_string(),
        input: serde_json::json!({
            "child_tax_credit": child_tax_credit.to_string(),
            "income_tax": deductions.income_tax.to_string(),
            "health_contribution": deductions.health_contribution.to_string()
        }),
        output: serde_json::json!({
            "income_tax": adjusted.income_tax.to_string(),
            "health_contribution": adjusted.health_contribution.to_string(),
            "used_against_income_tax": used_against_income_tax.to_string(),
            "used_against_health_contribution": used_against_health_contribution.to_string(),
            "credit_used": credit_used.to_string(),
            "remaining_credit": remaining_credit.to_string()
        }),
        reasoning,
    };

    TaxCreditResult {
        deductions: adjusted,
        used_against_income_tax,
        used_against_health_contribution,
        credit_used,
        remaining_credit,
        audit_step,
    }
}
