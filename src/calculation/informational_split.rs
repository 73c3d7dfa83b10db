//! Informational net split between wages and supplemental pay.
//!
//! These two figures apply one flat deemed rate to each component on its own.
//! They are reported alongside the real deductions but are not reconciled
//! with them, so they need not sum to the credit-adjusted wage net.

use rust_decimal::Decimal;

use crate::config::DeductionRates;
use crate::models::AuditStep;

use super::rounding::apply_rate;

/// The informational net figures, including the audit step.
#[derive(Debug, Clone)]
pub struct InformationalSplitResult {
    /// Gross wages less the deemed rate.
    pub net_wages: Decimal,
    /// Gross supplemental pay less the deemed rate.
    pub net_supplemental: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the informational net wages and net supplemental figures.
pub fn calculate_informational_split(
    gross_wages: Decimal,
    gross_supplemental: Decimal,
    rates: &DeductionRates,
    step_number: u32,
) -> InformationalSplitResult {
    let rate = rates.informational_deduction;
    let net_wages = gross_wages - apply_rate(gross_wages, rate);
    let net_supplemental = gross_supplemental - apply_rate(gross_supplemental, rate);

    let audit_step = AuditStep {
        step_number,
        rule_id: "informational_split".to_string(),
        rule_name: "Informational Net Split".to_string(),
        input: serde_json::json!({
            "gross_wages": gross_wages.to_string(),
            "gross_supplemental": gross_supplemental.to_string(),
            "deemed_rate": rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "net_wages": net_wages.to_string(),
            "net_supplemental": net_supplemental.to_string()
        }),
        reasoning: format!(
            "Flat {} deemed rate: wages {} -> {}, supplemental {} -> {}",
            rate.normalize(),
            gross_wages,
            net_wages,
            gross_supplemental,
            net_supplemental
        ),
    };

    InformationalSplitResult {
        net_wages,
        net_supplemental,
        audit_step,
    }
}
