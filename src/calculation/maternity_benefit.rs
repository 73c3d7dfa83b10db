//! Maternity benefit netting.
//!
//! The maternity benefit sits outside the wage deduction pipeline. When it is
//! taxable a flat pension-type withholding is taken from it; otherwise it is
//! paid out gross.

use rust_decimal::Decimal;

use crate::config::DeductionRates;
use crate::models::AuditStep;

use super::rounding::apply_rate;

/// The result of netting the maternity benefit, including the audit step.
#[derive(Debug, Clone)]
pub struct MaternityBenefitResult {
    /// Benefit after withholding.
    pub net_benefit: Decimal,
    /// Amount withheld; zero when the benefit is not taxable.
    pub withholding: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Nets a gross maternity benefit.
///
/// # Examples
///
/// ```
/// use net_pay_engine::calculation::calculate_maternity_benefit;
/// use net_pay_engine::config::DeductionRates;
/// use rust_decimal::Decimal;
///
/// let rates = DeductionRates::default();
///
/// let taxed = calculate_maternity_benefit(Decimal::from(100000), true, &rates, 4);
/// assert_eq!(taxed.net_benefit, Decimal::from(90000));
/// assert_eq!(taxed.withholding, Decimal::from(10000));
///
/// let exempt = calculate_maternity_benefit(Decimal::from(100000), false, &rates, 4);
/// assert_eq!(exempt.net_benefit, Decimal::from(100000));
/// assert_eq!(exempt.withholding, Decimal::ZERO);
/// ```
pub fn calculate_maternity_benefit(
    gross_benefit: Decimal,
    taxable: bool,
    rates: &DeductionRates,
    step_number: u32,
) -> MaternityBenefitResult {
    let withholding = if taxable {
        apply_rate(gross_benefit, rates.maternity_withholding)
    } else {
        Decimal::ZERO
    };
    let net_benefit = gross_benefit - withholding;

    let reasoning = if taxable {
        format!(
            "{} - ({} x {} = {}) = {}",
            gross_benefit,
            gross_benefit,
            rates.maternity_withholding.normalize(),
            withholding,
            net_benefit
        )
    } else {
        format!("Maternity benefit {} not taxable - paid in full", gross_benefit)
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "maternity_benefit".to_string(),
        rule_name: "Maternity Benefit".to_string(),
        input: serde_json::json!({
            "gross_benefit": gross_benefit.to_string(),
            "taxable": taxable,
            "withholding_rate": rates.maternity_withholding.normalize().to_string()
        }),
        output: serde_json::json!({
            "withholding": withholding.to_string(),
            "net_benefit": net_benefit.to_string()
        }),
        reasoning,
    };

    MaternityBenefitResult {
        net_benefit,
        withholding,
        audit_step,
    }
}
