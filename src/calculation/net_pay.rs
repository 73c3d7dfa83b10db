//! The net pay pipeline.
//!
//! [`compute`] is the engine's single operation: a pure function from an
//! [`InputSet`] to a [`Breakdown`]. The steps run in a fixed order and every
//! percentage is rounded where it is applied, so reordering them would change
//! the figures.
//!
//! All arithmetic is exact `Decimal` arithmetic on `u32` inputs. The widest
//! intermediate value is below 2^66, well inside `Decimal`'s 96-bit mantissa,
//! so no input can overflow.

use rust_decimal::Decimal;

use crate::config::DeductionRates;
use crate::models::{AuditStep, Breakdown, InputSet};

use super::gross_pay::calculate_gross_pay;
use super::informational_split::calculate_informational_split;
use super::maternity_benefit::calculate_maternity_benefit;
use super::statutory_deductions::calculate_statutory_deductions;
use super::tax_credit::apply_tax_credit;

/// A breakdown together with the audit steps that produced it.
#[derive(Debug, Clone)]
pub struct NetPayCalculation {
    /// The calculated breakdown.
    pub breakdown: Breakdown,
    /// Every rule applied, in order.
    pub audit_steps: Vec<AuditStep>,
}

/// Computes the net pay breakdown with the scheme's compiled-in rates.
///
/// # Examples
///
/// ```
/// use net_pay_engine::calculation::compute;
/// use net_pay_engine::models::InputSet;
/// use rust_decimal::Decimal;
///
/// let breakdown = compute(&InputSet::reference());
/// assert_eq!(breakdown.net_total, Decimal::from(907635));
/// assert_eq!(breakdown.credit_used, Decimal::from(149800));
/// ```
pub fn compute(inputs: &InputSet) -> Breakdown {
    compute_with_rates(inputs, &DeductionRates::default())
}

/// Computes the net pay breakdown with the given rates.
pub fn compute_with_rates(inputs: &InputSet, rates: &DeductionRates) -> Breakdown {
    calculate_net_pay(inputs, rates).breakdown
}

/// Runs the full pipeline and records an audit step for each rule.
///
/// The breakdown is the same one [`compute_with_rates`] returns.
pub fn calculate_net_pay(inputs: &InputSet, rates: &DeductionRates) -> NetPayCalculation {
    let mut audit_steps = Vec::with_capacity(6);
    let mut step_number: u32 = 1;

    let gross = calculate_gross_pay(inputs, rates, step_number);
    audit_steps.push(gross.audit_step);
    step_number += 1;

    let statutory = calculate_statutory_deductions(gross.gross_wage_base, rates, step_number);
    audit_steps.push(statutory.audit_step);
    step_number += 1;

    let credit = apply_tax_credit(
        statutory.deductions,
        Decimal::from(inputs.child_tax_credit),
        step_number,
    );
    audit_steps.push(credit.audit_step);
    step_number += 1;

    // Post-credit income tax and health contribution, full pension.
    let net_wages_after_credit = gross.gross_wage_base - credit.deductions.total();

    let maternity = calculate_maternity_benefit(
        Decimal::from(inputs.maternity_benefit_gross),
        inputs.maternity_benefit_taxable,
        rates,
        step_number,
    );
    audit_steps.push(maternity.audit_step);
    step_number += 1;

    let net_total = net_wages_after_credit + maternity.net_benefit;

    let informational = calculate_informational_split(
        gross.gross_wages,
        gross.gross_supplemental,
        rates,
        step_number,
    );
    audit_steps.push(informational.audit_step);
    step_number += 1;

    let pension_contribution_total =
        credit.deductions.pension_contribution + maternity.withholding;

    audit_steps.push(AuditStep {
        step_number,
        rule_id: "net_total".to_string(),
        rule_name: "Net Total".to_string(),
        input: serde_json::json!({
            "gross_wage_base": gross.gross_wage_base.to_string(),
            "income_tax": credit.deductions.income_tax.to_string(),
            "health_contribution": credit.deductions.health_contribution.to_string(),
            "pension_contribution": credit.deductions.pension_contribution.to_string(),
            "net_maternity_benefit": maternity.net_benefit.to_string()
        }),
        output: serde_json::json!({
            "net_wages_after_credit": net_wages_after_credit.to_string(),
            "net_total": net_total.to_string(),
            "pension_contribution_total": pension_contribution_total.to_string()
        }),
        reasoning: format!(
            "{} - ({} + {} + {}) = {}; {} + {} = {}",
            gross.gross_wage_base,
            credit.deductions.income_tax,
            credit.deductions.health_contribution,
            credit.deductions.pension_contribution,
            net_wages_after_credit,
            net_wages_after_credit,
            maternity.net_benefit,
            net_total
        ),
    });

    let breakdown = Breakdown {
        net_total,
        net_wages: informational.net_wages,
        net_supplemental: informational.net_supplemental,
        net_maternity_benefit: maternity.net_benefit,
        income_tax_total: credit.deductions.income_tax,
        health_contribution_total: credit.deductions.health_contribution,
        pension_contribution_total,
        credit_used: credit.credit_used,
    };

    NetPayCalculation {
        breakdown,
        audit_steps,
    }
}
