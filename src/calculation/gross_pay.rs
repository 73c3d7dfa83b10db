//! Gross pay calculation.
//!
//! Combines hourly wages, overtime, paid leave and the supplemental items
//! into the gross wage base that every statutory deduction is taken from.

use rust_decimal::Decimal;

use crate::config::DeductionRates;
use crate::models::{AuditStep, InputSet};

/// The result of the gross pay calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct GrossPayResult {
    /// Regular hours at the hourly wage.
    pub regular_pay: Decimal,
    /// Overtime hours at the hourly wage times the overtime multiplier.
    pub overtime_pay: Decimal,
    /// Leave hours at the leave hourly rate.
    pub leave_pay: Decimal,
    /// Regular, overtime and leave pay combined.
    pub gross_wages: Decimal,
    /// Variable bonus plus shift premium.
    pub gross_supplemental: Decimal,
    /// Gross wages plus gross supplemental.
    pub gross_wage_base: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates gross wages, gross supplemental pay and the gross wage base.
///
/// # Examples
///
/// ```
/// use net_pay_engine::calculation::calculate_gross_pay;
/// use net_pay_engine::config::DeductionRates;
/// use net_pay_engine::models::InputSet;
/// use rust_decimal::Decimal;
///
/// let result = calculate_gross_pay(&InputSet::reference(), &DeductionRates::default(), 1);
/// assert_eq!(result.gross_wages, Decimal::from(533200));
/// assert_eq!(result.gross_supplemental, Decimal::from(159432));
/// assert_eq!(result.gross_wage_base, Decimal::from(692632));
/// ```
pub fn calculate_gross_pay(
    inputs: &InputSet,
    rates: &DeductionRates,
    step_number: u32,
) -> GrossPayResult {
    let hourly_wage = Decimal::from(inputs.hourly_wage);

    let regular_pay = Decimal::from(inputs.regular_hours) * hourly_wage;
    let overtime_pay =
        Decimal::from(inputs.overtime_hours) * hourly_wage * rates.overtime_multiplier;
    let leave_pay = Decimal::from(inputs.leave_hours) * Decimal::from(inputs.leave_hourly_rate);
    let gross_wages = regular_pay + overtime_pay + leave_pay;

    let gross_supplemental =
        Decimal::from(inputs.variable_bonus) + Decimal::from(inputs.shift_premium);
    let gross_wage_base = gross_wages + gross_supplemental;

    let audit_step = AuditStep {
        step_number,
        rule_id: "gross_pay".to_string(),
        rule_name: "Gross Pay".to_string(),
        input: serde_json::json!({
            "hourly_wage": inputs.hourly_wage,
            "regular_hours": inputs.regular_hours,
            "overtime_hours": inputs.overtime_hours,
            "overtime_multiplier": rates.overtime_multiplier.normalize().to_string(),
            "leave_hours": inputs.leave_hours,
            "leave_hourly_rate": inputs.leave_hourly_rate,
            "variable_bonus": inputs.variable_bonus,
            "shift_premium": inputs.shift_premium
        }),
        output: serde_json::json!({
            "regular_pay": regular_pay.normalize().to_string(),
            "overtime_pay": overtime_pay.normalize().to_string(),
            "leave_pay": leave_pay.normalize().to_string(),
            "gross_wages": gross_wages.normalize().to_string(),
            "gross_supplemental": gross_supplemental.normalize().to_string(),
            "gross_wage_base": gross_wage_base.normalize().to_string()
        }),
        reasoning: format!(
            "{}h x {} + {}h x {} x {} + {}h x {} = {}; {} + {} = {}; wage base {}",
            inputs.regular_hours,
            inputs.hourly_wage,
            inputs.overtime_hours,
            inputs.hourly_wage,
            rates.overtime_multiplier.normalize(),
            inputs.leave_hours,
            inputs.leave_hourly_rate,
            gross_wages.normalize(),
            inputs.variable_bonus,
            inputs.shift_premium,
            gross_supplemental.normalize(),
            gross_wage_base.normalize()
        ),
    };

    GrossPayResult {
        regular_pay,
        overtime_pay,
        leave_pay,
        gross_wages,
        gross_supplemental,
        gross_wage_base,
        audit_step,
    }
}
