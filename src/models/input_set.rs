//! Input model for a net pay calculation.
//!
//! This module defines [`InputSet`], the explicit, immutable set of figures
//! a caller supplies for one pay period.

use serde::{Deserialize, Serialize};

/// The gross-pay inputs for one pay period.
///
/// Every amount is a whole currency unit and every count is in whole hours.
/// Fields are `u32`, so negative values cannot be represented and the widest
/// product the calculation forms stays exact in `Decimal`.
///
/// # Example
///
/// ```
/// use net_pay_engine::models::InputSet;
///
/// let inputs = InputSet {
///     hourly_wage: 2950,
///     regular_hours: 160,
///     ..InputSet::default()
/// };
/// assert_eq!(inputs.overtime_hours, 0);
/// assert!(!inputs.maternity_benefit_taxable);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InputSet {
    /// Base hourly rate.
    pub hourly_wage: u32,
    /// Ordinary hours worked in the period.
    pub regular_hours: u32,
    /// Hours worked beyond the regular schedule.
    pub overtime_hours: u32,
    /// Paid-leave hours.
    pub leave_hours: u32,
    /// Hourly rate applied to leave hours.
    pub leave_hourly_rate: u32,
    /// Gross discretionary bonus.
    pub variable_bonus: u32,
    /// Gross shift-differential pay.
    pub shift_premium: u32,
    /// Gross maternity benefit, taxed separately from wages.
    pub maternity_benefit_gross: u32,
    /// Monthly allowance usable against income tax and health contribution.
    pub child_tax_credit: u32,
    /// Whether the maternity benefit is subject to pension-type withholding.
    pub maternity_benefit_taxable: bool,
}

impl InputSet {
    /// Returns the figures the calculator form is pre-filled with.
    ///
    /// 15 working days of 8 hours, 8 overtime hours and 5 days of leave.
    pub fn reference() -> Self {
        Self {
            hourly_wage: 2950,
            regular_hours: 15 * 8,
            overtime_hours: 8,
            leave_hours: 5 * 8,
            leave_hourly_rate: 3300,
            variable_bonus: 99864,
            shift_premium: 59568,
            maternity_benefit_gross: 407220,
            child_tax_credit: 149800,
            maternity_benefit_taxable: true,
        }
    }
}
