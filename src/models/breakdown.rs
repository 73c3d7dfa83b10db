//! Output model for a net pay calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The net totals and itemized deductions for one pay period.
///
/// Every field is a whole currency amount (scale 0).
///
/// `net_wages` and `net_supplemental` are informational figures computed at a
/// flat deemed rate. They do not have to add up to the credit-adjusted wage
/// net that feeds `net_total`.
///
/// # Example
///
/// ```
/// use net_pay_engine::models::Breakdown;
/// use rust_decimal::Decimal;
///
/// let breakdown = Breakdown::default();
/// assert_eq!(breakdown.net_total, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakdown {
    /// Take-home pay: credit-adjusted wage net plus net maternity benefit.
    pub net_total: Decimal,
    /// Wages (regular, overtime, leave) less the flat informational rate.
    pub net_wages: Decimal,
    /// Bonus and shift premium less the flat informational rate.
    pub net_supplemental: Decimal,
    /// Maternity benefit after any withholding.
    pub net_maternity_benefit: Decimal,
    /// Income tax after the child tax credit.
    pub income_tax_total: Decimal,
    /// Health contribution after the child tax credit.
    pub health_contribution_total: Decimal,
    /// Wage pension contribution plus any maternity withholding.
    pub pension_contribution_total: Decimal,
    /// Portion of the child tax credit consumed.
    pub credit_used: Decimal,
}

/// A [`Breakdown`] rendered for display, one string per field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedBreakdown {
    /// Formatted `net_total`.
    pub net_total: String,
    /// Formatted `net_wages`.
    pub net_wages: String,
    /// Formatted `net_supplemental`.
    pub net_supplemental: String,
    /// Formatted `net_maternity_benefit`.
    pub net_maternity_benefit: String,
    /// Formatted `income_tax_total`.
    pub income_tax_total: String,
    /// Formatted `health_contribution_total`.
    pub health_contribution_total: String,
    /// Formatted `pension_contribution_total`.
    pub pension_contribution_total: String,
    /// Formatted `credit_used`.
    pub credit_used: String,
}

impl FormattedBreakdown {
    /// Renders every field of `breakdown` with `format`.
    pub fn from_breakdown(breakdown: &Breakdown, format: impl Fn(Decimal) -> String) -> Self {
        Self {
            net_total: format(breakdown.net_total),
            net_wages: format(breakdown.net_wages),
            net_supplemental: format(breakdown.net_supplemental),
            net_maternity_benefit: format(breakdown.net_maternity_benefit),
            income_tax_total: format(breakdown.income_tax_total),
            health_contribution_total: format(breakdown.health_contribution_total),
            pension_contribution_total: format(breakdown.pension_contribution_total),
            credit_used: format(breakdown.credit_used),
        }
    }
}
