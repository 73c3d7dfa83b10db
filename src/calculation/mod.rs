//! Calculation logic for the Net Pay Engine.
//!
//! This module contains the net pay pipeline and the individual rules it is
//! built from: gross pay, statutory deductions, child tax credit consumption,
//! maternity benefit netting, the informational net split, and the shared
//! currency rounding helper.

mod gross_pay;
mod informational_split;
mod maternity_benefit;
mod net_pay;
mod rounding;
mod statutory_deductions;
mod tax_credit;

pub use gross_pay::{GrossPayResult, calculate_gross_pay};
pub use informational_split::{InformationalSplitResult, calculate_informational_split};
pub use maternity_benefit::{MaternityBenefitResult, calculate_maternity_benefit};
pub use net_pay::{NetPayCalculation, calculate_net_pay, compute, compute_with_rates};
pub use rounding::{apply_rate, round_currency};
pub use statutory_deductions::{
    StatutoryDeductions, StatutoryDeductionsResult, calculate_statutory_deductions,
};
pub use tax_credit::{TaxCreditResult, apply_tax_credit};
