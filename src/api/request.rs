//! Request types for the Net Pay Engine API.
//!
//! This module defines the JSON request structures for the `/calculate` and
//! `/calculate/text` endpoints.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::InputSet;
use crate::presentation::parse_amount;

/// Request body for the `/calculate` endpoint.
///
/// Every field is optional and defaults to zero (or `false`), matching an
/// empty field on the calculator form. Values are accepted as signed integers
/// so that a negative or oversized amount can be reported by field name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Base hourly rate.
    #[serde(default)]
    pub hourly_wage: i64,
    /// Ordinary hours worked in the period.
    #[serde(default)]
    pub regular_hours: i64,
    /// Overtime hours.
    #[serde(default)]
    pub overtime_hours: i64,
    /// Paid-leave hours.
    #[serde(default)]
    pub leave_hours: i64,
    /// Hourly rate for leave hours.
    #[serde(default)]
    pub leave_hourly_rate: i64,
    /// Gross variable bonus.
    #[serde(default)]
    pub variable_bonus: i64,
    /// Gross shift premium.
    #[serde(default)]
    pub shift_premium: i64,
    /// Gross maternity benefit.
    #[serde(default)]
    pub maternity_benefit_gross: i64,
    /// Monthly child tax credit.
    #[serde(default)]
    pub child_tax_credit: i64,
    /// Whether the maternity benefit is taxable.
    #[serde(default)]
    pub maternity_benefit_taxable: bool,
}

impl From<InputSet> for CalculationRequest {
    fn from(inputs: InputSet) -> Self {
        Self {
            hourly_wage: inputs.hourly_wage.into(),
            regular_hours: inputs.regular_hours.into(),
            overtime_hours: inputs.overtime_hours.into(),
            leave_hours: inputs.leave_hours.into(),
            leave_hourly_rate: inputs.leave_hourly_rate.into(),
            variable_bonus: inputs.variable_bonus.into(),
            shift_premium: inputs.shift_premium.into(),
            maternity_benefit_gross: inputs.maternity_benefit_gross.into(),
            child_tax_credit: inputs.child_tax_credit.into(),
            maternity_benefit_taxable: inputs.maternity_benefit_taxable,
        }
    }
}

/// Narrows a request value to the range the engine accepts.
fn checked_amount(field: &str, value: i64) -> EngineResult<u32> {
    u32::try_from(value).map_err(|_| EngineError::InvalidInput {
        field: field.to_string(),
        message: if value < 0 {
            "must not be negative".to_string()
        } else {
            format!("must not exceed {}", u32::MAX)
        },
    })
}

impl TryFrom<CalculationRequest> for InputSet {
    type Error = EngineError;

    fn try_from(req: CalculationRequest) -> EngineResult<Self> {
        Ok(InputSet {
            hourly_wage: checked_amount("hourly_wage", req.hourly_wage)?,
            regular_hours: checked_amount("regular_hours", req.regular_hours)?,
            overtime_hours: checked_amount("overtime_hours", req.overtime_hours)?,
            leave_hours: checked_amount("leave_hours", req.leave_hours)?,
            leave_hourly_rate: checked_amount("leave_hourly_rate", req.leave_hourly_rate)?,
            variable_bonus: checked_amount("variable_bonus", req.variable_bonus)?,
            shift_premium: checked_amount("shift_premium", req.shift_premium)?,
            maternity_benefit_gross: checked_amount(
                "maternity_benefit_gross",
                req.maternity_benefit_gross,
            )?,
            child_tax_credit: checked_amount("child_tax_credit", req.child_tax_credit)?,
            maternity_benefit_taxable: req.maternity_benefit_taxable,
        })
    }
}

/// Request body for the `/calculate/text` endpoint.
///
/// Carries the raw text of each form field. Each one is sanitized with
/// [`parse_amount`], so this conversion never fails.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormInput {
    /// Base hourly rate.
    #[serde(default)]
    pub hourly_wage: String,
    /// Ordinary hours worked in the period.
    #[serde(default)]
    pub regular_hours: String,
    /// Overtime hours.
    #[serde(default)]
    pub overtime_hours: String,
    /// Paid-leave hours.
    #[serde(default)]
    pub leave_hours: String,
    /// Hourly rate for leave hours.
    #[serde(default)]
    pub leave_hourly_rate: String,
    /// Gross variable bonus.
    #[serde(default)]
    pub variable_bonus: String,
    /// Gross shift premium.
    #[serde(default)]
    pub shift_premium: String,
    /// Gross maternity benefit.
    #[serde(default)]
    pub maternity_benefit_gross: String,
    /// Monthly child tax credit.
    #[serde(default)]
    pub child_tax_credit: String,
    /// Whether the maternity benefit is taxable.
    #[serde(default)]
    pub maternity_benefit_taxable: bool,
}

impl From<FormInput> for InputSet {
    fn from(form: FormInput) -> Self {
        InputSet {
            hourly_wage: parse_amount(&form.hourly_wage),
            regular_hours: parse_amount(&form.regular_hours),
            overtime_hours: parse_amount(&form.overtime_hours),
            leave_hours: parse_amount(&form.leave_hours),
            leave_hourly_rate: parse_amount(&form.leave_hourly_rate),
            variable_bonus: parse_amount(&form.variable_bonus),
            shift_premium: parse_amount(&form.shift_premium),
            maternity_benefit_gross: parse_amount(&form.maternity_benefit_gross),
            child_tax_credit: parse_amount(&form.child_tax_credit),
            maternity_benefit_taxable: form.maternity_benefit_taxable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_request_defaults_to_zero() {
        let request: CalculationRequest = serde_json::from_str("{}").unwrap();
        let inputs = InputSet::try_from(request).unwrap();
        assert_eq!(inputs, InputSet::default());
    }

    #[test]
    fn test_request_round_trips_reference_inputs() {
        let request = CalculationRequest::from(InputSet::reference());
        assert_eq!(InputSet::try_from(request).unwrap(), InputSet::reference());
    }

    #[test]
    fn test_negative_value_names_field() {
        let request = CalculationRequest {
            overtime_hours: -8,
            ..CalculationRequest::default()
        };

        match InputSet::try_from(request) {
            Err(EngineError::InvalidInput { field, message }) => {
                assert_eq!(field, "overtime_hours");
                assert_eq!(message, "must not be negative");
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_oversized_value_names_field() {
        let request = CalculationRequest {
            child_tax_credit: i64::from(u32::MAX) + 1,
            ..CalculationRequest::default()
        };

        match InputSet::try_from(request) {
            Err(EngineError::InvalidInput { field, message }) => {
                assert_eq!(field, "child_tax_credit");
                assert!(message.contains("4294967295"));
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_form_input_sanitizes_text() {
        let form = FormInput {
            hourly_wage: "2 950".to_string(),
            regular_hours: "120h".to_string(),
            overtime_hours: "".to_string(),
            child_tax_credit: "149,800 Ft".to_string(),
            maternity_benefit_taxable: true,
            ..FormInput::default()
        };
        let inputs = InputSet::from(form);

        assert_eq!(inputs.hourly_wage, 2950);
        assert_eq!(inputs.regular_hours, 120);
        assert_eq!(inputs.overtime_hours, 0);
        assert_eq!(inputs.child_tax_credit, 149800);
        assert!(inputs.maternity_benefit_taxable);
    }

    #[test]
    fn test_form_input_missing_fields_default_empty() {
        let form: FormInput = serde_json::from_str(r#"{"hourly_wage": "1000"}"#).unwrap();
        let inputs = InputSet::from(form);
        assert_eq!(inputs.hourly_wage, 1000);
        assert_eq!(inputs.regular_hours, 0);
    }
}
