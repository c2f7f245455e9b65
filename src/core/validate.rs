//! Operand validation for calculator operations.
//!
//! Validation is a pure function: it inspects the operation type and the
//! operand, mutates nothing, and holds no state. The calculator runs it
//! before touching the result register or either history stack.

use crate::core::error::CalcError;
use crate::core::operation::OperationType;
use rust_decimal::Decimal;

/// Check whether an operand is legal for an operation.
///
/// Rules:
/// - a missing operand is rejected for every operation
/// - a zero divisor is rejected for [`OperationType::Divide`]
///
/// # Example
///
/// ```rust
/// use rust_decimal::Decimal;
/// use tally::{validate, CalcError, OperationType};
///
/// assert!(validate(OperationType::Add, Some(&Decimal::ZERO)).is_ok());
/// assert_eq!(
///     validate(OperationType::Divide, Some(&Decimal::ZERO)),
///     Err(CalcError::DivisionByZero),
/// );
/// assert_eq!(
///     validate(OperationType::Subtract, None),
///     Err(CalcError::MissingOperand { op: OperationType::Subtract }),
/// );
/// ```
pub fn validate(op: OperationType, num: Option<&Decimal>) -> Result<(), CalcError> {
    let num = num.ok_or(CalcError::MissingOperand { op })?;
    if op == OperationType::Divide && num.is_zero() {
        return Err(CalcError::DivisionByZero);
    }
    Ok(())
}
