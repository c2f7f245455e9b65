//! Rejection errors for calculator operations.

use crate::core::operation::OperationType;
use thiserror::Error;

/// Reasons an arithmetic operation is rejected.
///
/// A rejected operation never mutates the calculator: the result register
/// and both history stacks are exactly as they were before the call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CalcError {
    /// The operand was absent (e.g. a driver forwarded an empty input).
    #[error("missing operand for {op} operation")]
    MissingOperand { op: OperationType },

    /// Division by zero is never attempted.
    #[error("division by zero")]
    DivisionByZero,

    /// The result would not fit in a 96-bit decimal mantissa.
    #[error("decimal overflow in {op} operation")]
    Overflow { op: OperationType },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_render_operation_codes() {
        let err = CalcError::MissingOperand {
            op: OperationType::Multiply,
        };
        assert_eq!(err.to_string(), "missing operand for MULTIPLY operation");

        let err = CalcError::Overflow {
            op: OperationType::Add,
        };
        assert_eq!(err.to_string(), "decimal overflow in ADD operation");
    }

    #[test]
    fn errors_are_comparable() {
        assert_eq!(CalcError::DivisionByZero, CalcError::DivisionByZero);
        assert_ne!(
            CalcError::DivisionByZero,
            CalcError::MissingOperand {
                op: OperationType::Divide
            }
        );
    }
}
