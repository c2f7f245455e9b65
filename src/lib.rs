//! Tally: a decimal arithmetic calculator with undo/redo history.
//!
//! The core is a pure, in-memory session object: a decimal result register,
//! an undo stack, and a redo stack. Every mutating operation is validated
//! first and either succeeds completely or changes nothing, so the history
//! stacks only ever hold previously-valid results.
//!
//! # Core Concepts
//!
//! - **Calculator**: one session — result register plus both history stacks
//! - **History**: the classic two-stack linear undo/redo model
//! - **Validation**: pure operand checks (missing operand, zero divisor)
//! - **Snapshot**: serializable capture of a whole session
//!
//! Arithmetic uses [`rust_decimal::Decimal`] (re-exported here), so chained
//! operations don't accumulate binary-float drift. Division takes an
//! explicit scale and [`RoundingStrategy`]; the defaults are two decimal
//! places, ties away from zero.
//!
//! # Example
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use tally::{CalcError, Calculator};
//!
//! let mut calc = Calculator::new();
//! calc.add(Decimal::from(10))?;
//! calc.divide(Decimal::from(3))?;
//! assert_eq!(calc.result(), "3.33".parse().unwrap());
//!
//! // division by zero is rejected and nothing moves
//! assert_eq!(calc.divide(Decimal::ZERO), Err(CalcError::DivisionByZero));
//! assert_eq!(calc.result(), "3.33".parse().unwrap());
//!
//! calc.undo();
//! assert_eq!(calc.result(), Decimal::from(10));
//! # Ok::<(), tally::CalcError>(())
//! ```

pub mod core;
pub mod snapshot;

// Re-export commonly used types
pub use crate::core::{
    validate, CalcError, Calculator, History, OperationLabels, OperationType,
    DEFAULT_DIVISION_SCALE, DEFAULT_ROUNDING,
};
pub use crate::snapshot::{Snapshot, SnapshotError};

// Callers need these for operands and division policy; re-export so basic
// use doesn't require a direct rust_decimal dependency.
pub use rust_decimal::{Decimal, RoundingStrategy};
