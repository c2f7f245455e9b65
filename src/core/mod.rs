//! Core calculator types and logic.
//!
//! This module contains the pure core of the calculator:
//! - The `Calculator` session (result register + history)
//! - Two-stack undo/redo `History`
//! - Operand validation and the `OperationType` set
//!
//! All logic in this module is synchronous and in-memory: no operation
//! blocks, suspends, or performs I/O.

mod calculator;
mod error;
mod history;
mod operation;
mod validate;

pub use calculator::{Calculator, DEFAULT_DIVISION_SCALE, DEFAULT_ROUNDING};
pub use error::CalcError;
pub use history::History;
pub use operation::{OperationLabels, OperationType};
pub use validate::validate;
