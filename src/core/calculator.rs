//! The calculator session: a result register plus undo/redo history.

use crate::core::error::CalcError;
use crate::core::history::History;
use crate::core::operation::OperationType;
use crate::core::validate::validate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Decimal places kept in a division result unless the caller says otherwise.
pub const DEFAULT_DIVISION_SCALE: u32 = 2;

/// Default division rounding: ties round away from zero (round-half-up).
pub const DEFAULT_ROUNDING: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

/// A decimal calculator with linear undo/redo history.
///
/// One `Calculator` is one logical session: it owns its result register and
/// both history stacks, and nothing here is shared or thread-affine. Wrap
/// it in a `Mutex` if a session must cross threads.
///
/// Every mutating operation either succeeds completely (prior result pushed
/// to the undo stack, redo stack cleared, new result stored) or is rejected
/// with a [`CalcError`] and changes nothing.
///
/// # Example
///
/// ```rust
/// use rust_decimal::Decimal;
/// use tally::Calculator;
///
/// let mut calc = Calculator::new();
/// calc.add(Decimal::from(5))?;
/// calc.multiply(Decimal::from(3))?;
/// assert_eq!(calc.result(), Decimal::from(15));
///
/// calc.undo();
/// assert_eq!(calc.result(), Decimal::from(5));
/// calc.redo();
/// assert_eq!(calc.result(), Decimal::from(15));
/// # Ok::<(), tally::CalcError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Calculator {
    result: Decimal,
    history: History<Decimal>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Create a session with result zero and empty history.
    pub fn new() -> Self {
        Self {
            result: Decimal::ZERO,
            history: History::new(),
        }
    }

    /// Rebuild a session from a saved result and history.
    pub(crate) fn from_parts(result: Decimal, history: History<Decimal>) -> Self {
        Self { result, history }
    }

    /// Current result (pure).
    pub fn result(&self) -> Decimal {
        self.result
    }

    /// Undo/redo history (pure).
    pub fn history(&self) -> &History<Decimal> {
        &self.history
    }

    /// Whether an undo would change the result.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether a redo would change the result.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Number of results reachable by repeated undo.
    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    /// Number of results reachable by repeated redo.
    pub fn redo_depth(&self) -> usize {
        self.history.redo_depth()
    }

    /// Clear both history stacks and set the result to zero.
    ///
    /// Always succeeds; returns the (zero) result.
    pub fn reset(&mut self) -> Decimal {
        self.history.clear();
        self.result = Decimal::ZERO;
        self.result
    }

    /// Add `num` to the result.
    pub fn add(&mut self, num: Decimal) -> Result<Decimal, CalcError> {
        let op = OperationType::Add;
        validate(op, Some(&num))?;
        let next = self
            .result
            .checked_add(num)
            .ok_or(CalcError::Overflow { op })?;
        Ok(self.commit(next))
    }

    /// Subtract `num` from the result.
    pub fn subtract(&mut self, num: Decimal) -> Result<Decimal, CalcError> {
        let op = OperationType::Subtract;
        validate(op, Some(&num))?;
        let next = self
            .result
            .checked_sub(num)
            .ok_or(CalcError::Overflow { op })?;
        Ok(self.commit(next))
    }

    /// Multiply the result by `num`.
    pub fn multiply(&mut self, num: Decimal) -> Result<Decimal, CalcError> {
        let op = OperationType::Multiply;
        validate(op, Some(&num))?;
        let next = self
            .result
            .checked_mul(num)
            .ok_or(CalcError::Overflow { op })?;
        Ok(self.commit(next))
    }

    /// Divide the result by `num` with the default scale and rounding
    /// ([`DEFAULT_DIVISION_SCALE`], [`DEFAULT_ROUNDING`]).
    ///
    /// # Example
    ///
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use tally::Calculator;
    ///
    /// let mut calc = Calculator::new();
    /// calc.add(Decimal::from(10))?;
    /// calc.divide(Decimal::from(3))?;
    /// assert_eq!(calc.result(), "3.33".parse().unwrap());
    /// # Ok::<(), tally::CalcError>(())
    /// ```
    pub fn divide(&mut self, num: Decimal) -> Result<Decimal, CalcError> {
        self.divide_with(num, DEFAULT_DIVISION_SCALE, DEFAULT_ROUNDING)
    }

    /// Divide the result by `num`, keeping `scale` decimal places rounded
    /// with `rounding`.
    pub fn divide_with(
        &mut self,
        num: Decimal,
        scale: u32,
        rounding: RoundingStrategy,
    ) -> Result<Decimal, CalcError> {
        let op = OperationType::Divide;
        validate(op, Some(&num))?;
        // zero divisor was rejected above, so None here means overflow
        let quotient = self
            .result
            .checked_div(num)
            .ok_or(CalcError::Overflow { op })?;
        Ok(self.commit(quotient.round_dp_with_strategy(scale, rounding)))
    }

    /// Apply an operation chosen at runtime, with a possibly-missing operand.
    ///
    /// This is the entry point for drivers that forward raw input: a `None`
    /// operand is rejected as [`CalcError::MissingOperand`] without touching
    /// any state. Division uses the default scale and rounding.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use tally::{CalcError, Calculator, OperationType};
    ///
    /// let mut calc = Calculator::new();
    /// calc.apply(OperationType::Add, Some(Decimal::from(5)))?;
    /// assert_eq!(
    ///     calc.apply(OperationType::Multiply, None),
    ///     Err(CalcError::MissingOperand { op: OperationType::Multiply }),
    /// );
    /// assert_eq!(calc.result(), Decimal::from(5));
    /// # Ok::<(), tally::CalcError>(())
    /// ```
    pub fn apply(
        &mut self,
        op: OperationType,
        num: Option<Decimal>,
    ) -> Result<Decimal, CalcError> {
        let Some(num) = num else {
            return Err(CalcError::MissingOperand { op });
        };
        match op {
            OperationType::Add => self.add(num),
            OperationType::Subtract => self.subtract(num),
            OperationType::Multiply => self.multiply(num),
            OperationType::Divide => self.divide(num),
        }
    }

    /// Roll the result back to the value before the last forward operation.
    ///
    /// Returns the restored result, or `None` (no state change) when there
    /// is nothing to undo. Undo never touches the redo branch except to
    /// extend it with the value being left.
    pub fn undo(&mut self) -> Option<Decimal> {
        let prior = self.history.undo(self.result)?;
        self.result = prior;
        Some(prior)
    }

    /// Re-apply the most recently undone result.
    ///
    /// Returns the restored result, or `None` (no state change) when there
    /// is nothing to redo.
    pub fn redo(&mut self) -> Option<Decimal> {
        let next = self.history.redo(self.result)?;
        self.result = next;
        Some(next)
    }

    /// Store a validated, computed result: push the prior value, replace
    /// the register, drop the redo branch.
    fn commit(&mut self, next: Decimal) -> Decimal {
        self.history.record(self.result);
        self.result = next;
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn new_calculator_starts_at_zero() {
        let calc = Calculator::new();
        assert_eq!(calc.result(), Decimal::ZERO);
        assert!(!calc.can_undo());
        assert!(!calc.can_redo());
    }

    #[test]
    fn full_session_walkthrough() {
        let mut calc = Calculator::new();

        calc.add(dec!(5)).unwrap();
        calc.add(dec!(1)).unwrap();
        assert_eq!(calc.result(), dec!(6));

        calc.subtract(dec!(1)).unwrap();
        assert_eq!(calc.result(), dec!(5));

        calc.multiply(dec!(2)).unwrap();
        assert_eq!(calc.result(), dec!(10));

        calc.divide_with(dec!(2), 0, RoundingStrategy::MidpointAwayFromZero)
            .unwrap();
        assert_eq!(calc.result(), dec!(5));

        assert_eq!(calc.undo(), Some(dec!(10)));
        assert_eq!(calc.redo(), Some(dec!(5)));

        assert_eq!(calc.reset(), Decimal::ZERO);
        assert_eq!(calc.result(), Decimal::ZERO);
        assert!(!calc.can_undo());
        assert!(!calc.can_redo());
    }

    #[test]
    fn divide_defaults_to_scale_two_half_up() {
        let mut calc = Calculator::new();
        calc.add(dec!(10)).unwrap();
        assert_eq!(calc.divide(dec!(3)), Ok(dec!(3.33)));
    }

    #[test]
    fn half_up_ties_round_away_from_zero() {
        let mut calc = Calculator::new();
        calc.add(dec!(5)).unwrap();
        calc.divide_with(dec!(2), 0, DEFAULT_ROUNDING).unwrap();
        assert_eq!(calc.result(), dec!(3));

        let mut calc = Calculator::new();
        calc.subtract(dec!(5)).unwrap();
        calc.divide_with(dec!(2), 0, DEFAULT_ROUNDING).unwrap();
        assert_eq!(calc.result(), dec!(-3));
    }

    #[test]
    fn divide_by_zero_changes_nothing() {
        let mut calc = Calculator::new();
        calc.add(dec!(5)).unwrap();

        let before = calc.clone();
        assert_eq!(calc.divide(Decimal::ZERO), Err(CalcError::DivisionByZero));

        assert_eq!(calc, before);
        assert_eq!(calc.result(), dec!(5));
        assert_eq!(calc.undo_depth(), 1);
    }

    #[test]
    fn missing_operand_changes_nothing() {
        let mut calc = Calculator::new();
        calc.add(dec!(5)).unwrap();
        calc.undo();
        let before = calc.clone();

        for op in OperationType::ALL {
            assert_eq!(
                calc.apply(op, None),
                Err(CalcError::MissingOperand { op })
            );
            assert_eq!(calc, before);
        }
        // the redo branch survived every rejection
        assert!(calc.can_redo());
    }

    #[test]
    fn forward_operation_clears_redo() {
        let mut calc = Calculator::new();
        calc.add(dec!(5)).unwrap();
        calc.undo();
        assert!(calc.can_redo());

        calc.add(dec!(7)).unwrap();
        assert!(!calc.can_redo());
        assert_eq!(calc.redo(), None);
        assert_eq!(calc.result(), dec!(7));
    }

    #[test]
    fn undo_does_not_clear_redo() {
        let mut calc = Calculator::new();
        calc.add(dec!(1)).unwrap();
        calc.add(dec!(2)).unwrap();

        calc.undo();
        calc.undo();
        assert_eq!(calc.redo_depth(), 2);
        assert_eq!(calc.result(), Decimal::ZERO);
    }

    #[test]
    fn undo_and_redo_on_empty_history_are_noops() {
        let mut calc = Calculator::new();
        assert_eq!(calc.undo(), None);
        assert_eq!(calc.redo(), None);
        assert_eq!(calc.result(), Decimal::ZERO);
    }

    #[test]
    fn apply_dispatches_every_operation() {
        let mut calc = Calculator::new();
        calc.apply(OperationType::Add, Some(dec!(9))).unwrap();
        calc.apply(OperationType::Subtract, Some(dec!(3))).unwrap();
        calc.apply(OperationType::Multiply, Some(dec!(2))).unwrap();
        calc.apply(OperationType::Divide, Some(dec!(4))).unwrap();
        assert_eq!(calc.result(), dec!(3));
    }

    #[test]
    fn overflow_is_rejected_without_state_change() {
        let mut calc = Calculator::new();
        calc.add(Decimal::MAX).unwrap();
        let before = calc.clone();

        assert_eq!(
            calc.add(Decimal::MAX),
            Err(CalcError::Overflow {
                op: OperationType::Add
            })
        );
        assert_eq!(calc, before);
    }

    #[test]
    fn reset_always_succeeds() {
        let mut calc = Calculator::new();
        calc.add(dec!(3)).unwrap();
        calc.add(dec!(4)).unwrap();
        calc.undo();

        assert_eq!(calc.reset(), Decimal::ZERO);
        assert_eq!(calc.undo_depth(), 0);
        assert_eq!(calc.redo_depth(), 0);

        // reset of a fresh session is fine too
        let mut fresh = Calculator::new();
        assert_eq!(fresh.reset(), Decimal::ZERO);
    }

    #[test]
    fn calculator_serializes_correctly() {
        let mut calc = Calculator::new();
        calc.add(dec!(2.50)).unwrap();
        calc.multiply(dec!(4)).unwrap();
        calc.undo();

        let json = serde_json::to_string(&calc).unwrap();
        let deserialized: Calculator = serde_json::from_str(&json).unwrap();
        assert_eq!(calc, deserialized);
    }
}
