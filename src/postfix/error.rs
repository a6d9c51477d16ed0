
use super::operator::BinaryOperator;
use crate::stack::StackError;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum EvalError {
  #[error("'{0}' is not a valid operation.")]
  UnknownOperator(String),
  #[error("Cannot divide by zero.")]
  DivisionByZero,
  #[error("The result of {left} {operator} {right} does not fit in a 64-bit integer.")]
  Overflow {
    left: i64,
    operator: BinaryOperator,
    right: i64,
  },
  #[error("Too many operators and too few operands.")]
  NotEnoughOperands(#[from] StackError),
  #[error("Too many operands and too few operators, {remaining} values are left on the stack.")]
  TooManyOperands {
    remaining: usize,
  },
  #[error("The expression is empty.")]
  EmptyExpression,
}

impl EvalError {
  /// True if the error was caused by a bad token or a bad operand,
  /// as opposed to an expression with the wrong shape.
  pub fn is_invalid_argument(&self) -> bool {
    matches!(
      self,
      EvalError::UnknownOperator(_) | EvalError::DivisionByZero | EvalError::Overflow { .. },
    )
  }
}
