
use super::error::EvalError;

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// The binary arithmetic operations understood by the postfix
/// evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
  Add,
  Subtract,
  Multiply,
  /// Integer division, truncating toward zero.
  Divide,
  /// Remainder of truncating division. The result has the sign of
  /// the left operand.
  Remainder,
}

impl BinaryOperator {
  pub const ALL: [BinaryOperator; 5] = [
    BinaryOperator::Add,
    BinaryOperator::Subtract,
    BinaryOperator::Multiply,
    BinaryOperator::Divide,
    BinaryOperator::Remainder,
  ];

  pub fn symbol(self) -> &'static str {
    match self {
      BinaryOperator::Add => "+",
      BinaryOperator::Subtract => "-",
      BinaryOperator::Multiply => "*",
      BinaryOperator::Divide => "/",
      BinaryOperator::Remainder => "%",
    }
  }

  /// Applies the operator. Division and remainder by zero are
  /// errors, as is any result which overflows an `i64`.
  pub fn apply(self, left: i64, right: i64) -> Result<i64, EvalError> {
    let result = match self {
      BinaryOperator::Add => left.checked_add(right),
      BinaryOperator::Subtract => left.checked_sub(right),
      BinaryOperator::Multiply => left.checked_mul(right),
      BinaryOperator::Divide | BinaryOperator::Remainder if right == 0 => {
        return Err(EvalError::DivisionByZero);
      }
      BinaryOperator::Divide => left.checked_div(right),
      BinaryOperator::Remainder => left.checked_rem(right),
    };
    result.ok_or(EvalError::Overflow { left, operator: self, right })
  }
}

impl FromStr for BinaryOperator {
  type Err = EvalError;

  fn from_str(s: &str) -> Result<Self, EvalError> {
    BinaryOperator::ALL.into_iter()
      .find(|op| op.symbol() == s)
      .ok_or_else(|| EvalError::UnknownOperator(s.to_owned()))
  }
}

impl Display for BinaryOperator {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.symbol())
  }
}
