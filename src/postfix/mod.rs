
//! Evaluation of integer arithmetic written in postfix (reverse
//! Polish) notation, such as `3 4 + 2 *`.
//!
//! Numbers are pushed onto a [`Stack`]. Each operator pops its right
//! operand, then its left operand, and pushes the result. A
//! well-formed expression leaves exactly one value behind.

mod error;
mod operator;
mod token;

pub use error::EvalError;
pub use operator::BinaryOperator;
pub use token::{Token, tokenize};

use crate::stack::Stack;

/// Evaluates a whitespace-separated postfix expression.
pub fn evaluate(expression: &str) -> Result<i64, EvalError> {
  let mut stack = Stack::new();
  for token in tokenize(expression) {
    apply_token(&mut stack, token?)?;
  }
  finish(stack)
}

/// Performs the effect of a single token on the evaluation stack.
pub fn apply_token(stack: &mut Stack<i64>, token: Token) -> Result<(), EvalError> {
  match token {
    Token::Number(n) => {
      stack.push(n);
    }
    Token::Operator(op) => {
      let right = stack.pop()?;
      let left = stack.pop()?;
      stack.push(op.apply(left, right)?);
    }
  }
  Ok(())
}

/// Extracts the final result, which must be the only value left on
/// the stack.
fn finish(mut stack: Stack<i64>) -> Result<i64, EvalError> {
  match stack.len() {
    0 => Err(EvalError::EmptyExpression),
    1 => Ok(stack.pop()?),
    remaining => Err(EvalError::TooManyOperands { remaining }),
  }
}
