
use super::error::EvalError;
use super::operator::BinaryOperator;
use crate::util::regexes::WHITESPACE_RE;

use std::str::FromStr;

/// A single whitespace-delimited word of a postfix expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
  Number(i64),
  Operator(BinaryOperator),
}

impl FromStr for Token {
  type Err = EvalError;

  /// Anything that reads as a signed integer is a number. Everything
  /// else must be an operator symbol.
  fn from_str(s: &str) -> Result<Self, EvalError> {
    match i64::from_str(s) {
      Ok(n) => Ok(Token::Number(n)),
      Err(_) => s.parse().map(Token::Operator),
    }
  }
}

/// Splits `expression` on whitespace and parses each word. Tokens
/// are produced lazily, so an invalid word only fails once it is
/// reached.
pub fn tokenize(expression: &str) -> impl Iterator<Item = Result<Token, EvalError>> + '_ {
  WHITESPACE_RE.split(expression.trim())
    .filter(|word| !word.is_empty())
    .map(Token::from_str)
}
