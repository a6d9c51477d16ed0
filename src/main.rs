
//! Evaluates an integer postfix expression given as the single
//! command-line argument, e.g. `postfix "8 -2 / -1 *"`.

use indexed_collections::error::Error;
use indexed_collections::postfix;

use anyhow::Context;

use std::env;

#[derive(Debug, thiserror::Error)]
#[error("Expected exactly one argument, but got {actual}. Please pass the whole expression in quotes.")]
struct UsageError {
  actual: usize,
}

fn run(args: &[String]) -> Result<i64, Error> {
  let [expression] = args else {
    return Err(Error::custom_error(UsageError { actual: args.len() }));
  };
  Ok(postfix::evaluate(expression)?)
}

fn main() -> anyhow::Result<()> {
  let args: Vec<String> = env::args().skip(1).collect();
  let result = run(&args).context("Could not evaluate the expression")?;
  println!("Result of the expression is {result}.");
  Ok(())
}
