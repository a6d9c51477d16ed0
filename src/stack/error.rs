
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum StackError {
  #[error("The stack is empty.")]
  EmptyStack,
}
