
//! Last-in, first-out stack built on an indexed collection.

mod error;
mod structure;

pub use error::StackError;
pub use structure::Stack;
