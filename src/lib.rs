
pub mod collection;
pub mod error;
pub mod number;
pub mod postfix;
pub mod stack;
pub mod util;
