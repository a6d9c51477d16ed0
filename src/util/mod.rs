
//! Various utility functions.

pub mod regexes;
