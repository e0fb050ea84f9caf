//! Command implementations for the esmify CLI.
//!
//! - [`convert`] - Rewrite selected files in place
//! - [`check`] - Report files that would change, without writing
//! - [`print`] - Print one converted file to stdout
//!
//! Each command provides an `execute` function that takes the parsed
//! command arguments and returns a Result.

pub mod check;
pub mod convert;
pub mod print;
pub(crate) mod utils;

pub use check::execute as check_execute;
pub use convert::execute as convert_execute;
pub use print::execute as print_execute;
