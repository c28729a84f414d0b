//! Library components for the `valnorm` command-line tool.

pub mod input;
pub mod logging;
