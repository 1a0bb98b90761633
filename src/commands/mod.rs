//! Command implementations

pub mod simple;

pub use simple::{LineAction, apply_line, run_simple};
