//! Command-line interface: argument definitions and command bodies.

mod args;
pub mod build;
pub mod query;

pub use args::{BuildArgs, Cli, Commands, QueryArgs};
