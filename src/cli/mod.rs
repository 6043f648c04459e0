//! Command-line argument parsing and precedence resolution.

pub mod args;

pub use args::{DEFAULT_MODEL, InvocationConfig, parse_invocation};
