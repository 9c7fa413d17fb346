//! Library components of the `rowcheck` command.

pub mod logging;
pub mod pipeline;
pub mod types;
