//! Row validation against a fixed table of field patterns.
//!
//! The [`PatternTable`] is compiled once at startup and handed by reference to
//! a [`RowValidator`], which decides pass/fail for each [`Record`].
//!
//! ```ignore
//! use rowcheck_validate::{PatternTable, RowValidator};
//!
//! let table = PatternTable::standard()?;
//! let validator = RowValidator::new(&table);
//! let ok = validator.validate(&record)?;
//! ```
//!
//! [`Record`]: rowcheck_model::Record

mod error;
mod patterns;
mod validator;

pub use error::{Result, ValidateError};
pub use patterns::{FieldRule, PatternTable, STANDARD_PATTERNS};
pub use validator::RowValidator;
