//! Reformats `name:value` tagged lines into a header row plus space separated value rows.
//!
//! Every line must carry the same field names, in the same order, as the first one.

pub mod cli;
pub mod columnize;
pub mod error;

pub use columnize::{Columnizer, RunSummary, DEFAULT_DELIMITER};
pub use error::ColumnizeError;
