mod columnizer;
mod record;
mod schema;

pub use columnizer::{Columnizer, RunSummary, DEFAULT_DELIMITER};
pub use record::{parse_line, parse_token, Field, Record};
pub use schema::{Outcome, Schema, SchemaState};
