use crate::columnize::record::Record;
use crate::error::ColumnizeError;
use log::debug;

/// Ordered field names taken from the first record of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    names: Vec<String>,
}

impl Schema {
    pub fn from_record(record: &Record) -> Self {
        Self {
            names: record.names().map(str::to_string).collect(),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// True when `record` has exactly these names in exactly this order.
    pub fn matches(&self, record: &Record) -> bool {
        self.names.len() == record.len()
            && self.names.iter().map(String::as_str).eq(record.names())
    }

    /// The header line: field names joined by single spaces.
    pub fn header(&self) -> String {
        self.names.join(" ")
    }
}

/// What to write for a record that was accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// First record of the run: the header line, then the record's own row.
    Header { header: String, row: String },
    /// A record matching the established schema.
    Row(String),
}

/// Two-state machine deciding between header and body.
///
/// Starts in `AwaitingSchema` and moves to `Validating` on the first record.
/// There is no way back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SchemaState {
    #[default]
    AwaitingSchema,
    Validating(Schema),
}

impl SchemaState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schema(&self) -> Option<&Schema> {
        match self {
            SchemaState::AwaitingSchema => None,
            SchemaState::Validating(schema) => Some(schema),
        }
    }

    /// Feeds one record through the state machine.
    ///
    /// # Errors
    ///
    /// Returns `ColumnizeError::SchemaMismatch` when a record after the first
    /// does not carry the established field names. The state is unchanged.
    pub fn accept(&mut self, record: &Record, line: usize) -> Result<Outcome, ColumnizeError> {
        match self {
            SchemaState::AwaitingSchema => {
                let schema = Schema::from_record(record);
                debug!("Schema established from line {}: {:?}", line, schema.names());
                let header = schema.header();
                *self = SchemaState::Validating(schema);
                Ok(Outcome::Header {
                    header,
                    row: record.value_row(),
                })
            }
            SchemaState::Validating(schema) if schema.matches(record) => {
                Ok(Outcome::Row(record.value_row()))
            }
            SchemaState::Validating(schema) => Err(ColumnizeError::SchemaMismatch {
                line,
                expected: schema.names().to_vec(),
                found: record.names().map(str::to_string).collect(),
            }),
        }
    }
}
