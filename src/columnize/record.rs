use crate::error::ColumnizeError;

/// A single `name<delim>value` pair taken from one token of an input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub value: String,
}

/// The ordered fields of one input line, in token order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<Field>,
}

impl Record {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.value.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field values joined by single spaces, ready to be written as a row.
    pub fn value_row(&self) -> String {
        self.values().collect::<Vec<_>>().join(" ")
    }
}

/// Splits a token into its field name and value.
///
/// The name is everything before the first `delimiter`. The value is the
/// text after it up to the first comma; anything past that comma is dropped,
/// so `a:1,extra` yields `("a", "1")`.
///
/// # Errors
///
/// Returns `ColumnizeError::MalformedToken` when `token` does not contain
/// `delimiter`. The `line` number is only carried into the error.
pub fn parse_token(token: &str, delimiter: &str, line: usize) -> Result<Field, ColumnizeError> {
    let (name, tail) = token
        .split_once(delimiter)
        .ok_or_else(|| ColumnizeError::MalformedToken {
            line,
            token: token.to_string(),
            delimiter: delimiter.to_string(),
        })?;

    // Only the first comma-separated segment is kept
    let value = tail.split(',').next().unwrap_or_default();

    Ok(Field {
        name: name.to_string(),
        value: value.to_string(),
    })
}

/// Parses one input line into a `Record`.
///
/// Surrounding whitespace is ignored and tokens are separated by runs of
/// whitespace. A blank line gives an empty record.
pub fn parse_line(
    line: &str,
    delimiter: &str,
    line_number: usize,
) -> Result<Record, ColumnizeError> {
    line.split_whitespace()
        .map(|token| parse_token(token, delimiter, line_number))
        .collect::<Result<Vec<_>, _>>()
        .map(Record::new)
}
