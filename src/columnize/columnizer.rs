use crate::columnize::record::parse_line;
use crate::columnize::schema::{Outcome, SchemaState};
use crate::error::ColumnizeError;
use log::warn;
use std::io::{BufRead, Write};

/// The delimiter used when the caller does not supply one.
pub const DEFAULT_DELIMITER: &str = ":";

/// What a completed run wrote to its output stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub header_emitted: bool,
    pub rows: usize,
}

impl RunSummary {
    /// Total lines written, header included.
    pub fn lines(&self) -> usize {
        self.rows + usize::from(self.header_emitted)
    }
}

/// Turns `name<delim>value` records into a header plus space separated rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Columnizer {
    delimiter: String,
}

impl Default for Columnizer {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }
}

impl Columnizer {
    /// Creates a columnizer splitting tokens on `delimiter`.
    ///
    /// # Errors
    ///
    /// Returns `ColumnizeError::EmptyDelimiter` if `delimiter` is empty.
    pub fn new(delimiter: &str) -> Result<Self, ColumnizeError> {
        if delimiter.is_empty() {
            return Err(ColumnizeError::EmptyDelimiter);
        }
        Ok(Self {
            delimiter: delimiter.to_string(),
        })
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Reads `input` line by line and writes the table to `output`.
    ///
    /// The first line fixes the schema and is written as the header, followed
    /// by its values. Every later line is written as a row of values. Each row
    /// is written before the next line is read.
    ///
    /// On the first fatal condition the diagnostic goes to `errors` and the
    /// error is returned. Nothing more is read, and rows already written stay
    /// in `output`.
    pub fn run<R, W, E>(
        &self,
        input: R,
        mut output: W,
        mut errors: E,
    ) -> Result<RunSummary, ColumnizeError>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        let mut summary = RunSummary::default();
        let result = self.process(input, &mut output, &mut summary);
        let flushed = output.flush();

        match result.and_then(|()| flushed.map_err(ColumnizeError::from)) {
            Ok(()) => Ok(summary),
            Err(err) => {
                if let ColumnizeError::SchemaMismatch { line, expected, found } = &err {
                    warn!("Line {} has fields {:?}, expected {:?}", line, found, expected);
                }
                // The run already failed; a broken error stream changes nothing
                let _ = writeln!(errors, "{}", err);
                let _ = errors.flush();
                Err(err)
            }
        }
    }

    fn process<R, W>(
        &self,
        input: R,
        output: &mut W,
        summary: &mut RunSummary,
    ) -> Result<(), ColumnizeError>
    where
        R: BufRead,
        W: Write,
    {
        let mut state = SchemaState::new();

        for (index, line) in input.lines().enumerate() {
            let line = line?;
            let line_number = index + 1;
            let record = parse_line(&line, &self.delimiter, line_number)?;

            match state.accept(&record, line_number)? {
                Outcome::Header { header, row } => {
                    writeln!(output, "{}", header)?;
                    summary.header_emitted = true;
                    writeln!(output, "{}", row)?;
                    summary.rows += 1;
                }
                Outcome::Row(row) => {
                    writeln!(output, "{}", row)?;
                    summary.rows += 1;
                }
            }
        }

        Ok(())
    }
}
