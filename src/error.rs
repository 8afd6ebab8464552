use std::io;
use thiserror::Error;

/// Exit status for a record whose field names differ from the header.
pub const EXIT_SCHEMA_MISMATCH: i32 = 1;
/// Exit status for bad command-line usage, matching clap's own.
pub const EXIT_USAGE: i32 = 2;
/// Exit status for a token without the delimiter.
pub const EXIT_MALFORMED_TOKEN: i32 = 3;
/// Exit status for read/write failures and non UTF-8 input.
pub const EXIT_IO: i32 = 4;

/// Fatal conditions of a columnize run.
#[derive(Debug, Error)]
pub enum ColumnizeError {
    /// A record after the first does not carry the header's field names.
    #[error("non-standard schema")]
    SchemaMismatch {
        line: usize,
        expected: Vec<String>,
        found: Vec<String>,
    },
    /// A token on `line` has no occurrence of `delimiter`.
    #[error("malformed token {token:?} on line {line}: missing delimiter {delimiter:?}")]
    MalformedToken {
        line: usize,
        token: String,
        delimiter: String,
    },
    #[error("delimiter must not be empty")]
    EmptyDelimiter,
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

impl ColumnizeError {
    pub fn exit_code(&self) -> i32 {
        match self {
            ColumnizeError::SchemaMismatch { .. } => EXIT_SCHEMA_MISMATCH,
            ColumnizeError::MalformedToken { .. } => EXIT_MALFORMED_TOKEN,
            // The CLI rejects it while parsing arguments
            ColumnizeError::EmptyDelimiter => EXIT_USAGE,
            ColumnizeError::Io(_) => EXIT_IO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_mismatch_has_fixed_message() {
        let err = ColumnizeError::SchemaMismatch {
            line: 2,
            expected: vec!["a".into()],
            found: vec!["b".into()],
        };
        assert_eq!(err.to_string(), "non-standard schema");
        assert_eq!(err.exit_code(), EXIT_SCHEMA_MISMATCH);
    }

    #[test]
    fn malformed_token_names_the_token() {
        let err = ColumnizeError::MalformedToken {
            line: 4,
            token: "a=1".into(),
            delimiter: ":".into(),
        };
        let message = err.to_string();
        assert!(message.contains("\"a=1\""));
        assert!(message.contains("line 4"));
        assert_eq!(err.exit_code(), EXIT_MALFORMED_TOKEN);
    }

    #[test]
    fn io_errors_convert_and_keep_their_source() {
        use std::error::Error as _;

        let err = ColumnizeError::from(io::Error::new(io::ErrorKind::InvalidData, "bad bytes"));
        assert_eq!(err.to_string(), "i/o error: bad bytes");
        assert!(err.source().is_some());
        assert_eq!(err.exit_code(), EXIT_IO);
    }

    #[test]
    fn exit_codes_are_distinct_and_non_zero() {
        let codes = [
            EXIT_SCHEMA_MISMATCH,
            EXIT_MALFORMED_TOKEN,
            EXIT_IO,
        ];
        assert!(codes.iter().all(|&c| c != 0));
        assert_ne!(codes[0], codes[1]);
        assert_ne!(codes[1], codes[2]);
        assert_ne!(codes[0], codes[2]);
    }
}
