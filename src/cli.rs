use crate::columnize::{Columnizer, DEFAULT_DELIMITER};
use crate::error::ColumnizeError;
use clap::builder::NonEmptyStringValueParser;
use clap::Parser;
use eyre::{Report, Result};
use log::info;
use std::io::{self, Write};

/// Read `name<delim>value` records from stdin and print them as columns.
///
/// The first line defines the field names and is printed as a header followed
/// by its values. Every later line must have the same field names in the same
/// order; a value is cut at its first comma.
#[derive(Debug, Parser)]
#[command(name = "columnize", version, long_about = None)]
pub struct Cli {
	/// Separator between a field name and its value
	#[arg(default_value = DEFAULT_DELIMITER, value_parser = NonEmptyStringValueParser::new())]
	pub delimiter: String,
}

impl Cli {
	/// Runs the columnizer over the standard streams.
	pub fn run(&self) -> Result<()> {
		let columnizer = Columnizer::new(&self.delimiter)?;
		info!("Columnizing stdin with delimiter {:?}", columnizer.delimiter());

		let summary = columnizer.run(io::stdin().lock(), io::stdout().lock(), io::stderr().lock())?;
		info!("Wrote {} lines ({} rows)", summary.lines(), summary.rows);

		Ok(())
	}
}

/// Picks the exit status for a failed `Cli::run`, reporting to `errors` what
/// the columnizer has not already written there.
pub fn failure_status<E: Write>(report: &Report, mut errors: E) -> i32 {
	match report.downcast_ref::<ColumnizeError>() {
		// Raised before any stream is touched
		Some(err) if matches!(err, ColumnizeError::EmptyDelimiter) => {
			let _ = writeln!(errors, "Error: {}", err);
			err.exit_code()
		}
		// Everything else comes out of `Columnizer::run`, which wrote its own diagnostic
		Some(err) => err.exit_code(),
		None => {
			let _ = writeln!(errors, "Error: {:?}", report);
			1
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn delimiter_defaults_to_colon() {
		let cli = Cli::try_parse_from(["columnize"]).unwrap();
		assert_eq!(cli.delimiter, ":");
	}

	#[test]
	fn delimiter_is_positional() {
		let cli = Cli::try_parse_from(["columnize", "="]).unwrap();
		assert_eq!(cli.delimiter, "=");

		let cli = Cli::try_parse_from(["columnize", "=>"]).unwrap();
		assert_eq!(cli.delimiter, "=>");

		// A leading dash needs the `--` separator
		let cli = Cli::try_parse_from(["columnize", "--", "->"]).unwrap();
		assert_eq!(cli.delimiter, "->");
	}

	#[test]
	fn empty_delimiter_is_a_usage_error() {
		assert!(Cli::try_parse_from(["columnize", ""]).is_err());
	}

	#[test]
	fn extra_arguments_are_rejected() {
		assert!(Cli::try_parse_from(["columnize", ":", "="]).is_err());
	}

	#[test]
	fn empty_delimiter_is_reported_by_failure_status() {
		let cli = Cli { delimiter: String::new() };
		let report = cli.run().unwrap_err();

		let mut errors = Vec::new();
		assert_eq!(failure_status(&report, &mut errors), crate::error::EXIT_USAGE);
		assert_eq!(String::from_utf8(errors).unwrap(), "Error: delimiter must not be empty\n");
	}

	#[test]
	fn run_errors_are_not_reported_twice() {
		let report = Report::new(ColumnizeError::SchemaMismatch {
			line: 2,
			expected: vec!["a".into()],
			found: vec!["b".into()],
		});

		let mut errors = Vec::new();
		assert_eq!(failure_status(&report, &mut errors), crate::error::EXIT_SCHEMA_MISMATCH);
		assert!(errors.is_empty());
	}

	#[test]
	fn unexpected_errors_exit_with_one() {
		let report = eyre::eyre!("something else");

		let mut errors = Vec::new();
		assert_eq!(failure_status(&report, &mut errors), 1);
		assert!(String::from_utf8(errors).unwrap().contains("something else"));
	}

	#[test]
	fn command_is_well_formed() {
		use clap::CommandFactory;
		Cli::command().debug_assert();
	}
}
