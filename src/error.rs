//! Error types and the parse-time diagnostics channel.

use std::fmt;
use thiserror::Error;

/// Result type alias for codec operations
pub type Result<T> = std::result::Result<T, NachaError>;

/// Fatal errors.
///
/// Parsing never produces these; they come from I/O, the CLI surface,
/// or a generation request that cannot be honored.
#[derive(Error, Debug)]
pub enum NachaError {
    /// Failed to open or read the input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV summary output error
    #[error("CSV output error: {0}")]
    Csv(#[from] csv::Error),

    /// Generation requested with a non-positive blocking factor
    #[error("invalid blocking factor {factor}: must be positive")]
    InvalidBlockingFactor { factor: u32 },

    /// Generation requested with no batches
    #[error("refusing to generate a file with no batches")]
    EmptyFile,

    /// The parsed document carries no file header record
    #[error("not a NACHA file: no file header record found")]
    MissingFileHeader,

    /// Missing input file argument
    #[error("Missing input file argument. Usage: nacha-codec <input.ach> [--normalize]")]
    MissingArgument,
}

/// A tolerated irregularity observed while parsing one line.
///
/// Diagnostics accumulate on the document; parsing itself never aborts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based line number in the input text.
    pub line: usize,

    /// What was wrong with the line.
    pub kind: DiagnosticKind,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.kind)
    }
}

/// The kinds of irregularity the parser tolerates.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Record shorter than 94 characters; decoded as far as it reaches
    #[error("record is {length} characters, expected 94")]
    ShortLine { length: usize },

    /// Record longer than 94 characters; truncated before decoding
    #[error("record is {length} characters, truncated to 94")]
    LongLine { length: usize },

    /// Addenda record with no entry detail to attach to
    #[error("addenda record with no preceding entry detail")]
    OrphanAddenda,

    /// Entry detail record outside any batch
    #[error("entry detail record outside any batch")]
    OrphanEntryDetail,

    /// Batch control record with no open batch
    #[error("batch control record with no open batch")]
    OrphanBatchControl,

    /// Input ended while a batch was still open
    #[error("batch ended without a batch control record")]
    TrailingBatchMissingControl,

    /// All-nines filler line followed by further records
    #[error("block padding record before end of file")]
    PaddingMidStream,

    /// Leading character is not a known record type
    #[error("unrecognized record type '{0}'")]
    UnrecognizedRecordType(char),

    /// Numeric field failed conversion; zero was substituted
    #[error("non-numeric {field} field in {record} record")]
    MalformedField {
        record: &'static str,
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_display_includes_line_number() {
        let diag = Diagnostic {
            line: 7,
            kind: DiagnosticKind::ShortLine { length: 80 },
        };
        assert_eq!(diag.to_string(), "line 7: record is 80 characters, expected 94");
    }

    #[test]
    fn test_malformed_field_names_record_and_field() {
        let diag = Diagnostic {
            line: 3,
            kind: DiagnosticKind::MalformedField {
                record: "entry detail",
                field: "amount",
            },
        };
        assert_eq!(
            diag.to_string(),
            "line 3: non-numeric amount field in entry detail record"
        );
    }
}
