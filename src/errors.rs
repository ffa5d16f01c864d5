use std::fmt;
use std::fmt::Formatter;
use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

/// The numeric columns of a refueling record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumericField {
    Price,
    Amount,
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            NumericField::Price => write!(f, "price"),
            NumericField::Amount => write!(f, "amount"),
        }
    }
}

/// Describes what was wrong with the input. Record positions are 1-based and
/// count whitespace separated records, not lines.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum Malformation {
    #[error("the input contains no records")]
    Empty,

    #[error("record {record} has {found} fields, expected name|price|amount|date")]
    FieldCount { record: usize, found: usize },

    #[error("record {record} has an empty fuel type")]
    EmptyName { record: usize },

    #[error("record {record} has a non-numeric {field}: {value:?}")]
    InvalidNumber {
        record: usize,
        field: NumericField,
        value: String,
    },

    #[error("record {record} has a negative {field}: {value}")]
    Negative {
        record: usize,
        field: NumericField,
        value: f64,
    },

    #[error("record {record} has a date without a numeric month: {value:?}")]
    InvalidDate { record: usize, value: String },

    #[error("record {record} has a month outside 1..=12: {month}")]
    MonthOutOfRange { record: usize, month: u32 },

    #[error("record {record} could not be read: {message}")]
    Unreadable { record: usize, message: String },
}

/// The only failure the record parser produces. A single bad record rejects
/// the whole input.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ParseError {
    #[error("some input data are in a wrong format: {0}")]
    MalformedInput(#[from] Malformation),
}

impl ParseError {
    pub fn malformation(&self) -> &Malformation {
        match self {
            ParseError::MalformedInput(reason) => reason,
        }
    }
}

/// Raised while resolving and reading the input file, before any parsing.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("an input file path must be specified, but none was provided")]
    EmptyPath,

    #[error("input path {} is not a file", .0.display())]
    NotAFile(PathBuf),

    #[error("failed to read input file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error)]
pub enum StatementError {
    #[error("failed to serialize report row: {0}")]
    Serialize(#[from] csv::Error),

    #[error("failed to encode csv report: {0}")]
    Encoding(#[from] FromUtf8Error),
}
