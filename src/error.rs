use std::fmt;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Configuration entry a problem was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Width,
    Height,
    CellCount,
    Birth,
    Survival,
    Interval,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Width => "width",
            Field::Height => "height",
            Field::CellCount => "cell count",
            Field::Birth => "birth rule",
            Field::Survival => "survival rule",
            Field::Interval => "interval",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("{field} must be an integer, got {value:?}")]
    NonIntegerInput { field: Field, value: String },

    #[error("{field} {value} is not a usable grid dimension")]
    InvalidDimension { field: Field, value: i64 },

    #[error("cannot place {count} cells on a grid of {capacity} cells")]
    InvalidCellCount { count: i64, capacity: u64 },

    #[error("{field} may only contain decimal digits, found {digit:?} at position {position}")]
    InvalidRuleDigit {
        field: Field,
        digit: char,
        position: usize,
    },

    #[error("interval must be a positive number of milliseconds, got {value}")]
    InvalidInterval { value: i64 },

    #[error("pattern row {row} has {len} cells, earlier rows have {expected}")]
    RaggedPattern {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("invalid rule notation {notation:?}, expected something like B3/S23")]
    InvalidRuleNotation { notation: String },
}

/// Non-fatal findings reported by a successful configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleWarning {
    /// A digit no 8-cell neighborhood can ever reach.
    DigitOutOfRange { field: Field, digit: u8 },
}

impl fmt::Display for RuleWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleWarning::DigitOutOfRange { field, digit } => write!(
                f,
                "{field} contains {digit}, which can never match since a cell has only 8 neighbors"
            ),
        }
    }
}
