use std::time::Duration;

use crate::error::{Error, Field, Result};
use crate::proc::check_dimensions;
use crate::rule::RuleSet;

/// The configuration entries exactly as a user typed them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawConfig {
    pub width: String,
    pub height: String,
    pub cell_count: String,
    pub birth: String,
    pub survival: String,
    pub interval_ms: String,
}

impl Default for RawConfig {
    fn default() -> Self {
        RawConfig {
            width: "50".into(),
            height: "50".into(),
            cell_count: "1000".into(),
            birth: "3".into(),
            survival: "23".into(),
            interval_ms: "500".into(),
        }
    }
}

impl RawConfig {
    /// Validates every entry, stopping at the first bad one.
    pub fn parse(&self) -> Result<Configuration> {
        let width = positive(Field::Width, &self.width)?;
        let height = positive(Field::Height, &self.height)?;
        let capacity = check_dimensions(width, height)?;

        let cell_count = integer(Field::CellCount, &self.cell_count)?;
        if cell_count < 0 || cell_count as u64 > capacity as u64 {
            return Err(Error::InvalidCellCount {
                count: cell_count,
                capacity: capacity as u64,
            });
        }

        let rules = RuleSet::parse(&self.birth, &self.survival)?;

        let interval = integer(Field::Interval, &self.interval_ms)?;
        if interval <= 0 {
            return Err(Error::InvalidInterval { value: interval });
        }

        Ok(Configuration {
            width,
            height,
            cell_count: cell_count as usize,
            rules,
            interval: Duration::from_millis(interval as u64),
            seed: None,
        })
    }
}

fn integer(field: Field, value: &str) -> Result<i64> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::NonIntegerInput {
            field,
            value: value.to_owned(),
        })
}

fn positive(field: Field, value: &str) -> Result<usize> {
    let n = integer(field, value)?;
    if n <= 0 {
        return Err(Error::InvalidDimension { field, value: n });
    }
    usize::try_from(n).map_err(|_| Error::InvalidDimension { field, value: n })
}

/// Validated simulation parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub width: usize,
    pub height: usize,
    pub cell_count: usize,
    pub rules: RuleSet,
    /// Cadence for whoever drives repeated steps; the core never waits on it.
    pub interval: Duration,
    /// Fixes the initial layout when set.
    pub seed: Option<u64>,
}

impl Configuration {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
