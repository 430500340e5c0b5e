//! Birth/survival rules for outer-totalistic automata on the Moore
//! neighborhood.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Field, Result, RuleWarning};

/// Largest neighbor count a Moore neighborhood can produce.
pub const MAX_NEIGHBORS: u8 = 8;

/// Largest value a single rule digit can spell.
const MAX_DIGIT: u8 = 9;

/// Set of neighbor counts, one bit per decimal digit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CountSet(u16);

impl CountSet {
    pub const EMPTY: CountSet = CountSet(0);

    /// Parses a string of decimal digits. Duplicates are allowed and the
    /// empty string is the empty set.
    pub fn parse(field: Field, digits: &str) -> Result<Self> {
        let mut set = CountSet::EMPTY;
        for (position, digit) in digits.chars().enumerate() {
            match digit.to_digit(10) {
                Some(d) => set.insert(d as u8),
                None => {
                    return Err(Error::InvalidRuleDigit {
                        field,
                        digit,
                        position,
                    })
                }
            }
        }
        Ok(set)
    }

    #[inline]
    pub fn contains(&self, n: u8) -> bool {
        n <= MAX_DIGIT && self.0 & (1 << n) != 0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..=MAX_DIGIT).filter(move |&n| self.contains(n))
    }

    fn insert(&mut self, n: u8) {
        debug_assert!(n <= MAX_DIGIT);
        self.0 |= 1 << n;
    }
}

impl FromIterator<u8> for CountSet {
    /// Values above 9 cannot be spelled as a digit and are dropped.
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = CountSet::EMPTY;
        for n in iter.into_iter().filter(|&n| n <= MAX_DIGIT) {
            set.insert(n);
        }
        set
    }
}

impl fmt::Display for CountSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for n in self.iter() {
            write!(f, "{n}")?;
        }
        Ok(())
    }
}

/// Immutable B/S rule, e.g. B3/S23 for Conway's Life.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RuleSet {
    birth: CountSet,
    survival: CountSet,
}

impl RuleSet {
    pub fn new(birth: &[u8], survival: &[u8]) -> Self {
        RuleSet {
            birth: birth.iter().copied().collect(),
            survival: survival.iter().copied().collect(),
        }
    }

    /// B3/S23.
    pub fn conway() -> Self {
        Self::new(&[3], &[2, 3])
    }

    /// Builds a rule from the two raw digit strings a user typed in.
    pub fn parse(birth: &str, survival: &str) -> Result<Self> {
        Ok(RuleSet {
            birth: CountSet::parse(Field::Birth, birth)?,
            survival: CountSet::parse(Field::Survival, survival)?,
        })
    }

    #[inline]
    pub fn birth(&self) -> CountSet {
        self.birth
    }

    #[inline]
    pub fn survival(&self) -> CountSet {
        self.survival
    }

    /// Whether a dead cell with `n` live neighbors comes alive.
    #[inline]
    pub fn born(&self, n: u8) -> bool {
        self.birth.contains(n)
    }

    /// Whether a live cell with `n` live neighbors stays alive.
    #[inline]
    pub fn survives(&self, n: u8) -> bool {
        self.survival.contains(n)
    }

    /// Digits that parse but can never match a neighbor count.
    pub fn warnings(&self) -> Vec<RuleWarning> {
        [(Field::Birth, self.birth), (Field::Survival, self.survival)]
            .into_iter()
            .flat_map(|(field, set)| {
                set.iter()
                    .filter(|&digit| digit > MAX_NEIGHBORS)
                    .map(move |digit| RuleWarning::DigitOutOfRange { field, digit })
            })
            .collect()
    }
}

impl FromStr for RuleSet {
    type Err = Error;

    /// Parses `B<digits>/S<digits>`, letters in either case.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidRuleNotation {
            notation: s.to_owned(),
        };

        let (b, s_part) = s.trim().split_once('/').ok_or_else(invalid)?;
        let birth = b
            .strip_prefix(['B', 'b'])
            .ok_or_else(invalid)?;
        let survival = s_part
            .strip_prefix(['S', 's'])
            .ok_or_else(invalid)?;

        Self::parse(birth, survival).map_err(|_| invalid())
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B{}/S{}", self.birth, self.survival)
    }
}
