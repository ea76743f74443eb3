//! Error types for automaton construction and grid access.
//!
//! Two families: [`ConfigError`] covers everything detected once at
//! construction time (bad dimensions, bad rule parameters, bad
//! layouts), [`GridError`] covers out-of-bounds access through the
//! checked grid accessors. There are no runtime retry semantics — a
//! construction either succeeds fully or nothing is built.

use crate::coord::Coord;
use std::error::Error;
use std::fmt;

/// Errors detected while constructing an automaton or building a rule.
///
/// Construction aborts on the first error; no partially-initialized
/// grid results.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Attempted to construct a grid with zero rows or zero columns.
    EmptyGrid,
    /// A grid dimension exceeds the supported maximum.
    DimensionTooLarge {
        /// Which dimension ("rows" or "cols").
        name: &'static str,
        /// The offending value.
        value: u32,
        /// The maximum supported value.
        max: u32,
    },
    /// A required rule parameter was not supplied.
    MissingParameter {
        /// Name of the missing parameter.
        name: &'static str,
    },
    /// A rule parameter is outside its valid range.
    ParameterOutOfRange {
        /// Name of the offending parameter.
        name: &'static str,
        /// The supplied value.
        value: f64,
    },
    /// Two mutually exclusive parameters were both supplied.
    ConflictingParameters {
        /// First of the conflicting pair.
        first: &'static str,
        /// Second of the conflicting pair.
        second: &'static str,
    },
    /// An explicit layout names a coordinate outside the grid.
    LayoutOutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Grid row count.
        rows: u32,
        /// Grid column count.
        cols: u32,
    },
    /// A state label is not part of the rule's alphabet.
    UnknownState {
        /// The unrecognised label.
        label: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one row and one column"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds the maximum of {max}")
            }
            Self::MissingParameter { name } => write!(f, "required parameter '{name}' not set"),
            Self::ParameterOutOfRange { name, value } => {
                write!(f, "parameter '{name}' = {value} is outside [0, 1]")
            }
            Self::ConflictingParameters { first, second } => {
                write!(f, "parameters '{first}' and '{second}' are mutually exclusive")
            }
            Self::LayoutOutOfBounds { coord, rows, cols } => {
                write!(f, "layout coordinate {coord} out of bounds: [0, {rows}) x [0, {cols})")
            }
            Self::UnknownState { label } => {
                write!(f, "state label '{label}' is not in the rule's alphabet")
            }
        }
    }
}

impl Error for ConfigError {}

/// Errors from checked grid access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A coordinate is outside the bounds of the grid.
    CoordOutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Grid row count.
        rows: u32,
        /// Grid column count.
        cols: u32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoordOutOfBounds { coord, rows, cols } => {
                write!(f, "coordinate {coord} out of bounds: [0, {rows}) x [0, {cols})")
            }
        }
    }
}

impl Error for GridError {}
