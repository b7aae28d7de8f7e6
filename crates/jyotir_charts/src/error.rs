//! Chart computation errors.

use std::error::Error;
use std::fmt;

/// Errors produced by chart-level computations.
///
/// Almost everything in this crate is total over its inputs; the one
/// genuine input error is a name with no letters to map. Numeric
/// degeneracy (for example polar latitudes in the ascendant formula) is
/// not reported here and surfaces as non-finite values instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartError {
    /// A name contained no ASCII letters. The payload names the offending
    /// argument ("first" or "second").
    EmptyName(&'static str),
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName(which) => {
                write!(f, "{which} name contains no letters to evaluate")
            }
        }
    }
}

impl Error for ChartError {}
