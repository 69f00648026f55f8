/*
    Conversions to and from `RealVector`
*/

use std::fmt;
use std::str::FromStr;

use super::*;
use crate::text::Scanner;

impl RealVector {
    /// Reads a length followed by that many components.
    ///
    /// For example, `3 6.0 9.0 1.0` yields `[6, 9, 1]`.
    pub fn read_from(scanner: &mut Scanner<'_>) -> Result<RealVector> {
        let len: usize = scanner.read_integer("vector length")?;
        // the length is untrusted; let the vector grow as components arrive
        let mut components = Vec::with_capacity(len.min(1024));
        for _ in 0..len {
            components.push(scanner.read_float("vector component")?);
        }
        Ok(Self { components })
    }
}

// Implementing `FromStr` for `RealVector`
impl FromStr for RealVector {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut scanner = Scanner::new(s);
        let v = Self::read_from(&mut scanner)?;
        scanner.finish()?;
        Ok(v)
    }
}

// Renders as `[e0, e1, ..., en-1]`
impl fmt::Display for RealVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, c) in self.components.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, "]")
    }
}

impl From<Vec<f64>> for RealVector {
    fn from(components: Vec<f64>) -> Self {
        Self { components }
    }
}

impl From<&[f64]> for RealVector {
    fn from(components: &[f64]) -> Self {
        Self::from(components.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for RealVector {
    fn from(components: [f64; N]) -> Self {
        Self::from(components.to_vec())
    }
}

impl FromIterator<f64> for RealVector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a> IntoIterator for &'a RealVector {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}
