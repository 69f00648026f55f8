/*
    Conversions to and from `Fraction`
*/

use std::fmt;
use std::str::FromStr;

use super::*;
use crate::text::Scanner;

impl Fraction {
    /// Reads a fraction written as `a/b`.
    ///
    /// The separator is any single non-whitespace character, so `3x4`
    /// reads as `3/4`; a separator other than `/` is only logged.
    /// Fails if the denominator is zero.
    pub fn read_from(scanner: &mut Scanner<'_>) -> Result<Fraction> {
        let numer: i64 = scanner.read_integer("numerator")?;
        let sep = scanner.read_char("fraction separator")?;
        if sep != '/' {
            log::warn!("accepting {:?} as a fraction separator", sep);
        }
        let denom: i64 = scanner.read_integer("denominator")?;
        Fraction::new(numer, denom)
    }
}

// Implementing `FromStr` for `Fraction`
impl FromStr for Fraction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut scanner = Scanner::new(s);
        let f = Self::read_from(&mut scanner)?;
        scanner.finish()?;
        Ok(f)
    }
}

// Renders as `numer/denom`
impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numer, self.denom)
    }
}

// Integer conversions truncate toward zero
impl ToPrimitive for Fraction {
    fn to_i64(&self) -> Option<i64> {
        Some(self.numer / self.denom)
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_i64().and_then(|i| i.to_u64())
    }

    fn to_f64(&self) -> Option<f64> {
        Some(Fraction::to_f64(self))
    }
}
