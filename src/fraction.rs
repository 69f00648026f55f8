/*
    Rational numbers
*/

mod arithmetic;
mod convert;
mod ops;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, ToPrimitive, Zero};

use crate::{Error, InvalidArgument, Result, Value};

/// A rational number in lowest terms.
///
/// After every public operation the numerator and denominator share no
/// common factor and the denominator is positive, so any sign lives in
/// the numerator and zero is always `0/1`. Structural equality is
/// therefore value equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Fraction {
    numer: i64,
    denom: i64,
}

// Reduces `numer / denom` to lowest terms with a positive denominator.
// The inputs are arbitrary-precision so that cross products never
// overflow; only the reduced result has to fit in an `i64`.
fn reduce(numer: BigInt, denom: BigInt) -> std::result::Result<Fraction, InvalidArgument> {
    if denom.is_zero() {
        return Err(InvalidArgument::ZeroDenominator);
    }

    // gcd(0, d) = |d|, giving 0/1
    let g = numer.gcd(&denom);
    let (mut n, mut d) = (numer / &g, denom / &g);
    if d.is_negative() {
        n = -n;
        d = -d;
    }

    log::trace!("reduced to {}/{}", n, d);
    match (n.to_i64(), d.to_i64()) {
        (Some(numer), Some(denom)) => Ok(Fraction { numer, denom }),
        _ => Err(InvalidArgument::Overflow),
    }
}

// Constructors and getters
impl Fraction {
    /// Creates a new `Fraction` equal to `numer / denom`,
    /// reduced to lowest terms.
    pub fn new(numer: i64, denom: i64) -> Result<Self> {
        Ok(reduce(numer.into(), denom.into())?)
    }

    /// Returns the numerator of this `Fraction` in lowest terms.
    /// Carries the sign of the value.
    pub fn numerator(&self) -> i64 {
        self.numer
    }

    /// Returns the denominator of this `Fraction` in lowest terms.
    /// Always positive.
    pub fn denominator(&self) -> i64 {
        self.denom
    }

    /// Replaces the numerator and reduces.
    pub fn set_numerator(&mut self, numer: i64) {
        // the denominator is already positive, so this only divides
        let g = numer.unsigned_abs().gcd(&self.denom.unsigned_abs());
        // g divides the positive denominator, so it fits in an `i64`
        let g = g as i64;
        self.numer = numer / g;
        self.denom /= g;
    }

    /// Replaces the denominator and reduces.
    /// Fails if `denom` is zero.
    pub fn set_denominator(&mut self, denom: i64) -> Result<()> {
        *self = reduce(self.numer.into(), denom.into())?;
        Ok(())
    }

    /// Returns true if this `Fraction` is zero.
    pub fn is_zero(&self) -> bool {
        self.numer == 0
    }

    /// Converts this `Fraction` to the nearest `f64`
    /// by floating-point division.
    pub fn to_f64(&self) -> f64 {
        self.numer as f64 / self.denom as f64
    }
}

// Implementing `Default`
impl Default for Fraction {
    fn default() -> Self {
        Self { numer: 0, denom: 1 }
    }
}

// Implementing `From<i64>` for `Fraction`
impl From<i64> for Fraction {
    fn from(numer: i64) -> Self {
        Self { numer, denom: 1 }
    }
}

// Implementing `Value`
impl Value for Fraction {
    fn is_zero(&self) -> bool {
        Fraction::is_zero(self)
    }

    fn add(&self, other: &Self) -> Result<Self> {
        Fraction::add(self, other)
    }

    fn sub(&self, other: &Self) -> Result<Self> {
        Fraction::sub(self, other)
    }

    fn add_in_place(&mut self, other: &Self) -> Result<()> {
        Fraction::add_in_place(self, other)
    }

    fn sub_in_place(&mut self, other: &Self) -> Result<()> {
        Fraction::sub_in_place(self, other)
    }
}
