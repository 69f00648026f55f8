/*
    Defines a value type
*/

use std::fmt::Display;
use std::str::FromStr;

use crate::Error;

/// The value type.
///
/// Both `RealVector` and `Fraction` are plain values with validated
/// additive arithmetic: every operation either preserves the type's
/// invariant or fails with an `Error`, leaving its operands untouched.
pub trait Value: Clone + Default + Display + FromStr<Err = Error> {
    /// Returns true if this `Value` encodes a zero.
    /// For a vector, every component must be zero.
    fn is_zero(&self) -> bool;

    /// Adds this `Value` and another, returning a new one.
    fn add(&self, other: &Self) -> Result<Self, Error>;

    /// Subtracts another `Value` from this one, returning a new one.
    fn sub(&self, other: &Self) -> Result<Self, Error>;

    /// Adds another `Value` to this one in place.
    fn add_in_place(&mut self, other: &Self) -> Result<(), Error>;

    /// Subtracts another `Value` from this one in place.
    fn sub_in_place(&mut self, other: &Self) -> Result<(), Error>;
}
