/*
    Arithmetic
*/

use super::*;
use crate::InvalidArgument;

impl RealVector {
    // Fails unless `other` has the same length as this vector.
    fn check_size(&self, other: &RealVector) -> Result<()> {
        if self.len() == other.len() {
            Ok(())
        } else {
            Err(InvalidArgument::SizeMismatch {
                left: self.len(),
                right: other.len(),
            }
            .into())
        }
    }

    fn zip_with(&self, other: &RealVector, f: impl Fn(f64, f64) -> f64) -> Result<RealVector> {
        self.check_size(other)?;
        Ok(self
            .components
            .iter()
            .zip(&other.components)
            .map(|(&x, &y)| f(x, y))
            .collect())
    }

    /// Adds this `RealVector` and another elementwise.
    pub fn add(&self, other: &RealVector) -> Result<RealVector> {
        self.zip_with(other, |x, y| x + y)
    }

    /// Subtracts another `RealVector` from this one elementwise.
    pub fn sub(&self, other: &RealVector) -> Result<RealVector> {
        self.zip_with(other, |x, y| x - y)
    }

    /// Adds another `RealVector` to this one in place.
    /// On a size mismatch no component is modified.
    pub fn add_in_place(&mut self, other: &RealVector) -> Result<()> {
        self.check_size(other)?;
        for (x, y) in self.components.iter_mut().zip(&other.components) {
            *x += y;
        }
        Ok(())
    }

    /// Subtracts another `RealVector` from this one in place.
    /// On a size mismatch no component is modified.
    pub fn sub_in_place(&mut self, other: &RealVector) -> Result<()> {
        self.check_size(other)?;
        for (x, y) in self.components.iter_mut().zip(&other.components) {
            *x -= y;
        }
        Ok(())
    }

    /// Multiplies every component by `scalar`.
    ///
    /// Both `v * s` and `s * v` forward here.
    pub fn scale(&self, scalar: f64) -> RealVector {
        self.components.iter().map(|x| x * scalar).collect()
    }

    /// Returns the dot product of this `RealVector` and another.
    /// The dot product of two empty vectors is `0.0`.
    pub fn dot(&self, other: &RealVector) -> Result<f64> {
        self.check_size(other)?;
        Ok(self
            .components
            .iter()
            .zip(&other.components)
            .fold(0.0, |acc, (x, y)| acc + x * y))
    }
}
