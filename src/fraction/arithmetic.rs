/*
    Arithmetic
*/

use super::*;

// In-place operators: the result is computed exactly, reduced,
// and only then stored, so `self` is unchanged on failure.
impl Fraction {
    #[inline]
    fn parts(&self) -> (BigInt, BigInt) {
        (self.numer.into(), self.denom.into())
    }

    /// Adds another `Fraction` to this one:
    /// `a/b + c/d = (a*d + c*b) / (b*d)`.
    pub fn add_in_place(&mut self, other: &Fraction) -> Result<()> {
        let (a, b) = self.parts();
        let (c, d) = other.parts();
        *self = reduce(&a * &d + &c * &b, b * d)?;
        Ok(())
    }

    /// Subtracts another `Fraction` from this one:
    /// `a/b - c/d = (a*d - c*b) / (b*d)`.
    pub fn sub_in_place(&mut self, other: &Fraction) -> Result<()> {
        let (a, b) = self.parts();
        let (c, d) = other.parts();
        *self = reduce(&a * &d - &c * &b, b * d)?;
        Ok(())
    }

    /// Multiplies this `Fraction` by another:
    /// `(a/b) * (c/d) = (a*c) / (b*d)`.
    pub fn mul_in_place(&mut self, other: &Fraction) -> Result<()> {
        let (a, b) = self.parts();
        let (c, d) = other.parts();
        *self = reduce(a * c, b * d)?;
        Ok(())
    }

    /// Divides this `Fraction` by another:
    /// `(a/b) / (c/d) = (a*d) / (b*c)`.
    /// Fails if `other` is zero.
    pub fn div_in_place(&mut self, other: &Fraction) -> Result<()> {
        if other.is_zero() {
            return Err(InvalidArgument::DivisionByZero.into());
        }
        let (a, b) = self.parts();
        let (c, d) = other.parts();
        *self = reduce(a * d, b * c)?;
        Ok(())
    }
}

// Copying operators
impl Fraction {
    /// Returns the sum of this `Fraction` and another.
    pub fn add(&self, other: &Fraction) -> Result<Fraction> {
        let mut r = *self;
        r.add_in_place(other)?;
        Ok(r)
    }

    /// Returns the difference of this `Fraction` and another.
    pub fn sub(&self, other: &Fraction) -> Result<Fraction> {
        let mut r = *self;
        r.sub_in_place(other)?;
        Ok(r)
    }

    /// Returns the product of this `Fraction` and another.
    pub fn mul(&self, other: &Fraction) -> Result<Fraction> {
        let mut r = *self;
        r.mul_in_place(other)?;
        Ok(r)
    }

    /// Returns the quotient of this `Fraction` and another.
    /// Fails if `other` is zero.
    pub fn div(&self, other: &Fraction) -> Result<Fraction> {
        let mut r = *self;
        r.div_in_place(other)?;
        Ok(r)
    }
}
