/*
    Operator syntax for `RealVector`
*/

use std::ops::{Add, AddAssign, Index, Mul, Sub, SubAssign};

use super::*;

// The operators forward to the named methods and panic where
// those would return an error.

impl Add<&RealVector> for &RealVector {
    type Output = RealVector;

    fn add(self, rhs: &RealVector) -> RealVector {
        RealVector::add(self, rhs).unwrap_or_else(|e| panic!("{}", e))
    }
}

impl Sub<&RealVector> for &RealVector {
    type Output = RealVector;

    fn sub(self, rhs: &RealVector) -> RealVector {
        RealVector::sub(self, rhs).unwrap_or_else(|e| panic!("{}", e))
    }
}

impl AddAssign<&RealVector> for RealVector {
    fn add_assign(&mut self, rhs: &RealVector) {
        self.add_in_place(rhs).unwrap_or_else(|e| panic!("{}", e))
    }
}

impl SubAssign<&RealVector> for RealVector {
    fn sub_assign(&mut self, rhs: &RealVector) {
        self.sub_in_place(rhs).unwrap_or_else(|e| panic!("{}", e))
    }
}

impl Mul<f64> for &RealVector {
    type Output = RealVector;

    fn mul(self, rhs: f64) -> RealVector {
        self.scale(rhs)
    }
}

impl Mul<f64> for RealVector {
    type Output = RealVector;

    fn mul(self, rhs: f64) -> RealVector {
        self.scale(rhs)
    }
}

impl Mul<&RealVector> for f64 {
    type Output = RealVector;

    fn mul(self, rhs: &RealVector) -> RealVector {
        rhs.scale(self)
    }
}

impl Mul<RealVector> for f64 {
    type Output = RealVector;

    fn mul(self, rhs: RealVector) -> RealVector {
        rhs.scale(self)
    }
}

impl Index<usize> for RealVector {
    type Output = f64;

    /// # Panics
    /// Panics if `index` is out of range.
    fn index(&self, index: usize) -> &f64 {
        &self.components[index]
    }
}
