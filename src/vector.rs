/*
    Real-valued vectors
*/

mod arithmetic;
mod convert;
mod ops;

use crate::{Error, Result, Value};

/// A vector of `f64` components.
///
/// The length is the dimension of the vector. Any operation combining
/// two vectors requires them to have the same length and fails with
/// `InvalidArgument::SizeMismatch` otherwise.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RealVector {
    components: Vec<f64>,
}

// Constructors and getters
impl RealVector {
    /// Creates an empty `RealVector`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the component at `index`.
    pub fn at(&self, index: usize) -> Result<f64> {
        self.components
            .get(index)
            .copied()
            .ok_or(Error::OutOfRange {
                index,
                len: self.len(),
            })
    }

    /// Replaces the component at `index`.
    pub fn set(&mut self, index: usize, value: f64) -> Result<()> {
        let len = self.len();
        match self.components.get_mut(index) {
            Some(c) => {
                *c = value;
                Ok(())
            }
            None => Err(Error::OutOfRange { index, len }),
        }
    }

    /// Returns the number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns true if this `RealVector` has no components.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.components
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.components.iter()
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.components
    }
}

// Implementing `Value`
impl Value for RealVector {
    fn is_zero(&self) -> bool {
        self.components.iter().all(|c| *c == 0.0)
    }

    fn add(&self, other: &Self) -> Result<Self> {
        RealVector::add(self, other)
    }

    fn sub(&self, other: &Self) -> Result<Self> {
        RealVector::sub(self, other)
    }

    fn add_in_place(&mut self, other: &Self) -> Result<()> {
        RealVector::add_in_place(self, other)
    }

    fn sub_in_place(&mut self, other: &Self) -> Result<()> {
        RealVector::sub_in_place(self, other)
    }
}
