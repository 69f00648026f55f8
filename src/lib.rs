/*
    Top-level
*/

mod error;
mod value;

pub mod fraction;
pub mod text;
pub mod vector;

pub use error::*;
pub use fraction::Fraction;
pub use value::*;
pub use vector::RealVector;
