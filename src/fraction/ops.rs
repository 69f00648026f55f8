/*
    Operator syntax and `num-traits` for `Fraction`
*/

use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, One};

use super::*;

// Operators forward to the named methods and panic where those
// would return an error, like integer division by zero.
macro_rules! forward_binop {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $method:ident, $in_place:ident) => {
        impl $Op for Fraction {
            type Output = Fraction;

            fn $op(self, rhs: Fraction) -> Fraction {
                Fraction::$method(&self, &rhs).unwrap_or_else(|e| panic!("{}", e))
            }
        }

        impl $OpAssign for Fraction {
            fn $op_assign(&mut self, rhs: Fraction) {
                self.$in_place(&rhs).unwrap_or_else(|e| panic!("{}", e))
            }
        }
    };
}

forward_binop!(Add, add, AddAssign, add_assign, add, add_in_place);
forward_binop!(Sub, sub, SubAssign, sub_assign, sub, sub_in_place);
forward_binop!(Mul, mul, MulAssign, mul_assign, mul, mul_in_place);
forward_binop!(Div, div, DivAssign, div_assign, div, div_in_place);

macro_rules! forward_checked {
    ($Checked:ident, $checked:ident, $method:ident) => {
        impl $Checked for Fraction {
            fn $checked(&self, rhs: &Fraction) -> Option<Fraction> {
                Fraction::$method(self, rhs).ok()
            }
        }
    };
}

forward_checked!(CheckedAdd, checked_add, add);
forward_checked!(CheckedSub, checked_sub, sub);
forward_checked!(CheckedMul, checked_mul, mul);
forward_checked!(CheckedDiv, checked_div, div);

impl Zero for Fraction {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        Fraction::is_zero(self)
    }
}

impl One for Fraction {
    fn one() -> Self {
        Self::from(1)
    }
}

// Ordered by value; denominators are positive so
// cross-multiplying preserves the direction
impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.numer as i128 * other.denom as i128;
        let rhs = other.numer as i128 * self.denom as i128;
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
