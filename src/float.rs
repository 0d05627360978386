use ndarray::{NdFloat, ScalarOperand};
use num_traits::{FromPrimitive, NumCast, ToPrimitive};
use std::fmt;
use std::iter::Sum;

/// Floating point numbers
///
/// This trait bound multiplexes to the most common assumption of floating point number and
/// implement them for 32bit and 64bit floating points. Records, targets and every fitted
/// statistic share the same type.
pub trait Float:
    NdFloat
    + FromPrimitive
    + ToPrimitive
    + Default
    + Sum
    + ScalarOperand
    + fmt::Display
    + fmt::Debug
    + approx::AbsDiffEq<Epsilon = Self>
    + Send
    + Sync
{
    fn cast<T: NumCast>(x: T) -> Self {
        NumCast::from(x).unwrap()
    }

    // statrs only evaluates distributions in double precision
    fn to_f64_lossy(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }

    fn from_f64_lossy(x: f64) -> Self {
        Self::from_f64(x).unwrap_or_else(Self::nan)
    }
}

impl Float for f32 {}
impl Float for f64 {}
