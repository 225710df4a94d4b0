//! Unary math functions over display values.

use super::Element;

/// A unary function applied element-wise to display values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MathFn {
    Abs,
    Acos,
    Asin,
    Atan,
    Cbrt,
    Ceil,
    Cos,
    Cosh,
    Exp,
    Expm1,
    Floor,
    /// Natural logarithm.
    Log,
    Log10,
    Log1p,
    Neg,
    /// Round half to even.
    Rint,
    /// Round half up (`floor(x + 0.5)`).
    Round,
    /// `-1`, `0` or `1`; zero and NaN pass through.
    Signum,
    Sin,
    Sinh,
    Sqrt,
    Tan,
    Tanh,
    /// `1 / x`
    Inv,
    Pow(f64),
}

impl MathFn {
    pub fn apply<T: Element>(self, x: T) -> T {
        match self {
            MathFn::Abs => x.abs(),
            MathFn::Acos => x.acos(),
            MathFn::Asin => x.asin(),
            MathFn::Atan => x.atan(),
            MathFn::Cbrt => x.cbrt(),
            MathFn::Ceil => x.ceil(),
            MathFn::Cos => x.cos(),
            MathFn::Cosh => x.cosh(),
            MathFn::Exp => x.exp(),
            MathFn::Expm1 => x.exp_m1(),
            MathFn::Floor => x.floor(),
            MathFn::Log => x.ln(),
            MathFn::Log10 => x.log10(),
            MathFn::Log1p => x.ln_1p(),
            MathFn::Neg => -x,
            MathFn::Rint => T::from_double(x.to_double().round_ties_even()),
            MathFn::Round => (x + T::from_double(0.5)).floor(),
            MathFn::Signum => {
                if x.is_zero() || x.is_nan() { x } else { x.signum() }
            }
            MathFn::Sin => x.sin(),
            MathFn::Sinh => x.sinh(),
            MathFn::Sqrt => x.sqrt(),
            MathFn::Tan => x.tan(),
            MathFn::Tanh => x.tanh(),
            MathFn::Inv => x.recip(),
            MathFn::Pow(p) => x.powf(T::from_double(p)),
        }
    }
}
