//! Constructors for calculation trees.
//!
//! Operands are anything convertible into an [`Expr`]: bare `f32`/`f64`
//! values become constants and variables become variable leaves.

use crate::expression::{BinaryOp, Expr, Function};
use crate::FloatExt;

/// Sum of `operands`, folding left.
///
/// A negated operand turns its step into a subtraction, so `add([a, -b])`
/// builds `a - b`. An empty sum is `0`.
pub fn add<Real: FloatExt>(operands: impl IntoIterator<Item = Expr<Real>>) -> Expr<Real> {
    fold(operands, Real::zero(), |acc, operand| match operand {
        Expr::Neg(inner) => Expr::binary(BinaryOp::Sub, acc, *inner),
        other => Expr::binary(BinaryOp::Add, acc, other),
    })
}

/// Difference of the first operand and each following one, folding left.
///
/// Subtracting a negated operand becomes an addition. An empty difference is
/// `0`.
pub fn sub<Real: FloatExt>(operands: impl IntoIterator<Item = Expr<Real>>) -> Expr<Real> {
    fold(operands, Real::zero(), |acc, operand| match operand {
        Expr::Neg(inner) => Expr::binary(BinaryOp::Add, acc, *inner),
        other => Expr::binary(BinaryOp::Sub, acc, other),
    })
}

/// Product of `operands`, folding left.
///
/// Sums and differences are parenthesized. A reciprocal operand turns its step
/// into a (flat) division. An empty product is `1`.
pub fn mul<Real: FloatExt>(operands: impl IntoIterator<Item = Expr<Real>>) -> Expr<Real> {
    fold(operands, Real::one(), |acc, operand| match operand {
        Expr::Reciprocal(inner) => Expr::binary(BinaryOp::Div, acc, *inner),
        other => Expr::grouped(BinaryOp::Mul, acc, other),
    })
}

fn fold<Real>(
    operands: impl IntoIterator<Item = Expr<Real>>,
    empty: Real,
    step: impl FnMut(Expr<Real>, Expr<Real>) -> Expr<Real>,
) -> Expr<Real> {
    let mut operands = operands.into_iter();
    match operands.next() {
        Some(first) => operands.fold(first, step),
        None => Expr::Constant(empty),
    }
}

/// Fraction `lhs / rhs`. Operands are never parenthesized.
pub fn div<Real: FloatExt>(lhs: impl Into<Expr<Real>>, rhs: impl Into<Expr<Real>>) -> Expr<Real> {
    Expr::binary(BinaryOp::Div, lhs.into(), rhs.into())
}

/// Single-line `lhs / rhs`, with sum and difference operands parenthesized.
pub fn inline_div<Real: FloatExt>(
    lhs: impl Into<Expr<Real>>,
    rhs: impl Into<Expr<Real>>,
) -> Expr<Real> {
    Expr::grouped(BinaryOp::InlineDiv, lhs.into(), rhs.into())
}

pub fn pow<Real: FloatExt>(base: impl Into<Expr<Real>>, index: impl Into<Expr<Real>>) -> Expr<Real> {
    Expr::Pow(Box::new(base.into()), Box::new(index.into()))
}

/// The `index`-th root of `base`.
///
/// Evaluation currently computes `base ^ index`, the same as [`pow`].
pub fn root<Real: FloatExt>(
    base: impl Into<Expr<Real>>,
    index: impl Into<Expr<Real>>,
) -> Expr<Real> {
    Expr::Root(Box::new(base.into()), Box::new(index.into()))
}

pub fn neg<Real: FloatExt>(operand: impl Into<Expr<Real>>) -> Expr<Real> {
    Expr::Neg(Box::new(operand.into()))
}

/// Reciprocal `1 / operand`.
pub fn inv<Real: FloatExt>(operand: impl Into<Expr<Real>>) -> Expr<Real> {
    Expr::Reciprocal(Box::new(operand.into()))
}

/// Absolute value bars. Evaluation currently negates the operand.
pub fn abs<Real: FloatExt>(operand: impl Into<Expr<Real>>) -> Expr<Real> {
    Expr::Abs(Box::new(operand.into()))
}

/// Explicit parentheses. Evaluation currently negates the operand.
pub fn paren<Real: FloatExt>(operand: impl Into<Expr<Real>>) -> Expr<Real> {
    Expr::Paren(Box::new(operand.into()))
}

pub fn apply<Real: FloatExt>(function: Function, operand: impl Into<Expr<Real>>) -> Expr<Real> {
    Expr::Function(function, Box::new(operand.into()))
}

macro_rules! function_builders {
    ($($name:ident => $function:ident),* $(,)?) => {
        $(
            pub fn $name<Real: FloatExt>(operand: impl Into<Expr<Real>>) -> Expr<Real> {
                apply(Function::$function, operand)
            }
        )*
    };
}

function_builders!(
    sin => Sin,
    cos => Cos,
    tan => Tan,
    cot => Cot,
    asin => Asin,
    acos => Acos,
    atan => Atan,
    acot => Acot,
    log => Log,
    ln => Ln,
);

/// [`add`] over heterogeneous operands.
///
/// ```rust
/// use formula_tree::*;
///
/// let x = var::<f64>("x");
/// let expr = add!(&x, neg(2.0), 1.0);
/// let board: Board<f64> = [(x, 5.0)].into_iter().collect();
/// assert_eq!(expr.evaluate(&board), Ok(4.0));
/// ```
#[macro_export]
macro_rules! add {
    ($($operand:expr),+ $(,)?) => {
        $crate::builder::add([$($crate::Expr::from($operand)),+])
    };
}

/// [`sub`] over heterogeneous operands.
#[macro_export]
macro_rules! sub {
    ($($operand:expr),+ $(,)?) => {
        $crate::builder::sub([$($crate::Expr::from($operand)),+])
    };
}

/// [`mul`] over heterogeneous operands.
#[macro_export]
macro_rules! mul {
    ($($operand:expr),+ $(,)?) => {
        $crate::builder::mul([$($crate::Expr::from($operand)),+])
    };
}
