//! Operator overloads and method forms for [`Expr`].
//!
//! Every operator routes through the builders in [`crate::builder`], so the
//! same sign folding and parenthesization apply.

use crate::builder;
use crate::expression::{Expr, Function};
use crate::variable::Variable;
use crate::FloatExt;

fn sum<Real: FloatExt>(lhs: Expr<Real>, rhs: Expr<Real>) -> Expr<Real> {
    builder::add([lhs, rhs])
}

fn difference<Real: FloatExt>(lhs: Expr<Real>, rhs: Expr<Real>) -> Expr<Real> {
    builder::sub([lhs, rhs])
}

fn product<Real: FloatExt>(lhs: Expr<Real>, rhs: Expr<Real>) -> Expr<Real> {
    builder::mul([lhs, rhs])
}

fn quotient<Real: FloatExt>(lhs: Expr<Real>, rhs: Expr<Real>) -> Expr<Real> {
    builder::div(lhs, rhs)
}

macro_rules! impl_binop {
    ($Trait:ident, $method:ident, $build:ident) => {
        impl<Real: FloatExt> core::ops::$Trait for Expr<Real> {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                $build(self, rhs)
            }
        }

        impl<Real: FloatExt> core::ops::$Trait<Real> for Expr<Real> {
            type Output = Self;

            fn $method(self, rhs: Real) -> Self::Output {
                $build(self, Expr::Constant(rhs))
            }
        }

        impl<Real: FloatExt> core::ops::$Trait<&Variable<Real>> for Expr<Real> {
            type Output = Self;

            fn $method(self, rhs: &Variable<Real>) -> Self::Output {
                $build(self, Expr::Variable(rhs.clone()))
            }
        }
    };
}

impl_binop!(Add, add, sum);
impl_binop!(Sub, sub, difference);
impl_binop!(Mul, mul, product);
impl_binop!(Div, div, quotient);

impl<Real: FloatExt> core::ops::Neg for Expr<Real> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        builder::neg(self)
    }
}

impl<Real: FloatExt> Expr<Real> {
    pub fn pow(self, index: impl Into<Self>) -> Self {
        builder::pow(self, index)
    }

    pub fn root(self, index: impl Into<Self>) -> Self {
        builder::root(self, index)
    }

    pub fn recip(self) -> Self {
        builder::inv(self)
    }

    pub fn abs(self) -> Self {
        builder::abs(self)
    }

    pub fn paren(self) -> Self {
        builder::paren(self)
    }

    pub fn apply(self, function: Function) -> Self {
        builder::apply(function, self)
    }

    pub fn sin(self) -> Self {
        self.apply(Function::Sin)
    }

    pub fn cos(self) -> Self {
        self.apply(Function::Cos)
    }

    pub fn tan(self) -> Self {
        self.apply(Function::Tan)
    }

    pub fn cot(self) -> Self {
        self.apply(Function::Cot)
    }

    pub fn asin(self) -> Self {
        self.apply(Function::Asin)
    }

    pub fn acos(self) -> Self {
        self.apply(Function::Acos)
    }

    pub fn atan(self) -> Self {
        self.apply(Function::Atan)
    }

    pub fn acot(self) -> Self {
        self.apply(Function::Acot)
    }

    pub fn log(self) -> Self {
        self.apply(Function::Log)
    }

    pub fn ln(self) -> Self {
        self.apply(Function::Ln)
    }
}

impl<Real> Variable<Real> {
    /// This variable as a leaf expression.
    pub fn expr(&self) -> Expr<Real> {
        Expr::Variable(self.clone())
    }
}
