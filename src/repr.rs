//! Representation trees: what a renderer sees.
//!
//! A [`Repr`] is produced from an [`Expr`](crate::Expr) by
//! [`Expr::represent`](crate::Expr::represent) and is never evaluated. Renderers
//! either `match` on it directly or implement [`ReprVisitor`] and call
//! [`Repr::accept`].

use crate::variable::Variable;

/// A variable rendered as a symbol, carrying the value it was bound to.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableRepr<Real> {
    pub variable: Variable<Real>,
    pub value: Real,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UnaryRepr<Real> {
    pub operand: Box<Repr<Real>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BinaryRepr<Real> {
    pub lhs: Box<Repr<Real>>,
    pub rhs: Box<Repr<Real>>,
}

/// Operands of a power or radical.
#[derive(Clone, Debug, PartialEq)]
pub struct IndexedRepr<Real> {
    pub base: Box<Repr<Real>>,
    pub index: Box<Repr<Real>>,
}

/// A presentation tree node.
#[derive(Clone, Debug, PartialEq)]
pub enum Repr<Real> {
    // Leaves.
    Number(Real),
    Variable(VariableRepr<Real>),

    // Unary functions.
    Sin(UnaryRepr<Real>),
    Cos(UnaryRepr<Real>),
    Tan(UnaryRepr<Real>),
    Cot(UnaryRepr<Real>),
    Asin(UnaryRepr<Real>),
    Acos(UnaryRepr<Real>),
    Atan(UnaryRepr<Real>),
    Acot(UnaryRepr<Real>),
    Log(UnaryRepr<Real>),
    Ln(UnaryRepr<Real>),

    // Binary functions.
    Pow(IndexedRepr<Real>),
    Root(IndexedRepr<Real>),

    // Binary ops.
    Add(BinaryRepr<Real>),
    Sub(BinaryRepr<Real>),
    Mul(BinaryRepr<Real>),
    /// Product of two numerals, rendered with an explicit cross.
    CrossMul(BinaryRepr<Real>),
    Div(BinaryRepr<Real>),
    InlineDiv(BinaryRepr<Real>),

    // Unary ops.
    Neg(UnaryRepr<Real>),
    Abs(UnaryRepr<Real>),
    Paren(UnaryRepr<Real>),
}

/// One method per [`Repr`] variant.
///
/// There are no default methods, so a visitor that forgets a variant does not
/// compile:
///
/// ```compile_fail
/// use formula_tree::*;
///
/// struct Count;
///
/// impl ReprVisitor<f64> for Count {
///     type Output = usize;
///
///     fn visit_number(&mut self, _: &f64) -> usize { 1 }
///     fn visit_variable(&mut self, _: &VariableRepr<f64>) -> usize { 1 }
///     fn visit_sin(&mut self, _: &UnaryRepr<f64>) -> usize { 1 }
///     fn visit_cos(&mut self, _: &UnaryRepr<f64>) -> usize { 1 }
///     fn visit_tan(&mut self, _: &UnaryRepr<f64>) -> usize { 1 }
///     fn visit_cot(&mut self, _: &UnaryRepr<f64>) -> usize { 1 }
///     fn visit_asin(&mut self, _: &UnaryRepr<f64>) -> usize { 1 }
///     fn visit_acos(&mut self, _: &UnaryRepr<f64>) -> usize { 1 }
///     fn visit_atan(&mut self, _: &UnaryRepr<f64>) -> usize { 1 }
///     fn visit_acot(&mut self, _: &UnaryRepr<f64>) -> usize { 1 }
///     fn visit_log(&mut self, _: &UnaryRepr<f64>) -> usize { 1 }
///     fn visit_ln(&mut self, _: &UnaryRepr<f64>) -> usize { 1 }
///     fn visit_pow(&mut self, _: &IndexedRepr<f64>) -> usize { 1 }
///     fn visit_root(&mut self, _: &IndexedRepr<f64>) -> usize { 1 }
///     fn visit_add(&mut self, _: &BinaryRepr<f64>) -> usize { 1 }
///     fn visit_sub(&mut self, _: &BinaryRepr<f64>) -> usize { 1 }
///     fn visit_mul(&mut self, _: &BinaryRepr<f64>) -> usize { 1 }
///     fn visit_cross_mul(&mut self, _: &BinaryRepr<f64>) -> usize { 1 }
///     fn visit_div(&mut self, _: &BinaryRepr<f64>) -> usize { 1 }
///     fn visit_inline_div(&mut self, _: &BinaryRepr<f64>) -> usize { 1 }
///     fn visit_neg(&mut self, _: &UnaryRepr<f64>) -> usize { 1 }
///     fn visit_abs(&mut self, _: &UnaryRepr<f64>) -> usize { 1 }
///     // `visit_paren` is missing.
/// }
/// ```
pub trait ReprVisitor<Real> {
    type Output;

    fn visit_number(&mut self, value: &Real) -> Self::Output;
    fn visit_variable(&mut self, node: &VariableRepr<Real>) -> Self::Output;

    fn visit_sin(&mut self, node: &UnaryRepr<Real>) -> Self::Output;
    fn visit_cos(&mut self, node: &UnaryRepr<Real>) -> Self::Output;
    fn visit_tan(&mut self, node: &UnaryRepr<Real>) -> Self::Output;
    fn visit_cot(&mut self, node: &UnaryRepr<Real>) -> Self::Output;
    fn visit_asin(&mut self, node: &UnaryRepr<Real>) -> Self::Output;
    fn visit_acos(&mut self, node: &UnaryRepr<Real>) -> Self::Output;
    fn visit_atan(&mut self, node: &UnaryRepr<Real>) -> Self::Output;
    fn visit_acot(&mut self, node: &UnaryRepr<Real>) -> Self::Output;
    fn visit_log(&mut self, node: &UnaryRepr<Real>) -> Self::Output;
    fn visit_ln(&mut self, node: &UnaryRepr<Real>) -> Self::Output;

    fn visit_pow(&mut self, node: &IndexedRepr<Real>) -> Self::Output;
    fn visit_root(&mut self, node: &IndexedRepr<Real>) -> Self::Output;

    fn visit_add(&mut self, node: &BinaryRepr<Real>) -> Self::Output;
    fn visit_sub(&mut self, node: &BinaryRepr<Real>) -> Self::Output;
    fn visit_mul(&mut self, node: &BinaryRepr<Real>) -> Self::Output;
    fn visit_cross_mul(&mut self, node: &BinaryRepr<Real>) -> Self::Output;
    fn visit_div(&mut self, node: &BinaryRepr<Real>) -> Self::Output;
    fn visit_inline_div(&mut self, node: &BinaryRepr<Real>) -> Self::Output;

    fn visit_neg(&mut self, node: &UnaryRepr<Real>) -> Self::Output;
    fn visit_abs(&mut self, node: &UnaryRepr<Real>) -> Self::Output;
    fn visit_paren(&mut self, node: &UnaryRepr<Real>) -> Self::Output;
}

impl<Real> Repr<Real> {
    /// Hand this node to the visitor method for its variant.
    pub fn accept<V: ReprVisitor<Real> + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Self::Number(value) => visitor.visit_number(value),
            Self::Variable(node) => visitor.visit_variable(node),
            Self::Sin(node) => visitor.visit_sin(node),
            Self::Cos(node) => visitor.visit_cos(node),
            Self::Tan(node) => visitor.visit_tan(node),
            Self::Cot(node) => visitor.visit_cot(node),
            Self::Asin(node) => visitor.visit_asin(node),
            Self::Acos(node) => visitor.visit_acos(node),
            Self::Atan(node) => visitor.visit_atan(node),
            Self::Acot(node) => visitor.visit_acot(node),
            Self::Log(node) => visitor.visit_log(node),
            Self::Ln(node) => visitor.visit_ln(node),
            Self::Pow(node) => visitor.visit_pow(node),
            Self::Root(node) => visitor.visit_root(node),
            Self::Add(node) => visitor.visit_add(node),
            Self::Sub(node) => visitor.visit_sub(node),
            Self::Mul(node) => visitor.visit_mul(node),
            Self::CrossMul(node) => visitor.visit_cross_mul(node),
            Self::Div(node) => visitor.visit_div(node),
            Self::InlineDiv(node) => visitor.visit_inline_div(node),
            Self::Neg(node) => visitor.visit_neg(node),
            Self::Abs(node) => visitor.visit_abs(node),
            Self::Paren(node) => visitor.visit_paren(node),
        }
    }

    pub(crate) fn unary(operand: Self) -> UnaryRepr<Real> {
        UnaryRepr {
            operand: Box::new(operand),
        }
    }

    pub(crate) fn binary(lhs: Self, rhs: Self) -> BinaryRepr<Real> {
        BinaryRepr {
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub(crate) fn indexed(base: Self, index: Self) -> IndexedRepr<Real> {
        IndexedRepr {
            base: Box::new(base),
            index: Box::new(index),
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }
}
