//! Reference renderer producing LaTeX math source.

use crate::repr::{BinaryRepr, IndexedRepr, Repr, ReprVisitor, UnaryRepr, VariableRepr};
use crate::FloatExt;

/// Render `repr` as LaTeX math.
///
/// ```rust
/// use formula_tree::*;
///
/// let x = var::<f64>("x");
/// let board: Board<f64> = [(x.clone(), 2.0)].into_iter().collect();
/// let expr = div(add!(&x, 1.0), 2.0);
/// let repr = expr.represent_with_values(&board).unwrap();
/// assert_eq!(render_latex(&repr), r"\frac{x + 1}{2}");
/// ```
pub fn render_latex<Real: FloatExt>(repr: &Repr<Real>) -> String {
    repr.accept(&mut LatexRenderer::default())
}

#[derive(Clone, Copy, Debug, Default)]
pub struct LatexRenderer {
    /// Write `name = value` for variables instead of the bare name.
    pub show_values: bool,
}

impl LatexRenderer {
    fn function<Real: FloatExt>(&mut self, command: &str, node: &UnaryRepr<Real>) -> String {
        format!(r"{command}\left({}\right)", node.operand.accept(self))
    }

    fn infix<Real: FloatExt>(&mut self, op: &str, node: &BinaryRepr<Real>) -> String {
        format!("{}{op}{}", node.lhs.accept(self), node.rhs.accept(self))
    }

    /// Render `repr`, wrapped in parentheses when it is a sum or difference.
    fn operand<Real: FloatExt>(&mut self, repr: &Repr<Real>) -> String {
        let rendered = repr.accept(self);
        match repr {
            Repr::Add(_) | Repr::Sub(_) => format!(r"\left({rendered}\right)"),
            _ => rendered,
        }
    }
}

impl<Real: FloatExt> ReprVisitor<Real> for LatexRenderer {
    type Output = String;

    fn visit_number(&mut self, value: &Real) -> String {
        value.to_string()
    }

    fn visit_variable(&mut self, node: &VariableRepr<Real>) -> String {
        let variable = &node.variable;
        let symbol = match variable.subscript() {
            Some(subscript) => format!("{}_{{{subscript}}}", variable.name()),
            None => variable.name().to_string(),
        };
        if self.show_values {
            format!("{symbol} = {}", node.value)
        } else {
            symbol
        }
    }

    fn visit_sin(&mut self, node: &UnaryRepr<Real>) -> String {
        self.function(r"\sin", node)
    }

    fn visit_cos(&mut self, node: &UnaryRepr<Real>) -> String {
        self.function(r"\cos", node)
    }

    fn visit_tan(&mut self, node: &UnaryRepr<Real>) -> String {
        self.function(r"\tan", node)
    }

    fn visit_cot(&mut self, node: &UnaryRepr<Real>) -> String {
        self.function(r"\cot", node)
    }

    fn visit_asin(&mut self, node: &UnaryRepr<Real>) -> String {
        self.function(r"\arcsin", node)
    }

    fn visit_acos(&mut self, node: &UnaryRepr<Real>) -> String {
        self.function(r"\arccos", node)
    }

    fn visit_atan(&mut self, node: &UnaryRepr<Real>) -> String {
        self.function(r"\arctan", node)
    }

    fn visit_acot(&mut self, node: &UnaryRepr<Real>) -> String {
        self.function(r"\operatorname{arccot}", node)
    }

    fn visit_log(&mut self, node: &UnaryRepr<Real>) -> String {
        self.function(r"\log", node)
    }

    fn visit_ln(&mut self, node: &UnaryRepr<Real>) -> String {
        self.function(r"\ln", node)
    }

    fn visit_pow(&mut self, node: &IndexedRepr<Real>) -> String {
        format!("{{{}}}^{{{}}}", self.operand(&*node.base), node.index.accept(self))
    }

    fn visit_root(&mut self, node: &IndexedRepr<Real>) -> String {
        format!(r"\sqrt[{}]{{{}}}", node.index.accept(self), node.base.accept(self))
    }

    fn visit_add(&mut self, node: &BinaryRepr<Real>) -> String {
        self.infix(" + ", node)
    }

    fn visit_sub(&mut self, node: &BinaryRepr<Real>) -> String {
        format!("{} - {}", node.lhs.accept(self), self.operand(&*node.rhs))
    }

    // Juxtaposition for symbolic products.
    fn visit_mul(&mut self, node: &BinaryRepr<Real>) -> String {
        self.infix(" ", node)
    }

    fn visit_cross_mul(&mut self, node: &BinaryRepr<Real>) -> String {
        self.infix(r" \times ", node)
    }

    fn visit_div(&mut self, node: &BinaryRepr<Real>) -> String {
        format!(r"\frac{{{}}}{{{}}}", node.lhs.accept(self), node.rhs.accept(self))
    }

    fn visit_inline_div(&mut self, node: &BinaryRepr<Real>) -> String {
        self.infix(" / ", node)
    }

    fn visit_neg(&mut self, node: &UnaryRepr<Real>) -> String {
        format!("-{}", node.operand.accept(self))
    }

    fn visit_abs(&mut self, node: &UnaryRepr<Real>) -> String {
        format!(r"\left|{}\right|", node.operand.accept(self))
    }

    fn visit_paren(&mut self, node: &UnaryRepr<Real>) -> String {
        format!(r"\left({}\right)", node.operand.accept(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::*;
    use crate::{add, mul, sub, var, Board, Variable};

    #[test]
    fn numerals_use_cross() {
        let expr = mul!(2.0f64, 3.0);
        let repr = expr.represent_without_vars().unwrap();
        assert_eq!(render_latex(&repr), r"2 \times 3");
    }

    #[test]
    fn grouped_product() {
        let a = var::<f64>("a");
        let b = var::<f64>("b");
        let c = var::<f64>("c");
        let board: Board<f64> = [(a.clone(), 1.0), (b.clone(), 2.0), (c.clone(), 3.0)]
            .into_iter()
            .collect();
        let expr = mul!(add!(&a, &b), &c);
        let repr = expr.represent_with_values(&board).unwrap();
        assert_eq!(render_latex(&repr), r"\left(a + b\right) c");
    }

    #[test]
    fn substituted_values() {
        let x = var::<f64>("x");
        let board: Board<f64> = [(x.clone(), 4.0)].into_iter().collect();
        let expr = mul!(&x, inv(5.0)) - pow(&x, 2.0);
        let repr = expr.represent_substituted(&board).unwrap();
        assert_eq!(render_latex(&repr), r"\frac{4}{5} - {4}^{2}");
    }

    #[test]
    fn functions_and_roots() {
        let x: Variable<f64> = Variable::builder("x").subscript("0").build();
        let board: Board<f64> = [(x.clone(), 0.5)].into_iter().collect();
        let expr = add!(sin(&x), root(&x, 3.0), acot(abs(&x)));
        let repr = expr.represent_with_values(&board).unwrap();
        assert_eq!(
            render_latex(&repr),
            r"\sin\left(x_{0}\right) + \sqrt[3]{x_{0}} + \operatorname{arccot}\left(\left|x_{0}\right|\right)"
        );

        let mut renderer = LatexRenderer { show_values: true };
        assert_eq!(repr_of(&x, &board).accept(&mut renderer), "x_{0} = 0.5");
    }

    fn repr_of(x: &Variable<f64>, board: &Board<f64>) -> Repr<f64> {
        crate::Expr::from(x).represent_with_values(board).unwrap()
    }

    #[test]
    fn subtracted_and_raised_sums_are_wrapped() {
        let a = var::<f64>("a");
        let b = var::<f64>("b");
        let board: Board<f64> = [(a.clone(), 1.0), (b.clone(), 2.0)].into_iter().collect();

        let expr = add!(&a, neg(add!(&a, &b)));
        let repr = expr.represent_with_values(&board).unwrap();
        assert_eq!(render_latex(&repr), r"a - \left(a + b\right)");

        let expr = pow(sub!(&a, &b), 2.0);
        let repr = expr.represent_with_values(&board).unwrap();
        assert_eq!(render_latex(&repr), r"{\left(a - b\right)}^{2}");

        let expr = sub!(add!(&a, &b), &a);
        let repr = expr.represent_with_values(&board).unwrap();
        assert_eq!(render_latex(&repr), "a + b - a");
    }

    #[test]
    fn reciprocal_renders_as_fraction() {
        let y = var::<f64>("y");
        let board: Board<f64> = [(y.clone(), 2.0)].into_iter().collect();
        let repr = inv(neg(&y)).represent_with_values(&board).unwrap();
        assert_eq!(render_latex(&repr), r"\frac{1}{-y}");
    }
}
