//! Math expression trees that evaluate numerically and render symbolically.
//!
//! # Two trees
//!
//! An [`Expr`] is a calculation tree: it evaluates itself against a [`Board`]
//! of variable bindings. The same tree converts into a [`Repr`], a
//! presentation tree that renderers walk through [`ReprVisitor`] (or by
//! matching on it directly). The conversion applies a few normalization
//! rules: products of two numerals become [`Repr::CrossMul`], reciprocals
//! render as fractions, and the product builders wrap sums in parentheses
//! when the tree is built.
//!
//! # Example
//!
//! ```rust
//! use formula_tree::*;
//!
//! let x = var::<f64>("x");
//! let y = var::<f64>("y");
//! let expr = add!(pow(&x, 2.0), neg(mul!(3.0, &y)));
//!
//! let board: Board<f64> = [(x.clone(), 3.0), (y.clone(), 2.0)].into_iter().collect();
//! assert_eq!(expr.evaluate(&board), Ok(3.0));
//!
//! let repr = expr.represent_with_values(&board).unwrap();
//! assert_eq!(render_latex(&repr), "{x}^{2} - 3 y");
//! ```

mod algebra;
mod board;
pub mod builder;
mod error;
mod evaluate;
mod expression;
mod latex;
mod repr;
mod represent;
mod variable;

#[cfg(test)]
mod proptests;

pub use board::*;
pub use builder::*;
pub use error::*;
pub use expression::*;
pub use latex::*;
pub use repr::*;
pub use variable::*;

pub trait FloatExt:
    num_traits::Float
    + num_traits::FloatConst
    + std::fmt::Debug
    + std::fmt::Display
    + Send
    + Sync
    + 'static
{
}
impl FloatExt for f32 {}
impl FloatExt for f64 {}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn power_of_bound_variable() {
        let x = var("x");
        let board: Board<f64> = [(x.clone(), 3.0)].into_iter().collect();
        assert_eq!(pow(&x, 2.0).evaluate(&board), Ok(9.0));
    }

    #[test]
    fn transcendental_constants() {
        assert_eq!(sin(0.0f64).evaluate_without_vars(), Ok(0.0));
        assert_relative_eq!(
            acot(1.0f64).evaluate_without_vars().unwrap(),
            0.785_398_163_4,
            epsilon = 1e-10
        );
        assert_relative_eq!(
            acot(1.0f64).evaluate_without_vars().unwrap(),
            std::f64::consts::FRAC_PI_4
        );
    }

    #[test]
    fn sign_folding_preserves_value() {
        let a = var("a");
        let b = var("b");
        let board: Board<f64> = [(a.clone(), 7.0), (b.clone(), 2.5)].into_iter().collect();

        let folded = add!(&a, neg(&b));
        assert_eq!(folded, sub!(&a, &b));
        assert_eq!(folded.evaluate(&board), sub!(&a, &b).evaluate(&board));

        let folded = mul!(&a, inv(&b));
        assert_eq!(folded, div(&a, &b));
        assert_eq!(folded.evaluate(&board), Ok(2.8));
    }

    #[test]
    fn fused_and_generic_products() {
        let repr = mul!(2.0f64, 3.0).represent_without_vars().unwrap();
        assert!(matches!(repr, Repr::CrossMul(_)));

        let x = var("x");
        let board: Board<f64> = [(x.clone(), 5.0)].into_iter().collect();
        let repr = mul!(&x, 3.0).represent(&board.to_variable_board()).unwrap();
        assert!(matches!(repr, Repr::Mul(_)));
    }

    #[test]
    fn parenthesization_is_decided_at_construction() {
        let a = var::<f64>("a");
        let b = var::<f64>("b");
        let c = var::<f64>("c");
        let board: Board<f64> = [(a.clone(), 1.0), (b.clone(), 2.0), (c.clone(), 3.0)]
            .into_iter()
            .collect();
        let leaves = board.to_variable_board();

        let repr = mul!(add!(&a, &b), &c).represent(&leaves).unwrap();
        match repr {
            Repr::Mul(node) => assert!(matches!(*node.lhs, Repr::Paren(_))),
            other => panic!("Expected product, got {other:?}"),
        }

        let repr = div(add!(&a, &b), &c).represent(&leaves).unwrap();
        match repr {
            Repr::Div(node) => assert!(matches!(*node.lhs, Repr::Add(_))),
            other => panic!("Expected fraction, got {other:?}"),
        }
    }

    #[test]
    fn unbound_variable_in_deep_tree() {
        let x = var::<f64>("x");
        let y = var::<f64>("y");
        let board: Board<f64> = [(x.clone(), 1.0)].into_iter().collect();
        let expr = ln(add!(&x, pow(sin(&y), 2.0)));
        assert_eq!(
            expr.evaluate(&board),
            Err(EvalError::UnassignedVariable {
                name: "y".into(),
                id: y.id()
            })
        );
        assert!(expr.represent_with_values(&board).is_err());
        assert_eq!(
            EvalError::UnassignedVariable {
                name: "y".into(),
                id: y.id()
            }
            .to_string(),
            format!("variable `y` ({}) used before assigned", y.id())
        );
    }

    #[test]
    fn decoration_is_inert() {
        let plain = var::<f64>("v");
        let decorated: Variable<f64> = Variable::builder("v")
            .subscript("0")
            .description("speed")
            .unit(Repr::Number(1.0))
            .build();
        let board: Board<f64> = [(plain.clone(), 2.0), (decorated.clone(), 2.0)]
            .into_iter()
            .collect();
        assert_eq!(
            mul!(&plain, 4.0).evaluate(&board),
            mul!(&decorated, 4.0).evaluate(&board)
        );
    }

    #[test]
    fn grouped_product_pins_current_paren_evaluation() {
        let a = var::<f64>("a");
        let b = var::<f64>("b");
        let board: Board<f64> = [(a.clone(), 1.0), (b.clone(), 2.0)].into_iter().collect();
        // The inserted parenthesis node negates its operand.
        assert_eq!(mul!(add!(&a, &b), 2.0).evaluate(&board), Ok(-6.0));
    }

    #[test]
    fn trees_are_shareable_across_threads() {
        let x = var::<f64>("x");
        let expr = std::sync::Arc::new(mul!(&x, 2.0));
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let expr = expr.clone();
                let x = x.clone();
                std::thread::spawn(move || {
                    let board: Board<f64> = [(x, i as f64)].into_iter().collect();
                    expr.evaluate(&board)
                })
            })
            .collect();
        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results, vec![Ok(0.0), Ok(2.0), Ok(4.0), Ok(6.0)]);
    }
}
