//! Property-based tests for evaluation and the normalization rules.

use crate::*;

use proptest::prelude::*;

fn operand() -> impl Strategy<Value = f64> {
    (-1.0e3..1.0e3f64).prop_filter("nonzero", |v| v.abs() > 1.0e-3)
}

/// Small trees over one variable, built without the normalizing builders so
/// no parenthesis nodes are introduced.
fn flat_tree(x: Variable<f64>) -> impl Strategy<Value = Expr<f64>> {
    let leaf = prop_oneof![
        operand().prop_map(Expr::Constant),
        Just(Expr::Variable(x)),
    ];
    leaf.prop_recursive(4, 16, 2, |inner| {
        (inner.clone(), inner, 0..3u8).prop_map(|(lhs, rhs, op)| {
            let op = match op {
                0 => BinaryOp::Add,
                1 => BinaryOp::Sub,
                _ => BinaryOp::Mul,
            };
            Expr::binary(op, lhs, rhs)
        })
    })
}

/// Replace variable leaves of a symbolic tree built from [`flat_tree`] by
/// their values, fusing products whose operands both become numbers.
fn substitute(repr: Repr<f64>) -> Repr<f64> {
    let both = |node: BinaryRepr<f64>| (substitute(*node.lhs), substitute(*node.rhs));
    match repr {
        Repr::Variable(leaf) => Repr::Number(leaf.value),
        Repr::Add(node) => {
            let (lhs, rhs) = both(node);
            Repr::Add(BinaryRepr { lhs: Box::new(lhs), rhs: Box::new(rhs) })
        }
        Repr::Sub(node) => {
            let (lhs, rhs) = both(node);
            Repr::Sub(BinaryRepr { lhs: Box::new(lhs), rhs: Box::new(rhs) })
        }
        Repr::Mul(node) | Repr::CrossMul(node) => {
            let (lhs, rhs) = both(node);
            let node = BinaryRepr { lhs: Box::new(lhs), rhs: Box::new(rhs) };
            if node.lhs.is_number() && node.rhs.is_number() {
                Repr::CrossMul(node)
            } else {
                Repr::Mul(node)
            }
        }
        other => other,
    }
}

proptest! {
    #[test]
    fn constant_ignores_board(c in operand(), bound in operand()) {
        let x = var("x");
        let board: Board<f64> = [(x, bound)].into_iter().collect();
        prop_assert_eq!(Expr::Constant(c).evaluate(&board), Ok(c));
    }

    #[test]
    fn variable_reads_its_binding(value in operand()) {
        let x = var("x");
        let board: Board<f64> = [(x.clone(), value)].into_iter().collect();
        prop_assert_eq!(Expr::from(&x).evaluate(&board), Ok(value));
        prop_assert!(Expr::from(&x).evaluate_without_vars().is_err());
    }

    #[test]
    fn arithmetic_laws(a in operand(), b in operand()) {
        let x = var("x");
        let y = var("y");
        let board: Board<f64> = [(x.clone(), a), (y.clone(), b)].into_iter().collect();
        prop_assert_eq!(add!(&x, &y).evaluate(&board), Ok(a + b));
        prop_assert_eq!(sub!(&x, &y).evaluate(&board), Ok(a - b));
        prop_assert_eq!(mul!(&x, &y).evaluate(&board), Ok(a * b));
        prop_assert_eq!(div(&x, &y).evaluate(&board), Ok(a / b));
    }

    #[test]
    fn negation_folding_keeps_value(a in operand(), b in operand()) {
        let x = var("x");
        let y = var("y");
        let board: Board<f64> = [(x.clone(), a), (y.clone(), b)].into_iter().collect();
        prop_assert_eq!(
            add!(&x, neg(&y)).evaluate(&board),
            sub!(&x, &y).evaluate(&board)
        );
        prop_assert_eq!(
            sub!(&x, neg(&y)).evaluate(&board),
            add!(&x, &y).evaluate(&board)
        );
    }

    #[test]
    fn reciprocal_folding_keeps_value(a in operand(), b in operand()) {
        let x = var("x");
        let y = var("y");
        let board: Board<f64> = [(x.clone(), a), (y.clone(), b)].into_iter().collect();
        prop_assert_eq!(
            mul!(&x, inv(&y)).evaluate(&board),
            div(&x, &y).evaluate(&board)
        );
    }

    #[test]
    fn folding_subtrees_keeps_value(value in operand(), seed in operand()) {
        let x = var("x");
        let board: Board<f64> = [(x.clone(), value)].into_iter().collect();
        let tree = mul!(&x, seed);
        prop_assert_eq!(
            add!(seed, neg(tree.clone())).evaluate(&board),
            sub!(seed, tree).evaluate(&board)
        );
    }

    #[test]
    fn numerals_always_fuse(a in operand(), b in operand()) {
        let repr = mul!(a, b).represent_without_vars().unwrap();
        prop_assert!(matches!(repr, Repr::CrossMul(_)));
    }

    #[test]
    fn substituted_tree_is_symbolic_tree_with_numbers(value in operand(), tree in flat_tree(var("x"))) {
        let board: Board<f64> = tree.variables().into_iter().map(|v| (v, value)).collect();
        let symbolic = tree.represent_with_values(&board).unwrap();
        let substituted = tree.represent_substituted(&board).unwrap();
        prop_assert_eq!(substitute(symbolic), substituted);
    }
}
