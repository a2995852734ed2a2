use crate::board::{Board, ReprBoard};
use crate::expression::{Expr, Function};
use crate::repr::Repr;
use crate::{EvalError, FloatExt};

impl<Real: FloatExt> Expr<Real> {
    /// Convert with an empty board; any variable in the tree fails.
    pub fn represent_without_vars(&self) -> Result<Repr<Real>, EvalError> {
        self.represent(&ReprBoard::new())
    }

    /// Render variables as symbols that carry their bound values.
    pub fn represent_with_values(&self, board: &Board<Real>) -> Result<Repr<Real>, EvalError> {
        self.represent(&board.to_variable_board())
    }

    /// Render variables substituted by their bound values.
    pub fn represent_substituted(&self, board: &Board<Real>) -> Result<Repr<Real>, EvalError> {
        self.represent(&board.to_number_board())
    }

    /// Builds the presentation tree for this expression.
    ///
    /// Variables are replaced by their leaves on `board`. A product of two
    /// numerals becomes [`Repr::CrossMul`], and a reciprocal is rendered as the
    /// division `1 / x`.
    pub fn represent(&self, board: &ReprBoard<Real>) -> Result<Repr<Real>, EvalError> {
        Ok(match self {
            Self::Constant(value) => Repr::Number(*value),
            Self::Variable(variable) => board.get(variable)?.clone(),
            Self::Function(function, only) => {
                represent_function(*function, only.represent(board)?)
            }
            Self::Pow(base, index) => {
                Repr::Pow(Repr::indexed(base.represent(board)?, index.represent(board)?))
            }
            Self::Root(base, index) => {
                Repr::Root(Repr::indexed(base.represent(board)?, index.represent(board)?))
            }
            Self::Add(lhs, rhs) => {
                Repr::Add(Repr::binary(lhs.represent(board)?, rhs.represent(board)?))
            }
            Self::Sub(lhs, rhs) => {
                Repr::Sub(Repr::binary(lhs.represent(board)?, rhs.represent(board)?))
            }
            Self::Mul(lhs, rhs) => {
                let lhs = lhs.represent(board)?;
                let rhs = rhs.represent(board)?;
                if lhs.is_number() && rhs.is_number() {
                    Repr::CrossMul(Repr::binary(lhs, rhs))
                } else {
                    Repr::Mul(Repr::binary(lhs, rhs))
                }
            }
            Self::Div(lhs, rhs) => {
                Repr::Div(Repr::binary(lhs.represent(board)?, rhs.represent(board)?))
            }
            Self::InlineDiv(lhs, rhs) => {
                Repr::InlineDiv(Repr::binary(lhs.represent(board)?, rhs.represent(board)?))
            }
            Self::Neg(only) => Repr::Neg(Repr::unary(only.represent(board)?)),
            // Same shape as `Div(1, only)`; there is no reciprocal node.
            Self::Reciprocal(only) => Repr::Div(Repr::binary(
                Repr::Number(Real::one()),
                only.represent(board)?,
            )),
            Self::Abs(only) => Repr::Abs(Repr::unary(only.represent(board)?)),
            Self::Paren(only) => Repr::Paren(Repr::unary(only.represent(board)?)),
        })
    }
}

fn represent_function<Real>(function: Function, operand: Repr<Real>) -> Repr<Real> {
    let node = Repr::unary(operand);
    match function {
        Function::Sin => Repr::Sin(node),
        Function::Cos => Repr::Cos(node),
        Function::Tan => Repr::Tan(node),
        Function::Cot => Repr::Cot(node),
        Function::Asin => Repr::Asin(node),
        Function::Acos => Repr::Acos(node),
        Function::Atan => Repr::Atan(node),
        Function::Acot => Repr::Acot(node),
        Function::Log => Repr::Log(node),
        Function::Ln => Repr::Ln(node),
    }
}
