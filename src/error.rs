use crate::variable::VariableId;

use thiserror::Error;

/// Failure while evaluating or representing an expression.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    /// A variable was reached that has no entry on the board in use.
    #[error("variable `{name}` ({id}) used before assigned")]
    UnassignedVariable { name: String, id: VariableId },
}
