use crate::variable::Variable;

/// A calculation tree node.
///
/// Trees are immutable once built. Use the free builder functions (or the
/// operator overloads) rather than the variants directly to get sign folding
/// and parenthesization.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr<Real> {
    // Constant.
    Constant(Real),

    // Input variable.
    Variable(Variable<Real>),

    // Unary functions.
    Function(Function, Box<Expr<Real>>),

    // Binary functions, `(base, index)`.
    Pow(Box<Expr<Real>>, Box<Expr<Real>>),
    Root(Box<Expr<Real>>, Box<Expr<Real>>),

    // Binary ops.
    Add(Box<Expr<Real>>, Box<Expr<Real>>),
    Sub(Box<Expr<Real>>, Box<Expr<Real>>),
    Mul(Box<Expr<Real>>, Box<Expr<Real>>),
    /// Stacked fraction.
    Div(Box<Expr<Real>>, Box<Expr<Real>>),
    /// Single-line `a / b` division.
    InlineDiv(Box<Expr<Real>>, Box<Expr<Real>>),

    // Unary ops.
    Neg(Box<Expr<Real>>),
    Reciprocal(Box<Expr<Real>>),
    Abs(Box<Expr<Real>>),
    Paren(Box<Expr<Real>>),
}

/// Transcendental functions of one argument. Trigonometry is in radians.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Cot,
    Asin,
    Acos,
    Atan,
    Acot,
    /// Base 10.
    Log,
    /// Natural logarithm.
    Ln,
}

impl Function {
    pub const ALL: [Function; 10] = [
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Cot,
        Self::Asin,
        Self::Acos,
        Self::Atan,
        Self::Acot,
        Self::Log,
        Self::Ln,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Cot => "cot",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Acot => "acot",
            Self::Log => "log",
            Self::Ln => "ln",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }
}

/// The four arithmetic operators plus the inline division form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    InlineDiv,
}

impl<Real> Expr<Real> {
    /// Build the operator node exactly as given.
    pub fn binary(op: BinaryOp, lhs: Self, rhs: Self) -> Self {
        let (lhs, rhs) = (Box::new(lhs), Box::new(rhs));
        match op {
            BinaryOp::Add => Self::Add(lhs, rhs),
            BinaryOp::Sub => Self::Sub(lhs, rhs),
            BinaryOp::Mul => Self::Mul(lhs, rhs),
            BinaryOp::Div => Self::Div(lhs, rhs),
            BinaryOp::InlineDiv => Self::InlineDiv(lhs, rhs),
        }
    }

    /// Build the operator node, first wrapping any sum or difference operand
    /// in [`Expr::Paren`].
    pub fn grouped(op: BinaryOp, lhs: Self, rhs: Self) -> Self {
        Self::binary(op, lhs.parenthesize_sum(), rhs.parenthesize_sum())
    }

    fn parenthesize_sum(self) -> Self {
        match self {
            Self::Add(..) | Self::Sub(..) => Self::Paren(Box::new(self)),
            other => other,
        }
    }

    pub fn is_sum(&self) -> bool {
        matches!(self, Self::Add(..) | Self::Sub(..))
    }

    /// Number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        match self {
            Self::Constant(_) | Self::Variable(_) => 1,
            Self::Function(_, only)
            | Self::Neg(only)
            | Self::Reciprocal(only)
            | Self::Abs(only)
            | Self::Paren(only) => 1 + only.node_count(),
            Self::Pow(lhs, rhs)
            | Self::Root(lhs, rhs)
            | Self::Add(lhs, rhs)
            | Self::Sub(lhs, rhs)
            | Self::Mul(lhs, rhs)
            | Self::Div(lhs, rhs)
            | Self::InlineDiv(lhs, rhs) => 1 + lhs.node_count() + rhs.node_count(),
        }
    }

    /// Every distinct variable reachable from this node, in first-visit order.
    pub fn variables(&self) -> Vec<Variable<Real>> {
        let mut found = Vec::new();
        self.collect_variables(&mut found);
        found
    }

    fn collect_variables(&self, found: &mut Vec<Variable<Real>>) {
        match self {
            Self::Constant(_) => {}
            Self::Variable(variable) => {
                if !found.contains(variable) {
                    found.push(variable.clone());
                }
            }
            Self::Function(_, only)
            | Self::Neg(only)
            | Self::Reciprocal(only)
            | Self::Abs(only)
            | Self::Paren(only) => only.collect_variables(found),
            Self::Pow(lhs, rhs)
            | Self::Root(lhs, rhs)
            | Self::Add(lhs, rhs)
            | Self::Sub(lhs, rhs)
            | Self::Mul(lhs, rhs)
            | Self::Div(lhs, rhs)
            | Self::InlineDiv(lhs, rhs) => {
                lhs.collect_variables(found);
                rhs.collect_variables(found);
            }
        }
    }
}

impl<Real> From<Variable<Real>> for Expr<Real> {
    fn from(variable: Variable<Real>) -> Self {
        Self::Variable(variable)
    }
}

impl<Real> From<&Variable<Real>> for Expr<Real> {
    fn from(variable: &Variable<Real>) -> Self {
        Self::Variable(variable.clone())
    }
}

macro_rules! impl_from_real {
    ($($real:ty),*) => {
        $(
            impl From<$real> for Expr<$real> {
                fn from(value: $real) -> Self {
                    Self::Constant(value)
                }
            }
        )*
    };
}

impl_from_real!(f32, f64);
