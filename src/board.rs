use crate::repr::{Repr, VariableRepr};
use crate::variable::{Variable, VariableId};
use crate::{EvalError, FloatExt};

use rustc_hash::FxHashMap;

fn unassigned<Real>(variable: &Variable<Real>) -> EvalError {
    tracing::debug!(variable = %variable.name(), id = %variable.id(), "lookup of unassigned variable");
    EvalError::UnassignedVariable {
        name: variable.name().to_string(),
        id: variable.id(),
    }
}

/// Numeric values bound to variables for one evaluation.
///
/// Keyed on variable identity. Bindings can be inserted or overwritten, never
/// removed.
#[derive(Clone, Debug)]
pub struct Board<Real> {
    bindings: FxHashMap<VariableId, (Variable<Real>, Real)>,
}

impl<Real> Default for Board<Real> {
    fn default() -> Self {
        Self {
            bindings: FxHashMap::default(),
        }
    }
}

impl<Real: FloatExt> Board<Real> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The value bound to `variable`.
    pub fn get(&self, variable: &Variable<Real>) -> Result<Real, EvalError> {
        self.bindings
            .get(&variable.id())
            .map(|(_, value)| *value)
            .ok_or_else(|| unassigned(variable))
    }

    pub fn has(&self, variable: &Variable<Real>) -> bool {
        self.bindings.contains_key(&variable.id())
    }

    pub fn set(&mut self, variable: &Variable<Real>, value: Real) {
        self.bindings.insert(variable.id(), (variable.clone(), value));
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Variable<Real>, Real)> {
        self.bindings.values().map(|(variable, value)| (variable, *value))
    }

    /// Render every bound variable as a symbol that also carries its value.
    pub fn to_variable_board(&self) -> ReprBoard<Real> {
        tracing::trace!(bindings = self.len(), "converting to variable leaves");
        self.iter()
            .map(|(variable, value)| {
                let leaf = Repr::Variable(VariableRepr {
                    variable: variable.clone(),
                    value,
                });
                (variable.clone(), leaf)
            })
            .collect()
    }

    /// Render every bound variable as its bare numeric value.
    pub fn to_number_board(&self) -> ReprBoard<Real> {
        tracing::trace!(bindings = self.len(), "converting to number leaves");
        self.iter()
            .map(|(variable, value)| (variable.clone(), Repr::Number(value)))
            .collect()
    }
}

impl<Real: FloatExt> FromIterator<(Variable<Real>, Real)> for Board<Real> {
    fn from_iter<I: IntoIterator<Item = (Variable<Real>, Real)>>(iter: I) -> Self {
        let mut board = Self::new();
        board.extend(iter);
        board
    }
}

impl<Real: FloatExt> Extend<(Variable<Real>, Real)> for Board<Real> {
    fn extend<I: IntoIterator<Item = (Variable<Real>, Real)>>(&mut self, iter: I) {
        for (variable, value) in iter {
            self.set(&variable, value);
        }
    }
}

/// Rendered leaves for variables, shared across one representation pass so a
/// variable renders the same way everywhere it appears.
#[derive(Clone, Debug)]
pub struct ReprBoard<Real> {
    leaves: FxHashMap<VariableId, Repr<Real>>,
}

impl<Real> Default for ReprBoard<Real> {
    fn default() -> Self {
        Self {
            leaves: FxHashMap::default(),
        }
    }
}

impl<Real: FloatExt> ReprBoard<Real> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The leaf registered for `variable`.
    pub fn get(&self, variable: &Variable<Real>) -> Result<&Repr<Real>, EvalError> {
        self.leaves
            .get(&variable.id())
            .ok_or_else(|| unassigned(variable))
    }

    pub fn has(&self, variable: &Variable<Real>) -> bool {
        self.leaves.contains_key(&variable.id())
    }

    pub fn set(&mut self, variable: &Variable<Real>, leaf: Repr<Real>) {
        self.leaves.insert(variable.id(), leaf);
    }

    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }
}

impl<Real: FloatExt> FromIterator<(Variable<Real>, Repr<Real>)> for ReprBoard<Real> {
    fn from_iter<I: IntoIterator<Item = (Variable<Real>, Repr<Real>)>>(iter: I) -> Self {
        let mut board = Self::new();
        for (variable, leaf) in iter {
            board.set(&variable, leaf);
        }
        board
    }
}
