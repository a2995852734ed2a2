use crate::repr::Repr;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

static NEXT_VARIABLE_ID: AtomicU64 = AtomicU64::new(0);

/// Opaque identity of a [`Variable`], issued once at creation.
///
/// Boards are keyed on this handle, so two variables that happen to share a
/// name never alias each other.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VariableId(u64);

impl VariableId {
    fn next() -> Self {
        Self(NEXT_VARIABLE_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw value of this handle.
    pub const fn index(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for VariableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Var({})", self.0)
    }
}

impl fmt::Display for VariableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

struct VariableData<Real> {
    id: VariableId,
    name: String,
    subscript: Option<String>,
    description: Option<String>,
    unit: Option<Repr<Real>>,
}

/// A named input to an expression.
///
/// Cloning is cheap and preserves identity: clones compare equal, while two
/// separately created variables never do, whatever their names.
pub struct Variable<Real> {
    data: Arc<VariableData<Real>>,
}

/// Create an undecorated variable.
pub fn var<Real>(name: impl Into<String>) -> Variable<Real> {
    Variable::new(name)
}

impl<Real> Variable<Real> {
    pub fn new(name: impl Into<String>) -> Self {
        Self::builder(name).build()
    }

    /// Start configuring a decorated variable.
    pub fn builder(name: impl Into<String>) -> VariableBuilder<Real> {
        VariableBuilder {
            name: name.into(),
            subscript: None,
            description: None,
            unit: None,
        }
    }

    pub fn id(&self) -> VariableId {
        self.data.id
    }

    pub fn name(&self) -> &str {
        &self.data.name
    }

    pub fn subscript(&self) -> Option<&str> {
        self.data.subscript.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.data.description.as_deref()
    }

    pub fn unit(&self) -> Option<&Repr<Real>> {
        self.data.unit.as_ref()
    }
}

impl<Real> Clone for Variable<Real> {
    fn clone(&self) -> Self {
        Self {
            data: Arc::clone(&self.data),
        }
    }
}

impl<Real> PartialEq for Variable<Real> {
    fn eq(&self, other: &Self) -> bool {
        self.data.id == other.data.id
    }
}

impl<Real> Eq for Variable<Real> {}

impl<Real> Hash for Variable<Real> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.id.hash(state);
    }
}

impl<Real> fmt::Debug for Variable<Real> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.data.name, self.data.id)
    }
}

impl<Real> fmt::Display for Variable<Real> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.data.subscript {
            Some(subscript) => write!(f, "{}_{}", self.data.name, subscript),
            None => f.write_str(&self.data.name),
        }
    }
}

/// Decoration for a [`Variable`] before it is finalized.
///
/// None of these fields take part in evaluation or representation.
pub struct VariableBuilder<Real> {
    name: String,
    subscript: Option<String>,
    description: Option<String>,
    unit: Option<Repr<Real>>,
}

impl<Real> VariableBuilder<Real> {
    pub fn subscript(mut self, subscript: impl Into<String>) -> Self {
        self.subscript = Some(subscript.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn unit(mut self, unit: Repr<Real>) -> Self {
        self.unit = Some(unit);
        self
    }

    /// Issue a fresh identity and freeze the variable.
    pub fn build(self) -> Variable<Real> {
        Variable {
            data: Arc::new(VariableData {
                id: VariableId::next(),
                name: self.name,
                subscript: self.subscript,
                description: self.description,
                unit: self.unit,
            }),
        }
    }
}
