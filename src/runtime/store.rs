use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::parser::{Natural, VarId};

/// Id of the designated output variable
pub const OUTPUT: VarId = 0;

/// Numbered variables of a running program
///
/// Entries are created lazily on first read or write. Reads and writes require
/// at least one entry to exist; the output variable `x0` is the usual seed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableStore {
    variables: BTreeMap<VarId, Natural>,
}

impl VariableStore {
    /// Creates an empty store
    pub fn new() -> Self {
        VariableStore::default()
    }

    /// Creates a store holding only `x0 = 0`
    pub fn with_output() -> Self {
        let mut store = VariableStore::new();
        store.add_variable(OUTPUT);
        store
    }

    /// Creates a store with `x0 = 0` and `inputs` bound to `x1, x2, ...`
    pub fn from_inputs(inputs: &[Natural]) -> Self {
        let mut store = VariableStore::with_output();
        for (id, value) in (1..).zip(inputs) {
            store.variables.insert(id, *value);
        }
        store
    }

    /// Ensures `id` exists with value 0; existing entries are left untouched
    pub fn add_variable(&mut self, id: VarId) {
        if self.variables.contains_key(&id) {
            tracing::warn!(id, "variable x{} already allocated", id);
            return;
        }
        self.variables.insert(id, 0);
    }

    /// Value of `id`, creating it as 0 if absent
    pub fn get_value(&mut self, id: VarId) -> Result<Natural> {
        if self.variables.is_empty() {
            return Err(Error::EmptyStore);
        }
        Ok(*self.variables.entry(id).or_insert(0))
    }

    /// Stores `value` into `id`, creating it if absent
    pub fn set_value(&mut self, id: VarId, value: Natural) -> Result<()> {
        if self.variables.is_empty() {
            return Err(Error::EmptyStore);
        }
        self.variables.insert(id, value);
        Ok(())
    }

    /// Value of `x0`, or 0 if it was never created
    pub fn output(&self) -> Natural {
        self.variables.get(&OUTPUT).copied().unwrap_or(0)
    }

    /// Value of `id` without creating it
    pub fn peek(&self, id: VarId) -> Option<Natural> {
        self.variables.get(&id).copied()
    }

    /// Number of allocated variables
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// True if no variable was allocated yet
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Variables in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = (VarId, Natural)> + '_ {
        self.variables.iter().map(|(id, value)| (*id, *value))
    }
}
