//! The resolver handed to a formula while it is evaluated.

use super::ledger::Ledger;
use crate::store::{ConstantRegistry, ConstantValue, EntryId, RegistryError, RegistryResult};

/// Read access to the already-resolved dependencies of one derived constant.
///
/// Lookups are restricted to the names the constant declared in `depends_on`;
/// anything else fails with [`RegistryError::UndeclaredDependency`].
pub struct Inputs<'a> {
    registry: &'a ConstantRegistry,
    constant: EntryId,
    ledger: &'a Ledger,
}

impl<'a> Inputs<'a> {
    pub(crate) fn new(registry: &'a ConstantRegistry, constant: EntryId, ledger: &'a Ledger) -> Self {
        Self { registry, constant, ledger }
    }

    /// Name of the constant being computed.
    pub fn constant(&self) -> &'a str { &self.registry.names[self.constant.index()] }

    pub fn get(&self, name: &str) -> RegistryResult<&'a ConstantValue> {
        let declared = &self.registry.depends_on[self.constant.index()];
        if !declared.iter().any(|d| d == name) {
            return Err(RegistryError::UndeclaredDependency {
                constant: self.constant().to_string(),
                dependency: name.to_string(),
            });
        }

        let id = self.registry.id_of(name)?;
        self.ledger
            .get(id)
            .ok_or_else(|| RegistryError::UnresolvedName { name: name.to_string() })
    }

    /// Shorthand for `get(name)?.value()`.
    pub fn value(&self, name: &str) -> RegistryResult<f64> {
        self.get(name).map(ConstantValue::value)
    }
}
