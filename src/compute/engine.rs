//! A synchronous, single-threaded evaluation pass over a sorted entry list.
use super::inputs::Inputs;
use super::ledger::Ledger;
use crate::store::{ConstantRegistry, Definition, EntryId, RegistryResult};
use tracing::trace;

pub struct Engine<'a> {
    registry: &'a ConstantRegistry,
}

impl<'a> Engine<'a> {
    pub fn new(registry: &'a ConstantRegistry) -> Self {
        Self { registry }
    }

    /// Evaluates `order` into a fresh ledger.
    ///
    /// `order` must list every dependency before its dependents. Base entries are
    /// copied verbatim; each formula runs once, reading only what is already in the
    /// ledger. The first formula error aborts the pass and the partial ledger is dropped.
    pub fn run(&self, order: &[EntryId]) -> RegistryResult<Ledger> {
        let mut ledger = Ledger::with_capacity(self.registry.len());

        for &id in order {
            let value = match &self.registry.definitions[id.index()] {
                Definition::Literal(value) => value.clone(),
                Definition::Formula(formula) => {
                    let inputs = Inputs::new(self.registry, id, &ledger);
                    let value = formula(&inputs)?;
                    trace!(constant = inputs.constant(), value = value.value(), unit = value.unit(), "evaluated formula");
                    value
                }
            };
            ledger.insert(id, value);
        }

        Ok(ledger)
    }
}
