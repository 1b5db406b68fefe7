use super::error::{RegistryError, RegistryResult};
use super::links::DependencyLinks;
use super::types::*;
use crate::analysis::topology::{self, Cycle};
use crate::compute::{Engine, Inputs, Ledger};
use smallvec::SmallVec;
use std::borrow::Cow;
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// The closed catalog of base and derived constants.
///
/// Lifecycle is phased: declare every entry, call [`resolve`](Self::resolve) once,
/// then read. After a successful resolve the registry is frozen and every read is a
/// plain lookup, so a shared reference can be handed to any number of threads.
#[derive(Debug, Default)]
pub struct ConstantRegistry {
    // Columnar Arrays (indexed by EntryId, declaration order)
    pub(crate) names: Vec<String>,
    pub(crate) definitions: Vec<Definition>,
    pub(crate) depends_on: Vec<SmallVec<[String; 4]>>,

    pub(crate) index: HashMap<String, EntryId>,

    // Populated by a successful resolve
    ledger: Ledger,
    links: Option<DependencyLinks>,
    resolved: bool,
}

impl ConstantRegistry {
    pub fn new() -> Self { Self::default() }
    pub fn len(&self) -> usize { self.names.len() }
    pub fn is_empty(&self) -> bool { self.names.is_empty() }
    pub fn is_resolved(&self) -> bool { self.resolved }

    /// Registers a literal (measured or defined) constant.
    pub fn declare_base(
        &mut self,
        name: impl Into<String>,
        value: f64,
        unit: impl Into<String>,
    ) -> RegistryResult<EntryId> {
        let name = name.into();
        let literal = ConstantValue::new(value, unit);
        debug!(constant = %name, value, unit = literal.unit(), "declared base constant");
        self.push_entry(name, Definition::Literal(literal), SmallVec::new())
    }

    /// Registers a constant computed by `formula` from the entries named in `depends_on`.
    ///
    /// Dependencies may name entries declared later; they are linked by
    /// [`validate`](Self::validate), which [`resolve`](Self::resolve) runs first.
    pub fn declare_derived<F>(
        &mut self,
        name: impl Into<String>,
        depends_on: &[&str],
        formula: F,
    ) -> RegistryResult<EntryId>
    where
        F: Fn(&Inputs<'_>) -> RegistryResult<ConstantValue> + Send + Sync + 'static,
    {
        let name = name.into();
        debug!(constant = %name, depends_on = ?depends_on, "declared derived constant");
        let deps = depends_on.iter().map(|d| d.to_string()).collect();
        self.push_entry(name, Definition::Formula(Box::new(formula)), deps)
    }

    fn push_entry(
        &mut self,
        name: String,
        definition: Definition,
        deps: SmallVec<[String; 4]>,
    ) -> RegistryResult<EntryId> {
        if self.resolved {
            return Err(RegistryError::Frozen { name });
        }
        if self.index.contains_key(&name) {
            return Err(RegistryError::DuplicateName { name });
        }

        let id = EntryId::new(self.names.len());
        self.index.insert(name.clone(), id);
        self.names.push(name);
        self.definitions.push(definition);
        self.depends_on.push(deps);
        Ok(id)
    }

    /// Links every dependency name to a declared entry.
    pub fn validate(&self) -> RegistryResult<DependencyLinks> {
        DependencyLinks::build(&self.names, &self.depends_on, &self.index)
    }

    /// Computes every derived constant exactly once, dependencies first.
    ///
    /// Idempotent: once it has succeeded, later calls return immediately without
    /// re-running any formula. On failure nothing is cached.
    pub fn resolve(&mut self) -> RegistryResult<()> {
        if self.resolved {
            debug!("registry already resolved");
            return Ok(());
        }

        match self.try_resolve() {
            Ok((ledger, links)) => {
                self.ledger = ledger;
                self.links = Some(links);
                self.resolved = true;
                info!(constants = self.len(), "constant registry resolved");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "constant registry failed to resolve");
                Err(e)
            }
        }
    }

    fn try_resolve(&self) -> RegistryResult<(Ledger, DependencyLinks)> {
        let links = self.validate()?;
        let order = topology::sort(&links).map_err(|cycle| self.cycle_error(cycle))?;
        let ledger = Engine::new(self).run(&order)?;
        Ok((ledger, links))
    }

    fn cycle_error(&self, Cycle(path): Cycle) -> RegistryError {
        RegistryError::CyclicDependency {
            cycle: path.into_iter().map(|id| self.names[id.index()].clone()).collect(),
        }
    }

    // --- Accessors ---

    pub fn id_of(&self, name: &str) -> RegistryResult<EntryId> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| RegistryError::UnknownName { name: name.to_string() })
    }

    /// The resolved value of `name`.
    pub fn get(&self, name: &str) -> RegistryResult<&ConstantValue> {
        let id = self.id_of(name)?;
        self.ledger
            .get(id)
            .ok_or_else(|| RegistryError::UnresolvedName { name: name.to_string() })
    }

    pub fn kind(&self, name: &str) -> RegistryResult<ConstantKind> {
        Ok(self.definitions[self.id_of(name)?.index()].kind())
    }

    /// Declared dependencies of `name`, in declared order. Empty for base constants.
    pub fn depends_on(&self, name: &str) -> RegistryResult<&[String]> {
        Ok(&self.depends_on[self.id_of(name)?.index()])
    }

    /// All declared names in declaration order. Call again to restart.
    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }

    /// `(name, value)` pairs in declaration order.
    /// Fails on the first unresolved name.
    pub fn iter(&self) -> impl Iterator<Item = RegistryResult<(&str, &ConstantValue)>> + '_ {
        self.names().map(move |name| self.get(name).map(|v| (name, v)))
    }

    /// Links of a resolved registry, or a fresh validation pass before that.
    pub fn links(&self) -> RegistryResult<Cow<'_, DependencyLinks>> {
        match &self.links {
            Some(links) => Ok(Cow::Borrowed(links)),
            None => self.validate().map(Cow::Owned),
        }
    }

    /// Transitive dependencies of `name`, in declaration order.
    pub fn dependencies_of(&self, name: &str) -> RegistryResult<Vec<&str>> {
        let id = self.id_of(name)?;
        let links = self.links()?;
        Ok(self.names_for(&topology::upstream_from(&links, id)))
    }

    /// Every constant that transitively depends on `name`, in declaration order.
    pub fn dependents_of(&self, name: &str) -> RegistryResult<Vec<&str>> {
        let id = self.id_of(name)?;
        let links = self.links()?;
        Ok(self.names_for(&topology::downstream_from(&links, id)))
    }

    fn names_for(&self, ids: &[EntryId]) -> Vec<&str> {
        ids.iter().map(|id| self.names[id.index()].as_str()).collect()
    }
}
