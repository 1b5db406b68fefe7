//! The reference catalog of physical constants.
//!
//! [`build`] declares every base constant, then every derived one, and resolves.
//! [`global`] holds the process-wide instance: built on first use, never torn down.

pub mod base;
pub mod derived;
pub mod names;

use crate::store::{ConstantRegistry, RegistryResult};
use std::sync::OnceLock;
use tracing::info;

static CATALOG: OnceLock<RegistryResult<ConstantRegistry>> = OnceLock::new();

/// Builds and resolves a fresh registry holding the reference catalog.
pub fn build() -> RegistryResult<ConstantRegistry> {
    let mut registry = ConstantRegistry::new();
    base::declare_base_constants(&mut registry)?;
    derived::declare_derived_constants(&mut registry)?;
    registry.resolve()?;
    Ok(registry)
}

/// The shared, resolved reference catalog.
///
/// A failed build is kept and returned to every caller; the catalog is static
/// data, so there is nothing to retry.
pub fn global() -> RegistryResult<&'static ConstantRegistry> {
    CATALOG
        .get_or_init(|| {
            info!("loading reference constant catalog");
            build()
        })
        .as_ref()
        .map_err(Clone::clone)
}
