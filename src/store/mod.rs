//! Owns the declared constants and their resolved values.
pub mod error;
pub mod links;
pub mod registry;
pub mod snapshot;
pub mod types;

pub use error::{RegistryError, RegistryResult};
pub use links::DependencyLinks;
pub use registry::ConstantRegistry;
pub use snapshot::{RegistrySnapshot, SnapshotEntry};
pub use types::{ConstantKind, ConstantValue, Definition, EntryId, Formula};
