//! A registry of physical constants.
//!
//! Base constants are literal values; derived constants are computed from other
//! entries by formulas and resolved once, dependencies first. The reference
//! catalog lives in [`catalog`]; [`catalog::global`] returns the shared instance.

pub mod analysis;
pub mod catalog;
pub mod compute;
pub mod display;
pub mod store;

#[cfg(feature = "python")]
mod bindings {
    pub mod python;
}

pub use compute::Inputs;
pub use display::{format_constant, FormatOptions};
pub use store::{
    ConstantKind, ConstantRegistry, ConstantValue, RegistryError, RegistryResult, RegistrySnapshot,
};
