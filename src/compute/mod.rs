//! Evaluates the constant graph.
pub mod engine;
pub mod inputs;
pub mod ledger;

pub use engine::Engine;
pub use inputs::Inputs;
pub use ledger::Ledger;
