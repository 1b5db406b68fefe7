use crate::compute::Inputs;
use super::error::RegistryResult;
use serde::{Serialize, Deserialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct EntryId(pub u32);

impl EntryId {
    #[inline(always)]
    pub fn index(&self) -> usize { self.0 as usize }
    pub fn new(idx: usize) -> Self { Self(idx as u32) }
}

/// One physical constant: a magnitude and an opaque unit label.
///
/// The unit is never parsed. It may be empty (dimensionless) or carry a
/// non-ASCII symbol such as `Ω`. Non-finite magnitudes are stored as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstantValue {
    value: f64,
    unit: String,
}

impl ConstantValue {
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self { value, unit: unit.into() }
    }

    #[inline(always)]
    pub fn value(&self) -> f64 { self.value }
    pub fn unit(&self) -> &str { &self.unit }
    pub fn is_dimensionless(&self) -> bool { self.unit.is_empty() }
}

impl fmt::Display for ConstantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let options = crate::display::FormatOptions::default();
        f.write_str(&crate::display::format_constant(self, &options))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConstantKind {
    /// Measured or defined literal, always a leaf of the dependency graph.
    Base,
    /// Computed from other named entries by a formula.
    Derived,
}

/// A derivation function. It receives a resolver restricted to the entry's
/// declared dependencies and must be a pure function of them.
pub type Formula = Box<dyn Fn(&Inputs<'_>) -> RegistryResult<ConstantValue> + Send + Sync>;

pub enum Definition {
    Literal(ConstantValue),
    Formula(Formula),
}

impl Definition {
    pub fn kind(&self) -> ConstantKind {
        match self {
            Definition::Literal(_) => ConstantKind::Base,
            Definition::Formula(_) => ConstantKind::Derived,
        }
    }
}

impl fmt::Debug for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Definition::Literal(v) => f.debug_tuple("Literal").field(v).finish(),
            Definition::Formula(_) => f.write_str("Formula(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_requires_value_and_unit() {
        let a = ConstantValue::new(1.0, "m");
        assert_eq!(a, ConstantValue::new(1.0, "m"));
        assert_ne!(a, ConstantValue::new(1.0, "s"));
        assert_ne!(a, ConstantValue::new(2.0, "m"));
    }

    #[test]
    fn test_accepts_any_unit_and_non_finite_values() {
        let ohm = ConstantValue::new(25812.80745, "\u{03A9}");
        assert_eq!(ohm.unit(), "Ω");

        let empty = ConstantValue::new(f64::INFINITY, "");
        assert!(empty.is_dimensionless());
        assert!(empty.value().is_infinite());

        let nan = ConstantValue::new(f64::NAN, "kg");
        assert!(nan.value().is_nan());
    }

    #[test]
    fn test_definition_kind() {
        let lit = Definition::Literal(ConstantValue::new(1.0, ""));
        let formula: Formula = Box::new(|_: &Inputs<'_>| Ok(ConstantValue::new(0.0, "")));
        assert_eq!(lit.kind(), ConstantKind::Base);
        assert_eq!(Definition::Formula(formula).kind(), ConstantKind::Derived);
    }
}
