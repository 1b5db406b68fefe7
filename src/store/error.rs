//! Defines the error types for declaring, resolving and reading constants.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Constant '{name}' is already declared")]
    DuplicateName { name: String },
    #[error("Constant '{constant}' depends on '{dependency}', which is not declared")]
    UnknownDependency { constant: String, dependency: String },
    #[error("Cyclic dependency: {}", render_cycle(.cycle))]
    CyclicDependency { cycle: Vec<String> },
    #[error("Constant '{name}' has not been resolved")]
    UnresolvedName { name: String },
    #[error("Unknown constant '{name}'")]
    UnknownName { name: String },
    #[error("Formula for '{constant}' read '{dependency}' without declaring it")]
    UndeclaredDependency { constant: String, dependency: String },
    #[error("Cannot declare '{name}': the registry is already resolved")]
    Frozen { name: String },
}

pub type RegistryResult<T> = Result<T, RegistryError>;

/// `A -> B -> A`: the path closes back on its first name.
fn render_cycle(cycle: &[String]) -> String {
    match cycle.first() {
        Some(first) => {
            let mut path = cycle.join(" -> ");
            path.push_str(" -> ");
            path.push_str(first);
            path
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_message_closes_the_loop() {
        let err = RegistryError::CyclicDependency { cycle: vec!["A".into(), "B".into()] };
        assert_eq!(err.to_string(), "Cyclic dependency: A -> B -> A");
    }

    #[test]
    fn test_self_cycle_message() {
        let err = RegistryError::CyclicDependency { cycle: vec!["A".into()] };
        assert_eq!(err.to_string(), "Cyclic dependency: A -> A");
    }
}
