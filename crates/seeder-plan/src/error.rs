//! Error types for plan validation and output lookup.

use thiserror::Error;

use crate::step::StepKey;

/// Errors that can occur while building or executing a plan.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// Two steps share a key.
    #[error("duplicate step: {0}")]
    DuplicateStep(StepKey),

    /// A step references a key no step declares.
    #[error("step {step} depends on unknown step {dependency}")]
    UnknownDependency {
        /// Step holding the reference.
        step: StepKey,
        /// Key that was not found.
        dependency: StepKey,
    },

    /// Dependency cycle detected; keys are listed in dependency order.
    #[error("dependency cycle detected: {}", format_cycle(.0))]
    DependencyCycle(Vec<StepKey>),

    /// A step's input has not been produced.
    #[error("no output recorded for step {0}")]
    MissingOutput(StepKey),

    /// A step's input was produced by a step of another kind.
    #[error("step {step} produced {found}, expected {expected}")]
    OutputKind {
        /// Step whose output was read.
        step: StepKey,
        /// Kind the reader needed.
        expected: &'static str,
        /// Kind actually stored.
        found: &'static str,
    },
}

fn format_cycle(keys: &[StepKey]) -> String {
    let mut parts: Vec<&str> = keys.iter().map(StepKey::as_str).collect();
    if let Some(first) = keys.first() {
        parts.push(first.as_str());
    }
    parts.join(" -> ")
}

/// Result type alias for plan operations.
pub type Result<T> = std::result::Result<T, PlanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_display_closes_the_loop() {
        let err = PlanError::DependencyCycle(vec!["a".into(), "b".into(), "c".into()]);
        assert_eq!(err.to_string(), "dependency cycle detected: a -> b -> c -> a");
    }

    #[test]
    fn test_unknown_dependency_display() {
        let err = PlanError::UnknownDependency {
            step: "order-service".into(),
            dependency: "microservice-template".into(),
        };
        assert_eq!(
            err.to_string(),
            "step order-service depends on unknown step microservice-template"
        );
    }
}
