//! Run configuration.

use seeder_generator::GeneratorConfig;
use seeder_plan::PlanOptions;

use crate::error::Result;

/// Everything that shapes a seeding run.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedConfig {
    /// Copies of the component/relation/project graph.
    pub project_count: usize,
    /// Whether component relations are created.
    pub include_relations: bool,
    /// Seed of the random source; wall-clock time when unset.
    pub seed: Option<u64>,
    /// Abort on the first failed build step.
    pub fail_fast: bool,
    /// Issue generation settings, including the issue count per component.
    pub generator: GeneratorConfig,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            project_count: 1,
            include_relations: true,
            seed: None,
            fail_fast: false,
            generator: GeneratorConfig::default(),
        }
    }
}

impl SeedConfig {
    pub fn with_issue_count(mut self, count: usize) -> Self {
        self.generator.issue_count = count;
        self
    }

    pub fn with_project_count(mut self, count: usize) -> Self {
        self.project_count = count;
        self
    }

    pub fn with_relations(mut self, include: bool) -> Self {
        self.include_relations = include;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    pub fn with_generator(mut self, generator: GeneratorConfig) -> Self {
        self.generator = generator;
        self
    }

    /// Issues created per listed component.
    pub fn issue_count(&self) -> usize {
        self.generator.issue_count
    }

    /// Shape of the build plan.
    pub fn plan_options(&self) -> PlanOptions {
        PlanOptions::default()
            .with_project_count(self.project_count)
            .with_relations(self.include_relations)
    }

    pub fn validate(&self) -> Result<()> {
        self.generator.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SeedConfig::default();
        assert_eq!(config.issue_count(), 10);
        assert_eq!(config.project_count, 1);
        assert!(config.include_relations);
        assert!(config.seed.is_none());
        assert!(!config.fail_fast);
    }

    #[test]
    fn test_builder() {
        let config = SeedConfig::default()
            .with_issue_count(3)
            .with_project_count(2)
            .with_relations(false)
            .with_seed(42);
        assert_eq!(config.generator.issue_count, 3);
        assert_eq!(config.seed, Some(42));

        let options = config.plan_options();
        assert_eq!(options.project_count, 2);
        assert!(!options.include_relations);
    }

    #[test]
    fn test_validate_checks_generator() {
        let config = SeedConfig::default()
            .with_generator(GeneratorConfig::default().with_assignment_probability(-0.1));
        assert!(config.validate().is_err());
    }
}
