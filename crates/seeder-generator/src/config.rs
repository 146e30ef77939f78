//! Generator configuration.

use crate::error::{GenerationError, Result};

/// Largest accepted number of issues per component.
pub const MAX_ISSUE_COUNT: usize = 10_000;

/// Largest accepted upper bound of comments per issue.
pub const MAX_COMMENTS: usize = 1_000;

/// Knobs of the issue generator.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Issues created per component.
    pub issue_count: usize,
    /// Chance that each label is attached to an issue.
    pub label_probability: f64,
    /// Chance that each user is assigned to an issue.
    pub assignment_probability: f64,
    /// Upper bound (inclusive) of comments per issue.
    pub max_comments: usize,
    /// Chance that a comment answers an earlier one, once one exists.
    pub answer_probability: f64,
    /// Upper bound (inclusive) of the number in "Test Issue N".
    pub title_suffix_max: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            issue_count: 10,
            label_probability: 0.4,
            assignment_probability: 0.5,
            max_comments: 10,
            answer_probability: 0.5,
            title_suffix_max: 1000,
        }
    }
}

impl GeneratorConfig {
    pub fn with_issue_count(mut self, count: usize) -> Self {
        self.issue_count = count;
        self
    }

    pub fn with_label_probability(mut self, p: f64) -> Self {
        self.label_probability = p;
        self
    }

    pub fn with_assignment_probability(mut self, p: f64) -> Self {
        self.assignment_probability = p;
        self
    }

    pub fn with_max_comments(mut self, max: usize) -> Self {
        self.max_comments = max;
        self
    }

    pub fn with_answer_probability(mut self, p: f64) -> Self {
        self.answer_probability = p;
        self
    }

    /// Checks probabilities lie in `[0, 1]`, counts stay within their limits
    /// and the title range is non-empty.
    pub fn validate(&self) -> Result<()> {
        if self.issue_count > MAX_ISSUE_COUNT {
            return Err(GenerationError::InvalidConfig(format!(
                "issue_count must be at most {}, got {}",
                MAX_ISSUE_COUNT, self.issue_count
            )));
        }
        if self.max_comments > MAX_COMMENTS {
            return Err(GenerationError::InvalidConfig(format!(
                "max_comments must be at most {}, got {}",
                MAX_COMMENTS, self.max_comments
            )));
        }
        for (name, p) in [
            ("label_probability", self.label_probability),
            ("assignment_probability", self.assignment_probability),
            ("answer_probability", self.answer_probability),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(GenerationError::InvalidConfig(format!(
                    "{} must be within [0, 1], got {}",
                    name, p
                )));
            }
        }
        if self.title_suffix_max == 0 {
            return Err(GenerationError::InvalidConfig(
                "title_suffix_max must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.issue_count, 10);
        assert_eq!(config.label_probability, 0.4);
        assert_eq!(config.max_comments, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_probability() {
        let config = GeneratorConfig::default().with_label_probability(1.5);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("label_probability"));

        let config = GeneratorConfig::default().with_answer_probability(f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_oversized_counts() {
        let config = GeneratorConfig::default().with_issue_count(usize::MAX / 4);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("issue_count"));

        let config = GeneratorConfig::default().with_max_comments(usize::MAX);
        assert!(config.validate().unwrap_err().to_string().contains("max_comments"));

        let config = GeneratorConfig::default()
            .with_issue_count(MAX_ISSUE_COUNT)
            .with_max_comments(MAX_COMMENTS);
        assert!(config.validate().is_ok());
    }
}
