//! Random draws over any `rand::Rng`.
//!
//! None of these helpers consume randomness when there is nothing to choose
//! from, so the sequence of draws only depends on what actually gets picked.

use rand::Rng;

use seeder_models::{IssueStateId, IssueTemplate, IssueTypeId};

use crate::config::GeneratorConfig;
use crate::error::{GenerationError, Result};

/// Picks a uniformly random element, or `None` for an empty slice.
pub fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        None
    } else {
        Some(&items[rng.gen_range(0..items.len())])
    }
}

/// Returns true with probability `p`: a uniform draw in `[0, 1)` exceeding
/// `1 - p`.
pub fn chance<R: Rng + ?Sized>(rng: &mut R, p: f64) -> bool {
    rng.gen::<f64>() > 1.0 - p
}

/// The random parts of a new issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueDraw {
    pub title: String,
    pub state: IssueStateId,
    pub issue_type: IssueTypeId,
}

/// Draws title suffix, state and type, in that order.
pub fn draw_issue<R: Rng + ?Sized>(
    rng: &mut R,
    template: &IssueTemplate,
    config: &GeneratorConfig,
) -> Result<IssueDraw> {
    let suffix = rng.gen_range(1..=config.title_suffix_max);
    let state = pick(rng, &template.issue_states)
        .ok_or(GenerationError::EmptyOptions("issue states"))?
        .clone();
    let issue_type = pick(rng, &template.issue_types)
        .ok_or(GenerationError::EmptyOptions("issue types"))?
        .clone();
    Ok(IssueDraw {
        title: format!("Test Issue {}", suffix),
        state,
        issue_type,
    })
}

/// Chooses which earlier comment a new comment answers, as an index into the
/// `existing` comments of the same issue. No draw happens while the issue has
/// no comments yet.
pub fn pick_answer_target<R: Rng + ?Sized>(rng: &mut R, existing: usize, p: f64) -> Option<usize> {
    if existing == 0 || !chance(rng, p) {
        return None;
    }
    Some(rng.gen_range(0..existing))
}
