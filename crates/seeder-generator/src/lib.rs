//! Randomized issue data for the tracker seeder.
//!
//! Given a resolved issue template, labels and users, [`IssueGenerator`]
//! creates issues on every component with random labels, assignments and
//! threaded comments, then relates random pairs of the created issues. All
//! randomness flows through an injected `rand::Rng`.

pub mod config;
pub mod draw;
pub mod error;
pub mod generator;

pub use config::{GeneratorConfig, MAX_COMMENTS, MAX_ISSUE_COUNT};
pub use draw::{chance, draw_issue, pick, pick_answer_target, IssueDraw};
pub use error::{GenerationError, Result};
pub use generator::{
    GeneratedAssignment, GeneratedComment, GeneratedIssue, GenerationFailure, IssueGenerator,
    IssueRelationRecord,
};
