//! End-to-end seeding run for the tracker.
//!
//! A [`Seeder`] provisions users, executes the demo build plan, lists the
//! components, creates labels, and generates issues and issue relations,
//! returning a [`RunSummary`] of everything it created and every call that
//! failed.

pub mod config;
pub mod error;
pub mod seeder;
pub mod summary;

pub use config::SeedConfig;
pub use error::{Result, SeedError};
pub use seeder::Seeder;
pub use summary::{IssueTotals, PlanSummary, RunSummary, UserFailure};
