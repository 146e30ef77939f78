//! Declarative build graph for the tracker seeder.
//!
//! The fixed demo entities (templates, components, interfaces, relations and
//! projects) are described as a [`BuildPlan`]: an arena of keyed steps whose
//! inputs name the steps producing them. [`PlanExecutor`] runs a plan in
//! topological order and reports an outcome per step.

pub mod demo;
pub mod error;
pub mod executor;
pub mod output;
pub mod plan;
pub mod step;

pub use demo::{demo_plan, PlanOptions};
pub use error::{PlanError, Result};
pub use executor::{PlanExecutor, PlanReport, StepOutcome, StepRecord};
pub use output::{Outputs, StepOutput};
pub use plan::BuildPlan;
pub use step::{Step, StepKey, StepKind};
