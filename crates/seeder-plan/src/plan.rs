//! BuildPlan - arena of steps with dependency edges.
//!
//! Steps live in a `Vec` in declaration order and are referred to by index;
//! edges are derived from the keys each step consumes. Ordering uses Kahn's
//! algorithm with a `BinaryHeap` of `Reverse(index)` so that, among ready
//! steps, the one declared first always runs first.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::error::{PlanError, Result};
use crate::step::{Step, StepKey, StepKind};

/// A declarative set of creation steps.
#[derive(Debug, Clone, Default)]
pub struct BuildPlan {
    steps: Vec<Step>,
}

impl BuildPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a step. Keys are checked by [`validate`](Self::validate).
    pub fn add(&mut self, key: impl Into<StepKey>, kind: StepKind) -> &mut Self {
        self.steps.push(Step::new(key, kind));
        self
    }

    /// Steps in declaration order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, key: &StepKey) -> Option<&Step> {
        self.steps.iter().find(|s| &s.key == key)
    }

    /// Number of steps of a given kind name.
    pub fn count_of(&self, kind: &str) -> usize {
        self.steps.iter().filter(|s| s.kind.name() == kind).count()
    }

    /// Checks keys are unique, every dependency exists, and the graph has no
    /// cycles.
    pub fn validate(&self) -> Result<()> {
        self.topological_order().map(|_| ())
    }

    /// Returns the steps in an order where every step comes after all the
    /// steps it depends on. Ties go to the step declared first.
    pub fn topological_order(&self) -> Result<Vec<&Step>> {
        let index = self.index()?;

        // dependents[i] = steps consuming the output of step i
        let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); self.steps.len()];
        let mut in_degree: Vec<usize> = vec![0; self.steps.len()];

        for (i, step) in self.steps.iter().enumerate() {
            let mut seen = HashSet::new();
            for dep in step.dependencies() {
                let j = *index.get(dep).ok_or_else(|| PlanError::UnknownDependency {
                    step: step.key.clone(),
                    dependency: dep.clone(),
                })?;
                // A step naming the same input twice still has one edge.
                if seen.insert(j) {
                    dependents[j].push(i);
                    in_degree[i] += 1;
                }
            }
        }

        let mut ready: BinaryHeap<Reverse<usize>> = in_degree
            .iter()
            .enumerate()
            .filter(|(_, d)| **d == 0)
            .map(|(i, _)| Reverse(i))
            .collect();

        let mut order = Vec::with_capacity(self.steps.len());
        while let Some(Reverse(i)) = ready.pop() {
            order.push(i);
            for &d in &dependents[i] {
                in_degree[d] -= 1;
                if in_degree[d] == 0 {
                    ready.push(Reverse(d));
                }
            }
        }

        if order.len() < self.steps.len() {
            return Err(PlanError::DependencyCycle(self.find_cycle(&index, &in_degree)));
        }

        Ok(order.into_iter().map(|i| &self.steps[i]).collect())
    }

    fn index(&self) -> Result<HashMap<&StepKey, usize>> {
        let mut index = HashMap::with_capacity(self.steps.len());
        for (i, step) in self.steps.iter().enumerate() {
            if index.insert(&step.key, i).is_some() {
                return Err(PlanError::DuplicateStep(step.key.clone()));
            }
        }
        Ok(index)
    }

    /// Walks dependencies among the steps Kahn's algorithm could not order
    /// until a step repeats; every such step has an unordered dependency, so
    /// the walk always closes a loop.
    fn find_cycle(&self, index: &HashMap<&StepKey, usize>, in_degree: &[usize]) -> Vec<StepKey> {
        let stuck = |i: usize| in_degree[i] > 0;
        let Some(start) = (0..self.steps.len()).find(|&i| stuck(i)) else {
            return Vec::new();
        };

        let mut path = vec![start];
        let mut position: HashMap<usize, usize> = HashMap::from([(start, 0)]);
        let mut current = start;
        loop {
            let next = self.steps[current]
                .dependencies()
                .into_iter()
                .filter_map(|dep| index.get(dep).copied())
                .find(|&j| stuck(j));
            let Some(next) = next else {
                return path.iter().map(|&i| self.steps[i].key.clone()).collect();
            };
            if let Some(&at) = position.get(&next) {
                // path[at..] follows dependencies backwards; report it in
                // dependency order.
                return path[at..]
                    .iter()
                    .rev()
                    .map(|&i| self.steps[i].key.clone())
                    .collect();
            }
            position.insert(next, path.len());
            path.push(next);
            current = next;
        }
    }
}
