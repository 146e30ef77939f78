//! The fixed demo graph.

use seeder_models::catalog::{self, COMPONENTS, PROJECT, RELATIONS};

use crate::plan::BuildPlan;
use crate::step::{StepKey, StepKind};

/// Shape of the demo plan.
#[derive(Debug, Clone)]
pub struct PlanOptions {
    /// Number of copies of the component/relation/project graph.
    pub project_count: usize,
    /// Whether the component relations are created.
    pub include_relations: bool,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            project_count: 1,
            include_relations: true,
        }
    }
}

impl PlanOptions {
    pub fn with_project_count(mut self, count: usize) -> Self {
        self.project_count = count;
        self
    }

    pub fn with_relations(mut self, include: bool) -> Self {
        self.include_relations = include;
        self
    }
}

/// Key of a component step in the `n`-th project graph.
pub fn component_key(component: &str, n: usize) -> StepKey {
    StepKey::suffixed(component, n)
}

/// Key of the project step of the `n`-th project graph.
pub fn project_key(n: usize) -> StepKey {
    StepKey::suffixed(PROJECT.key, n)
}

/// Key of the default issue template step.
pub fn default_issue_template_key() -> StepKey {
    StepKey::new(catalog::DEFAULT_ISSUE_TEMPLATE)
}

/// Builds the demo plan: shared templates first, then one component graph
/// per project.
pub fn demo_plan(options: &PlanOptions) -> BuildPlan {
    let mut plan = BuildPlan::new();

    for def in catalog::COMPONENT_TEMPLATES {
        plan.add(def.key, StepKind::ComponentTemplate { def });
    }
    for def in catalog::INTERFACE_TEMPLATES {
        plan.add(
            def.key,
            StepKind::InterfaceTemplate {
                def,
                component_templates: def.component_templates.iter().map(|&k| k.into()).collect(),
            },
        );
    }
    for def in catalog::RELATION_TEMPLATES {
        plan.add(
            def.key,
            StepKind::RelationTemplate {
                def,
                from: def.from.into(),
                to: def.to.into(),
            },
        );
    }
    for def in catalog::ISSUE_TEMPLATES {
        plan.add(def.key, StepKind::IssueTemplate { def });
    }

    for n in 0..options.project_count {
        add_project_graph(&mut plan, n, options.include_relations);
    }

    plan
}

fn add_project_graph(plan: &mut BuildPlan, n: usize, include_relations: bool) {
    for def in COMPONENTS {
        let component = component_key(def.key, n);
        plan.add(
            component.clone(),
            StepKind::Component {
                def,
                template: def.template.into(),
            },
        );

        if let Some(interface) = def.interface {
            let specification = StepKey::suffixed(&format!("{}/interface", def.key), n);
            plan.add(
                specification.clone(),
                StepKind::InterfaceSpecification {
                    def: interface,
                    component: component.clone(),
                    template: interface.template.into(),
                },
            );
            plan.add(
                StepKey::suffixed(&format!("{}/interface/attach", def.key), n),
                StepKind::AttachInterfaces {
                    specification,
                    component,
                },
            );
        }
    }

    if include_relations {
        for relation in RELATIONS {
            plan.add(
                StepKey::suffixed(&format!("relation/{}->{}", relation.start, relation.end), n),
                StepKind::Relation {
                    start: component_key(relation.start, n),
                    end: component_key(relation.end, n),
                    template: relation.template.into(),
                },
            );
        }
    }

    let project = project_key(n);
    plan.add(project.clone(), StepKind::Project { def: &PROJECT });
    for def in COMPONENTS {
        plan.add(
            StepKey::suffixed(&format!("{}/{}", PROJECT.key, def.key), n),
            StepKind::AddToProject {
                project: project.clone(),
                component: component_key(def.key, n),
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_plan_counts() {
        let plan = demo_plan(&PlanOptions::default());
        assert!(plan.validate().is_ok());
        assert_eq!(plan.count_of("component-template"), 3);
        assert_eq!(plan.count_of("interface-template"), 1);
        assert_eq!(plan.count_of("relation-template"), 3);
        assert_eq!(plan.count_of("issue-template"), 3);
        assert_eq!(plan.count_of("component"), 7);
        assert_eq!(plan.count_of("interface-specification"), 3);
        assert_eq!(plan.count_of("attach-interfaces"), 3);
        assert_eq!(plan.count_of("relation"), 8);
        assert_eq!(plan.count_of("project"), 1);
        assert_eq!(plan.count_of("add-to-project"), 7);
    }

    #[test]
    fn test_demo_plan_runs_in_declaration_order() {
        let plan = demo_plan(&PlanOptions::default());
        let order: Vec<_> = plan.topological_order().unwrap().iter().map(|s| &s.key).collect();
        let declared: Vec<_> = plan.steps().iter().map(|s| &s.key).collect();
        assert_eq!(order, declared);
    }

    #[test]
    fn test_multiple_projects_suffix_keys() {
        let plan = demo_plan(&PlanOptions::default().with_project_count(3));
        assert!(plan.validate().is_ok());
        assert_eq!(plan.count_of("component"), 21);
        assert_eq!(plan.count_of("project"), 3);
        assert!(plan.get(&"order-service#2".into()).is_some());
        assert!(plan.get(&"test-project#1".into()).is_some());
        // Templates are shared.
        assert_eq!(plan.count_of("component-template"), 3);
    }

    #[test]
    fn test_relations_can_be_skipped() {
        let plan = demo_plan(&PlanOptions::default().with_relations(false));
        assert!(plan.validate().is_ok());
        assert_eq!(plan.count_of("relation"), 0);
        assert_eq!(plan.count_of("relation-template"), 3);
    }

    #[test]
    fn test_zero_projects_only_creates_templates() {
        let plan = demo_plan(&PlanOptions::default().with_project_count(0));
        assert_eq!(plan.len(), 10);
    }
}
