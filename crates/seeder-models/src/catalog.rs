//! The fixed demo dataset.
//!
//! Everything the seeder creates that is not randomized is declared here as
//! plain data. Entities refer to each other through string keys; the build
//! plan turns those keys into dependency edges.

use serde::Serialize;

use crate::icons;

/// Key of the microservice component template.
pub const MICROSERVICE_TEMPLATE: &str = "microservice-template";
/// Key of the library component template.
pub const LIBRARY_TEMPLATE: &str = "library-template";
/// Key of the infrastructure component template.
pub const INFRASTRUCTURE_TEMPLATE: &str = "infrastructure-template";
/// Key of the REST interface specification template.
pub const REST_INTERFACE_TEMPLATE: &str = "rest-interface-template";
/// Key of the service-calls-service relation template.
pub const SERVICE_TO_SERVICE: &str = "service2service-relation-template";
/// Key of the service-includes-library relation template.
pub const SERVICE_TO_LIBRARY: &str = "microservice-includes-library-relation-template";
/// Key of the service-hosted-on-infrastructure relation template.
pub const SERVICE_TO_INFRASTRUCTURE: &str =
    "microservice-hosted-on-infrastructure-relation-template";
/// Key of the issue template the generator uses.
pub const DEFAULT_ISSUE_TEMPLATE: &str = "default-issue-template";

/// Shape a component template is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShapeType {
    Rect,
    Ellipse,
    Hexagon,
}

/// A component template and its version template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentTemplateDef {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub version_name: &'static str,
    pub version_description: &'static str,
    pub shape: ShapeType,
}

/// An interface specification template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterfaceTemplateDef {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Keys of the component templates the interface may appear on.
    pub component_templates: &'static [&'static str],
}

/// A relation template allowing edges from one component template to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelationTemplateDef {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub from: &'static str,
    pub to: &'static str,
}

/// Issue type option of an issue template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueTypeDef {
    pub name: &'static str,
    pub description: &'static str,
    pub icon_path: &'static str,
}

/// Issue state option of an issue template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueStateDef {
    pub name: &'static str,
    pub description: &'static str,
    pub is_open: bool,
}

/// Issue priority option of an issue template.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IssuePriorityDef {
    pub name: &'static str,
    pub description: &'static str,
    pub value: f64,
}

/// A plain named option (relation types, assignment types).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NamedOptionDef {
    pub name: &'static str,
    pub description: &'static str,
}

/// An issue template with all of its option sets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IssueTemplateDef {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub issue_types: &'static [IssueTypeDef],
    pub issue_states: &'static [IssueStateDef],
    pub issue_priorities: &'static [IssuePriorityDef],
    pub relation_types: &'static [NamedOptionDef],
    pub assignment_types: &'static [NamedOptionDef],
}

/// The single version a component is created with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionDef {
    pub version: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// An interface specification attached to a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterfaceSpecDef {
    pub name: &'static str,
    pub description: &'static str,
    /// Key of the interface specification template.
    pub template: &'static str,
    pub versions: &'static [&'static str],
    /// Parts every version carries.
    pub parts: &'static [&'static str],
}

/// A concrete component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentDef {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Key of the component template.
    pub template: &'static str,
    pub version: VersionDef,
    pub interface: Option<&'static InterfaceSpecDef>,
}

/// A directed relation between two components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelationDef {
    pub start: &'static str,
    pub end: &'static str,
    /// Key of the relation template.
    pub template: &'static str,
}

/// The project every component version is added to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectDef {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub repository_url: &'static str,
}

/// A label made available on every listed component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelDef {
    pub name: &'static str,
    pub description: &'static str,
    pub color: &'static str,
}

pub const COMPONENT_TEMPLATES: &[ComponentTemplateDef] = &[
    ComponentTemplateDef {
        key: MICROSERVICE_TEMPLATE,
        name: "microservice-template",
        description: "Microservice Template",
        version_name: "microservice-version-template",
        version_description: "Microservice Version Template",
        shape: ShapeType::Rect,
    },
    ComponentTemplateDef {
        key: LIBRARY_TEMPLATE,
        name: "library-template",
        description: "Library Template",
        version_name: "library-version-template",
        version_description: "Library Version Template",
        shape: ShapeType::Ellipse,
    },
    ComponentTemplateDef {
        key: INFRASTRUCTURE_TEMPLATE,
        name: "infrastructure-template",
        description: "Infrastructure Template",
        version_name: "infrastructure-version-template",
        version_description: "Infrastructure Version Template",
        shape: ShapeType::Hexagon,
    },
];

pub const INTERFACE_TEMPLATES: &[InterfaceTemplateDef] = &[InterfaceTemplateDef {
    key: REST_INTERFACE_TEMPLATE,
    name: "REST",
    description: "REST Api endpoint",
    component_templates: &[MICROSERVICE_TEMPLATE],
}];

pub const RELATION_TEMPLATES: &[RelationTemplateDef] = &[
    RelationTemplateDef {
        key: SERVICE_TO_SERVICE,
        name: "service2service-relation-template",
        description: "Service2Service Relation",
        from: MICROSERVICE_TEMPLATE,
        to: MICROSERVICE_TEMPLATE,
    },
    RelationTemplateDef {
        key: SERVICE_TO_LIBRARY,
        name: "microservice-includes-library-relation-template",
        description: "Microservice includes Library Relation",
        from: MICROSERVICE_TEMPLATE,
        to: LIBRARY_TEMPLATE,
    },
    RelationTemplateDef {
        key: SERVICE_TO_INFRASTRUCTURE,
        name: "microservice-hosted-on-infrastructure-relation-template",
        description: "Microservice hosted on Infrastructure Relation",
        from: MICROSERVICE_TEMPLATE,
        to: INFRASTRUCTURE_TEMPLATE,
    },
];

pub const ISSUE_TYPES: &[IssueTypeDef] = &[
    IssueTypeDef {
        name: "Bug",
        description: "A bug in the software",
        icon_path: icons::BUG,
    },
    IssueTypeDef {
        name: "Feature Request",
        description: "A feature request for the software",
        icon_path: icons::FEATURE_REQUEST,
    },
    IssueTypeDef {
        name: "Unclassified",
        description: "An unclassified issue",
        icon_path: icons::UNCLASSIFIED,
    },
];

pub const ISSUE_STATES: &[IssueStateDef] = &[
    IssueStateDef {
        name: "Open",
        description: "An open issue",
        is_open: true,
    },
    IssueStateDef {
        name: "Closed",
        description: "A closed issue",
        is_open: false,
    },
    IssueStateDef {
        name: "Not planned",
        description: "An issue that is not planned",
        is_open: false,
    },
];

pub const ISSUE_PRIORITIES: &[IssuePriorityDef] = &[
    IssuePriorityDef {
        name: "Low",
        description: "A low priority issue",
        value: 1.0,
    },
    IssuePriorityDef {
        name: "Medium",
        description: "A medium priority issue",
        value: 2.0,
    },
    IssuePriorityDef {
        name: "High",
        description: "A high priority issue",
        value: 3.0,
    },
];

pub const ISSUE_RELATION_TYPES: &[NamedOptionDef] = &[
    NamedOptionDef {
        name: "Depends on",
        description: "Issue depends on another issue",
    },
    NamedOptionDef {
        name: "Duplicates",
        description: "Issue duplicates another issue",
    },
];

pub const ASSIGNMENT_TYPES: &[NamedOptionDef] = &[
    NamedOptionDef {
        name: "Reviewer",
        description: "Issue reviewer",
    },
    NamedOptionDef {
        name: "Assignee",
        description: "Issue assignee",
    },
    NamedOptionDef {
        name: "Tester",
        description: "Issue tester",
    },
];

/// Default, secondary and empty issue templates, in creation order.
///
/// Only the default template feeds the generator. The secondary one gives the
/// tracker a second template with identical options and the empty one
/// exercises the no-options path on the server.
pub const ISSUE_TEMPLATES: &[IssueTemplateDef] = &[
    IssueTemplateDef {
        key: DEFAULT_ISSUE_TEMPLATE,
        name: "Default Issue Template",
        description: "Default issue template",
        issue_types: ISSUE_TYPES,
        issue_states: ISSUE_STATES,
        issue_priorities: ISSUE_PRIORITIES,
        relation_types: ISSUE_RELATION_TYPES,
        assignment_types: ASSIGNMENT_TYPES,
    },
    IssueTemplateDef {
        key: "secondary-issue-template",
        name: "Secondary Issue Template",
        description: "Secondary issue template",
        issue_types: ISSUE_TYPES,
        issue_states: ISSUE_STATES,
        issue_priorities: ISSUE_PRIORITIES,
        relation_types: ISSUE_RELATION_TYPES,
        assignment_types: ASSIGNMENT_TYPES,
    },
    IssueTemplateDef {
        key: "empty-issue-template",
        name: "Empty Issue Template",
        description: "Empty issue template",
        issue_types: &[],
        issue_states: &[],
        issue_priorities: &[],
        relation_types: &[],
        assignment_types: &[],
    },
];

pub const REST_INTERFACE: InterfaceSpecDef = InterfaceSpecDef {
    name: "REST",
    description: "REST API",
    template: REST_INTERFACE_TEMPLATE,
    versions: &["1.0", "1.1", "2.0"],
    parts: &["GET", "POST", "PUT", "DELETE"],
};

pub const COMPONENTS: &[ComponentDef] = &[
    ComponentDef {
        key: "order-service",
        name: "OrderService",
        description: "Service that manages the order",
        template: MICROSERVICE_TEMPLATE,
        version: VersionDef {
            version: "1.0",
            name: "order-service-v1.0",
            description: "Order Service v1.0",
        },
        interface: Some(&REST_INTERFACE),
    },
    ComponentDef {
        key: "shopping-cart-service",
        name: "ShoppingCartService",
        description: "Service that manages the shopping cart",
        template: MICROSERVICE_TEMPLATE,
        version: VersionDef {
            version: "1.0",
            name: "shopping-cart-service-v1.0",
            description: "Shopping Cart Service v1.0",
        },
        interface: Some(&REST_INTERFACE),
    },
    ComponentDef {
        key: "payment-service",
        name: "PaymentService",
        description: "Service that manages the payment",
        template: MICROSERVICE_TEMPLATE,
        version: VersionDef {
            version: "1.0",
            name: "payment-service-v1.0",
            description: "Payment Service v1.0",
        },
        interface: Some(&REST_INTERFACE),
    },
    ComponentDef {
        key: "express",
        name: "Express",
        description: "Fast, unopinionated, minimalist web framework for Node.js",
        template: LIBRARY_TEMPLATE,
        version: VersionDef {
            version: "4.17.1",
            name: "express-v4.17.1",
            description: "Express.js v4.17.1",
        },
        interface: None,
    },
    ComponentDef {
        key: "typeorm",
        name: "TypeORM",
        description: "ORM for TypeScript and JavaScript (ES7, ES6, ES5). Supports MySQL, \
                      PostgreSQL, MariaDB, SQLite, MS SQL Server, Oracle, WebSQL databases.",
        template: LIBRARY_TEMPLATE,
        version: VersionDef {
            version: "0.2.41",
            name: "typeorm-v0.2.41",
            description: "TypeORM v0.2.41",
        },
        interface: None,
    },
    ComponentDef {
        key: "winston",
        name: "Winston",
        description: "A logger for just about everything.",
        template: LIBRARY_TEMPLATE,
        version: VersionDef {
            version: "3.3.3",
            name: "winston-v3.3.3",
            description: "Winston v3.3.3",
        },
        interface: None,
    },
    ComponentDef {
        key: "kubernetes",
        name: "Kubernetes",
        description: "An open-source container-orchestration system for automating \
                      deployment, scaling, and management of containerized applications.",
        template: INFRASTRUCTURE_TEMPLATE,
        version: VersionDef {
            version: "1.22.0",
            name: "kubernetes-v1.22.0",
            description: "Kubernetes v1.22.0",
        },
        interface: None,
    },
];

/// Hand-specified component graph: 2 service calls, 4 library includes,
/// 2 hosting edges.
pub const RELATIONS: &[RelationDef] = &[
    RelationDef {
        start: "shopping-cart-service",
        end: "order-service",
        template: SERVICE_TO_SERVICE,
    },
    RelationDef {
        start: "order-service",
        end: "payment-service",
        template: SERVICE_TO_SERVICE,
    },
    RelationDef {
        start: "shopping-cart-service",
        end: "express",
        template: SERVICE_TO_LIBRARY,
    },
    RelationDef {
        start: "order-service",
        end: "express",
        template: SERVICE_TO_LIBRARY,
    },
    RelationDef {
        start: "shopping-cart-service",
        end: "typeorm",
        template: SERVICE_TO_LIBRARY,
    },
    RelationDef {
        start: "order-service",
        end: "winston",
        template: SERVICE_TO_LIBRARY,
    },
    RelationDef {
        start: "shopping-cart-service",
        end: "kubernetes",
        template: SERVICE_TO_INFRASTRUCTURE,
    },
    RelationDef {
        start: "order-service",
        end: "kubernetes",
        template: SERVICE_TO_INFRASTRUCTURE,
    },
];

pub const PROJECT: ProjectDef = ProjectDef {
    key: "test-project",
    name: "test-project",
    description: "Test project",
    repository_url: "https://github.com/test-account/test-project",
};

pub const LABELS: &[LabelDef] = &[
    LabelDef {
        name: "bug",
        description: "A bug in the software",
        color: "#d73a4a",
    },
    LabelDef {
        name: "documentation",
        description: "Documentation for the software",
        color: "#0075ca",
    },
    LabelDef {
        name: "duplicate",
        description: "This issue or pull request already exists",
        color: "#cfd3d7",
    },
    LabelDef {
        name: "enhancement",
        description: "A new feature or request",
        color: "#a2eeef",
    },
];

pub const USERNAMES: &[&str] = &[
    "SapphireDragon27",
    "LuckyDuckling91",
    "WhisperingShadow",
    "ElectricJaguar",
    "RainbowDreamer42",
];

macro_rules! lorem_ipsum {
    () => {
        "Lorem ipsum dolor sit amet, consectetur adipiscing elit.
  Nullam euismod, nisl eget aliquam ultricies, massa nisl tristique
  nunc, vitae ultricies ante magna non nunc. Donec euismod, nisl eget
  aliquam ultricies, massa nisl tristique nunc, vitae ultricies ante
  magna non nunc. Donec euismod, nisl eget aliquam ultricies, massa
  nisl tristique nunc, vitae ultricies ante magna non nunc. Donec
  euismod, nisl eget aliquam ultricies, massa nisl tristique nunc,
  vitae ultricies ante magna non nunc. Donec euismod, nisl eget
  aliquam ultricies, massa nisl tristique nunc, vitae ultricies ante."
    };
}

/// Body of every generated comment.
pub const LOREM_IPSUM: &str = lorem_ipsum!();

/// Markdown body of every generated issue.
pub const ISSUE_BODY: &str = concat!(
    "# An example issue

Hello and welcome to this example issue.
Nothing here actually happens; the text only exists so the issue view has some
Markdown to render.

## To reproduce
- start any random program
- do nothing
- **profit**

## Random codeblock
```javascript
const foo = \"bar\";
console.log(foo);
```

### And a list for the win
1. foo
2. bar
3. baz

### And more text
",
    lorem_ipsum!(),
    "\n"
);

/// Looks up a component definition by key.
pub fn component(key: &str) -> Option<&'static ComponentDef> {
    COMPONENTS.iter().find(|c| c.key == key)
}
