//! Schema declarations: the per-kind content model as plain configuration data.

use crate::kind::ElementKind;
use serde::{Deserialize, Serialize};

/// Allowed literal values for a single attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueConstraint {
    /// Attribute name the constraint applies to.
    pub attr: String,
    /// Literal values the attribute may hold.
    pub allowed: Vec<String>,
}

/// Content-model declaration for one element kind.
///
/// Schemas describe which attributes a kind accepts, which must be present,
/// which attribute values are restricted, and which child kinds may or must
/// appear. They carry no behavior; validation interprets them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSchema {
    /// Attribute names the kind accepts; anything else is rejected at set time.
    #[serde(default)]
    pub allowed_attrs: Vec<String>,
    /// Attributes that must be present once the element is fully built.
    #[serde(default)]
    pub required_attrs: Vec<String>,
    /// Restricted value sets for individual attributes.
    #[serde(default)]
    pub value_constraints: Vec<ValueConstraint>,
    /// Kinds that may appear as children.
    #[serde(default)]
    pub allowed_child_kinds: Vec<ElementKind>,
    /// Kinds of which at least one direct or indirect child must exist.
    /// An empty set means no presence requirement.
    #[serde(default)]
    pub required_child_kinds: Vec<ElementKind>,
}

impl ContentSchema {
    /// Returns true if `name` is in the attribute allow-list.
    pub fn allows_attribute(&self, name: &str) -> bool {
        self.allowed_attrs.iter().any(|a| a == name)
    }

    /// Returns the value constraint declared for `name`, if any.
    pub fn value_constraint(&self, name: &str) -> Option<&ValueConstraint> {
        self.value_constraints.iter().find(|c| c.attr == name)
    }

    /// Returns true if `kind` may appear as a child.
    pub fn allows_child(&self, kind: ElementKind) -> bool {
        self.allowed_child_kinds.contains(&kind)
    }

    /// Returns true if `kind` counts toward the required-presence set.
    pub fn satisfies_required_child(&self, kind: ElementKind) -> bool {
        self.required_child_kinds.contains(&kind)
    }
}
