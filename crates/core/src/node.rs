//! The markup node tree and its content-model validation.

use crate::attrs::AttributeStore;
use crate::error::ValidationError;
use crate::kind::ElementKind;
use crate::schema::ContentSchema;

/// A single node in a parsed markup document.
///
/// Mirrors the source structure: text runs are leaves, elements own their
/// children. Each child has exactly one parent and there are no cycles, so
/// plain ownership models the tree with no back-references.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A plain text run.
    Text(String),
    /// A typed element with attributes and children.
    Element(Element),
}

impl Node {
    /// Creates a text node.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(value.into())
    }

    /// The kind of this node ([`ElementKind::Text`] for text runs).
    pub fn kind(&self) -> ElementKind {
        match self {
            Node::Text(_) => ElementKind::Text,
            Node::Element(el) => el.kind(),
        }
    }

    /// Validates this subtree.
    ///
    /// Text runs are always valid; elements run their full content-model
    /// checks and recurse into children.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Node::Text(_) => Ok(()),
            Node::Element(el) => el.validate(),
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

/// A typed element node: kind, attribute store, and ordered children.
///
/// Built incrementally by the external parser: created empty, attributes set
/// one at a time, children appended as the parser descends, then validated
/// exactly once per completed subtree. After validation the element is only
/// read, so it is safe to share across threads.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    kind: ElementKind,
    schema: ContentSchema,
    attrs: AttributeStore,
    children: Vec<Node>,
}

impl Element {
    /// Creates an empty element for `kind` governed by `schema`.
    ///
    /// Prefer [`crate::registry::KindRegistry::new_element`], which supplies
    /// the kind's registered schema.
    pub fn new(kind: ElementKind, schema: ContentSchema) -> Self {
        Self {
            kind,
            schema,
            attrs: AttributeStore::new(),
            children: Vec::new(),
        }
    }

    /// The element's kind.
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// The source tag, as used in error messages.
    pub fn tag(&self) -> &'static str {
        self.kind.tag()
    }

    /// Sets one attribute, rejecting names outside the kind's allow-list.
    ///
    /// Only the allow-list is enforced here; required-attribute and value
    /// checks run in [`Element::validate`]. The split is observable: a source
    /// document with an unknown attribute fails while the parser is still
    /// populating the node, before any validate call.
    pub fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), ValidationError> {
        self.attrs.set(&self.schema, self.kind.tag(), name, value)
    }

    /// Returns the stored raw value for `name`.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attrs.get(name)
    }

    /// Read access to the attribute store, in insertion order.
    pub fn attrs(&self) -> &AttributeStore {
        &self.attrs
    }

    /// Appends a child node.
    pub fn append_child(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    /// The element's children in document order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Validates this element and its subtree against the declared schema.
    ///
    /// Checks run in a fixed order: required attributes, value constraints,
    /// content model over direct children, required child presence (direct or
    /// indirect), then recursion so every child is checked by its own schema.
    /// The element's own checks never depend on whether children validate, so
    /// bottom-up and top-down orchestration yield the same outcome.
    ///
    /// Read-only and idempotent: validating an unchanged tree twice gives the
    /// same result.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for required in &self.schema.required_attrs {
            if self.attrs.get(required).is_none() {
                return Err(ValidationError::MissingRequiredAttribute {
                    name: required.clone(),
                });
            }
        }

        for constraint in &self.schema.value_constraints {
            if let Some(value) = self.attrs.get(&constraint.attr)
                && !constraint.allowed.iter().any(|allowed| allowed == value)
            {
                return Err(ValidationError::InvalidAttributeValue {
                    name: constraint.attr.clone(),
                    tag: self.tag().to_string(),
                    allowed: constraint.allowed.clone(),
                });
            }
        }

        for child in &self.children {
            if !self.schema.allows_child(child.kind()) {
                return Err(ValidationError::DisallowedChildType {
                    child: child.kind(),
                    parent: self.tag().to_string(),
                });
            }
        }

        if !self.schema.required_child_kinds.is_empty()
            && !self
                .children
                .iter()
                .any(|child| contains_required_kind(child, &self.schema))
        {
            return Err(ValidationError::MissingRequiredChild {
                tag: self.tag().to_string(),
                allowed: self.schema.required_child_kinds.clone(),
            });
        }

        for child in &self.children {
            child.validate()?;
        }

        Ok(())
    }
}

/// Returns true if `node` or any descendant has a kind in the schema's
/// required-presence set.
fn contains_required_kind(node: &Node, schema: &ContentSchema) -> bool {
    if schema.satisfies_required_child(node.kind()) {
        return true;
    }
    match node {
        Node::Text(_) => false,
        Node::Element(el) => el
            .children
            .iter()
            .any(|child| contains_required_kind(child, schema)),
    }
}
