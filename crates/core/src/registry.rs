//! Kind registry: the kind-to-definition table consulted by the parser,
//! validation, and both renderers.

use crate::kind::ElementKind;
use crate::node::Element;
use crate::schema::{ContentSchema, ValueConstraint};
use serde::{Deserialize, Serialize};

/// Schema and rendering metadata for one element kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KindDefinition {
    /// The element kind this definition applies to.
    pub kind: ElementKind,
    /// Source tag the external parser maps to this kind (empty for text
    /// runs, which have no tag).
    pub tag: String,
    /// Content-model schema checked at set and validate time.
    pub schema: ContentSchema,
    /// Canonical fallback label, for kinds with a placeholder form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_label: Option<String>,
}

/// The registered element kinds and their definitions.
///
/// Registries are configuration data: they can be built in code with
/// [`default_registry`] or deserialized from JSON with
/// [`KindRegistry::from_json`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KindRegistry {
    /// Registered kind definitions.
    pub kinds: Vec<KindDefinition>,
}

impl KindRegistry {
    /// Returns the definition for `kind`, if registered.
    pub fn definition(&self, kind: ElementKind) -> Option<&KindDefinition> {
        self.kinds.iter().find(|d| d.kind == kind)
    }

    /// Returns the definition whose source tag is `tag`.
    ///
    /// This is the lookup the external parser performs for each source tag it
    /// encounters. Text runs have no tag and are never looked up.
    pub fn definition_for_tag(&self, tag: &str) -> Option<&KindDefinition> {
        let found = self.kinds.iter().find(|d| !d.tag.is_empty() && d.tag == tag);
        if found.is_none() {
            log::debug!("no element kind registered for tag {tag:?}");
        }
        found
    }

    /// Returns the canonical fallback label for `kind`, if it has one.
    pub fn fallback_label(&self, kind: ElementKind) -> Option<&str> {
        self.definition(kind).and_then(|d| d.fallback_label.as_deref())
    }

    /// Creates an empty element for `kind` using its registered schema.
    pub fn new_element(&self, kind: ElementKind) -> Option<Element> {
        self.definition(kind)
            .map(|d| Element::new(kind, d.schema.clone()))
    }

    /// Deserializes a registry from configuration JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Creates the built-in registry for the chat-message markup kinds.
///
/// # Example
///
/// ```
/// use mml_core::{ElementKind, default_registry};
///
/// let registry = default_registry();
/// assert!(registry.definition(ElementKind::Checkbox).is_some());
/// assert_eq!(registry.fallback_label(ElementKind::Checkbox), Some("Checkbox:"));
/// ```
pub fn default_registry() -> KindRegistry {
    KindRegistry {
        kinds: vec![
            KindDefinition {
                kind: ElementKind::Text,
                tag: String::new(),
                schema: ContentSchema::default(),
                fallback_label: None,
            },
            inline_formatting_definition(ElementKind::Bold),
            inline_formatting_definition(ElementKind::Italic),
            KindDefinition {
                kind: ElementKind::Checkbox,
                tag: "checkbox".to_string(),
                schema: ContentSchema {
                    allowed_attrs: vec![
                        "name".to_string(),
                        "value".to_string(),
                        "checked".to_string(),
                    ],
                    required_attrs: vec!["name".to_string()],
                    value_constraints: vec![ValueConstraint {
                        attr: "checked".to_string(),
                        allowed: vec!["true".to_string(), "false".to_string()],
                    }],
                    allowed_child_kinds: inline_kinds(),
                    required_child_kinds: inline_kinds(),
                },
                fallback_label: Some("Checkbox:".to_string()),
            },
        ],
    }
}

/// Creates a definition for an inline formatting kind: no attributes, inline
/// children, no presence requirement.
fn inline_formatting_definition(kind: ElementKind) -> KindDefinition {
    KindDefinition {
        kind,
        tag: kind.tag().to_string(),
        schema: ContentSchema {
            allowed_child_kinds: inline_kinds(),
            ..ContentSchema::default()
        },
        fallback_label: None,
    }
}

fn inline_kinds() -> Vec<ElementKind> {
    vec![ElementKind::Text, ElementKind::Bold, ElementKind::Italic]
}
