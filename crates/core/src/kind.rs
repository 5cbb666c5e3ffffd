use serde::{Deserialize, Serialize};
use std::fmt;

/// The category of a markup node, determining its schema and behavior.
///
/// Kinds are referenced by schemas (content models, required-presence sets)
/// and by the kind registry, so they serialize as lowercase strings for use
/// in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// A plain text run.
    Text,
    /// Inline bold formatting.
    Bold,
    /// Inline italic formatting.
    Italic,
    /// A checkbox form control.
    Checkbox,
}

impl ElementKind {
    /// Stable lowercase name used in error messages and configuration.
    pub fn name(&self) -> &'static str {
        match self {
            ElementKind::Text => "text",
            ElementKind::Bold => "bold",
            ElementKind::Italic => "italic",
            ElementKind::Checkbox => "checkbox",
        }
    }

    /// Source tag the external parser maps to this kind.
    ///
    /// Text runs have no tag of their own; they come from character data
    /// between tags, so this returns an empty string for [`ElementKind::Text`].
    pub fn tag(&self) -> &'static str {
        match self {
            ElementKind::Text => "",
            ElementKind::Bold => "b",
            ElementKind::Italic => "i",
            ElementKind::Checkbox => "checkbox",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
