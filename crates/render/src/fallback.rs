//! Fallback rendering: minimal placeholders for reduced-fidelity clients.

use mml_core::{ElementKind, KindRegistry, Node};
use serde::Serialize;

/// The placeholder record a reduced-fidelity client renders in place of an
/// interactive element, carrying only the kind's canonical label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FallbackNode {
    /// Kind of the element the placeholder stands in for.
    pub kind: ElementKind,
    /// Canonical label, fixed per kind.
    pub label: String,
}

/// Maps a node to its fallback placeholder.
///
/// A pure function of the node's kind alone: attributes and children never
/// influence the result. Kinds without a registered fallback label (text
/// runs, inline formatting) have no placeholder form and yield `None`.
pub fn to_fallback(node: &Node, registry: &KindRegistry) -> Option<FallbackNode> {
    let kind = node.kind();
    registry.fallback_label(kind).map(|label| FallbackNode {
        kind,
        label: label.to_string(),
    })
}
