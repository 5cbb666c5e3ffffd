use crate::kind::ElementKind;
use thiserror::Error;

/// Errors raised while building or validating a markup node tree.
///
/// Every variant is raised synchronously and propagated to the caller, which
/// owns user-facing reporting; nothing is recovered internally. A node that
/// fails any single check is entirely invalid.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// An attribute name outside the kind's allow-list was supplied.
    #[error("attribute \"{name}\" is not allowed in \"{tag}\"")]
    UnknownAttribute {
        /// The rejected attribute name.
        name: String,
        /// Source tag of the element the attribute was set on.
        tag: String,
    },

    /// A schema-required attribute was never set.
    #[error("the attribute \"{name}\" is required")]
    MissingRequiredAttribute {
        /// The missing attribute name.
        name: String,
    },

    /// A value-constrained attribute holds a value outside its allowed set.
    #[error("attribute \"{name}\" of element \"{tag}\" can only be one of the following values: [{values}]", values = .allowed.join(", "))]
    InvalidAttributeValue {
        /// The constrained attribute name.
        name: String,
        /// Source tag of the element.
        tag: String,
        /// The literal values the attribute may hold.
        allowed: Vec<String>,
    },

    /// A child node's kind is not permitted inside this parent kind.
    #[error("element \"{child}\" is not allowed in \"{parent}\"")]
    DisallowedChildType {
        /// Kind of the offending child.
        child: ElementKind,
        /// Source tag of the parent element.
        parent: String,
    },

    /// The required-presence child constraint was not satisfied.
    #[error("the \"{tag}\" element must contain at least one of: [{kinds}]", kinds = join_kinds(.allowed))]
    MissingRequiredChild {
        /// Source tag of the element.
        tag: String,
        /// Kinds of which at least one direct or indirect child must exist.
        allowed: Vec<ElementKind>,
    },
}

fn join_kinds(kinds: &[ElementKind]) -> String {
    kinds
        .iter()
        .map(|k| k.name())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_attribute_message() {
        let err = ValidationError::UnknownAttribute {
            name: "color".to_string(),
            tag: "checkbox".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "attribute \"color\" is not allowed in \"checkbox\""
        );
    }

    #[test]
    fn test_invalid_value_message_lists_allowed_set() {
        let err = ValidationError::InvalidAttributeValue {
            name: "checked".to_string(),
            tag: "checkbox".to_string(),
            allowed: vec!["true".to_string(), "false".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "attribute \"checked\" of element \"checkbox\" can only be one of the following values: [true, false]"
        );
    }

    #[test]
    fn test_missing_child_message_lists_kinds() {
        let err = ValidationError::MissingRequiredChild {
            tag: "checkbox".to_string(),
            allowed: vec![ElementKind::Text, ElementKind::Bold, ElementKind::Italic],
        };
        assert_eq!(
            err.to_string(),
            "the \"checkbox\" element must contain at least one of: [text, bold, italic]"
        );
    }
}
