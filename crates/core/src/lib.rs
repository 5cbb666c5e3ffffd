#![deny(missing_docs)]
//! mml core: the chat-message markup document model and validation.

/// Insertion-ordered attribute storage.
pub mod attrs;
/// Validation error taxonomy.
pub mod error;
/// Element kind definitions.
pub mod kind;
/// Node tree and content-model validation.
pub mod node;
/// Kind registry and built-in definitions.
pub mod registry;
/// Schema declaration types.
pub mod schema;

pub use attrs::AttributeStore;
pub use error::ValidationError;
pub use kind::ElementKind;
pub use node::{Element, Node};
pub use registry::{KindDefinition, KindRegistry, default_registry};
pub use schema::{ContentSchema, ValueConstraint};
