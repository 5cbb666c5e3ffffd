#![deny(missing_docs)]
//! mml render: presentation markup and fallback placeholder rendering.
//!
//! Both renderers consume a validated [`mml_core::Node`] tree and may be
//! invoked independently, any number of times, producing one of the two
//! output forms. Neither mutates the tree.

/// Fallback placeholder mapping.
pub mod fallback;
/// Presentation markup rendering.
pub mod presentation;
/// Markup writer used as the rendering sink.
pub mod writer;

pub use fallback::{FallbackNode, to_fallback};
pub use presentation::{render_node, render_to_string};
pub use writer::MarkupWriter;
