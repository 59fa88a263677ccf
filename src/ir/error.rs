//! Errors raised by the rebuilding engine and the pass pipeline.
//!
//! Passes never see these wrapped: a pass picks its own `Rebuilder::Error`
//! type, which must be constructible from [`UnsupportedNodeKind`], and its
//! own failures travel through the traversal as that type.

use thiserror::Error;

use super::sql_node::NodeKind;

/// The dispatcher reached a node kind that has no reconstruction rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no reconstruction rule for node kind `{kind}`")]
pub struct UnsupportedNodeKind {
    pub kind: NodeKind,
}

impl UnsupportedNodeKind {
    pub fn new(kind: NodeKind) -> Self {
        UnsupportedNodeKind { kind }
    }
}

/// A pipeline could not be assembled or ordered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    #[error("transform `{id}` is already registered")]
    DuplicateTransform { id: String },

    #[error("transform `{id}` depends on unknown transform `{dependency}`")]
    UnknownDependency { id: String, dependency: String },

    #[error("transform dependencies form a cycle through `{id}`")]
    Cycle { id: String },
}
