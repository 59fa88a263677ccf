// SQL IR Node Module
//
// The closed node taxonomy the rebuilder operates on, split into:
//
// - node_types: family enums (Statement, Relation, Expression) and clause-support types
// - node_kind: NodeKind discriminant and kind() for every family
// - node_impl: constructor helpers and conversions into Node
// - position: source locations, which never take part in equality

pub mod node_types;
pub mod node_kind;
pub mod node_impl;
pub mod position;

pub use node_types::*;
pub use node_kind::NodeKind;
