//! Node counting, independent of the rebuilder.
//!
//! `count_nodes` walks the serialized form of a tree: every node that carries
//! a `location` is one node, and so is every join criteria value (which has
//! no location of its own). Identifier and name scalars are not nodes.
//!
//! `VisitCounter` is a pass that records what the dispatcher actually
//! visited, so tests can compare the two.

use std::collections::BTreeMap;

use serde_json::Value;
use sql_rebuilder::ir::error::UnsupportedNodeKind;
use sql_rebuilder::ir::rebuilder::Rebuilder;
use sql_rebuilder::ir::sql_node::{Node, NodeKind};
use tracing::trace;

/// Counts the nodes of `tree` from its JSON form.
pub fn count_nodes(tree: &Node) -> usize {
    let value = serde_json::to_value(tree).expect("trees always serialize");
    count_value(&value)
}

fn count_value(value: &Value) -> usize {
    match value {
        Value::Array(items) => items.iter().map(count_value).sum(),
        Value::Object(fields) => {
            let own = usize::from(fields.contains_key("location"));
            let criteria = match fields.get("criteria") {
                Some(Value::Null) | None => 0,
                Some(_) => 1,
            };
            own + criteria + fields.values().map(count_value).sum::<usize>()
        }
        _ => 0,
    }
}

/// Per-kind visit tallies, plus bookkeeping to check the hooks pair up.
#[derive(Debug, Default)]
pub struct Tally {
    pub pre: BTreeMap<NodeKind, usize>,
    pub post: BTreeMap<NodeKind, usize>,
    pub open: Vec<NodeKind>,
    pub max_depth: usize,
}

impl Tally {
    pub fn total(&self) -> usize {
        self.pre.values().sum()
    }

    pub fn count(&self, kind: NodeKind) -> usize {
        self.pre.get(&kind).copied().unwrap_or(0)
    }
}

/// Identity pass that tallies every visited node.
#[derive(Debug, Default)]
pub struct VisitCounter;

impl Rebuilder for VisitCounter {
    type Context = Tally;
    type Error = UnsupportedNodeKind;

    fn pre_visit(&self, kind: NodeKind, ctx: &mut Tally) -> Result<(), Self::Error> {
        *ctx.pre.entry(kind).or_default() += 1;
        ctx.open.push(kind);
        ctx.max_depth = ctx.max_depth.max(ctx.open.len());
        Ok(())
    }

    fn post_visit(&self, kind: NodeKind, ctx: &mut Tally) -> Result<(), Self::Error> {
        let opened = ctx.open.pop();
        assert_eq!(opened, Some(kind), "post_visit does not match the innermost pre_visit");
        trace!(%kind, depth = ctx.open.len(), "closed");
        *ctx.post.entry(kind).or_default() += 1;
        Ok(())
    }
}
