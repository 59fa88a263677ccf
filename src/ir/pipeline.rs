use std::collections::HashMap;
use std::sync::Arc;

use petgraph::algo::toposort;
use petgraph::stable_graph::{NodeIndex, StableGraph};
use tracing::debug;

use super::error::PipelineError;
use super::rebuilder::Rebuilder;
use super::sql_node::Node;

/// A whole-tree rewrite, erased over its context and error types.
///
/// Every [`Rebuilder`] whose context has a default and whose error is a
/// standard error is a `Pass`: it runs with a fresh context per tree. Pass
/// errors are returned as-is inside [`anyhow::Error`], so callers can
/// `downcast_ref` to the pass's own error type.
pub trait Pass: Send + Sync {
    fn run(&self, tree: &Node) -> anyhow::Result<Node>;
}

impl<R> Pass for R
where
    R: Rebuilder + Send + Sync,
    R::Context: Default,
    R::Error: std::error::Error + Send + Sync + 'static,
{
    fn run(&self, tree: &Node) -> anyhow::Result<Node> {
        let mut ctx = R::Context::default();
        Ok(self.rebuild(tree, &mut ctx)?)
    }
}

/// A single pass in the pipeline, including its dependencies.
#[derive(Clone)]
pub struct Transform {
    /// Unique identifier for the transform.
    pub id: String,
    /// Transforms that must run before this one.
    pub dependencies: Vec<String>,
    pub pass: Arc<dyn Pass>,
}

impl Transform {
    pub fn new(id: impl Into<String>, pass: impl Pass + 'static) -> Self {
        Transform { id: id.into(), dependencies: Vec::new(), pass: Arc::new(pass) }
    }

    pub fn after(mut self, dependency: impl Into<String>) -> Self {
        self.dependencies.push(dependency.into());
        self
    }
}

/// Runs rebuilding passes over a tree in dependency order.
///
/// Each pass sees the output of the passes it depends on. Passes with no
/// ordering between them run in an unspecified but deterministic order.
#[derive(Default)]
pub struct Pipeline {
    graph: StableGraph<Transform, ()>,
    node_indices: HashMap<String, NodeIndex>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a transform. Its dependencies must already be registered.
    pub fn add_transform(&mut self, transform: Transform) -> Result<(), PipelineError> {
        if self.node_indices.contains_key(&transform.id) {
            return Err(PipelineError::DuplicateTransform { id: transform.id });
        }
        let mut dependency_nodes = Vec::with_capacity(transform.dependencies.len());
        for dep_id in &transform.dependencies {
            match self.node_indices.get(dep_id) {
                Some(dep_node) => dependency_nodes.push(*dep_node),
                None => {
                    return Err(PipelineError::UnknownDependency {
                        id: transform.id.clone(),
                        dependency: dep_id.clone(),
                    });
                }
            }
        }

        let id = transform.id.clone();
        let node = self.graph.add_node(transform);
        for dep_node in dependency_nodes {
            self.graph.add_edge(dep_node, node, ());
        }
        self.node_indices.insert(id, node);
        Ok(())
    }

    /// Removes a transform by id, along with its dependency edges.
    pub fn remove_transform(&mut self, id: &str) -> Option<Transform> {
        let node = self.node_indices.remove(id)?;
        self.graph.remove_node(node)
    }

    pub fn len(&self) -> usize {
        self.node_indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_indices.is_empty()
    }

    /// Transform ids in the order `apply` runs them.
    pub fn order(&self) -> Result<Vec<String>, PipelineError> {
        Ok(self.sorted()?.into_iter().map(|idx| self.graph[idx].id.clone()).collect())
    }

    /// Applies every transform to `tree` in topological order.
    ///
    /// Stops at the first failing pass and returns its error.
    pub fn apply(&self, tree: &Node) -> anyhow::Result<Node> {
        let mut current = tree.clone();
        for node_idx in self.sorted()? {
            let transform = &self.graph[node_idx];
            debug!(transform = %transform.id, "applying transform");
            current = transform.pass.run(&current)?;
        }
        Ok(current)
    }

    fn sorted(&self) -> Result<Vec<NodeIndex>, PipelineError> {
        toposort(&self.graph, None)
            .map_err(|cycle| PipelineError::Cycle { id: self.graph[cycle.node_id()].id.clone() })
    }
}
