use super::state::HandState;
use crate::moves::Combo;
use petgraph::graph::DiGraph;
use petgraph::graph::EdgeIndex;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use petgraph::Direction::Incoming;

/// Arena of every state a search has generated.
///
/// Nodes are [`HandState`]s, edges point from a parent to the child reached
/// by the [`Combo`] they carry. Each state has at most one parent, so the
/// graph is a tree rooted at the first inserted state.
#[derive(Debug)]
pub struct Tree(DiGraph<HandState, Combo>);

impl Tree {
    pub fn empty() -> Self {
        Self(DiGraph::with_capacity(0, 0))
    }
    pub fn size(&self) -> usize {
        self.0.node_count()
    }
    pub fn at(&self, index: NodeIndex) -> &HandState {
        &self.0[index]
    }
    pub fn insert(&mut self, state: HandState) -> NodeIndex {
        self.0.add_node(state)
    }
    pub fn extend(&mut self, tail: NodeIndex, from: Combo, head: NodeIndex) -> EdgeIndex {
        self.0.add_edge(head, tail, from)
    }
    /// Insert `state` as the child of `head` reached by `from`.
    pub fn attach(&mut self, head: NodeIndex, from: Combo, state: HandState) -> NodeIndex {
        let tail = self.insert(state);
        self.extend(tail, from, head);
        tail
    }
    /// Plays leading from the root to `index`, in order.
    pub fn path(&self, index: NodeIndex) -> Vec<Combo> {
        let mut path = Vec::new();
        let mut index = index;
        while let Some(edge) = self.0.edges_directed(index, Incoming).next() {
            path.push(edge.weight().clone());
            index = edge.source();
        }
        path.reverse();
        path
    }
}
