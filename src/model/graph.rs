// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Larissa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Larissa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Serialize;

use super::edge::{Edge, Endpoint};
use super::ids::{NodeId, SubgraphId};
use super::node::Node;
use super::subgraph::Subgraph;

/// Id of the hidden root pseudo-group every graph starts with.
pub const ROOT_SUBGRAPH_ID: &str = "root";

/// Layer direction hint for the layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Orientation {
    TopToBottom,
    BottomToTop,
    LeftToRight,
    RightToLeft,
}

impl Default for Orientation {
    fn default() -> Self {
        Self::TopToBottom
    }
}

/// A named directed multigraph with nested subgraphs.
///
/// Node values live flat in an id-keyed map; grouping is expressed by the
/// root subgraph tree, which holds memberships by id. The root pseudo-group
/// is hidden from rendering but still owns all top-level nodes and subgraphs
/// for layout purposes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Graph {
    name: String,
    orientation: Orientation,
    nodes: BTreeMap<NodeId, Node>,
    edges: Vec<Edge>,
    root: Subgraph,
}

impl Graph {
    pub fn new(name: impl Into<String>) -> Self {
        let root_id = SubgraphId::new(ROOT_SUBGRAPH_ID).expect("root subgraph id");
        let mut root = Subgraph::new(root_id);
        root.set_label("");
        root.set_hidden(true);
        Self {
            name: name.into(),
            orientation: Orientation::default(),
            nodes: BTreeMap::new(),
            edges: Vec::new(),
            root,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    pub fn nodes(&self) -> &BTreeMap<NodeId, Node> {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> &mut BTreeMap<NodeId, Node> {
        &mut self.nodes
    }

    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn node_mut(&mut self, id: &NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    /// Registers `node` as a top-level member of the root pseudo-group.
    ///
    /// Re-registering an existing id replaces the node value and leaves its
    /// group membership where it was.
    pub fn add_node(&mut self, node: Node) {
        let id = node.id().clone();
        if self.nodes.insert(id.clone(), node).is_none() {
            self.root.add_node(id);
        }
    }

    /// Registers `node` as a member of the named subgraph.
    pub fn add_node_in(
        &mut self,
        node: Node,
        subgraph_id: &SubgraphId,
    ) -> Result<(), GraphError> {
        if self.nodes.contains_key(node.id()) {
            return Err(GraphError::NodeAlreadyRegistered {
                id: node.id().clone(),
            });
        }
        let subgraph = self
            .root
            .find_mut(subgraph_id)
            .ok_or_else(|| GraphError::UnknownSubgraph {
                id: subgraph_id.clone(),
            })?;

        let id = node.id().clone();
        subgraph.add_node(id.clone());
        self.nodes.insert(id, node);
        Ok(())
    }

    /// Attaches a subgraph (and its whole subtree) under the root group.
    pub fn add_subgraph(&mut self, subgraph: Subgraph) {
        self.root.add_child(subgraph);
    }

    pub fn root(&self) -> &Subgraph {
        &self.root
    }

    pub fn subgraph(&self, id: &SubgraphId) -> Option<&Subgraph> {
        self.root.find(id)
    }

    pub fn subgraph_mut(&mut self, id: &SubgraphId) -> Option<&mut Subgraph> {
        self.root.find_mut(id)
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edges_mut(&mut self) -> &mut Vec<Edge> {
        &mut self.edges
    }

    /// Appends an edge and returns it for attribute styling.
    pub fn add_edge(&mut self, edge: Edge) -> &mut Edge {
        self.edges.push(edge);
        let last = self.edges.len() - 1;
        &mut self.edges[last]
    }

    /// Connects two nodes, creating missing endpoints as default top-level
    /// nodes. This is how edge-first construction introduces its node set.
    pub fn connect(&mut self, from: NodeId, to: NodeId) -> &mut Edge {
        self.ensure_node(&from);
        self.ensure_node(&to);
        self.add_edge(Edge::new(from, to))
    }

    fn ensure_node(&mut self, id: &NodeId) {
        if !self.nodes.contains_key(id) {
            self.add_node(Node::new(id.clone()));
        }
    }

    /// Checks the structural invariants: unique subgraph ids, every
    /// membership referencing a registered node, every node claimed by
    /// exactly one group, and every edge endpoint resolving to a node or
    /// subgraph of this graph.
    ///
    /// Sample data is literal, so a violation is a programming error; tests
    /// call this rather than any runtime recovery path.
    pub fn validate(&self) -> Result<(), GraphError> {
        let mut subgraph_ids: BTreeSet<&SubgraphId> = BTreeSet::new();
        let mut claimed: BTreeSet<&NodeId> = BTreeSet::new();

        let mut stack: Vec<&Subgraph> = vec![&self.root];
        while let Some(subgraph) = stack.pop() {
            if !subgraph_ids.insert(subgraph.id()) {
                return Err(GraphError::DuplicateSubgraphId {
                    id: subgraph.id().clone(),
                });
            }
            for node_id in subgraph.nodes() {
                if !self.nodes.contains_key(node_id) {
                    return Err(GraphError::UnknownMemberNode {
                        subgraph: subgraph.id().clone(),
                        node: node_id.clone(),
                    });
                }
                if !claimed.insert(node_id) {
                    return Err(GraphError::NodeInMultipleSubgraphs {
                        node: node_id.clone(),
                    });
                }
            }
            stack.extend(subgraph.children());
        }

        for node_id in self.nodes.keys() {
            if !claimed.contains(node_id) {
                return Err(GraphError::UnassignedNode {
                    node: node_id.clone(),
                });
            }
        }

        for edge in &self.edges {
            for endpoint in [edge.from(), edge.to()] {
                let resolved = match endpoint {
                    Endpoint::Node(id) => self.nodes.contains_key(id),
                    Endpoint::Subgraph(id) => self.root.find(id).is_some(),
                };
                if !resolved {
                    return Err(GraphError::UnknownEdgeEndpoint {
                        endpoint: endpoint.to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    UnknownSubgraph { id: SubgraphId },
    NodeAlreadyRegistered { id: NodeId },
    DuplicateSubgraphId { id: SubgraphId },
    UnknownMemberNode { subgraph: SubgraphId, node: NodeId },
    NodeInMultipleSubgraphs { node: NodeId },
    UnassignedNode { node: NodeId },
    UnknownEdgeEndpoint { endpoint: String },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSubgraph { id } => write!(f, "unknown subgraph: {id}"),
            Self::NodeAlreadyRegistered { id } => {
                write!(f, "node already registered: {id}")
            }
            Self::DuplicateSubgraphId { id } => {
                write!(f, "duplicate subgraph id: {id}")
            }
            Self::UnknownMemberNode { subgraph, node } => {
                write!(f, "subgraph {subgraph} references unknown node {node}")
            }
            Self::NodeInMultipleSubgraphs { node } => {
                write!(f, "node {node} belongs to more than one subgraph")
            }
            Self::UnassignedNode { node } => {
                write!(f, "node {node} belongs to no subgraph (not even the root)")
            }
            Self::UnknownEdgeEndpoint { endpoint } => {
                write!(f, "edge endpoint does not resolve: {endpoint}")
            }
        }
    }
}

impl std::error::Error for GraphError {}

#[cfg(test)]
mod tests {
    use super::{Graph, GraphError, Orientation};
    use crate::model::{Edge, Node, NodeId, Subgraph, SubgraphId};

    fn nid(value: &str) -> NodeId {
        NodeId::new(value).expect("node id")
    }

    fn gid(value: &str) -> SubgraphId {
        SubgraphId::new(value).expect("subgraph id")
    }

    #[test]
    fn connect_creates_missing_endpoints_as_top_level_nodes() {
        let mut graph = Graph::new("g");
        graph.connect(nid("A"), nid("B"));
        graph.connect(nid("B"), nid("A"));

        assert_eq!(graph.nodes().len(), 2);
        assert_eq!(graph.edges().len(), 2);
        assert!(graph.root().hidden());
        assert!(graph.root().contains_node(&nid("A")));
        assert!(graph.root().contains_node(&nid("B")));
        assert_eq!(graph.orientation(), Orientation::TopToBottom);
        graph.validate().expect("valid graph");
    }

    #[test]
    fn connect_allows_repeated_pairs() {
        let mut graph = Graph::new("g");
        graph.connect(nid("B"), nid("D"));
        graph.connect(nid("B"), nid("D"));

        assert_eq!(graph.nodes().len(), 2);
        assert_eq!(graph.edges().len(), 2);
        graph.validate().expect("valid graph");
    }

    #[test]
    fn add_node_in_places_the_node_in_the_named_subgraph() {
        let mut graph = Graph::new("g");
        graph.add_subgraph(Subgraph::new(gid("On")));
        graph
            .add_node_in(Node::new(nid("Failure")), &gid("On"))
            .expect("add");

        assert!(graph.subgraph(&gid("On")).expect("subgraph").contains_node(&nid("Failure")));
        assert!(!graph.root().nodes().contains(&nid("Failure")));
        graph.validate().expect("valid graph");
    }

    #[test]
    fn add_node_in_rejects_unknown_subgraph() {
        let mut graph = Graph::new("g");
        let result = graph.add_node_in(Node::new(nid("Failure")), &gid("On"));

        assert_eq!(
            result,
            Err(GraphError::UnknownSubgraph { id: gid("On") })
        );
    }

    #[test]
    fn validate_rejects_unresolved_edge_endpoints() {
        let mut graph = Graph::new("g");
        graph.add_node(Node::new(nid("A")));
        graph.add_edge(Edge::new(nid("A"), nid("Ghost")));

        assert_eq!(
            graph.validate(),
            Err(GraphError::UnknownEdgeEndpoint {
                endpoint: "Ghost".to_owned()
            })
        );
    }

    #[test]
    fn validate_rejects_double_membership() {
        let mut graph = Graph::new("g");
        graph.add_subgraph(Subgraph::new(gid("On")));
        graph.add_node(Node::new(nid("Off")));
        let on = graph.subgraph_mut(&gid("On")).expect("subgraph");
        on.add_node(nid("Off"));

        assert_eq!(
            graph.validate(),
            Err(GraphError::NodeInMultipleSubgraphs { node: nid("Off") })
        );
    }

    #[test]
    fn validate_resolves_subgraph_edge_endpoints() {
        let mut graph = Graph::new("g");
        graph.add_subgraph(Subgraph::new(gid("On")));
        graph.add_node(Node::new(nid("Off")));
        graph.add_edge(Edge::new(nid("Off"), gid("On")));

        graph.validate().expect("valid graph");

        graph.add_edge(Edge::new(nid("Off"), gid("Ghost")));
        assert_eq!(
            graph.validate(),
            Err(GraphError::UnknownEdgeEndpoint {
                endpoint: "Ghost".to_owned()
            })
        );
    }
}
