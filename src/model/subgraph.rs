// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Larissa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Larissa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::Serialize;

use super::color::Color;
use super::ids::{NodeId, SubgraphId};

/// A named, recursively nested grouping of nodes used for visual containment
/// (e.g. nested state regions).
///
/// Nesting forms a tree: a subgraph owns its children and holds member nodes
/// by id; the node values themselves live flat in the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subgraph {
    id: SubgraphId,
    label: String,
    hidden: bool,
    fill: Option<Color>,
    nodes: Vec<NodeId>,
    children: Vec<Subgraph>,
}

impl Subgraph {
    /// Creates a subgraph whose label defaults to the id text.
    pub fn new(id: SubgraphId) -> Self {
        let label = id.as_str().to_owned();
        Self {
            id,
            label,
            hidden: false,
            fill: None,
            nodes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> &SubgraphId {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Hidden subgraphs still group their members for layout but draw no
    /// frame or label (the graph's root pseudo-group is the main user).
    pub fn hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub fn fill(&self) -> Option<Color> {
        self.fill
    }

    pub fn set_fill(&mut self, fill: Option<Color>) {
        self.fill = fill;
    }

    pub fn add_node(&mut self, node_id: NodeId) {
        self.nodes.push(node_id);
    }

    pub fn add_child(&mut self, child: Subgraph) {
        self.children.push(child);
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn children(&self) -> &[Subgraph] {
        &self.children
    }

    /// Recursive lookup over this subgraph and its descendants.
    pub fn find(&self, id: &SubgraphId) -> Option<&Subgraph> {
        if &self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    pub fn find_mut(&mut self, id: &SubgraphId) -> Option<&mut Subgraph> {
        if &self.id == id {
            return Some(self);
        }
        self.children
            .iter_mut()
            .find_map(|child| child.find_mut(id))
    }

    /// Whether `node_id` is a member of this subgraph or any descendant.
    pub fn contains_node(&self, node_id: &NodeId) -> bool {
        self.nodes.iter().any(|member| member == node_id)
            || self.children.iter().any(|child| child.contains_node(node_id))
    }

}
