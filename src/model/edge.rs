// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Larissa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Larissa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::Serialize;

use super::ids::{NodeId, SubgraphId};

/// An edge endpoint.
///
/// A subgraph endpoint denotes an edge crossing that subgraph's boundary as a
/// whole (entering/leaving every contained node uniformly); the rendering
/// control draws it against the group outline.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    Node(NodeId),
    Subgraph(SubgraphId),
}

impl Endpoint {
    pub fn as_node(&self) -> Option<&NodeId> {
        match self {
            Self::Node(id) => Some(id),
            Self::Subgraph(_) => None,
        }
    }

    pub fn as_subgraph(&self) -> Option<&SubgraphId> {
        match self {
            Self::Node(_) => None,
            Self::Subgraph(id) => Some(id),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Node(id) => f.write_str(id.as_str()),
            Self::Subgraph(id) => f.write_str(id.as_str()),
        }
    }
}

impl From<NodeId> for Endpoint {
    fn from(id: NodeId) -> Self {
        Self::Node(id)
    }
}

impl From<SubgraphId> for Endpoint {
    fn from(id: SubgraphId) -> Self {
        Self::Subgraph(id)
    }
}

/// Arrowhead style at the target end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ArrowHead {
    Arrow,
    None,
}

/// A directed edge. Edges are not unique: the same (from, to) pair may occur
/// more than once in a graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    from: Endpoint,
    to: Endpoint,
    label: Option<String>,
    label_font_size: Option<f32>,
    arrow_head: ArrowHead,
}

impl Edge {
    pub fn new(from: impl Into<Endpoint>, to: impl Into<Endpoint>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            label: None,
            label_font_size: None,
            arrow_head: ArrowHead::Arrow,
        }
    }

    pub fn from(&self) -> &Endpoint {
        &self.from
    }

    pub fn to(&self) -> &Endpoint {
        &self.to
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn set_label<T: Into<String>>(&mut self, label: Option<T>) {
        self.label = label.map(Into::into);
    }

    pub fn label_font_size(&self) -> Option<f32> {
        self.label_font_size
    }

    pub fn set_label_font_size(&mut self, size: Option<f32>) {
        self.label_font_size = size;
    }

    pub fn arrow_head(&self) -> ArrowHead {
        self.arrow_head
    }

    pub fn set_arrow_head(&mut self, arrow_head: ArrowHead) {
        self.arrow_head = arrow_head;
    }
}
