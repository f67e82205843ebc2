// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Larissa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Larissa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::Serialize;

use super::color::Color;
use super::ids::NodeId;
use super::payload::Payload;

/// Node outline shapes understood by the rendering control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Shape {
    Ellipse,
    Box,
    Circle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    id: NodeId,
    label: String,
    label_visible: bool,
    shape: Shape,
    fill: Option<Color>,
    payload: Option<Payload>,
}

impl Node {
    /// Creates a node whose label defaults to the id text.
    pub fn new(id: NodeId) -> Self {
        let label = id.as_str().to_owned();
        Self {
            id,
            label,
            label_visible: true,
            shape: Shape::Ellipse,
            fill: None,
            payload: None,
        }
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn label_visible(&self) -> bool {
        self.label_visible
    }

    pub fn set_label_visible(&mut self, visible: bool) {
        self.label_visible = visible;
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn set_shape(&mut self, shape: Shape) {
        self.shape = shape;
    }

    pub fn fill(&self) -> Option<Color> {
        self.fill
    }

    pub fn set_fill(&mut self, fill: Option<Color>) {
        self.fill = fill;
    }

    pub fn payload(&self) -> Option<&Payload> {
        self.payload.as_ref()
    }

    pub fn set_payload(&mut self, payload: Option<Payload>) {
        self.payload = payload;
    }
}

#[cfg(test)]
mod tests {
    use super::{Node, Shape};
    use crate::model::{Color, NodeId, Payload};

    fn nid(value: &str) -> NodeId {
        NodeId::new(value).expect("node id")
    }

    #[test]
    fn node_defaults_label_to_id_text() {
        let node = Node::new(nid("Paused"));

        assert_eq!(node.id().as_str(), "Paused");
        assert_eq!(node.label(), "Paused");
        assert!(node.label_visible());
        assert_eq!(node.shape(), Shape::Ellipse);
        assert_eq!(node.fill(), None);
        assert!(node.payload().is_none());
    }

    #[test]
    fn node_can_be_constructed_and_updated() {
        let mut node = Node::new(nid("f1"));

        node.set_label("");
        node.set_label_visible(false);
        node.set_shape(Shape::Circle);
        node.set_fill(Some(Color::LIGHT_GRAY));
        node.set_payload(Some(Payload::Interactive { node_id: nid("f1") }));

        assert_eq!(node.label(), "");
        assert!(!node.label_visible());
        assert_eq!(node.shape(), Shape::Circle);
        assert_eq!(node.fill(), Some(Color::LIGHT_GRAY));
        assert_eq!(
            node.payload(),
            Some(&Payload::Interactive { node_id: nid("f1") })
        );

        node.set_payload(None);
        assert!(node.payload().is_none());
    }
}
