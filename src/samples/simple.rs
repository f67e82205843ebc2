// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Larissa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Larissa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{Graph, NodeId, Payload, Shape};

/// Horizontal label padding; some controls crowd ellipse labels otherwise.
const LABEL_PAD: &str = "   ";

const EDGES: [(&str, &str); 7] = [
    ("A", "B"),
    ("A", "D"),
    ("A", "E"),
    ("B", "C"),
    ("B", "D"),
    ("D", "A"),
    ("D", "E"),
];

fn nid(value: &str) -> NodeId {
    NodeId::new(value).expect("node id")
}

/// The shared topology both simple samples rebuild from scratch: nodes A–E
/// exist only because the edge list mentions them.
fn simple_topology(name: &str) -> Graph {
    let mut graph = Graph::new(name);
    for (from, to) in EDGES {
        graph.connect(nid(from), nid(to));
    }
    for node in graph.nodes_mut().values_mut() {
        node.set_shape(Shape::Ellipse);
        let label = format!("{LABEL_PAD}{}{LABEL_PAD}", node.id());
        node.set_label(label);
    }
    graph
}

/// A plain five-node graph with a two-direction cycle (A→D and D→A).
pub fn simple_graph() -> Graph {
    simple_topology("Simple Graph")
}

/// The simple topology with every node made clickable: box outline plus an
/// interactive payload carrying the node's own id.
pub fn simple_interactive_graph() -> Graph {
    let mut graph = simple_topology("Simple Interactive Graph");
    for node in graph.nodes_mut().values_mut() {
        node.set_shape(Shape::Box);
        let node_id = node.id().clone();
        node.set_payload(Some(Payload::Interactive { node_id }));
    }
    graph
}
