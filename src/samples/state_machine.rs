// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Larissa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Larissa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{Color, Edge, Endpoint, Graph, Node, NodeId, Shape, Subgraph, SubgraphId};

/// Transition labels render small so they fit the compact nested layout.
const TRANSITION_LABEL_FONT_SIZE: f32 = 6.0;

fn nid(value: &str) -> NodeId {
    NodeId::new(value).expect("node id")
}

fn gid(value: &str) -> SubgraphId {
    SubgraphId::new(value).expect("subgraph id")
}

fn state_node(id: &str, fill: Color) -> Node {
    let mut node = Node::new(nid(id));
    node.set_shape(Shape::Box);
    node.set_fill(Some(fill));
    node
}

/// The initial-pseudo-state marker: a small filled dot with no label. It is a
/// drawing convention, not a state of the modeled automaton.
fn init_node(id: &str) -> Node {
    let mut node = Node::new(nid(id));
    node.set_label("");
    node.set_label_visible(false);
    node.set_shape(Shape::Circle);
    node.set_fill(Some(Color::BLACK));
    node
}

fn transition(graph: &mut Graph, from: impl Into<Endpoint>, to: impl Into<Endpoint>, label: &str) {
    let edge = graph.add_edge(Edge::new(from, to));
    edge.set_label(Some(label));
    edge.set_label_font_size(Some(TRANSITION_LABEL_FONT_SIZE));
}

/// A hierarchical state machine rendered as three nested regions,
/// Main ⊃ On ⊃ Available.
///
/// Transitions that enter or leave a whole region keep the region itself as
/// the edge endpoint; the control draws them against the group boundary
/// instead of fanning out to every contained state.
pub fn state_machine() -> Graph {
    let mut graph = Graph::new("State Machine");

    let mut available = Subgraph::new(gid("Available"));
    available.set_fill(Some(Color::WHITE_SMOKE));

    let mut on = Subgraph::new(gid("On"));
    on.set_fill(Some(Color::WHITE_SMOKE));
    on.add_child(available);

    let mut main = Subgraph::new(gid("Main"));
    main.set_fill(Some(Color::WHITE_SMOKE));
    main.add_child(on);
    graph.add_subgraph(main);

    for id in ["Paused", "Starting", "Started", "Pausing"] {
        graph
            .add_node_in(state_node(id, Color::YELLOW), &gid("Available"))
            .expect("region");
    }
    graph
        .add_node_in(init_node("init:Available"), &gid("Available"))
        .expect("region");

    graph
        .add_node_in(state_node("Failure", Color::GREEN_YELLOW), &gid("On"))
        .expect("region");
    graph
        .add_node_in(init_node("init:On"), &gid("On"))
        .expect("region");

    for id in ["Off", "Cleaning"] {
        graph
            .add_node_in(state_node(id, Color::LIGHT_SKY_BLUE), &gid("Main"))
            .expect("region");
    }
    graph
        .add_node_in(init_node("init:Main"), &gid("Main"))
        .expect("region");

    graph.add_edge(Edge::new(nid("init:Available"), nid("Paused")));
    transition(&mut graph, nid("Paused"), nid("Starting"), "Start");
    transition(&mut graph, nid("Starting"), nid("Started"), "StartingComplete");
    transition(&mut graph, nid("Started"), nid("Pausing"), "Pause");
    transition(&mut graph, nid("Pausing"), nid("Paused"), "PausingComplete");

    graph.add_edge(Edge::new(nid("init:On"), gid("Available")));
    transition(&mut graph, gid("Available"), nid("Failure"), "FailureDetected");
    transition(&mut graph, nid("Failure"), gid("Available"), "Reset");

    graph.add_edge(Edge::new(nid("init:Main"), nid("Off")));
    transition(&mut graph, nid("Off"), gid("On"), "SwitchOn");
    transition(&mut graph, gid("On"), nid("Cleaning"), "SwitchOff");
    transition(&mut graph, nid("Cleaning"), nid("Off"), "CleaningComplete");

    graph
}
