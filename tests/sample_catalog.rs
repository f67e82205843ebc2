// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Larissa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Larissa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use larissa::model::{Graph, Orientation, Payload, Shape};
use larissa::samples::{
    family_tree, sample_graphs, simple_graph, simple_interactive_graph, state_machine,
};
use rstest::rstest;

type Builder = fn() -> Graph;

#[test]
fn gallery_exposes_four_samples_in_order() {
    let names: Vec<String> = sample_graphs()
        .iter()
        .map(|graph| graph.name().to_owned())
        .collect();

    assert_eq!(
        names,
        [
            "Simple Graph",
            "Simple Interactive Graph",
            "Family Tree",
            "State Machine",
        ]
    );
}

#[rstest]
#[case::simple(simple_graph as Builder)]
#[case::interactive(simple_interactive_graph as Builder)]
#[case::family(family_tree as Builder)]
#[case::state_machine(state_machine as Builder)]
fn builders_are_pure_and_produce_valid_graphs(#[case] builder: Builder) {
    let first = builder();
    let second = builder();

    first.validate().expect("valid graph");
    assert_eq!(first, second);
}

#[rstest]
#[case::simple(simple_graph as Builder, "Simple Graph", 5, 7)]
#[case::interactive(simple_interactive_graph as Builder, "Simple Interactive Graph", 5, 7)]
#[case::family(family_tree as Builder, "Family Tree", 15, 14)]
#[case::state_machine(state_machine as Builder, "State Machine", 10, 12)]
fn samples_have_their_literal_sizes(
    #[case] builder: Builder,
    #[case] name: &str,
    #[case] nodes: usize,
    #[case] edges: usize,
) {
    let graph = builder();

    assert_eq!(graph.name(), name);
    assert_eq!(graph.nodes().len(), nodes);
    assert_eq!(graph.edges().len(), edges);
}

#[test]
fn interactive_derivation_does_not_mutate_prior_simple_graphs() {
    let plain = simple_graph();
    let snapshot = plain.clone();

    let interactive = simple_interactive_graph();

    assert_eq!(plain, snapshot);
    assert!(plain.nodes().values().all(|node| node.payload().is_none()));
    assert!(interactive
        .nodes()
        .values()
        .all(|node| matches!(node.payload(), Some(Payload::Interactive { .. }))));
}

#[test]
fn only_the_family_tree_flips_the_layout_direction() {
    for graph in sample_graphs() {
        let expected = if graph.name() == "Family Tree" {
            Orientation::BottomToTop
        } else {
            Orientation::TopToBottom
        };
        assert_eq!(graph.orientation(), expected, "{}", graph.name());
    }
}

#[test]
fn sample_graphs_serialize_for_the_presentation_layer() {
    for graph in sample_graphs() {
        let json = serde_json::to_value(&graph).expect("serializable graph");

        assert_eq!(json["name"], graph.name());
        let nodes = json["nodes"].as_object().expect("node map");
        assert_eq!(nodes.len(), graph.nodes().len());
    }
}

#[test]
fn simple_samples_disagree_only_on_shape_and_payload() {
    let plain = simple_graph();
    let interactive = simple_interactive_graph();

    assert_eq!(plain.edges().len(), interactive.edges().len());
    for (a, b) in plain.edges().iter().zip(interactive.edges()) {
        assert_eq!(a.from(), b.from());
        assert_eq!(a.to(), b.to());
    }

    for (id, node) in plain.nodes() {
        let other = interactive.node(id).expect("matching node");
        assert_eq!(node.label(), other.label());
        assert_eq!(node.shape(), Shape::Ellipse);
        assert_eq!(other.shape(), Shape::Box);
    }
}
