// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Larissa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Larissa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{
    ArrowHead, Color, FamilyMember, Graph, Node, NodeId, Orientation, Payload, Sex, Shape,
};

/// The person table: name, sex, biography URL.
const FAMILY: [(&str, Sex, &str); 12] = [
    (
        "Abraham",
        Sex::Male,
        "https://simpsons.fandom.com/wiki/Abraham_Simpson",
    ),
    (
        "Mona",
        Sex::Female,
        "https://simpsons.fandom.com/wiki/Mona_Simpson",
    ),
    (
        "Homer",
        Sex::Male,
        "https://simpsons.fandom.com/wiki/Homer_Simpson",
    ),
    (
        "Clancy",
        Sex::Male,
        "https://simpsons.fandom.com/wiki/Clancy_Bouvier",
    ),
    (
        "Jackie",
        Sex::Female,
        "https://simpsons.fandom.com/wiki/Jackie_Bouvier",
    ),
    (
        "Marge",
        Sex::Female,
        "https://simpsons.fandom.com/wiki/Marge_Simpson",
    ),
    (
        "Patty",
        Sex::Female,
        "https://simpsons.fandom.com/wiki/Patty_Bouvier",
    ),
    (
        "Selma",
        Sex::Female,
        "https://simpsons.fandom.com/wiki/Selma_Bouvier",
    ),
    (
        "Ling",
        Sex::Female,
        "https://simpsons.fandom.com/wiki/Ling_Bouvier",
    ),
    (
        "Bart",
        Sex::Male,
        "https://simpsons.fandom.com/wiki/Bart_Simpson",
    ),
    (
        "Lisa",
        Sex::Female,
        "https://simpsons.fandom.com/wiki/Lisa_Simpson",
    ),
    (
        "Maggie",
        Sex::Female,
        "https://simpsons.fandom.com/wiki/Maggie_Simpson",
    ),
];

/// Family-union markers connecting parents to their children.
const UNIONS: [&str; 3] = ["f1", "f2", "f3"];

/// parent→union and union→child, plus Selma→Ling (no union of her own).
const EDGES: [(&str, &str); 14] = [
    ("Abraham", "f1"),
    ("Mona", "f1"),
    ("f1", "Homer"),
    ("Clancy", "f2"),
    ("Jackie", "f2"),
    ("f2", "Marge"),
    ("f2", "Patty"),
    ("f2", "Selma"),
    ("Homer", "f3"),
    ("Marge", "f3"),
    ("f3", "Bart"),
    ("f3", "Lisa"),
    ("f3", "Maggie"),
    ("Selma", "Ling"),
];

fn nid(value: &str) -> NodeId {
    NodeId::new(value).expect("node id")
}

/// The Simpsons/Bouvier genealogy as a bipartite person/union graph.
///
/// Ancestors sit above descendants, so the default top-to-bottom layering is
/// flipped. Arrowheads are suppressed everywhere: the edges stay directed for
/// layering, but the diagram reads as undirected unions.
pub fn family_tree() -> Graph {
    let mut graph = Graph::new("Family Tree");
    graph.set_orientation(Orientation::BottomToTop);

    for (name, sex, url) in FAMILY {
        let member = FamilyMember::new(name, sex, url);
        let mut node = Node::new(nid(name));
        node.set_shape(Shape::Box);
        node.set_fill(Some(member.background_color()));
        node.set_payload(Some(Payload::FamilyMember(member)));
        graph.add_node(node);
    }

    for union in UNIONS {
        let mut node = Node::new(nid(union));
        node.set_label("");
        node.set_shape(Shape::Circle);
        node.set_fill(Some(Color::LIGHT_GRAY));
        graph.add_node(node);
    }

    for (from, to) in EDGES {
        let edge = graph.connect(nid(from), nid(to));
        edge.set_arrow_head(ArrowHead::None);
    }

    graph
}
