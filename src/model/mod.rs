// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Larissa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Larissa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core graph data model.
//!
//! A graph is a named directed multigraph: flat id-keyed nodes, an ordered
//! edge list, and a hidden root subgraph tree for visual containment. Nodes
//! may carry an interaction payload the rendering control hands back on
//! activation.

pub mod color;
pub mod edge;
pub mod graph;
pub mod ids;
pub mod node;
pub mod payload;
pub mod subgraph;

pub use color::{Color, ColorError};
pub use edge::{ArrowHead, Edge, Endpoint};
pub use graph::{Graph, GraphError, Orientation, ROOT_SUBGRAPH_ID};
pub use ids::{Id, IdError, NodeId, SubgraphId};
pub use node::{Node, Shape};
pub use payload::{FamilyMember, Payload, Sex};
pub use subgraph::Subgraph;
