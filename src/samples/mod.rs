// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Larissa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Larissa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Built-in sample graphs.
//!
//! Each builder is pure data assembly: it returns a fresh, fully-populated
//! graph value on every call and keeps no state between calls. The samples
//! exercise different features of a rendering control — plain layout,
//! clickable nodes, a bottom-to-top genealogy, nested state regions.

mod family_tree;
mod simple;
mod state_machine;


pub use family_tree::family_tree;
pub use simple::{simple_graph, simple_interactive_graph};
pub use state_machine::state_machine;

use crate::model::Graph;

/// The sample gallery in the fixed order a picker presents it.
pub fn sample_graphs() -> Vec<Graph> {
    vec![
        simple_graph(),
        simple_interactive_graph(),
        family_tree(),
        state_machine(),
    ]
}
