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
use crate::launch;

/// Per-node interaction payload.
///
/// The set of payload shapes is closed: a plain clickable marker carrying its
/// own node id, or a family-member record. The rendering control treats the
/// payload as opaque and hands it back on activation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Payload {
    Interactive { node_id: NodeId },
    FamilyMember(FamilyMember),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Sex {
    Male,
    Female,
}

/// A person in the family-tree sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FamilyMember {
    name: String,
    sex: Sex,
    url: String,
}

impl FamilyMember {
    pub fn new(name: impl Into<String>, sex: Sex, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sex,
            url: url.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn background_color(&self) -> Color {
        match self.sex {
            Sex::Male => Color::LIGHT_BLUE,
            Sex::Female => Color::LIGHT_PINK,
        }
    }

    /// Opens the biography URL with the host's default handler.
    ///
    /// Fire and forget: failures stay with the host OS.
    pub fn open_biography(&self) {
        launch::open_url(&self.url);
    }
}
