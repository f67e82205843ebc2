// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Larissa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Larissa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

/// An opaque RGB fill color for nodes and subgraph backgrounds.
///
/// The rendering control owns the actual brush/paint mapping; the model only
/// carries the triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Self = Self::rgb(0xFF, 0xFF, 0xFF);
    pub const LIGHT_BLUE: Self = Self::rgb(0xAD, 0xD8, 0xE6);
    pub const LIGHT_PINK: Self = Self::rgb(0xFF, 0xB6, 0xC1);
    pub const YELLOW: Self = Self::rgb(0xFF, 0xFF, 0x00);
    pub const GREEN_YELLOW: Self = Self::rgb(0xAD, 0xFF, 0x2F);
    pub const LIGHT_SKY_BLUE: Self = Self::rgb(0x87, 0xCE, 0xFA);
    pub const LIGHT_GRAY: Self = Self::rgb(0xD3, 0xD3, 0xD3);
    pub const WHITE_SMOKE: Self = Self::rgb(0xF5, 0xF5, 0xF5);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn r(&self) -> u8 {
        self.r
    }

    pub const fn g(&self) -> u8 {
        self.g
    }

    pub const fn b(&self) -> u8 {
        self.b
    }

    /// Parses `#RRGGBB`, `0xRRGGBB` or bare `RRGGBB`.
    pub fn from_hex(value: &str) -> Result<Self, ColorError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ColorError::Empty);
        }

        let hex = trimmed
            .strip_prefix('#')
            .or_else(|| trimmed.strip_prefix("0x"))
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if hex.len() != 6 || !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHex(trimmed.to_owned()));
        }

        let rgb = u32::from_str_radix(hex, 16)
            .map_err(|_| ColorError::InvalidHex(trimmed.to_owned()))?;
        Ok(Self::rgb(
            ((rgb >> 16) & 0xFF) as u8,
            ((rgb >> 8) & 0xFF) as u8,
            (rgb & 0xFF) as u8,
        ))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl serde::Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    Empty,
    InvalidHex(String),
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("empty color"),
            Self::InvalidHex(value) => {
                write!(f, "invalid hex color: {value} (expected #RRGGBB)")
            }
        }
    }
}

impl std::error::Error for ColorError {}

#[cfg(test)]
mod tests {
    use super::{Color, ColorError};

    #[test]
    fn from_hex_accepts_all_prefix_forms() {
        for value in ["#add8e6", "0xADD8E6", "ADD8E6"] {
            assert_eq!(Color::from_hex(value).expect("color"), Color::LIGHT_BLUE);
        }
    }

    #[test]
    fn from_hex_rejects_bad_input() {
        assert_eq!(Color::from_hex("  "), Err(ColorError::Empty));
        assert_eq!(
            Color::from_hex("#ab"),
            Err(ColorError::InvalidHex("#ab".to_owned()))
        );
        assert_eq!(
            Color::from_hex("zzzzzz"),
            Err(ColorError::InvalidHex("zzzzzz".to_owned()))
        );
    }

    #[test]
    fn display_round_trips_through_from_hex() {
        let rendered = Color::LIGHT_PINK.to_string();
        assert_eq!(rendered, "#ffb6c1");
        assert_eq!(Color::from_hex(&rendered).expect("color"), Color::LIGHT_PINK);
    }
}
