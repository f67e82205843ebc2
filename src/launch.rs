// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Larissa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Larissa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Opening URLs with the host's default handler.

use std::process::Command;

/// Hands `url` to the platform's default URL handler.
///
/// Fire and forget: the spawned handler is not awaited and spawn failures
/// are discarded. There is no reporting path back into the model.
pub fn open_url(url: &str) {
    let _ = opener_command(url).spawn();
}

#[cfg(all(unix, not(target_os = "macos")))]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    command
}

#[cfg(target_os = "macos")]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(url);
    command
}

#[cfg(windows)]
fn opener_command(url: &str) -> Command {
    // `start` is a cmd builtin; the empty string is the window title slot.
    let mut command = Command::new("cmd");
    command.args(["/C", "start", "", url]);
    command
}

#[cfg(not(any(unix, windows)))]
fn opener_command(_url: &str) -> Command {
    Command::new("true")
}
