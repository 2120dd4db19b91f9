// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::config::SortOrder;

/// Top-level messages consumed by `App::update`. Rendering happens once at
/// boot, so the running app only tracks window geometry.
#[derive(Debug, Clone)]
pub enum Message {
    /// The window was resized; the grid re-flows to the new width.
    WindowResized(iced::Size),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Directory to scan. Falls back to the persisted config, then to the
    /// current directory.
    pub directory: Option<String>,
    /// Caption text: switches the gallery to font-preview mode.
    pub text: Option<String>,
    /// Sort order override for this run.
    pub sort: Option<SortOrder>,
}
