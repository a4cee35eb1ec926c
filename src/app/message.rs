// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::home;
use crate::ui::quiz;
use crate::ui::set_detail;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Home(home::Message),
    SetDetail(set_detail::Message),
    Quiz(quiz::Message),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional set identifier to open directly on the detail screen.
    /// Unknown ids fall back to the default set.
    pub set: Option<String>,
    /// Optional config directory override (for settings.toml).
    pub config_dir: Option<String>,
}
