// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Screens the user can navigate between. The quiz is not a screen: it is
/// an overlay the app holds alongside whichever screen opened it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    SetDetail,
}
