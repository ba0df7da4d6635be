// SPDX-License-Identifier: MPL-2.0
//! UI components: the measurement overlay canvas, notifications and theming.

pub mod notifications;
pub mod overlay;
pub mod theme;
