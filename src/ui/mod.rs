// SPDX-License-Identifier: MPL-2.0
//! Iced rendering of notifications.
//!
//! This module follows the Elm-style "state down, messages up" pattern: the
//! manager pushes props into the [`ToastLayer`], the layer renders them and
//! reports close clicks back as [`crate::notifications::NotificationMessage`]s.
//!
//! - [`layer`] - `ToastLayer`, the Iced `Surface` with per-placement anchors
//! - [`toast`] - Widget for a single toast
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod layer;
pub mod toast;

pub use layer::{Component, Components, ToastLayer};
