// SPDX-License-Identifier: MPL-2.0
//! `iced_notify` is an imperative toast notification manager for Iced.
//!
//! Notifications are spawned with a single call, stacked independently in
//! five screen placements, auto-dismissed after a configurable duration and
//! torn down after an exit transition delay.

#![doc(html_root_url = "https://docs.rs/iced_notify/0.1.0")]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod notifications;
pub mod test_utils;
pub mod ui;
