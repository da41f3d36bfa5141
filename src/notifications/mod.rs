// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Callers spawn notifications imperatively; the [`Manager`] stacks them per
//! screen [`Placement`], hides them after their duration and tears them down
//! once the exit transition delay has elapsed.
//!
//! # Components
//!
//! - [`placement`] - The five stacking anchors
//! - [`options`] - Caller options, defaults and their resolution
//! - [`manager`] - `Manager` owning buckets, timers and mounted units
//! - [`surface`] - `Surface` trait the manager renders through
//! - [`timer`] - Deadline queue and injectable clocks
//!
//! # Usage
//!
//! ```
//! use iced_notify::notifications::{Manager, NotificationOptions, Placement};
//! use iced_notify::ui::ToastLayer;
//!
//! let mut manager = Manager::new(ToastLayer::new());
//!
//! let handle = manager
//!     .success(NotificationOptions::new().title("Image saved").at(Placement::RightBottom))
//!     .expect("known placement");
//!
//! assert_eq!(manager.stack_index(handle), Some(0));
//! manager.dismiss(handle);
//! ```
//!
//! In the application, feed `Message::Tick` periodically while
//! [`Manager::has_pending_timers`] is true, and render
//! `manager.surface().view(&Attachment::Root)` on top of the content.

mod handle;
pub mod manager;
pub mod options;
pub mod placement;
mod registry;
pub mod surface;
pub mod timer;

pub use handle::{Lifecycle, NotificationHandle, NotificationId};
pub use manager::{Manager, Message as NotificationMessage};
pub use options::{
    resolve_options, Category, CloseEvent, Content, Defaults, NotificationOptions, OnClose,
    ResolvedOptions,
};
pub use placement::Placement;
pub use registry::PlacementRegistry;
pub use surface::{Attachment, Surface, ToastProps, UnitId};
pub use timer::{Clock, ManualClock, SystemClock, TimerToken};
