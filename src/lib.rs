//! # glint
//!
//! Animated Lucide icon widget for GTK4.
//!
//! One component: [`MotionIcon`], a named icon inside a container that
//! carries CSS-driven loop and entrance animations, activated by a
//! configurable trigger (always, hover, click, or keyboard focus).
//!
//! ```ignore
//! use glint::{MotionIcon, LoopAnimation, Trigger};
//!
//! let icon = MotionIcon::new("Heart")
//!     .animation(LoopAnimation::Heartbeat)
//!     .trigger(Trigger::Hover)
//!     .interactive(true)
//!     .build();
//! ```
//!
//! `build()` returns `None` (after logging a warning) when the icon name
//! resolves to nothing; there is no placeholder rendering.

pub mod animation;
pub mod config;
pub mod error;
pub mod icon;
pub mod logging;
pub mod state;
pub mod ui;

pub use animation::{EntranceAnimation, LoopAnimation, Trigger, Weight};
pub use error::{Error, Result};
pub use icon::{BuiltinRegistry, IconError, IconRegistry};
pub use ui::{MotionIcon, MotionIconConfig};
