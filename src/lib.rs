//! A single window whose content size is clamped between a minimum and a maximum.
//!
//! The session opens one titled, closable, miniaturizable and resizable window,
//! declares its content size bounds to the toolkit, and reports the window's
//! size each time the user finishes a live resize:
//!
//! ```no_run
//! use minmax_window::{
//!     event::ReportingListener,
//!     session::WindowSession,
//!     window::WindowBuilder,
//! };
//!
//! let attributes = WindowBuilder::new().build().unwrap();
//! let session = WindowSession::new(attributes, ReportingListener::stdout()).unwrap();
//! session.run().unwrap();
//! ```
//!
//! Clamping is the toolkit's job. Natively that's AppKit, so `WindowSession::run`
//! only works on macOS; everywhere else the session can be launched against the
//! [`headless`] model of the toolkit, which is what the tests do.
//!
//! # Callbacks
//!
//! Resize callbacks go to a [`ResizeListener`](event::ResizeListener). The window
//! only keeps a weak reference to it, so once the session is dropped the
//! callbacks stop.

#[macro_use]
extern crate bitflags;
#[macro_use]
extern crate log;
#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;

#[cfg(target_os = "macos")]
#[macro_use]
extern crate lazy_static;
#[cfg(target_os = "macos")]
#[macro_use]
extern crate objc;

pub mod constraints;
pub mod dpi;
pub mod event;
pub mod session;
pub mod window;

mod platform_impl;

pub use crate::platform_impl::headless;
