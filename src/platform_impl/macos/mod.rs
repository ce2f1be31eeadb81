#![cfg(target_os = "macos")]

//! AppKit backend.
//!
//! AppKit does the clamping. This backend declares the bounds on an `NSWindow`,
//! installs a delegate that forwards `windowWillResize:toSize:` to the session's
//! listener, and observes `NSWindowDidEndLiveResizeNotification` to report the
//! final size. Everything here runs on the main thread.

mod app_delegate;
mod event_loop;
mod util;
mod window;
mod window_delegate;

pub use self::event_loop::run;
