//! Resize callbacks.
//!
//! The toolkit calls back into the session twice per live resize: once for
//! every intermediate size it proposes (`on_resize_requested`), and once when
//! the gesture ends (`on_resize_ended`). Both happen synchronously on the main
//! thread.

use std::{
    cell::RefCell,
    fmt,
    io::{self, Write},
    rc::Weak,
};

use crate::dpi::LogicalSize;

/// Sizes read back from the window once a live resize has ended.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ResizeReport {
    /// Outer size, title bar and borders included.
    pub frame: LogicalSize,
    /// Size of the drawable area.
    pub content: LogicalSize,
}

impl fmt::Display for ResizeReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Resized to: {}  (content: {})", self.frame, self.content)
    }
}

/// Receives resize notifications for the session's window.
pub trait ResizeListener {
    /// Called with every frame size proposed during a live resize, after the
    /// toolkit has applied the declared content bounds. The returned size is
    /// the one the window takes.
    ///
    /// Must not touch the window; the default accepts the proposal as is.
    fn on_resize_requested(&mut self, proposed: LogicalSize) -> LogicalSize {
        proposed
    }

    /// Called once per completed live resize.
    fn on_resize_ended(&mut self, report: ResizeReport);
}

/// Non-owning handle the window side keeps to the session's listener.
pub type ListenerRef = Weak<RefCell<dyn ResizeListener>>;

/// Accepts every proposal and only logs finished resizes.
#[derive(Debug, Default, Copy, Clone)]
pub struct PassThrough;

impl ResizeListener for PassThrough {
    fn on_resize_ended(&mut self, report: ResizeReport) {
        debug!("{}", report);
    }
}

/// Writes one line per finished resize to `W`.
#[derive(Debug)]
pub struct ReportingListener<W> {
    out: W,
}

impl ReportingListener<io::Stdout> {
    pub fn stdout() -> Self {
        ReportingListener::new(io::stdout())
    }
}

impl<W: Write> ReportingListener<W> {
    pub fn new(out: W) -> Self {
        ReportingListener { out }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ResizeListener for ReportingListener<W> {
    fn on_resize_ended(&mut self, report: ResizeReport) {
        let result = writeln!(self.out, "{}", report).and_then(|_| self.out.flush());
        if let Err(err) = result {
            warn!("Failed to write resize report: {}", err);
        }
    }
}

// Both helpers are the only places the window side dereferences its `ListenerRef`.
// A dead reference, or a listener that's already borrowed further up the
// stack, means the callback is skipped.

pub(crate) fn request_resize(listener: &ListenerRef, proposed: LogicalSize) -> LogicalSize {
    let listener = match listener.upgrade() {
        Some(listener) => listener,
        None => return proposed,
    };
    let accepted = match listener.try_borrow_mut() {
        Ok(mut listener) => listener.on_resize_requested(proposed),
        Err(_) => {
            warn!("Resize listener is busy; accepting {} unchanged", proposed);
            proposed
        },
    };
    accepted
}

pub(crate) fn notify_resize_ended(listener: &ListenerRef, report: ResizeReport) -> bool {
    let listener = match listener.upgrade() {
        Some(listener) => listener,
        None => {
            trace!("Resize listener is gone; dropping {:?}", report);
            return false;
        },
    };
    let delivered = match listener.try_borrow_mut() {
        Ok(mut listener) => {
            listener.on_resize_ended(report);
            true
        },
        Err(_) => {
            warn!("Resize listener is busy; dropping {:?}", report);
            false
        },
    };
    delivered
}
