//! The window session controller.
//!
//! A `WindowSession` is the one top-level session of the process: it holds the
//! window attributes and the listener that receives resize callbacks. It is
//! owned by whoever drives the process (usually `main`), and the window side
//! only ever gets a `Weak` reference to the listener, so dropping the session
//! silences the callbacks instead of leaving them dangling.

use std::{
    cell::{Ref, RefCell},
    rc::Rc,
};

use crate::{
    event::{ListenerRef, ResizeListener},
    platform_impl::{self, headless},
    window::{CreationError, WindowAttributes},
};

/// Whether the session's window still exists.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SessionState {
    Open,
    Closed,
}

pub struct WindowSession<L: ResizeListener + 'static> {
    attributes: WindowAttributes,
    listener: Rc<RefCell<L>>,
}

impl<L: ResizeListener + 'static> WindowSession<L> {
    /// Creates the session. The attributes are validated here, before anything
    /// is asked of the toolkit.
    pub fn new(attributes: WindowAttributes, listener: L) -> Result<Self, CreationError> {
        attributes.validate()?;
        Ok(WindowSession {
            attributes,
            listener: Rc::new(RefCell::new(listener)),
        })
    }

    pub fn attributes(&self) -> &WindowAttributes {
        &self.attributes
    }

    /// Borrows the listener.
    ///
    /// # Panics
    ///
    /// Panics if called from inside one of the listener's own callbacks.
    pub fn listener(&self) -> Ref<'_, L> {
        self.listener.borrow()
    }

    /// A non-owning handle to the listener, as handed to the window.
    pub fn listener_ref(&self) -> ListenerRef {
        let listener: Rc<RefCell<dyn ResizeListener>> = self.listener.clone();
        Rc::downgrade(&listener)
    }

    /// Builds the window against the headless toolkit model instead of the
    /// native one.
    pub fn launch_headless(&self, host: headless::Host) -> Result<headless::Window, CreationError> {
        headless::Window::new(&self.attributes, self.listener_ref(), host)
    }

    /// Launches the native window and runs the event loop until the
    /// application stops.
    ///
    /// The window is created once the application has finished launching.
    /// Any failure to do so ends the loop and is returned here.
    pub fn run(self) -> Result<(), CreationError> {
        let listener: Rc<RefCell<dyn ResizeListener>> = self.listener;
        platform_impl::run(self.attributes, listener)
    }
}
