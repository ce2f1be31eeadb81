use std::{os::raw::c_void, ptr};

use cocoa::{
    base::{id, nil},
    foundation::{NSAutoreleasePool, NSSize},
};
use dispatch::Queue;
use objc::{declare::ClassDecl, runtime::{Class, Object, Sel}};

use crate::{
    event::{self, ListenerRef, ResizeReport},
    session::SessionState,
};
use super::util::{self, IdRef};

// Value of AppKit's `NSWindowDidEndLiveResizeNotification`.
const LIVE_RESIZE_ENDED: &str = "NSWindowDidEndLiveResizeNotification";

pub struct WindowDelegateState {
    nswindow: IdRef, // never changes
    listener: ListenerRef,
    state: SessionState,
}

impl WindowDelegateState {
    pub fn new(nswindow: IdRef, listener: ListenerRef) -> Self {
        WindowDelegateState {
            nswindow,
            listener,
            state: SessionState::Open,
        }
    }

    fn report(&self) -> ResizeReport {
        unsafe {
            ResizeReport {
                frame: util::frame_size(*self.nswindow),
                content: util::content_size(*self.nswindow),
            }
        }
    }

    fn resize_requested(&mut self, proposed: NSSize) -> NSSize {
        if self.state == SessionState::Closed {
            return proposed;
        }
        let accepted = event::request_resize(&self.listener, util::from_ns_size(proposed));
        util::to_ns_size(accepted)
    }

    fn resize_ended(&mut self) {
        if self.state == SessionState::Closed {
            return;
        }
        let report = self.report();
        event::notify_resize_ended(&self.listener, report);
    }
}

pub struct WindowDelegate {
    state: Box<WindowDelegateState>,
    notification_name: Option<IdRef>,
    this: IdRef,
}

impl WindowDelegate {
    pub fn new(state: WindowDelegateState) -> WindowDelegate {
        // Box the state so it will have a fixed address
        let mut state = Box::new(state);
        let state_ptr: *mut WindowDelegateState = &mut *state;
        unsafe {
            let delegate = IdRef::new(msg_send![WINDOW_DELEGATE_CLASS.0, new]);

            // setDelegate uses autorelease on objects,
            // so we need to use autorelease too.
            let autoreleasepool = NSAutoreleasePool::new(nil);

            (&mut **delegate).set_ivar("minmaxState", state_ptr as *mut c_void);
            let _: () = msg_send![*state.nswindow, setDelegate:*delegate];

            let _: () = msg_send![autoreleasepool, drain];

            WindowDelegate { state, notification_name: None, this: delegate }
        }
    }

    /// Subscribes the delegate to the end of live resizes, for this window only.
    pub fn observe_live_resize(&mut self) {
        if self.notification_name.is_some() {
            return;
        }
        unsafe {
            let name = util::ns_string(LIVE_RESIZE_ENDED);
            let center: id = msg_send![class!(NSNotificationCenter), defaultCenter];
            let _: () = msg_send![center,
                addObserver:*self.this
                selector:sel!(liveResizeDidEnd:)
                name:*name
                object:*self.state.nswindow
            ];
            self.notification_name = Some(name);
        }
    }
}

impl Drop for WindowDelegate {
    fn drop(&mut self) {
        trace!("Dropping `WindowDelegate` ({:?})", self as *mut _);
        unsafe {
            if let Some(name) = self.notification_name.take() {
                let center: id = msg_send![class!(NSNotificationCenter), defaultCenter];
                let _: () = msg_send![center,
                    removeObserver:*self.this
                    name:*name
                    object:*self.state.nswindow
                ];
            }

            // A notification may still be queued on the main thread with the
            // delegate retained; it must find no state rather than a dangling one.
            (&mut **self.this).set_ivar("minmaxState", ptr::null_mut::<c_void>());

            // Nil the window's delegate so it doesn't still reference us
            // NOTE: setDelegate:nil at first retains the previous value,
            // and then autoreleases it, so autorelease pool is needed
            let autoreleasepool = NSAutoreleasePool::new(nil);
            let _: () = msg_send![*self.state.nswindow, setDelegate:nil];
            let _: () = msg_send![autoreleasepool, drain];
        }
    }
}

struct WindowDelegateClass(*const Class);
unsafe impl Send for WindowDelegateClass {}
unsafe impl Sync for WindowDelegateClass {}

lazy_static! {
    static ref WINDOW_DELEGATE_CLASS: WindowDelegateClass = unsafe {
        let superclass = class!(NSObject);
        let mut decl = ClassDecl::new("MinMaxWindowDelegate", superclass).unwrap();

        decl.add_method(
            sel!(windowWillResize:toSize:),
            window_will_resize as extern fn(&Object, Sel, id, NSSize) -> NSSize,
        );
        decl.add_method(
            sel!(windowWillClose:),
            window_will_close as extern fn(&Object, Sel, id),
        );
        decl.add_method(
            sel!(liveResizeDidEnd:),
            live_resize_did_end as extern fn(&Object, Sel, id),
        );

        decl.add_ivar::<*mut c_void>("minmaxState");

        WindowDelegateClass(decl.register())
    };
}

// Returns `None` once the owning `WindowDelegate` has been dropped.
fn with_state<F: FnOnce(&mut WindowDelegateState) -> T, T>(this: &Object, callback: F) -> Option<T> {
    let state_ptr = unsafe {
        let state_ptr: *mut c_void = *this.get_ivar("minmaxState");
        state_ptr as *mut WindowDelegateState
    };
    if state_ptr.is_null() {
        return None;
    }
    Some(callback(unsafe { &mut *state_ptr }))
}

extern fn window_will_resize(this: &Object, _: Sel, _: id, frame_size: NSSize) -> NSSize {
    trace!("Triggered `windowWillResize:toSize:`");
    let accepted = with_state(this, |state| state.resize_requested(frame_size))
        .unwrap_or(frame_size);
    trace!("Completed `windowWillResize:toSize:`");
    accepted
}

extern fn window_will_close(this: &Object, _: Sel, _: id) {
    trace!("Triggered `windowWillClose`");
    with_state(this, |state| state.state = SessionState::Closed);
    trace!("Completed `windowWillClose`");
}

struct RetainedDelegate(id);

// Only ever dereferenced on the main queue.
unsafe impl Send for RetainedDelegate {}

extern fn live_resize_did_end(this: &Object, _: Sel, _: id) {
    trace!("Triggered `liveResizeDidEnd:`");
    if util::is_main_thread() {
        with_state(this, |state| state.resize_ended());
    } else {
        debug!("Live resize ended off the main thread; deferring to the main queue");
        let this = this as *const Object as id;
        let delegate = unsafe {
            let _: id = msg_send![this, retain];
            RetainedDelegate(this)
        };
        Queue::main().exec_async(move || {
            let RetainedDelegate(this) = delegate;
            unsafe {
                with_state(&*this, |state| state.resize_ended());
                let _: () = msg_send![this, release];
            }
        });
    }
    trace!("Completed `liveResizeDidEnd:`");
}
