use std::{cell::RefCell, os::raw::c_void, ptr, rc::Rc};

use cocoa::base::{id, nil};
use objc::{declare::ClassDecl, runtime::{Class, Object, Sel, BOOL, YES}};

use crate::{
    event::ResizeListener,
    window::{CreationError, WindowAttributes},
};
use super::{event_loop, util::IdRef, window::Window};

pub struct AppDelegateState {
    attributes: WindowAttributes,
    // The strong reference; the window only ever sees a `Weak` to it.
    listener: Rc<RefCell<dyn ResizeListener>>,
    window: Option<Window>,
    error: Option<CreationError>,
}

impl AppDelegateState {
    pub fn new(attributes: WindowAttributes, listener: Rc<RefCell<dyn ResizeListener>>) -> Self {
        AppDelegateState {
            attributes,
            listener,
            window: None,
            error: None,
        }
    }

    fn launch(&mut self) {
        match Window::new(&self.attributes, Rc::downgrade(&self.listener)) {
            Ok(window) => self.window = Some(window),
            Err(err) => {
                error!("Failed to create the session window: {}", err);
                self.error = Some(err);
                unsafe { event_loop::stop_app() };
            },
        }
    }
}

pub struct AppDelegate {
    state: Box<AppDelegateState>,
    app: id,
    this: IdRef,
}

impl AppDelegate {
    pub fn new(app: id, state: AppDelegateState) -> AppDelegate {
        // Box the state so it will have a fixed address
        let mut state = Box::new(state);
        let state_ptr: *mut AppDelegateState = &mut *state;
        unsafe {
            let delegate = IdRef::new(msg_send![APP_DELEGATE_CLASS.0, new]);
            (&mut **delegate).set_ivar("minmaxState", state_ptr as *mut c_void);
            let _: () = msg_send![app, setDelegate:*delegate];
            AppDelegate { state, app, this: delegate }
        }
    }

    pub fn take_error(&mut self) -> Option<CreationError> {
        self.state.error.take()
    }
}

impl Drop for AppDelegate {
    fn drop(&mut self) {
        trace!("Dropping `AppDelegate` ({:?})", self as *mut _);
        unsafe {
            (&mut **self.this).set_ivar("minmaxState", ptr::null_mut::<c_void>());
            let _: () = msg_send![self.app, setDelegate:nil];
        }
    }
}

struct AppDelegateClass(*const Class);
unsafe impl Send for AppDelegateClass {}
unsafe impl Sync for AppDelegateClass {}

lazy_static! {
    static ref APP_DELEGATE_CLASS: AppDelegateClass = unsafe {
        let superclass = class!(NSObject);
        let mut decl = ClassDecl::new("MinMaxAppDelegate", superclass).unwrap();

        decl.add_method(
            sel!(applicationDidFinishLaunching:),
            did_finish_launching as extern fn(&Object, Sel, id),
        );
        decl.add_method(
            sel!(applicationShouldTerminateAfterLastWindowClosed:),
            should_terminate_after_last_window_closed as extern fn(&Object, Sel, id) -> BOOL,
        );
        decl.add_method(
            sel!(applicationWillTerminate:),
            will_terminate as extern fn(&Object, Sel, id),
        );

        decl.add_ivar::<*mut c_void>("minmaxState");

        AppDelegateClass(decl.register())
    };
}

fn with_state<F: FnOnce(&mut AppDelegateState) -> T, T>(this: &Object, callback: F) -> Option<T> {
    let state_ptr = unsafe {
        let state_ptr: *mut c_void = *this.get_ivar("minmaxState");
        state_ptr as *mut AppDelegateState
    };
    if state_ptr.is_null() {
        return None;
    }
    Some(callback(unsafe { &mut *state_ptr }))
}

extern fn did_finish_launching(this: &Object, _: Sel, _: id) {
    trace!("Triggered `applicationDidFinishLaunching`");
    with_state(this, |state| state.launch());
    trace!("Completed `applicationDidFinishLaunching`");
}

// Closing the one window ends the session.
extern fn should_terminate_after_last_window_closed(_: &Object, _: Sel, _: id) -> BOOL {
    YES
}

// `terminate:` exits the process without returning from `run`, so the window is
// torn down here.
extern fn will_terminate(this: &Object, _: Sel, _: id) {
    trace!("Triggered `applicationWillTerminate`");
    with_state(this, |state| {
        state.window.take();
    });
    trace!("Completed `applicationWillTerminate`");
}
