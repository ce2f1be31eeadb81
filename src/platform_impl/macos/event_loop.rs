use std::{cell::RefCell, rc::Rc};

use cocoa::{
    appkit::{
        NSApp, NSApplication, NSApplicationActivationPolicy, NSApplicationDefined,
        NSEvent, NSEventModifierFlags, NSEventSubtype,
    },
    base::{nil, NO, YES},
    foundation::{NSAutoreleasePool, NSPoint},
};

use crate::{
    event::ResizeListener,
    window::{CreationError, WindowAttributes},
};
use super::{
    app_delegate::{AppDelegate, AppDelegateState},
    util,
};

/// Runs `NSApplication` with the session's app delegate installed.
///
/// Returns once the application is stopped. A normal quit terminates the
/// process from inside `run` instead.
pub fn run(
    attributes: WindowAttributes,
    listener: Rc<RefCell<dyn ResizeListener>>,
) -> Result<(), CreationError> {
    if !util::is_main_thread() {
        return Err(CreationError::OsError(
            "The AppKit event loop can only run on the main thread".to_owned(),
        ));
    }

    unsafe {
        let pool = NSAutoreleasePool::new(nil);

        let app = NSApp();
        if app == nil {
            let _: () = msg_send![pool, drain];
            return Err(CreationError::OsError("Couldn't get `NSApplication`".to_owned()));
        }

        let mut delegate = AppDelegate::new(app, AppDelegateState::new(attributes, listener));
        app.setActivationPolicy_(NSApplicationActivationPolicy::NSApplicationActivationPolicyRegular);
        app.activateIgnoringOtherApps_(YES);

        debug!("Entering the AppKit run loop");
        app.run();
        debug!("Left the AppKit run loop");

        let result = match delegate.take_error() {
            Some(err) => Err(err),
            None => Ok(()),
        };
        drop(delegate);
        let _: () = msg_send![pool, drain];
        result
    }
}

/// Makes `run` return.
pub unsafe fn stop_app() {
    let app = NSApp();
    let _: () = msg_send![app, stop:nil];

    // `stop:` is only checked after an event has been processed, so post one.
    let dummy_event = NSEvent::otherEventWithType_location_modifierFlags_timestamp_windowNumber_context_subtype_data1_data2_(
        nil,
        NSApplicationDefined,
        NSPoint::new(0.0, 0.0),
        NSEventModifierFlags::empty(),
        0.0,
        0,
        nil,
        NSEventSubtype::NSApplicationActivatedEventType,
        0,
        0,
    );
    app.postEvent_atStart_(dummy_event, NO);
}
