use std::ops::Deref;

use cocoa::{
    appkit::{CGFloat, NSWindow},
    base::{id, nil},
    foundation::{NSAutoreleasePool, NSRect, NSSize, NSString},
};
use core_graphics::display::CGDisplay;
use objc::runtime::{BOOL, YES};

use crate::dpi::{LogicalPosition, LogicalSize};

/// An owned (+1) reference to an Objective-C object, released on drop.
pub struct IdRef(id);

impl IdRef {
    pub fn new(i: id) -> IdRef {
        IdRef(i)
    }

    pub fn non_nil(self) -> Option<IdRef> {
        if self.0 == nil { None } else { Some(self) }
    }
}

impl Drop for IdRef {
    fn drop(&mut self) {
        if self.0 != nil {
            unsafe {
                let autoreleasepool = NSAutoreleasePool::new(nil);
                let _: () = msg_send![self.0, release];
                let _: () = msg_send![autoreleasepool, release];
            };
        }
    }
}

impl Deref for IdRef {
    type Target = id;
    fn deref(&self) -> &id {
        &self.0
    }
}

impl Clone for IdRef {
    fn clone(&self) -> IdRef {
        if self.0 != nil {
            let _: id = unsafe { msg_send![self.0, retain] };
        }
        IdRef(self.0)
    }
}

pub unsafe fn ns_string(string: &str) -> IdRef {
    IdRef::new(NSString::alloc(nil).init_str(string))
}

pub fn is_main_thread() -> bool {
    let is_main: BOOL = unsafe { msg_send![class!(NSThread), isMainThread] };
    is_main == YES
}

pub fn to_ns_size(size: LogicalSize) -> NSSize {
    NSSize::new(size.width as CGFloat, size.height as CGFloat)
}

pub fn from_ns_size(size: NSSize) -> LogicalSize {
    LogicalSize::new(size.width as f64, size.height as f64)
}

/// Outer size of the window, title bar included.
pub unsafe fn frame_size(nswindow: id) -> LogicalSize {
    from_ns_size(NSWindow::frame(nswindow).size)
}

/// Size of the area not covered by the title bar or any toolbar.
pub unsafe fn content_size(nswindow: id) -> LogicalSize {
    let rect: NSRect = msg_send![nswindow, contentLayoutRect];
    from_ns_size(rect.size)
}

// AppKit measures from the bottom-left corner of the main display; this gives the
// window's top-left corner measured from the top-left of the display instead.
pub unsafe fn top_left_position(nswindow: id) -> LogicalPosition {
    let rect = NSWindow::frame(nswindow);
    let display_height = CGDisplay::main().bounds().size.height as f64;
    let y = display_height - (rect.origin.y + rect.size.height) as f64;
    LogicalPosition::new(rect.origin.x as f64, y)
}
