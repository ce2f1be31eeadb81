use cocoa::{
    appkit::{NSBackingStoreType, NSWindow, NSWindowStyleMask},
    base::{id, nil, NO, YES},
    foundation::{NSAutoreleasePool, NSPoint, NSRect},
};

use crate::{
    constraints::SizeConstraints,
    dpi::LogicalSize,
    event::ListenerRef,
    window::{CreationError, WindowAttributes, WindowStyle},
};
use super::{
    util::{self, IdRef},
    window_delegate::{WindowDelegate, WindowDelegateState},
};

/// The session's `NSWindow`, together with the delegate observing it.
pub struct Window {
    nswindow: IdRef,
    _delegate: WindowDelegate,
}

impl Window {
    pub fn new(attributes: &WindowAttributes, listener: ListenerRef) -> Result<Window, CreationError> {
        unsafe {
            let pool = NSAutoreleasePool::new(nil);
            let result = create_window(attributes)
                .ok_or_else(|| CreationError::OsError("Couldn't create `NSWindow`".to_owned()))
                .map(|nswindow| {
                    let delegate = WindowDelegateState::new(nswindow.clone(), listener);
                    let mut delegate = WindowDelegate::new(delegate);

                    apply_constraints(*nswindow, &attributes.constraints);
                    if attributes.centered {
                        nswindow.center();
                    }
                    nswindow.makeKeyAndOrderFront_(nil);
                    delegate.observe_live_resize();

                    Window { nswindow, _delegate: delegate }
                });
            let _: () = msg_send![pool, drain];
            let window = result?;
            debug!(
                "Created window at {} with frame {} (content: {})",
                util::top_left_position(*window.nswindow),
                window.frame_size(),
                window.content_size(),
            );
            Ok(window)
        }
    }

    pub fn frame_size(&self) -> LogicalSize {
        unsafe { util::frame_size(*self.nswindow) }
    }

    pub fn content_size(&self) -> LogicalSize {
        unsafe { util::content_size(*self.nswindow) }
    }
}

fn style_mask(style: WindowStyle) -> NSWindowStyleMask {
    let mut mask = NSWindowStyleMask::NSBorderlessWindowMask;
    if style.contains(WindowStyle::TITLED) {
        mask |= NSWindowStyleMask::NSTitledWindowMask;
    }
    if style.contains(WindowStyle::CLOSABLE) {
        mask |= NSWindowStyleMask::NSClosableWindowMask;
    }
    if style.contains(WindowStyle::MINIATURIZABLE) {
        mask |= NSWindowStyleMask::NSMiniaturizableWindowMask;
    }
    if style.contains(WindowStyle::RESIZABLE) {
        mask |= NSWindowStyleMask::NSResizableWindowMask;
    }
    mask
}

unsafe fn create_window(attributes: &WindowAttributes) -> Option<IdRef> {
    let frame = NSRect::new(
        NSPoint::new(attributes.position.x, attributes.position.y),
        util::to_ns_size(attributes.dimensions),
    );
    let nswindow: id = NSWindow::alloc(nil).initWithContentRect_styleMask_backing_defer_(
        frame,
        style_mask(attributes.style),
        NSBackingStoreType::NSBackingStoreBuffered,
        NO,
    );
    IdRef::new(nswindow).non_nil().map(|nswindow| {
        let title = util::ns_string(&attributes.title);
        nswindow.setReleasedWhenClosed_(if attributes.released_when_closed { YES } else { NO });
        nswindow.setTitle_(*title);
        nswindow
    })
}

// AppKit enforces these itself for every interactive resize; min == max leaves
// the resize handle in place but the size pinned.
unsafe fn apply_constraints(nswindow: id, constraints: &SizeConstraints) {
    nswindow.setContentMinSize_(util::to_ns_size(constraints.min));
    nswindow.setContentMaxSize_(util::to_ns_size(constraints.max));
    if let Some(aspect_ratio) = constraints.aspect_ratio {
        let aspect_ratio = util::to_ns_size(aspect_ratio.into());
        let _: () = msg_send![nswindow, setContentAspectRatio:aspect_ratio];
    }
}
