//! In-process stand-in for the windowing toolkit.
//!
//! This backend never opens a window. It models what the native toolkit
//! guarantees to the session: proposed sizes are clamped to the declared bounds
//! before the listener sees them, one report is delivered per completed live
//! resize, and a closed window ignores further input. Interactive gestures are
//! driven by calling `begin_live_resize`/`drag_to`/`end_live_resize` directly.

use crate::{
    constraints::SizeConstraints,
    dpi::{LogicalPosition, LogicalSize},
    event::{self, ListenerRef, ResizeReport},
    session::SessionState,
    window::{CreationError, WindowAttributes, WindowStyle},
};

/// Title bar height of a standard titled AppKit window, in logical units.
pub const TITLE_BAR_HEIGHT: f64 = 28.0;

/// Decorations added above the content area. AppKit windows have no side
/// or bottom border, so only the title bar counts.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Chrome {
    pub title_bar_height: f64,
}

impl Default for Chrome {
    fn default() -> Self {
        Chrome { title_bar_height: TITLE_BAR_HEIGHT }
    }
}

impl Chrome {
    fn for_style(style: WindowStyle) -> Self {
        if style.contains(WindowStyle::TITLED) {
            Chrome::default()
        } else {
            Chrome { title_bar_height: 0.0 }
        }
    }

    pub fn content_to_frame(&self, content: LogicalSize) -> LogicalSize {
        LogicalSize::new(content.width, content.height + self.title_bar_height)
    }

    pub fn frame_to_content(&self, frame: LogicalSize) -> LogicalSize {
        LogicalSize::new(
            frame.width.max(0.0),
            (frame.height - self.title_bar_height).max(0.0),
        )
    }
}

/// The display the modelled window lives on.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Host {
    /// Visible area of the primary display.
    pub screen: LogicalSize,
}

impl Default for Host {
    fn default() -> Self {
        Host { screen: LogicalSize::new(1440.0, 900.0) }
    }
}

#[derive(Debug)]
pub struct Window {
    title: String,
    style: WindowStyle,
    constraints: SizeConstraints,
    chrome: Chrome,
    content: LogicalSize,
    position: LogicalPosition,
    listener: ListenerRef,
    state: SessionState,
    live_resize: bool,
    key: bool,
}

impl Window {
    pub fn new(
        attributes: &WindowAttributes,
        listener: ListenerRef,
        host: Host,
    ) -> Result<Window, CreationError> {
        attributes.validate()?;
        let chrome = Chrome::for_style(attributes.style);
        let mut window = Window {
            title: attributes.title.clone(),
            style: attributes.style,
            constraints: attributes.constraints,
            chrome,
            content: attributes.dimensions,
            position: attributes.position,
            listener,
            state: SessionState::Open,
            live_resize: false,
            key: false,
        };
        if attributes.centered {
            window.center(host.screen);
        }
        window.key = true;
        debug!(
            "Created headless window {:?} at {} with content {}",
            window.title,
            window.position,
            window.content,
        );
        Ok(window)
    }

    fn center(&mut self, screen: LogicalSize) {
        let frame = self.frame_size();
        self.position = LogicalPosition::new(
            ((screen.width - frame.width) / 2.0).max(0.0),
            ((screen.height - frame.height) / 2.0).max(0.0),
        );
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state == SessionState::Open
    }

    pub fn is_key(&self) -> bool {
        self.key
    }

    pub fn position(&self) -> LogicalPosition {
        self.position
    }

    pub fn content_size(&self) -> LogicalSize {
        self.content
    }

    pub fn frame_size(&self) -> LogicalSize {
        self.chrome.content_to_frame(self.content)
    }

    pub fn constraints(&self) -> &SizeConstraints {
        &self.constraints
    }

    pub fn in_live_resize(&self) -> bool {
        self.live_resize
    }

    /// Starts a live resize. Ignored on closed or non-resizable windows.
    pub fn begin_live_resize(&mut self) {
        if self.state == SessionState::Closed || !self.style.contains(WindowStyle::RESIZABLE) {
            return;
        }
        trace!("Triggered `windowWillStartLiveResize`");
        self.live_resize = true;
    }

    /// Moves the resize handle so that the frame would become `proposed`, and
    /// returns the frame size the window actually took.
    ///
    /// The content bounds are applied first, then the listener is consulted
    /// with the resulting frame size. Whatever it answers is brought back
    /// within bounds, so the content size never leaves them.
    pub fn drag_to(&mut self, proposed: LogicalSize) -> LogicalSize {
        if !self.live_resize {
            self.begin_live_resize();
            if !self.live_resize {
                return self.frame_size();
            }
        }
        let clamped = self.constraints.clamp(self.chrome.frame_to_content(proposed));
        let frame = self.chrome.content_to_frame(clamped);

        trace!("Triggered `windowWillResize:toSize:` with {}", frame);
        let accepted = event::request_resize(&self.listener, frame);
        self.content = self.constraints.clamp(self.chrome.frame_to_content(accepted));
        trace!("Completed `windowWillResize:toSize:` with {}", self.frame_size());

        self.frame_size()
    }

    /// Ends the current live resize and notifies the listener.
    ///
    /// Returns the report that was delivered, or `None` if there was no
    /// gesture in progress or nobody is listening anymore.
    pub fn end_live_resize(&mut self) -> Option<ResizeReport> {
        if !self.live_resize || self.state == SessionState::Closed {
            return None;
        }
        self.live_resize = false;
        trace!("Triggered `windowDidEndLiveResize`");
        let report = ResizeReport { frame: self.frame_size(), content: self.content };
        let delivered = event::notify_resize_ended(&self.listener, report);
        trace!("Completed `windowDidEndLiveResize`");
        if delivered { Some(report) } else { None }
    }

    /// Performs a whole live resize, dragging through each of `steps` in order.
    pub fn live_resize<I>(&mut self, steps: I) -> Option<ResizeReport>
    where
        I: IntoIterator<Item = LogicalSize>,
    {
        self.begin_live_resize();
        for step in steps {
            self.drag_to(step);
        }
        self.end_live_resize()
    }

    /// Closes the window. A gesture that's still in progress is abandoned
    /// without a report.
    pub fn close(&mut self) {
        if self.state == SessionState::Closed {
            return;
        }
        trace!("Triggered `windowWillClose`");
        self.live_resize = false;
        self.key = false;
        self.state = SessionState::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        event::{ResizeListener, ReportingListener},
        window::WindowBuilder,
    };
    use std::{cell::RefCell, rc::Rc};

    fn size(width: f64, height: f64) -> LogicalSize {
        LogicalSize::new(width, height)
    }

    fn open(attributes: &WindowAttributes) -> (Rc<RefCell<ReportingListener<Vec<u8>>>>, Window) {
        let listener = Rc::new(RefCell::new(ReportingListener::new(Vec::new())));
        let shared: Rc<RefCell<dyn ResizeListener>> = listener.clone();
        let window = Window::new(attributes, Rc::downgrade(&shared), Host::default()).unwrap();
        (listener, window)
    }

    #[test]
    fn chrome_round_trips_content() {
        let chrome = Chrome::default();
        assert_eq!(chrome.content_to_frame(size(640.0, 380.0)), size(640.0, 408.0));
        assert_eq!(chrome.frame_to_content(size(640.0, 408.0)), size(640.0, 380.0));
        assert_eq!(chrome.frame_to_content(size(10.0, 10.0)), size(10.0, 0.0));
    }

    #[test]
    fn only_the_title_bar_adds_to_the_frame() {
        let titled = Chrome::for_style(WindowStyle::all());
        assert_eq!(titled.content_to_frame(size(500.0, 300.0)), size(500.0, 328.0));

        let untitled = Chrome::for_style(WindowStyle::RESIZABLE);
        assert_eq!(untitled.content_to_frame(size(500.0, 300.0)), size(500.0, 300.0));
        assert_eq!(untitled.frame_to_content(size(500.0, 300.0)), size(500.0, 300.0));
    }

    #[test]
    fn initial_geometry() {
        let (_listener, window) = open(&WindowAttributes::default());
        assert_eq!(window.content_size(), size(640.0, 380.0));
        assert_eq!(window.frame_size(), size(640.0, 408.0));
        assert_eq!(window.position(), LogicalPosition::new(400.0, 246.0));
        assert!(window.is_visible());
        assert!(window.is_key());
        assert_eq!(window.title(), "Min/Max Test Window");
    }

    #[test]
    fn uncentered_window_keeps_its_origin() {
        let attributes = WindowBuilder::new()
            .with_centered(false)
            .with_position(LogicalPosition::new(12.0, 34.0))
            .build()
            .unwrap();
        let (_listener, window) = open(&attributes);
        assert_eq!(window.position(), LogicalPosition::new(12.0, 34.0));
    }

    #[test]
    fn drag_is_clamped_before_listener_sees_it() {
        struct Recorder(Vec<LogicalSize>);
        impl ResizeListener for Recorder {
            fn on_resize_requested(&mut self, proposed: LogicalSize) -> LogicalSize {
                self.0.push(proposed);
                proposed
            }
            fn on_resize_ended(&mut self, _: ResizeReport) {}
        }

        let recorder = Rc::new(RefCell::new(Recorder(Vec::new())));
        let shared: Rc<RefCell<dyn ResizeListener>> = recorder.clone();
        let mut window = Window::new(
            &WindowAttributes::default(),
            Rc::downgrade(&shared),
            Host::default(),
        ).unwrap();

        window.drag_to(size(2000.0, 2000.0));
        assert_eq!(recorder.borrow().0, vec![size(600.0, 428.0)]);
    }

    #[test]
    fn overriding_listener_cannot_escape_bounds() {
        struct Shrink;
        impl ResizeListener for Shrink {
            fn on_resize_requested(&mut self, _: LogicalSize) -> LogicalSize {
                LogicalSize::new(1.0, 1.0)
            }
            fn on_resize_ended(&mut self, _: ResizeReport) {}
        }

        let listener: Rc<RefCell<dyn ResizeListener>> = Rc::new(RefCell::new(Shrink));
        let mut window = Window::new(
            &WindowAttributes::default(),
            Rc::downgrade(&listener),
            Host::default(),
        ).unwrap();
        window.drag_to(size(500.0, 328.0));
        assert_eq!(window.content_size(), size(400.0, 200.0));
    }

    #[test]
    fn non_resizable_window_ignores_drags() {
        let attributes = WindowBuilder::new().with_resizable(false).build().unwrap();
        let (listener, mut window) = open(&attributes);
        assert_eq!(window.live_resize(vec![size(500.0, 300.0)]), None);
        assert_eq!(window.content_size(), size(640.0, 380.0));
        assert!(listener.borrow().get_ref().is_empty());
    }

    #[test]
    fn end_without_begin_reports_nothing() {
        let (listener, mut window) = open(&WindowAttributes::default());
        assert_eq!(window.end_live_resize(), None);
        assert!(listener.borrow().get_ref().is_empty());
    }

    #[test]
    fn closing_mid_gesture_drops_the_report() {
        let (listener, mut window) = open(&WindowAttributes::default());
        window.begin_live_resize();
        window.drag_to(size(500.0, 300.0));
        window.close();
        assert_eq!(window.end_live_resize(), None);
        assert!(listener.borrow().get_ref().is_empty());
        assert_eq!(window.state(), SessionState::Closed);
        assert!(!window.is_key());
    }
}
