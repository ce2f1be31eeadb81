pub mod headless;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "macos")]
pub use self::macos::run;

#[cfg(not(target_os = "macos"))]
pub fn run(
    _attributes: crate::window::WindowAttributes,
    _listener: std::rc::Rc<std::cell::RefCell<dyn crate::event::ResizeListener>>,
) -> Result<(), crate::window::CreationError> {
    Err(crate::window::CreationError::NotSupported(
        "interactive sessions need the AppKit backend, which is only available on macOS",
    ))
}
