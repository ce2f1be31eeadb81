//! Window configuration.
use std::{error::Error, fmt};

use crate::{
    constraints::{AspectRatio, ConstraintError, SizeConstraints},
    dpi::{LogicalPosition, LogicalSize},
};

pub const DEFAULT_TITLE: &str = "Min/Max Test Window";
pub const DEFAULT_DIMENSIONS: LogicalSize = LogicalSize::new(640.0, 380.0);

bitflags! {
    /// Decorations and controls the window is created with.
    pub struct WindowStyle: u32 {
        const TITLED = 1 << 0;
        const CLOSABLE = 1 << 1;
        const MINIATURIZABLE = 1 << 2;
        const RESIZABLE = 1 << 3;
    }
}

impl Default for WindowStyle {
    fn default() -> Self {
        WindowStyle::all()
    }
}

/// Attributes to use when creating the window.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowAttributes {
    /// The title of the window in the title bar.
    ///
    /// The default is `"Min/Max Test Window"`.
    pub title: String,

    /// Origin of the initial content rectangle.
    ///
    /// Ignored when `centered` is set. The default is `(0.0, 0.0)`.
    pub position: LogicalPosition,

    /// Size of the initial content rectangle.
    ///
    /// This isn't clamped to `constraints`; the bounds only apply to
    /// interactive resizes. The default is 640x380.
    pub dimensions: LogicalSize,

    /// The default is every flag in `WindowStyle`.
    pub style: WindowStyle,

    /// Content size bounds. The default is 400x200 to 600x400.
    pub constraints: SizeConstraints,

    /// Whether the toolkit frees the window once it's closed. The session owns
    /// the window, so this is `false` by default.
    pub released_when_closed: bool,

    /// Whether the window is centered on the primary display after creation.
    ///
    /// The default is `true`.
    pub centered: bool,
}

impl Default for WindowAttributes {
    #[inline]
    fn default() -> WindowAttributes {
        WindowAttributes {
            title: DEFAULT_TITLE.to_owned(),
            position: LogicalPosition::new(0.0, 0.0),
            dimensions: DEFAULT_DIMENSIONS,
            style: WindowStyle::default(),
            constraints: SizeConstraints::default(),
            released_when_closed: false,
            centered: true,
        }
    }
}

impl WindowAttributes {
    pub fn validate(&self) -> Result<(), CreationError> {
        if !self.dimensions.is_valid() {
            return Err(ConstraintError::InvalidSize(self.dimensions).into());
        }
        self.constraints.validate()?;
        Ok(())
    }
}

/// Object that allows you to build the window's attributes.
#[derive(Debug, Clone, Default)]
pub struct WindowBuilder {
    pub window: WindowAttributes,
}

impl WindowBuilder {
    #[inline]
    pub fn new() -> WindowBuilder {
        Default::default()
    }

    #[inline]
    pub fn with_title<T: Into<String>>(mut self, title: T) -> WindowBuilder {
        self.window.title = title.into();
        self
    }

    #[inline]
    pub fn with_position(mut self, position: LogicalPosition) -> WindowBuilder {
        self.window.position = position;
        self
    }

    #[inline]
    pub fn with_dimensions(mut self, size: LogicalSize) -> WindowBuilder {
        self.window.dimensions = size;
        self
    }

    #[inline]
    pub fn with_min_dimensions(mut self, min_size: LogicalSize) -> WindowBuilder {
        self.window.constraints.min = min_size;
        self
    }

    #[inline]
    pub fn with_max_dimensions(mut self, max_size: LogicalSize) -> WindowBuilder {
        self.window.constraints.max = max_size;
        self
    }

    /// Pins the content size by setting both bounds to `size`. The window keeps
    /// its resizable style, it just can't change size.
    #[inline]
    pub fn with_fixed_size(mut self, size: LogicalSize) -> WindowBuilder {
        self.window.constraints.min = size;
        self.window.constraints.max = size;
        self
    }

    #[inline]
    pub fn with_aspect_ratio(mut self, aspect_ratio: Option<AspectRatio>) -> WindowBuilder {
        self.window.constraints.aspect_ratio = aspect_ratio;
        self
    }

    #[inline]
    pub fn with_style(mut self, style: WindowStyle) -> WindowBuilder {
        self.window.style = style;
        self
    }

    #[inline]
    pub fn with_resizable(mut self, resizable: bool) -> WindowBuilder {
        self.window.style.set(WindowStyle::RESIZABLE, resizable);
        self
    }

    #[inline]
    pub fn with_released_when_closed(mut self, released: bool) -> WindowBuilder {
        self.window.released_when_closed = released;
        self
    }

    #[inline]
    pub fn with_centered(mut self, centered: bool) -> WindowBuilder {
        self.window.centered = centered;
        self
    }

    /// Validates and returns the attributes.
    pub fn build(self) -> Result<WindowAttributes, CreationError> {
        self.window.validate()?;
        Ok(self.window)
    }
}

/// Error that can happen while creating the window or its session.
#[derive(Debug, Clone, PartialEq)]
pub enum CreationError {
    OsError(String),
    /// There's no native backend for the host platform.
    NotSupported(&'static str),
    InvalidConstraints(ConstraintError),
}

impl fmt::Display for CreationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CreationError::OsError(text) => write!(f, "{}", text),
            CreationError::NotSupported(what) => write!(f, "Not supported: {}", what),
            CreationError::InvalidConstraints(err) => write!(f, "Invalid size constraints: {}", err),
        }
    }
}

impl Error for CreationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CreationError::InvalidConstraints(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConstraintError> for CreationError {
    fn from(err: ConstraintError) -> Self {
        CreationError::InvalidConstraints(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_attributes() {
        let attributes = WindowAttributes::default();
        assert_eq!(attributes.title, "Min/Max Test Window");
        assert_eq!(attributes.position, LogicalPosition::new(0.0, 0.0));
        assert_eq!(attributes.dimensions, LogicalSize::new(640.0, 380.0));
        assert!(attributes.style.contains(
            WindowStyle::TITLED | WindowStyle::CLOSABLE
                | WindowStyle::MINIATURIZABLE | WindowStyle::RESIZABLE
        ));
        assert_eq!(attributes.constraints, SizeConstraints::default());
        assert!(!attributes.released_when_closed);
        assert!(attributes.centered);
    }

    #[test]
    fn fixed_size_keeps_resizable_style() {
        let attributes = WindowBuilder::new()
            .with_fixed_size(LogicalSize::new(700.0, 420.0))
            .build()
            .unwrap();
        assert!(attributes.constraints.is_fixed());
        assert!(attributes.style.contains(WindowStyle::RESIZABLE));
    }

    #[test]
    fn build_rejects_inverted_bounds() {
        let err = WindowBuilder::new()
            .with_min_dimensions(LogicalSize::new(800.0, 200.0))
            .build()
            .unwrap_err();
        match err {
            CreationError::InvalidConstraints(ConstraintError::MinExceedsMax { .. }) => (),
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(err_source_is_constraint(&WindowBuilder::new()
            .with_max_dimensions(LogicalSize::new(f64::NAN, 400.0))
            .build()
            .unwrap_err()));
    }

    fn err_source_is_constraint(err: &CreationError) -> bool {
        err.source().map_or(false, |source| source.is::<ConstraintError>())
    }

    #[test]
    fn with_resizable_toggles_flag() {
        let attributes = WindowBuilder::new().with_resizable(false).build().unwrap();
        assert!(!attributes.style.contains(WindowStyle::RESIZABLE));
        assert!(attributes.style.contains(WindowStyle::TITLED));
    }
}
