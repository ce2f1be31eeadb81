//! Logical sizes and positions.
//!
//! Every value here is expressed in logical units, i.e. the unit AppKit uses for
//! `NSSize`/`NSPoint` before the backing scale factor is applied. A 640x380
//! window is 640x380 logical units on both a standard and a Retina display.
//!
//! The toolkit reports sizes as doubles, so these types store `f64` and render
//! through `Debug` (`640.0`, `612.5`) when they're printed.

use std::fmt;

/// A size in logical units.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LogicalSize {
    pub width: f64,
    pub height: f64,
}

impl LogicalSize {
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        LogicalSize { width, height }
    }

    /// Returns `true` if both components are finite and non-negative.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite()
            && self.width >= 0.0 && self.height >= 0.0
    }
}

impl fmt::Display for LogicalSize {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.width, self.height)
    }
}

impl From<(f64, f64)> for LogicalSize {
    #[inline]
    fn from((width, height): (f64, f64)) -> Self {
        Self::new(width, height)
    }
}

impl From<(u32, u32)> for LogicalSize {
    #[inline]
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width as f64, height as f64)
    }
}

impl From<LogicalSize> for (f64, f64) {
    #[inline]
    fn from(size: LogicalSize) -> Self {
        (size.width, size.height)
    }
}

/// A position in logical units, measured from the top-left corner of the display.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LogicalPosition {
    pub x: f64,
    pub y: f64,
}

impl LogicalPosition {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        LogicalPosition { x, y }
    }
}

impl fmt::Display for LogicalPosition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.x, self.y)
    }
}

impl From<(f64, f64)> for LogicalPosition {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<(i32, i32)> for LogicalPosition {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x as f64, y as f64)
    }
}

impl From<LogicalPosition> for (f64, f64) {
    #[inline]
    fn from(position: LogicalPosition) -> Self {
        (position.x, position.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_displays_like_the_toolkit() {
        assert_eq!(LogicalSize::new(640.0, 380.0).to_string(), "(640.0, 380.0)");
        assert_eq!(LogicalSize::new(612.5, 200.0).to_string(), "(612.5, 200.0)");
    }

    #[test]
    fn size_from_integer_tuple() {
        let size: LogicalSize = (400u32, 200u32).into();
        assert_eq!(size, LogicalSize::new(400.0, 200.0));
    }

    #[test]
    fn invalid_sizes() {
        assert!(LogicalSize::new(0.0, 0.0).is_valid());
        assert!(!LogicalSize::new(-1.0, 10.0).is_valid());
        assert!(!LogicalSize::new(f64::NAN, 10.0).is_valid());
        assert!(!LogicalSize::new(10.0, f64::INFINITY).is_valid());
    }
}
