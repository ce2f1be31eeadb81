//! Content size constraints.
//!
//! The toolkit is the one enforcing these during a live resize; this module
//! describes what gets declared to it and carries the clamping rule the headless
//! backend applies in its place.

use std::{error::Error, fmt};

use crate::dpi::LogicalSize;

/// Lower bound applied when nothing else is configured.
pub const DEFAULT_MIN_SIZE: LogicalSize = LogicalSize::new(400.0, 200.0);
/// Upper bound applied when nothing else is configured.
pub const DEFAULT_MAX_SIZE: LogicalSize = LogicalSize::new(600.0, 400.0);

/// A width:height ratio, e.g. `AspectRatio::new(16.0, 10.0)`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AspectRatio {
    pub width: f64,
    pub height: f64,
}

impl AspectRatio {
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        AspectRatio { width, height }
    }

    #[inline]
    pub fn ratio(&self) -> f64 {
        self.width / self.height
    }

    fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite()
            && self.width > 0.0 && self.height > 0.0
    }
}

impl From<AspectRatio> for LogicalSize {
    fn from(aspect: AspectRatio) -> Self {
        LogicalSize::new(aspect.width, aspect.height)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConstraintError {
    /// A bound is negative, infinite or NaN.
    InvalidSize(LogicalSize),
    /// The minimum is larger than the maximum on at least one axis.
    MinExceedsMax { min: LogicalSize, max: LogicalSize },
    /// An aspect ratio with a zero, negative or non-finite component.
    InvalidAspectRatio(AspectRatio),
}

impl fmt::Display for ConstraintError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConstraintError::InvalidSize(size) => {
                write!(f, "invalid content size bound {}", size)
            },
            ConstraintError::MinExceedsMax { min, max } => {
                write!(f, "minimum content size {} exceeds maximum {}", min, max)
            },
            ConstraintError::InvalidAspectRatio(aspect) => {
                write!(f, "invalid aspect ratio {:?}:{:?}", aspect.width, aspect.height)
            },
        }
    }
}

impl Error for ConstraintError {}

/// Inclusive bounds on the content area, plus an optional aspect lock.
///
/// Setting `min == max` is a supported way of pinning the window to one size
/// while leaving the resizable style flag in place.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SizeConstraints {
    pub min: LogicalSize,
    pub max: LogicalSize,
    pub aspect_ratio: Option<AspectRatio>,
}

impl Default for SizeConstraints {
    fn default() -> Self {
        SizeConstraints::new(DEFAULT_MIN_SIZE, DEFAULT_MAX_SIZE)
    }
}

impl SizeConstraints {
    pub fn new(min: LogicalSize, max: LogicalSize) -> Self {
        SizeConstraints { min, max, aspect_ratio: None }
    }

    /// Constraints that only admit `size`.
    pub fn fixed(size: LogicalSize) -> Self {
        SizeConstraints::new(size, size)
    }

    pub fn with_aspect_ratio(mut self, aspect_ratio: Option<AspectRatio>) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    pub fn is_fixed(&self) -> bool {
        self.min == self.max
    }

    /// Returns `true` if `size` lies within the bounds on both axes, inclusive.
    ///
    /// The aspect ratio isn't taken into account.
    pub fn contains(&self, size: LogicalSize) -> bool {
        self.min.width <= size.width && size.width <= self.max.width
            && self.min.height <= size.height && size.height <= self.max.height
    }

    pub fn validate(&self) -> Result<(), ConstraintError> {
        for &bound in &[self.min, self.max] {
            if !bound.is_valid() {
                return Err(ConstraintError::InvalidSize(bound));
            }
        }
        if self.min.width > self.max.width || self.min.height > self.max.height {
            return Err(ConstraintError::MinExceedsMax { min: self.min, max: self.max });
        }
        match self.aspect_ratio {
            Some(aspect) if !aspect.is_valid() => Err(ConstraintError::InvalidAspectRatio(aspect)),
            _ => Ok(()),
        }
    }

    /// Maps a proposed content size onto the nearest admitted one.
    ///
    /// Each axis is clamped to its bound independently. With an aspect ratio
    /// set, the clamped size is then fitted to the ratio, first by keeping the
    /// width and then by keeping the height; when neither fit stays in bounds,
    /// the bounds win and the ratio is only approximated.
    ///
    /// Only meaningful on validated constraints.
    pub fn clamp(&self, size: LogicalSize) -> LogicalSize {
        let bounded = LogicalSize::new(
            clamp_axis(size.width, self.min.width, self.max.width),
            clamp_axis(size.height, self.min.height, self.max.height),
        );
        match self.aspect_ratio {
            Some(aspect) => self.fit_aspect_ratio(bounded, aspect),
            None => bounded,
        }
    }

    fn fit_aspect_ratio(&self, size: LogicalSize, aspect: AspectRatio) -> LogicalSize {
        let ratio = aspect.ratio();
        let by_width = LogicalSize::new(size.width, size.width / ratio);
        if self.contains(by_width) {
            return by_width;
        }
        let by_height = LogicalSize::new(size.height * ratio, size.height);
        if self.contains(by_height) {
            return by_height;
        }
        trace!("Aspect ratio {:?} doesn't fit within bounds at {}", aspect, size);
        size
    }
}

// `f64::clamp` would panic on `min > max`, which `validate` is responsible for.
fn clamp_axis(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(width: f64, height: f64) -> LogicalSize {
        LogicalSize::new(width, height)
    }

    #[test]
    fn default_bounds() {
        let constraints = SizeConstraints::default();
        assert_eq!(constraints.min, size(400.0, 200.0));
        assert_eq!(constraints.max, size(600.0, 400.0));
        assert!(constraints.aspect_ratio.is_none());
        assert!(constraints.validate().is_ok());
    }

    #[test]
    fn bounds_are_inclusive() {
        let constraints = SizeConstraints::default();
        assert!(constraints.contains(size(400.0, 200.0)));
        assert!(constraints.contains(size(600.0, 400.0)));
        assert!(!constraints.contains(size(399.5, 300.0)));
        assert!(!constraints.contains(size(500.0, 400.5)));
    }

    #[test]
    fn clamps_each_axis_to_nearest_bound() {
        let constraints = SizeConstraints::default();
        assert_eq!(constraints.clamp(size(100.0, 50.0)), size(400.0, 200.0));
        assert_eq!(constraints.clamp(size(2000.0, 2000.0)), size(600.0, 400.0));
        assert_eq!(constraints.clamp(size(100.0, 1000.0)), size(400.0, 400.0));
        assert_eq!(constraints.clamp(size(512.0, 333.0)), size(512.0, 333.0));
    }

    #[test]
    fn fixed_size_admits_a_single_size() {
        let pinned = size(700.0, 420.0);
        let constraints = SizeConstraints::fixed(pinned);
        assert!(constraints.is_fixed());
        assert!(constraints.validate().is_ok());
        for &proposed in &[size(0.0, 0.0), size(640.0, 380.0), size(1200.0, 900.0)] {
            assert_eq!(constraints.clamp(proposed), pinned);
        }
    }

    #[test]
    fn aspect_ratio_within_bounds() {
        let constraints = SizeConstraints::default()
            .with_aspect_ratio(Some(AspectRatio::new(16.0, 10.0)));
        assert_eq!(constraints.clamp(size(500.0, 350.0)), size(500.0, 312.5));
        assert_eq!(constraints.clamp(size(2000.0, 2000.0)), size(600.0, 375.0));
        assert_eq!(constraints.clamp(size(100.0, 100.0)), size(400.0, 250.0));
    }

    #[test]
    fn bounds_win_over_aspect_ratio() {
        let pinned = size(700.0, 420.0);
        let constraints = SizeConstraints::fixed(pinned)
            .with_aspect_ratio(Some(AspectRatio::new(16.0, 10.0)));
        assert_eq!(constraints.clamp(size(800.0, 500.0)), pinned);
    }

    #[test]
    fn falls_back_to_height_when_width_fit_leaves_bounds() {
        // Wide and short: keeping the width would need a height of 300.
        let constraints = SizeConstraints::new(size(100.0, 100.0), size(600.0, 200.0))
            .with_aspect_ratio(Some(AspectRatio::new(2.0, 1.0)));
        assert_eq!(constraints.clamp(size(600.0, 150.0)), size(300.0, 150.0));
    }

    #[test]
    fn rejects_inverted_bounds() {
        let constraints = SizeConstraints::new(size(600.0, 200.0), size(400.0, 400.0));
        assert_eq!(
            constraints.validate(),
            Err(ConstraintError::MinExceedsMax { min: size(600.0, 200.0), max: size(400.0, 400.0) }),
        );
    }

    #[test]
    fn rejects_bad_sizes_and_ratios() {
        let negative = SizeConstraints::new(size(-1.0, 200.0), size(600.0, 400.0));
        assert!(matches!(negative.validate(), Err(ConstraintError::InvalidSize(_))));

        let flat = SizeConstraints::default()
            .with_aspect_ratio(Some(AspectRatio::new(16.0, 0.0)));
        assert!(matches!(flat.validate(), Err(ConstraintError::InvalidAspectRatio(_))));
    }
}
