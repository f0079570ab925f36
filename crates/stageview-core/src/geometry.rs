//! Stage and image geometry.
//!
//! Stateless helpers that compute how a raster image sits inside the stage:
//! the uniform fit scale and the centering offset. All values are in stage
//! units (logical pixels) unless stated otherwise.

use std::ops::{Add, Div, Mul, Sub};

use serde::{Deserialize, Serialize};

use crate::error::{Result, StageviewError};

/// Width and height of the stage or of an image's natural pixel grid.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    /// Validated constructor. Both sides must be finite and strictly positive.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        let dims = Self { width, height };
        if dims.is_renderable() {
            Ok(dims)
        } else {
            Err(StageviewError::InvalidDimensions { width, height })
        }
    }

    pub fn from_pixels(width: u32, height: u32) -> Self {
        Self {
            width: f64::from(width),
            height: f64::from(height),
        }
    }

    /// True when both sides are finite and > 0, i.e. safe to feed into
    /// [`fit_scale`] and [`center_offset`].
    pub fn is_renderable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    pub fn scaled(&self, scale: f64) -> Self {
        Self {
            width: self.width * scale,
            height: self.height * scale,
        }
    }
}

/// A position in stage or image-local space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Point {
    type Output = Point;

    fn div(self, rhs: f64) -> Point {
        Point::new(self.x / rhs, self.y / rhs)
    }
}

/// Largest uniform scale at which `image` fits entirely inside `stage`.
///
/// The limiting axis is filled exactly; the other axis is letterboxed.
/// Callers must check [`Dimensions::is_renderable`] on `image` first.
pub fn fit_scale(stage: Dimensions, image: Dimensions) -> f64 {
    debug_assert!(image.is_renderable(), "fit_scale on degenerate image");
    let scale_x = stage.width / image.width;
    let scale_y = stage.height / image.height;
    scale_x.min(scale_y)
}

/// Offset that centers `image` drawn at `scale` inside `stage`.
///
/// Each axis is clamped at zero, so an image larger than the stage on some
/// axis is pinned to the stage origin on that axis instead of going negative.
pub fn center_offset(stage: Dimensions, image: Dimensions, scale: f64) -> Point {
    let x = ((stage.width - image.width * scale) / 2.0).max(0.0);
    let y = ((stage.height - image.height * scale) / 2.0).max(0.0);
    Point::new(x, y)
}
