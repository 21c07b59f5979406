//! Mapping of field coordinates (inches) to canvas pixels.
//!
//! The canvas shows the field from above with field +x pointing up the screen and
//! field +y pointing left, the field origin in the canvas center. The scale is an
//! explicit value handed to whoever draws, never process-wide state.

use crate::pose2d::{Pose2d, Vector2d};

/// Side of the square field, inches (12 feet).
pub const FIELD_WIDTH: f64 = 144.0;

/// Scale and placement of the field on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldView {
    pub pixels_per_inch: f64,
    /// Pixel coordinate of the field origin along both canvas axes.
    pub half_field_pixels: f64,
}

/// Rectangle ready to be placed on the canvas: `x`, `y` is the top left corner of the
/// un-rotated rectangle, the rotation is about its center, in degrees, clockwise on
/// screen as canvas toolkits usually interpret it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotate_degrees: f64,
}

impl PixelRect {
    pub fn center(&self) -> Vector2d {
        Vector2d::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

impl FieldView {
    pub fn new(pixels_per_inch: f64, half_field_pixels: f64) -> Self {
        FieldView { pixels_per_inch, half_field_pixels }
    }

    /// View fitting the whole field into a square canvas of the given side.
    pub fn for_canvas(side_pixels: f64) -> Self {
        FieldView::new(side_pixels / FIELD_WIDTH, side_pixels / 2.0)
    }

    pub fn to_pixel(&self, field: &Vector2d) -> Vector2d {
        Vector2d::new(
            -field.y * self.pixels_per_inch + self.half_field_pixels,
            -field.x * self.pixels_per_inch + self.half_field_pixels,
        )
    }

    pub fn length_to_pixels(&self, inches: f64) -> f64 {
        inches * self.pixels_per_inch
    }

    /// Rectangle of `width` x `height` inches centered on the pose. The heading is
    /// converted to degrees as is; headings several turns away from zero stay so.
    pub fn rect(&self, pose: &Pose2d, width: f64, height: f64) -> PixelRect {
        let pix_w = self.length_to_pixels(width);
        let pix_h = self.length_to_pixels(height);
        let center = self.to_pixel(&pose.position);
        PixelRect {
            x: center.x - pix_w / 2.0,
            y: center.y - pix_h / 2.0,
            width: pix_w,
            height: pix_h,
            rotate_degrees: (-pose.heading).to_degrees(),
        }
    }
}
