// SPDX-License-Identifier: MPL-2.0
//! Conversion between viewport (pointer) coordinates and image-space
//! coordinates.
//!
//! These are the exact forward and inverse of the affine transform a
//! [`ViewTransform`] exposes to the renderer, so a point survives a
//! round-trip through both directions to floating-point precision. This
//! module is the only inverse-transform path in the crate.

use crate::view::ViewTransform;
use iced::Point;

/// Maps a viewport point to image space: subtract the translation, then
/// divide by the scale.
#[must_use]
pub fn to_image_space(point: Point, view: &ViewTransform) -> Point {
    let position = view.position();
    let scale = view.scale();
    Point::new((point.x - position.x) / scale, (point.y - position.y) / scale)
}

/// Maps an image-space point to the viewport: multiply by the scale, then
/// add the translation.
#[must_use]
pub fn to_viewport_space(point: Point, view: &ViewTransform) -> Point {
    let position = view.position();
    let scale = view.scale();
    Point::new(point.x * scale + position.x, point.y * scale + position.y)
}
