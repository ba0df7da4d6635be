// SPDX-License-Identifier: MPL-2.0
//! View transform state management.
//!
//! A [`ViewTransform`] maps image-space coordinates to viewport coordinates
//! through a uniform scale followed by a translation. The scale and the
//! translation are the only stored state; the affine coefficients handed to
//! the rendering surface are always derived from them on demand, so the
//! matrix can never drift out of sync with the scalar state.

use crate::config::{MAX_SCALE, MIN_SCALE};
use iced::{Point, Size, Vector};

/// Uniform scale + translation mapping image space to viewport space.
///
/// Invariant: `scale` is always finite and strictly positive, so the
/// transform is invertible by construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    scale: f32,
    position: Vector,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            position: Vector::new(0.0, 0.0),
        }
    }
}

impl ViewTransform {
    /// Creates an identity transform.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current uniform scale factor.
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Current translation of the image origin, in viewport pixels.
    #[must_use]
    pub fn position(&self) -> Vector {
        self.position
    }

    /// Returns the six affine coefficients `[a, b, c, d, tx, ty]` consumed by
    /// the drawing surface. With uniform scale and no skew these are
    /// `[s, 0, 0, s, tx, ty]`.
    #[must_use]
    pub fn matrix(&self) -> [f32; 6] {
        [
            self.scale,
            0.0,
            0.0,
            self.scale,
            self.position.x,
            self.position.y,
        ]
    }

    /// Shifts the view by `delta` viewport pixels.
    pub fn pan(&mut self, delta: Vector) {
        self.position = self.position + delta;
    }

    /// Multiplies the scale by `factor` while keeping the viewport point
    /// `anchor` fixed, so the image content under the cursor does not move.
    ///
    /// Non-finite or non-positive factors are rejected as no-ops. The
    /// resulting scale is clamped to `[MIN_SCALE, MAX_SCALE]`; the anchor
    /// adjustment uses the effective factor after clamping so the fixed-point
    /// property holds exactly even at the limits.
    pub fn scale_at(&mut self, anchor: Point, factor: f32) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }

        let target = (self.scale * factor).clamp(MIN_SCALE, MAX_SCALE);
        let effective = target / self.scale;

        self.position = Vector::new(
            anchor.x - (anchor.x - self.position.x) * effective,
            anchor.y - (anchor.y - self.position.y) * effective,
        );
        self.scale = target;
    }

    /// Sets the scale directly, for programmatic resets such as
    /// fit-to-viewport. Invalid values are rejected as no-ops.
    pub fn set_scale(&mut self, value: f32) {
        if value.is_finite() && value > 0.0 {
            self.scale = value.clamp(MIN_SCALE, MAX_SCALE);
        }
    }

    /// Sets the translation directly.
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.position = Vector::new(x, y);
    }

    /// Resets to the identity transform.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Scales the image to fit inside `viewport` and centers it.
    ///
    /// The fit scale is applied as-is, outside the interactive zoom clamp:
    /// a tiny image in a large viewport still fills it. Subsequent wheel
    /// zooms pull the scale back into the clamped range.
    pub fn fit_to(&mut self, viewport: Size, image: Size) {
        if image.width <= 0.0 || image.height <= 0.0 {
            return;
        }

        let scale = (viewport.width / image.width).min(viewport.height / image.height);
        if !scale.is_finite() || scale <= 0.0 {
            return;
        }

        self.scale = scale;
        self.set_position(
            (viewport.width - image.width * scale) / 2.0,
            (viewport.height - image.height * scale) / 2.0,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use crate::view::mapping;

    #[test]
    fn default_is_identity() {
        let view = ViewTransform::new();
        assert_eq!(view.matrix(), [1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn pan_accumulates_translation() {
        let mut view = ViewTransform::new();
        view.pan(Vector::new(10.0, -5.0));
        view.pan(Vector::new(2.5, 7.0));

        assert_abs_diff_eq!(view.position().x, 12.5);
        assert_abs_diff_eq!(view.position().y, 2.0);
        assert_abs_diff_eq!(view.scale(), 1.0);
    }

    #[test]
    fn scale_at_matches_reference_scenario() {
        // From identity, zooming by 2 at (400, 300) must give scale 2 and
        // position (-400, -300).
        let mut view = ViewTransform::new();
        view.scale_at(Point::new(400.0, 300.0), 2.0);

        assert_abs_diff_eq!(view.scale(), 2.0);
        assert_abs_diff_eq!(view.position().x, -400.0);
        assert_abs_diff_eq!(view.position().y, -300.0);
    }

    #[test]
    fn scale_at_keeps_anchor_fixed() {
        let mut view = ViewTransform::new();
        view.pan(Vector::new(33.0, -12.0));
        view.scale_at(Point::new(100.0, 80.0), 1.7);

        let anchor = Point::new(250.0, 140.0);
        let before = mapping::to_image_space(anchor, &view);

        view.scale_at(anchor, 2.4);
        let after = mapping::to_image_space(anchor, &view);

        assert_abs_diff_eq!(before.x, after.x, epsilon = 1e-3);
        assert_abs_diff_eq!(before.y, after.y, epsilon = 1e-3);
    }

    #[test]
    fn scale_at_rejects_invalid_factors() {
        let mut view = ViewTransform::new();
        view.pan(Vector::new(5.0, 5.0));
        let snapshot = view;

        view.scale_at(Point::new(10.0, 10.0), 0.0);
        assert_eq!(view, snapshot);

        view.scale_at(Point::new(10.0, 10.0), -2.0);
        assert_eq!(view, snapshot);

        view.scale_at(Point::new(10.0, 10.0), f32::NAN);
        assert_eq!(view, snapshot);
    }

    #[test]
    fn scale_at_clamps_but_preserves_anchor() {
        let mut view = ViewTransform::new();
        let anchor = Point::new(120.0, 90.0);
        let before = mapping::to_image_space(anchor, &view);

        // Far beyond MAX_SCALE; the effective factor is smaller than requested.
        view.scale_at(anchor, 1.0e6);
        assert_abs_diff_eq!(view.scale(), MAX_SCALE);

        let after = mapping::to_image_space(anchor, &view);
        assert_abs_diff_eq!(before.x, after.x, epsilon = 1e-3);
        assert_abs_diff_eq!(before.y, after.y, epsilon = 1e-3);
    }

    #[test]
    fn set_scale_ignores_invalid_values() {
        let mut view = ViewTransform::new();
        view.set_scale(0.0);
        assert_abs_diff_eq!(view.scale(), 1.0);
        view.set_scale(f32::INFINITY);
        assert_abs_diff_eq!(view.scale(), 1.0);
        view.set_scale(2.5);
        assert_abs_diff_eq!(view.scale(), 2.5);
    }

    #[test]
    fn fit_to_matches_reference_scenario() {
        // Viewport 800x600, image 400x300: same aspect ratio, so scale 2 and
        // no letterboxing offset.
        let mut view = ViewTransform::new();
        view.fit_to(Size::new(800.0, 600.0), Size::new(400.0, 300.0));

        assert_abs_diff_eq!(view.scale(), 2.0);
        assert_abs_diff_eq!(view.position().x, 0.0);
        assert_abs_diff_eq!(view.position().y, 0.0);
    }

    #[test]
    fn fit_to_is_not_subject_to_the_zoom_clamp() {
        // A 4x3 thumbnail in an 804x720 viewport needs scale 201, well past
        // MAX_SCALE; the fit must still fill the viewport and center exactly.
        let mut view = ViewTransform::new();
        view.fit_to(Size::new(804.0, 720.0), Size::new(4.0, 3.0));

        assert_abs_diff_eq!(view.scale(), 201.0);
        assert_abs_diff_eq!(view.position().x, 0.0);
        assert_abs_diff_eq!(view.position().y, (720.0 - 3.0 * 201.0) / 2.0);
    }

    #[test]
    fn fit_to_centers_letterboxed_image() {
        let mut view = ViewTransform::new();
        view.fit_to(Size::new(800.0, 600.0), Size::new(400.0, 600.0));

        // Height-bound: scale 1, image centered horizontally.
        assert_abs_diff_eq!(view.scale(), 1.0);
        assert_abs_diff_eq!(view.position().x, 200.0);
        assert_abs_diff_eq!(view.position().y, 0.0);
    }

    #[test]
    fn matrix_reflects_all_prior_operations() {
        let mut view = ViewTransform::new();
        view.scale_at(Point::new(0.0, 0.0), 3.0);
        view.pan(Vector::new(7.0, 9.0));

        let m = view.matrix();
        assert_abs_diff_eq!(m[0], 3.0);
        assert_abs_diff_eq!(m[3], 3.0);
        assert_abs_diff_eq!(m[1], 0.0);
        assert_abs_diff_eq!(m[2], 0.0);
        assert_abs_diff_eq!(m[4], 7.0);
        assert_abs_diff_eq!(m[5], 9.0);
    }
}
