// SPDX-License-Identifier: MPL-2.0
//! A measurement session: one view transform, one measurement store and the
//! current calibration, owned together.
//!
//! The session is constructed explicitly and passed by reference to whoever
//! needs it, so independent sessions can coexist and tests stay
//! deterministic.

use crate::measure::{CalibrationScale, MeasurementStore};
use crate::view::{mapping, ViewTransform};
use iced::{Point, Size};

#[derive(Debug, Clone, Default)]
pub struct Session {
    view: ViewTransform,
    measurements: MeasurementStore,
    calibration: Option<CalibrationScale>,
    image_size: Option<Size>,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ViewTransform {
        &mut self.view
    }

    #[must_use]
    pub fn measurements(&self) -> &MeasurementStore {
        &self.measurements
    }

    #[must_use]
    pub fn calibration(&self) -> Option<CalibrationScale> {
        self.calibration
    }

    #[must_use]
    pub fn image_size(&self) -> Option<Size> {
        self.image_size
    }

    /// Whether an image is loaded and calibrated, i.e. points may be placed.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.image_size.is_some() && self.calibration.is_some()
    }

    /// Installs a freshly calibrated image.
    ///
    /// The order is load-bearing: reset the transform to identity, clear all
    /// measurements, replace the calibration, then fit and center the new
    /// image inside the viewport.
    pub fn install_image(&mut self, image: Size, scale: CalibrationScale, viewport: Size) {
        self.view.reset();
        self.measurements.clear();
        self.calibration = Some(scale);
        self.image_size = Some(image);
        self.view.fit_to(viewport, image);
    }

    /// Re-centers the current image and clears measurements (reset button).
    pub fn refit(&mut self, viewport: Size) {
        if let Some(image) = self.image_size {
            self.view.reset();
            self.measurements.clear();
            self.view.fit_to(viewport, image);
        }
    }

    /// Converts a viewport point to image space and records it as a
    /// measurement point. Returns `false` when no calibrated image is loaded.
    pub fn add_viewport_point(&mut self, point: Point) -> bool {
        if !self.is_ready() {
            return false;
        }
        let image_point = mapping::to_image_space(point, &self.view);
        self.measurements.add_point(image_point);
        true
    }
}
