// SPDX-License-Identifier: MPL-2.0
//! Measurement point-pairs and the pixel-to-physical-unit scale.
//!
//! All stored points live in image space, so a measurement's value is
//! independent of whatever pan/zoom state the view happens to be in.

use crate::error::{Error, Result};
use iced::Point;

/// Pixels-per-centimeter scale obtained from the marker-detection service.
///
/// Construction rejects zero, negative and non-finite values, so a distance
/// computation can never divide by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationScale(f32);

impl CalibrationScale {
    /// Creates a scale from a pixels-per-centimeter value.
    pub fn new(pixels_per_cm: f32) -> Result<Self> {
        if pixels_per_cm.is_finite() && pixels_per_cm > 0.0 {
            Ok(Self(pixels_per_cm))
        } else {
            Err(Error::Uncalibrated)
        }
    }

    /// Raw pixels-per-centimeter value.
    #[must_use]
    pub fn pixels_per_cm(self) -> f32 {
        self.0
    }
}

/// One measurement: either awaiting its second point or complete.
///
/// The two-state representation makes the "at most one open pair, always the
/// last element" invariant structural: the store only ever appends a new
/// `Open` pair or upgrades the trailing `Open` into `Closed`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeasurementPair {
    /// First point placed; waiting for the second.
    Open(Point),
    /// Both endpoints placed.
    Closed(Point, Point),
}

impl MeasurementPair {
    /// Whether this pair is still waiting for its second point.
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, MeasurementPair::Open(_))
    }

    /// Euclidean distance between the endpoints in image pixels, or `None`
    /// for an open pair.
    #[must_use]
    pub fn pixel_distance(&self) -> Option<f32> {
        match self {
            MeasurementPair::Open(_) => None,
            MeasurementPair::Closed(a, b) => {
                let dx = b.x - a.x;
                let dy = b.y - a.y;
                Some((dx * dx + dy * dy).sqrt())
            }
        }
    }

    /// Physical distance in centimeters, or `None` for an open pair.
    #[must_use]
    pub fn distance_cm(&self, scale: CalibrationScale) -> Option<f32> {
        self.pixel_distance()
            .map(|pixels| pixels / scale.pixels_per_cm())
    }
}

/// Ordered collection of measurement pairs in image space.
#[derive(Debug, Clone, Default)]
pub struct MeasurementStore {
    pairs: Vec<MeasurementPair>,
}

impl MeasurementStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one image-space point. Starts a new open pair when the store
    /// is empty or the last pair is closed; otherwise closes the open pair.
    pub fn add_point(&mut self, point: Point) {
        if let Some(MeasurementPair::Open(first)) = self.pairs.last().copied() {
            let last = self.pairs.len() - 1;
            self.pairs[last] = MeasurementPair::Closed(first, point);
        } else {
            self.pairs.push(MeasurementPair::Open(point));
        }
    }

    /// Removes all pairs.
    pub fn clear(&mut self) {
        self.pairs.clear();
    }

    /// All pairs, oldest first.
    #[must_use]
    pub fn pairs(&self) -> &[MeasurementPair] {
        &self.pairs
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn calibration_scale_rejects_degenerate_values() {
        assert!(CalibrationScale::new(0.0).is_err());
        assert!(CalibrationScale::new(-1.0).is_err());
        assert!(CalibrationScale::new(f32::NAN).is_err());
        assert!(CalibrationScale::new(f32::INFINITY).is_err());
        assert!(CalibrationScale::new(37.8).is_ok());
    }

    #[test]
    fn three_points_yield_one_closed_and_one_open_pair() {
        let mut store = MeasurementStore::new();
        store.add_point(Point::new(0.0, 0.0));
        store.add_point(Point::new(10.0, 0.0));
        store.add_point(Point::new(5.0, 5.0));

        assert_eq!(store.len(), 2);
        assert!(matches!(store.pairs()[0], MeasurementPair::Closed(_, _)));
        assert!(store.pairs()[1].is_open());

        // The fourth point closes the second pair.
        store.add_point(Point::new(6.0, 6.0));
        assert_eq!(store.len(), 2);
        assert!(!store.pairs()[1].is_open());
    }

    #[test]
    fn open_pair_is_always_last() {
        let mut store = MeasurementStore::new();
        for i in 0..7 {
            store.add_point(Point::new(i as f32, 0.0));
            let open_count = store.pairs().iter().filter(|p| p.is_open()).count();
            assert!(open_count <= 1);
            if open_count == 1 {
                assert!(store.pairs().last().unwrap().is_open());
            }
        }
    }

    #[test]
    fn distance_uses_calibration_scale() {
        // 100 px at 37.8 px/cm is roughly 2.65 cm (96 DPI).
        let scale = CalibrationScale::new(37.8).unwrap();
        let pair = MeasurementPair::Closed(Point::new(0.0, 0.0), Point::new(100.0, 0.0));

        let cm = pair.distance_cm(scale).unwrap();
        assert_abs_diff_eq!(cm, 2.6455, epsilon = 1e-3);
        assert_eq!(format!("{:.2}", cm), "2.65");
    }

    #[test]
    fn open_pair_has_no_distance() {
        let scale = CalibrationScale::new(10.0).unwrap();
        let pair = MeasurementPair::Open(Point::new(1.0, 1.0));
        assert!(pair.pixel_distance().is_none());
        assert!(pair.distance_cm(scale).is_none());
    }

    #[test]
    fn clear_empties_the_store() {
        let mut store = MeasurementStore::new();
        store.add_point(Point::new(0.0, 0.0));
        store.add_point(Point::new(1.0, 1.0));
        store.clear();
        assert!(store.is_empty());
    }
}
