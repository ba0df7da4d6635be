// SPDX-License-Identifier: MPL-2.0
//! `iced_caliper` is an image measurement tool built with the Iced GUI
//! framework.
//!
//! It displays an image inside a pannable, zoomable viewport and lets the
//! user double-click pairs of points to measure real-world distances. The
//! pixel-to-centimeter scale comes from an external marker-detection service
//! that locates an ArUco marker of known physical size in the uploaded image.

pub mod app;
pub mod calibration;
pub mod config;
pub mod error;
pub mod measure;
pub mod media;
pub mod session;
pub mod ui;
pub mod view;

#[cfg(test)]
pub(crate) mod test_utils;
