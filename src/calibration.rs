// SPDX-License-Identifier: MPL-2.0
//! Client for the external marker-detection calibration service.
//!
//! The service receives a base64 data-URL of the uploaded image, detects an
//! ArUco marker of known physical size and answers with a pixels-per-mm
//! scale plus the image's real-world dimensions. Everything about marker
//! detection itself is owned by the service; this module only speaks its
//! wire format.

use crate::error::{CalibrationError, Error, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
struct CalibrationRequest {
    image: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CalibrationResponse {
    pub success: bool,
    #[serde(default)]
    pub pixels_per_mm: Option<f32>,
    #[serde(default)]
    pub image_width_mm: Option<f32>,
    #[serde(default)]
    pub image_height_mm: Option<f32>,
    #[serde(default)]
    pub error: Option<String>,
}

/// A successful calibration result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calibration {
    pub pixels_per_mm: f32,
    pub image_width_mm: f32,
    pub image_height_mm: f32,
}

impl Calibration {
    /// The scale in pixels per centimeter, as used by measurement labels.
    #[must_use]
    pub fn pixels_per_cm(&self) -> f32 {
        self.pixels_per_mm * 10.0
    }
}

/// Monotonic sequence token identifying one upload request.
///
/// A new upload supersedes any in-flight calibration: a completion carrying
/// a token older than the current one is stale and must be ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequestToken(u64);

impl RequestToken {
    /// The token following this one.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Formats the request payload the way the service expects it: a data URL
/// wrapping the base64-encoded image bytes.
fn data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, BASE64.encode(bytes))
}

fn parse_response(body: CalibrationResponse) -> Result<Calibration> {
    if !body.success {
        return Err(CalibrationError::MarkersNotFound.into());
    }

    match (body.pixels_per_mm, body.image_width_mm, body.image_height_mm) {
        (Some(pixels_per_mm), Some(image_width_mm), Some(image_height_mm))
            if pixels_per_mm.is_finite() && pixels_per_mm > 0.0 =>
        {
            Ok(Calibration {
                pixels_per_mm,
                image_width_mm,
                image_height_mm,
            })
        }
        _ => Err(CalibrationError::InvalidResponse(
            body.error
                .unwrap_or_else(|| "missing or degenerate scale fields".to_string()),
        )
        .into()),
    }
}

/// Sends the encoded image to the calibration service and returns the
/// detected scale.
pub async fn calibrate(service_url: &str, mime: &str, encoded: &[u8]) -> Result<Calibration> {
    let payload = CalibrationRequest {
        image: data_url(mime, encoded),
    };

    let client = reqwest::Client::builder()
        .user_agent(concat!("IcedCaliper/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| Error::Calibration(CalibrationError::Transport(e.to_string())))?;

    tracing::info!(url = service_url, bytes = encoded.len(), "requesting calibration");

    let response = client
        .post(service_url)
        .json(&payload)
        .send()
        .await
        .map_err(|e| Error::Calibration(CalibrationError::Transport(e.to_string())))?;

    // The service answers 400 with `success: false` when no marker is found,
    // so the body is decoded regardless of the HTTP status.
    let body: CalibrationResponse = response
        .json()
        .await
        .map_err(|e| Error::Calibration(CalibrationError::InvalidResponse(e.to_string())))?;

    let calibration = parse_response(body)?;
    tracing::info!(
        pixels_per_mm = calibration.pixels_per_mm,
        width_mm = calibration.image_width_mm,
        height_mm = calibration.image_height_mm,
        "calibration succeeded"
    );
    Ok(calibration)
}
