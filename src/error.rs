// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Image(String),
    Config(String),
    Calibration(CalibrationError),
    /// A distance was requested before a valid pixels-per-unit scale existed.
    Uncalibrated,
}

/// Specific error types for the marker-detection calibration exchange.
/// Used to provide user-friendly notification messages.
#[derive(Debug, Clone)]
pub enum CalibrationError {
    /// The service processed the image but found no ArUco markers.
    MarkersNotFound,

    /// Network or HTTP-level failure talking to the service.
    Transport(String),

    /// The service answered but the payload was not usable.
    InvalidResponse(String),
}

impl CalibrationError {
    /// Returns the message shown to the user for this error type.
    pub fn user_message(&self) -> String {
        match self {
            CalibrationError::MarkersNotFound => {
                "No ArUco markers detected. Please upload an image containing a marker."
                    .to_string()
            }
            CalibrationError::Transport(_) => {
                "Could not reach the calibration service. Please try again.".to_string()
            }
            CalibrationError::InvalidResponse(_) => {
                "The calibration service returned an unexpected answer.".to_string()
            }
        }
    }
}

impl fmt::Display for CalibrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalibrationError::MarkersNotFound => write!(f, "No ArUco markers detected"),
            CalibrationError::Transport(msg) => write!(f, "Transport error: {}", msg),
            CalibrationError::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Calibration(e) => write!(f, "Calibration Error: {}", e),
            Error::Uncalibrated => write!(f, "No calibration scale is available"),
        }
    }
}

impl From<CalibrationError> for Error {
    fn from(err: CalibrationError) -> Self {
        Error::Calibration(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn calibration_error_wraps_into_error() {
        let err: Error = CalibrationError::MarkersNotFound.into();
        assert!(matches!(
            err,
            Error::Calibration(CalibrationError::MarkersNotFound)
        ));
    }

    #[test]
    fn calibration_user_messages_are_actionable() {
        assert!(CalibrationError::MarkersNotFound
            .user_message()
            .contains("ArUco"));
        assert!(CalibrationError::Transport("timeout".into())
            .user_message()
            .contains("try again"));
    }

    #[test]
    fn uncalibrated_display() {
        assert_eq!(
            format!("{}", Error::Uncalibrated),
            "No calibration scale is available"
        );
    }
}
