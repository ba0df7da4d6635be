// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{App, Message};
use crate::calibration::{self, Calibration, RequestToken};
use crate::error::Error;
use crate::measure::CalibrationScale;
use crate::media::{self, ImageData};
use crate::ui::{notifications, overlay};
use iced::Task;
use std::path::PathBuf;

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::OpenFileDialog => pick_image_task(),
        Message::FileSelected(None) => Task::none(),
        Message::FileSelected(Some(path)) => app.begin_upload(path),
        Message::CalibrationCompleted { token, result } => app.finish_upload(token, result),
        Message::Overlay(event) => {
            app.handle_overlay(event);
            Task::none()
        }
        Message::ResetView => {
            let viewport = app.viewer_size();
            app.session.refit(viewport);
            Task::none()
        }
        Message::Notification(notifications::Message::Dismiss(id)) => {
            app.notifications.dismiss(id);
            Task::none()
        }
        Message::WindowResized(size) => {
            app.window_size = size;
            Task::none()
        }
        Message::Tick(now) => {
            app.notifications.prune_expired(now);
            Task::none()
        }
    }
}

/// Opens the async image picker dialog.
fn pick_image_task() -> Task<Message> {
    Task::perform(
        async {
            let file = rfd::AsyncFileDialog::new()
                .set_title("Open Image")
                .add_filter(
                    "Images",
                    &["png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff"],
                )
                .pick_file()
                .await;
            file.map(|handle| handle.path().to_path_buf())
        },
        Message::FileSelected,
    )
}

impl App {
    /// Loads the chosen file and sends it to the calibration service.
    ///
    /// Each upload bumps the request token so a response from an earlier,
    /// now superseded upload can be recognized and dropped.
    pub(super) fn begin_upload(&mut self, path: PathBuf) -> Task<Message> {
        self.current_upload = self.current_upload.next();
        self.calibrating = true;

        let token = self.current_upload;
        let service_url = self.service_url.clone();

        tracing::info!(path = %path.display(), ?token, "starting upload");

        Task::perform(
            async move {
                let loaded = media::load_image(&path)?;
                let calibration =
                    calibration::calibrate(&service_url, loaded.mime, &loaded.encoded).await?;
                Ok((loaded.data, calibration))
            },
            move |result| Message::CalibrationCompleted { token, result },
        )
    }

    /// Applies a finished calibration round-trip.
    ///
    /// On failure nothing but the notification queue changes, so the user
    /// can retry from exactly the state they had before.
    pub(super) fn finish_upload(
        &mut self,
        token: RequestToken,
        result: Result<(ImageData, Calibration), Error>,
    ) -> Task<Message> {
        if token != self.current_upload {
            tracing::debug!(?token, "ignoring stale calibration response");
            return Task::none();
        }

        self.calibrating = false;

        match result {
            Ok((image, calibration)) => match CalibrationScale::new(calibration.pixels_per_cm())
            {
                Ok(scale) => {
                    let viewport = self.viewer_size();
                    self.session.install_image(image.size(), scale, viewport);
                    self.image = Some(image);
                    self.notifications.push(notifications::Notification::success(
                        format!(
                            "Calibrated: {:.1} px/cm ({:.0} x {:.0} mm)",
                            scale.pixels_per_cm(),
                            calibration.image_width_mm,
                            calibration.image_height_mm,
                        ),
                    ));
                    Task::none()
                }
                Err(err) => {
                    tracing::warn!(%err, "service returned an unusable scale");
                    self.notifications.push(notifications::Notification::error(
                        "The calibration service returned an unusable scale.",
                    ));
                    Task::none()
                }
            },
            Err(Error::Calibration(err)) => {
                tracing::warn!(%err, "calibration failed");
                self.notifications
                    .push(notifications::Notification::error(err.user_message()));
                Task::none()
            }
            Err(err) => {
                tracing::warn!(%err, "upload failed");
                self.notifications
                    .push(notifications::Notification::error(format!(
                        "Could not open the image: {err}"
                    )));
                Task::none()
            }
        }
    }

    pub(super) fn handle_overlay(&mut self, event: overlay::Message) {
        match event {
            overlay::Message::Panned(delta) => self.session.view_mut().pan(delta),
            overlay::Message::Zoomed { anchor, factor } => {
                self.session.view_mut().scale_at(anchor, factor);
            }
            overlay::Message::PointAdded(position) => {
                if !self.session.add_viewport_point(position) {
                    tracing::debug!("ignoring point: no calibrated image loaded");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalibrationError;
    use crate::test_utils::assert_abs_diff_eq;
    use iced::{Point, Size};

    fn calibration() -> Calibration {
        Calibration {
            pixels_per_mm: 3.78,
            image_width_mm: 211.6,
            image_height_mm: 158.7,
        }
    }

    fn image() -> ImageData {
        // Sized so the fit scale lands well inside the interactive zoom
        // range and a subsequent x2 zoom is not clamped.
        ImageData::from_rgba(400, 300, vec![0; 400 * 300 * 4])
    }

    fn completed(app: &mut App, token: RequestToken) {
        let _ = app.finish_upload(token, Ok((image(), calibration())));
    }

    #[test]
    fn successful_calibration_installs_image_and_session() {
        let mut app = App::default();
        app.current_upload = app.current_upload.next();
        app.calibrating = true;

        let token = app.current_upload;
        completed(&mut app, token);

        assert!(app.image.is_some());
        assert!(!app.calibrating);
        assert!(app.session.is_ready());
        assert_abs_diff_eq!(
            app.session.calibration().unwrap().pixels_per_cm(),
            37.8,
            epsilon = 1e-4
        );
    }

    #[test]
    fn stale_response_is_ignored() {
        let mut app = App::default();
        let stale = app.current_upload.next();
        // A second upload supersedes the first.
        app.current_upload = stale.next();

        completed(&mut app, stale);

        assert!(app.image.is_none());
        assert!(!app.session.is_ready());
    }

    #[test]
    fn failed_calibration_leaves_state_untouched() {
        let mut app = App::default();
        app.current_upload = app.current_upload.next();
        let token = app.current_upload;
        completed(&mut app, token);

        // Place a measurement, then fail a second upload.
        app.handle_overlay(overlay::Message::PointAdded(Point::new(10.0, 10.0)));
        app.handle_overlay(overlay::Message::PointAdded(Point::new(50.0, 10.0)));
        let pairs_before = app.session.measurements().len();
        let view_before = *app.session.view();

        app.current_upload = app.current_upload.next();
        let _ = app.finish_upload(
            app.current_upload,
            Err(Error::Calibration(CalibrationError::MarkersNotFound)),
        );

        assert_eq!(app.session.measurements().len(), pairs_before);
        assert_eq!(*app.session.view(), view_before);
        assert!(!app.notifications.is_empty());
    }

    #[test]
    fn overlay_gestures_drive_the_session() {
        let mut app = App::default();
        app.current_upload = app.current_upload.next();
        let token = app.current_upload;
        completed(&mut app, token);

        let scale_before = app.session.view().scale();
        app.handle_overlay(overlay::Message::Zoomed {
            anchor: Point::new(0.0, 0.0),
            factor: 2.0,
        });
        assert_abs_diff_eq!(app.session.view().scale(), scale_before * 2.0);

        app.handle_overlay(overlay::Message::Panned(iced::Vector::new(5.0, -3.0)));
        let _ = update(&mut app, Message::ResetView);
        assert!(app.session.measurements().is_empty());
    }

    #[test]
    fn window_resize_updates_viewer_size() {
        let mut app = App::default();
        let _ = update(&mut app, Message::WindowResized(Size::new(500.0, 400.0)));
        let viewer = app.viewer_size();
        assert!(viewer.width < 500.0);
        assert!(viewer.height < 400.0);
    }

    #[test]
    fn points_before_calibration_are_dropped() {
        let mut app = App::default();
        app.handle_overlay(overlay::Message::PointAdded(Point::new(1.0, 1.0)));
        assert!(app.session.measurements().is_empty());
    }
}
