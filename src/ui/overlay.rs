// SPDX-License-Identifier: MPL-2.0
//! Measurement overlay: draws the image plus all markers, lines and distance
//! labels, and turns pointer gestures into view/measurement messages.
//!
//! The image and the overlay geometry are drawn inside the same saved frame
//! transform taken from the session's [`ViewTransform`], so they stay
//! pixel-aligned under any pan/zoom. Marker radii and line widths are divided
//! by the current scale to keep a constant apparent size on screen.

use crate::config::{
    DOUBLE_CLICK_MS, DOUBLE_CLICK_SLOP, LABEL_SIZE, LINE_WIDTH, MARKER_RADIUS,
};
use crate::measure::{CalibrationScale, MeasurementPair};
use crate::media::ImageData;
use crate::ui::theme;
use crate::view::{mapping, ViewTransform};
use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke};
use iced::widget::Action;
use iced::{mouse, Event, Point, Rectangle, Renderer, Theme, Vector};
use std::time::{Duration, Instant};

/// Messages published by the overlay canvas.
#[derive(Debug, Clone)]
pub enum Message {
    /// The user dragged the image by this many viewport pixels.
    Panned(Vector),
    /// The user zoomed toward `anchor` (viewport coordinates).
    Zoomed { anchor: Point, factor: f32 },
    /// The user double-clicked at this viewport position.
    PointAdded(Point),
}

/// Canvas program used to render and interact with the measurement surface.
pub struct MeasurementOverlay<'a> {
    pub view: &'a ViewTransform,
    pub pairs: &'a [MeasurementPair],
    pub calibration: Option<CalibrationScale>,
    pub image: &'a ImageData,
    pub wheel_zoom_factor: f32,
    pub unit_label: &'a str,
}

/// Per-canvas pointer state: the active drag and double-click tracking.
#[derive(Debug, Default)]
pub struct Interaction {
    drag_from: Option<Point>,
    last_press: Option<(Instant, Point)>,
}

impl Interaction {
    fn is_double_click(&self, now: Instant, position: Point) -> bool {
        match self.last_press {
            Some((at, last)) => {
                now.duration_since(at) <= Duration::from_millis(DOUBLE_CLICK_MS)
                    && (position.x - last.x).abs() <= DOUBLE_CLICK_SLOP
                    && (position.y - last.y).abs() <= DOUBLE_CLICK_SLOP
            }
            None => false,
        }
    }
}

impl canvas::Program<Message> for MeasurementOverlay<'_> {
    type State = Interaction;

    fn update(
        &self,
        state: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;

                if state.is_double_click(Instant::now(), position) {
                    state.last_press = None;
                    state.drag_from = None;
                    return Some(Action::publish(Message::PointAdded(position)).and_capture());
                }

                state.last_press = Some((Instant::now(), position));
                state.drag_from = Some(position);
                None
            }
            Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                // Leaving the canvas ends the drag.
                let Some(position) = cursor.position_in(bounds) else {
                    state.drag_from = None;
                    return None;
                };

                let from = state.drag_from?;
                let delta = Vector::new(position.x - from.x, position.y - from.y);
                if delta.x == 0.0 && delta.y == 0.0 {
                    return None;
                }

                state.drag_from = Some(position);
                Some(Action::publish(Message::Panned(delta)).and_capture())
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
            | Event::Mouse(mouse::Event::CursorLeft) => {
                state.drag_from = None;
                None
            }
            Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                let anchor = cursor.position_in(bounds)?;
                let y = match delta {
                    mouse::ScrollDelta::Lines { y, .. } => *y,
                    mouse::ScrollDelta::Pixels { y, .. } => *y,
                };
                if y == 0.0 {
                    return None;
                }

                let factor = if y > 0.0 {
                    self.wheel_zoom_factor
                } else {
                    1.0 / self.wheel_zoom_factor
                };
                Some(Action::publish(Message::Zoomed { anchor, factor }).and_capture())
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let scale = self.view.scale();
        let position = self.view.position();

        frame.with_save(|frame| {
            // Same transform for the image and every marker: subsequent draw
            // calls use raw image-space coordinates.
            frame.translate(position);
            frame.scale(scale);

            frame.draw_image(
                Rectangle::with_size(self.image.size()),
                canvas::Image::new(self.image.handle.clone()),
            );

            for pair in self.pairs {
                match pair {
                    MeasurementPair::Open(point) => {
                        self.draw_marker(frame, *point, scale);
                    }
                    MeasurementPair::Closed(a, b) => {
                        let segment = Path::line(*a, *b);
                        frame.stroke(
                            &segment,
                            Stroke::default()
                                .with_width(LINE_WIDTH / scale)
                                .with_color(theme::line_color()),
                        );
                        self.draw_marker(frame, *a, scale);
                        self.draw_marker(frame, *b, scale);
                    }
                }
            }
        });

        // Labels are drawn outside the scaled frame, at viewport positions,
        // so the text stays crisp and at constant size.
        if let Some(calibration) = self.calibration {
            for pair in self.pairs {
                if let (MeasurementPair::Closed(a, b), Some(cm)) =
                    (pair, pair.distance_cm(calibration))
                {
                    let midpoint =
                        Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0);
                    let at = mapping::to_viewport_space(midpoint, self.view);

                    frame.fill_text(canvas::Text {
                        content: format!("{:.2} {}", cm, self.unit_label),
                        position: Point::new(at.x + 4.0, at.y - LABEL_SIZE - 2.0),
                        color: theme::label_color(),
                        size: LABEL_SIZE.into(),
                        ..canvas::Text::default()
                    });
                }
            }
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if state.drag_from.is_some() {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) {
            mouse::Interaction::Crosshair
        } else {
            mouse::Interaction::default()
        }
    }
}

impl MeasurementOverlay<'_> {
    fn draw_marker(&self, frame: &mut Frame, point: Point, scale: f32) {
        let dot = Path::circle(point, MARKER_RADIUS / scale);
        frame.fill(&dot, theme::marker_color());
    }
}
