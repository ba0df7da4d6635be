// SPDX-License-Identifier: MPL-2.0
//! View composition for the application window.

use super::{App, Message};
use crate::config::{SIDEBAR_WIDTH, TOOLBAR_HEIGHT};
use crate::measure::MeasurementPair;
use crate::ui::theme;
use crate::ui::{notifications, overlay};
use iced::widget::{button, column, container, row, scrollable, text, Canvas, Column, Stack};
use iced::{Alignment, Color, Element, Length};

pub fn view(app: &App) -> Element<'_, Message> {
    let toolbar = toolbar(app);
    let canvas = measurement_surface(app);
    let sidebar = sidebar(app);

    let body = row![
        container(canvas).width(Length::Fill).height(Length::Fill),
        container(sidebar)
            .width(Length::Fixed(SIDEBAR_WIDTH))
            .height(Length::Fill)
            .padding(12),
    ];

    let screen = column![toolbar, body];

    if app.notifications.is_empty() {
        screen.into()
    } else {
        Stack::new()
            .push(screen)
            .push(toast_layer(&app.notifications))
            .into()
    }
}

fn toolbar(app: &App) -> Element<'_, Message> {
    let status = if app.calibrating {
        text("Calibrating...")
    } else if let Some(scale) = app.session.calibration() {
        text(format!("Scale: {:.1} px/{}", scale.pixels_per_cm(), app.unit_label))
    } else {
        text("Open an image to begin")
    };

    container(
        row![
            button(text("Open Image...")).on_press(Message::OpenFileDialog),
            button(text("Reset View"))
                .on_press_maybe(app.image.is_some().then_some(Message::ResetView)),
            status,
        ]
        .spacing(12)
        .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .height(Length::Fixed(TOOLBAR_HEIGHT))
    .padding(8)
    .into()
}

fn measurement_surface(app: &App) -> Element<'_, Message> {
    match &app.image {
        Some(image) => {
            // The canvas publishes overlay messages; lift them into the
            // application message type.
            let canvas: Element<'_, overlay::Message> =
                Canvas::new(overlay::MeasurementOverlay {
                    view: app.session.view(),
                    pairs: app.session.measurements().pairs(),
                    calibration: app.session.calibration(),
                    image,
                    wheel_zoom_factor: app.wheel_zoom_factor,
                    unit_label: &app.unit_label,
                })
                .width(Length::Fill)
                .height(Length::Fill)
                .into();
            canvas.map(Message::Overlay)
        }
        None => container(
            text("Open an image containing an ArUco marker,\nthen double-click point pairs to measure.")
                .size(16),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(theme::surface_color().into()),
            ..container::Style::default()
        })
        .into(),
    }
}

fn sidebar(app: &App) -> Element<'_, Message> {
    let mut list = Column::new().spacing(6).push(text("Measurements").size(18));

    if app.session.measurements().is_empty() {
        list = list.push(text("Double-click two points to measure.").size(13));
    }

    for (index, pair) in app.session.measurements().pairs().iter().enumerate() {
        let line = match (pair, app.session.calibration()) {
            (MeasurementPair::Closed(_, _), Some(scale)) => {
                match pair.distance_cm(scale) {
                    Some(cm) => format!("#{}: {:.2} {}", index + 1, cm, app.unit_label),
                    None => format!("#{}: ?", index + 1),
                }
            }
            (MeasurementPair::Open(_), _) => {
                format!("#{}: waiting for second point", index + 1)
            }
            (MeasurementPair::Closed(_, _), None) => format!("#{}: uncalibrated", index + 1),
        };
        list = list.push(text(line).size(14));
    }

    scrollable(list).into()
}

fn toast_layer(manager: &notifications::Manager) -> Element<'_, Message> {
    let mut toasts = Column::new().spacing(8).width(Length::Fixed(320.0));

    for notification in manager.iter() {
        let background = notification.severity().color();
        toasts = toasts.push(
            container(
                row![
                    text(notification.message().to_string())
                        .size(14)
                        .color(Color::WHITE)
                        .width(Length::Fill),
                    button(text("x").color(Color::WHITE)).on_press(Message::Notification(
                        notifications::Message::Dismiss(notification.id()),
                    )),
                ]
                .spacing(8)
                .align_y(Alignment::Center),
            )
            .padding(10)
            .style(move |_theme| container::Style {
                background: Some(background.into()),
                text_color: Some(Color::WHITE),
                border: iced::border::rounded(4.0),
                ..container::Style::default()
            }),
        );
    }

    container(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(16)
        .align_x(iced::alignment::Horizontal::Right)
        .into()
}
