// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Dispatches between the populated gallery grid and the empty state shown
//! when the scan found nothing to display.

use super::Message;
use crate::ui::gallery;
use iced::widget::{Column, Container, Text};
use iced::{alignment, Color, Element, Length};
use std::path::Path;

const EMPTY_TITLE_SIZE: f32 = 24.0;
const EMPTY_BODY_SIZE: f32 = 14.0;
const EMPTY_TEXT_COLOR: Color = Color::from_rgb(0.4, 0.4, 0.4);

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub gallery: &'a gallery::State,
    pub directory: &'a Path,
    pub window_width: f32,
}

/// Renders the gallery grid, or the empty state when nothing was found.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    if ctx.gallery.is_empty() {
        return view_empty(ctx.directory);
    }

    Container::new(ctx.gallery.view(ctx.window_width))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_empty(directory: &Path) -> Element<'_, Message> {
    let title = Text::new("Nothing to show")
        .size(EMPTY_TITLE_SIZE)
        .color(EMPTY_TEXT_COLOR);

    let subtitle = Text::new(format!(
        "No recognized files were found in {}",
        directory.display()
    ))
    .size(EMPTY_BODY_SIZE)
    .color(EMPTY_TEXT_COLOR);

    let content = Column::new()
        .spacing(8)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(subtitle);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
