// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Only window resizes matter here: the grid layout depends on the container
//! width, while the rendered bitmaps do not.

use super::Message;
use iced::{event, Subscription};

/// Routes window resize events to the update loop.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(iced::window::Event::Resized(size)) => {
            Some(Message::WindowResized(size))
        }
        _ => None,
    })
}
