// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native events are narrowed down to the few the site reacts to: window
//! resizes (navbar collapse, grid columns) and the keys driving the modals.

use super::message::Arrow;
use super::Message;
use iced::{event, keyboard, time, window, Subscription};
use std::time::Duration;

/// Frame interval of the animation clock.
const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Routes window and keyboard events to the app.
///
/// Keys already captured by a widget (typing in a text field) are ignored,
/// except Escape which always closes the topmost overlay.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        }) => Some(Message::EscapePressed),
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(named),
            ..
        }) if status == event::Status::Ignored => match named {
            keyboard::key::Named::ArrowLeft => Some(Message::ArrowPressed(Arrow::Left)),
            keyboard::key::Named::ArrowRight => Some(Message::ArrowPressed(Arrow::Right)),
            _ => None,
        },
        _ => None,
    })
}

/// Creates the animation clock for page transitions, spinners and toast
/// expiry. Idle pages do not tick.
pub fn create_tick_subscription(
    is_animating: bool,
    is_loading: bool,
    has_notifications: bool,
) -> Subscription<Message> {
    if is_animating || is_loading || has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
