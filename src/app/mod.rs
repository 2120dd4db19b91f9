// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the catalog, the
//! renderer, and the gallery grid.
//!
//! Boot is synchronous: the directory is scanned and every cell rendered
//! once before the first frame, matching the one-shot, single-threaded
//! model of the rest of the crate. The update loop afterwards only tracks
//! the window width so the grid can re-flow.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{
    self, Config, DEFAULT_CELL_WIDTH, DEFAULT_SPACING, MAX_CELL_SIZE, MAX_SPACING, MIN_CELL_SIZE,
    MIN_SPACING,
};
use crate::layout::CellSize;
use crate::ui::gallery;
use iced::{window, Element, Subscription, Task, Theme};
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 320;
pub const MIN_WINDOW_HEIGHT: u32 = 240;

const APP_NAME: &str = "Iced Gallery";

/// Root Iced application state.
#[derive(Debug)]
pub struct App {
    gallery: gallery::State,
    directory: PathBuf,
    caption: Option<String>,
    window_width: f32,
}

/// Ensures cell sizes from persisted configs stay inside the supported
/// range so a hand-edited settings file cannot request nonsensical grids.
fn clamp_cell_size(value: f32) -> f32 {
    value.clamp(MIN_CELL_SIZE, MAX_CELL_SIZE)
}

fn clamp_spacing(value: f32) -> f32 {
    value.clamp(MIN_SPACING, MAX_SPACING)
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();

        let directory = flags
            .directory
            .clone()
            .or_else(|| config.directory.clone())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        let cell_edge = clamp_cell_size(config.cell_size.unwrap_or(DEFAULT_CELL_WIDTH));
        let spacing = clamp_spacing(config.spacing.unwrap_or(DEFAULT_SPACING));
        let sort_order = flags.sort.or(config.sort_order).unwrap_or_default();

        let gallery = gallery::State::from_directory(
            &directory,
            flags.text.as_deref(),
            CellSize::square(cell_edge),
            spacing,
            sort_order,
        );

        // Remember the directory for the next launch.
        let updated = Config {
            directory: Some(directory.display().to_string()),
            cell_size: Some(cell_edge),
            spacing: Some(spacing),
            sort_order: Some(sort_order),
        };
        if let Err(error) = config::save(&updated) {
            eprintln!("Failed to save config: {:?}", error);
        }

        let app = App {
            gallery,
            directory,
            caption: flags.text,
            window_width: WINDOW_DEFAULT_WIDTH as f32,
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        let subject = match (&self.caption, self.directory.file_name()) {
            (Some(caption), _) => Some(format!("\"{caption}\"")),
            (None, Some(name)) => name.to_str().map(String::from),
            (None, None) => None,
        };

        match subject {
            Some(subject) => format!("{subject} - {APP_NAME}"),
            None => APP_NAME.to_string(),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::WindowResized(size) => {
                self.window_width = size.width;
                Task::none()
            }
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            gallery: &self.gallery,
            directory: &self.directory,
            window_width: self.window_width,
        })
    }
}
