// SPDX-License-Identifier: MPL-2.0
//! Scrollable thumbnail grid.
//!
//! The state owns the rendered bitmaps; the widget tree is rebuilt from the
//! pure [`GalleryLayout`](crate::layout::GalleryLayout) on every view call,
//! so a window resize only re-flows rows and never re-renders a bitmap.

use crate::catalog::{Asset, AssetCatalog, AssetKind};
use crate::config::SortOrder;
use crate::graphic::{self, ImageData, TargetSize};
use crate::layout::{CellSize, GalleryLayout};
use iced::widget::{Column, Container, Image, Row, Scrollable, Text};
use iced::{alignment, Background, Color, Element, Length, Theme};
use std::path::Path;

const PLACEHOLDER_BG: Color = Color::from_rgb(0.85, 0.85, 0.85);
const PLACEHOLDER_TEXT_SIZE: f32 = 12.0;

/// One grid entry: the source file name and, when rendering succeeded, its
/// bitmap. `None` marks an undecodable file shown as a placeholder cell.
#[derive(Debug, Clone)]
pub struct Item {
    pub name: String,
    pub image: Option<ImageData>,
}

/// Gallery state: every cell rendered once at the fixed cell size.
#[derive(Debug, Clone)]
pub struct State {
    items: Vec<Item>,
    cell: CellSize,
    spacing: f32,
}

impl State {
    /// Creates an empty gallery with the given grid metrics.
    pub fn new(cell: CellSize, spacing: f32) -> Self {
        Self {
            items: Vec::new(),
            cell,
            spacing,
        }
    }

    /// Scans `directory` and renders one cell per discovered asset.
    ///
    /// With a caption the scan looks for font files and each cell shows the
    /// caption rasterized in that font; without one it looks for images.
    /// Files that fail to render become placeholder cells and are reported
    /// on stderr; an unreadable directory yields an empty gallery.
    pub fn from_directory(
        directory: &Path,
        caption: Option<&str>,
        cell: CellSize,
        spacing: f32,
        sort_order: SortOrder,
    ) -> Self {
        let kind = if caption.is_some() {
            AssetKind::Font
        } else {
            AssetKind::Image
        };
        let catalog = AssetCatalog::scan(directory, kind, sort_order);
        let target = TargetSize::new(cell.width as u32, cell.height as u32);

        let items = catalog
            .iter()
            .map(|asset| render_item(asset, caption, target))
            .collect();

        Self {
            items,
            cell,
            spacing,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Builds the widget tree for the given container width.
    pub fn view<Message: 'static>(&self, container_width: f32) -> Element<'_, Message> {
        let layout = GalleryLayout::compute(self.items.len(), self.cell, self.spacing, container_width);

        let mut grid = Column::new()
            .spacing(self.spacing)
            .padding(self.spacing)
            .width(Length::Fill);

        for row_cells in layout.rows() {
            let mut row = Row::new().spacing(self.spacing);
            for placed in row_cells {
                row = row.push(self.cell_view(&self.items[placed.index]));
            }
            grid = grid.push(row);
        }

        Scrollable::new(grid)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn cell_view<'a, Message: 'static>(&'a self, item: &'a Item) -> Element<'a, Message> {
        match &item.image {
            Some(image) => Image::new(image.handle.clone())
                .width(Length::Fixed(self.cell.width))
                .height(Length::Fixed(self.cell.height))
                .into(),
            None => placeholder(&item.name, self.cell),
        }
    }
}

/// Renders one asset, degrading to a placeholder entry on failure.
fn render_item(asset: &Asset, caption: Option<&str>, target: TargetSize) -> Item {
    let name = asset.file_name().unwrap_or("unnamed").to_string();
    let mut graphic = graphic::for_asset(&asset.path, caption);

    let image = match graphic.render(Some(target)) {
        Ok(data) => Some(data.clone()),
        Err(error) => {
            eprintln!("[WARN] Skipping {}: {}", asset.path.display(), error);
            None
        }
    };

    Item { name, image }
}

/// Cell shown in place of a file that failed to render: the file name
/// centered on a flat surface.
fn placeholder<Message: 'static>(name: &str, cell: CellSize) -> Element<'_, Message> {
    Container::new(Text::new(name).size(PLACEHOLDER_TEXT_SIZE))
        .width(Length::Fixed(cell.width))
        .height(Length::Fixed(cell.height))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(|_theme: &Theme| iced::widget::container::Style {
            background: Some(Background::Color(PLACEHOLDER_BG)),
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use std::fs;
    use tempfile::tempdir;

    const CELL: CellSize = CellSize::square(150.0);
    const SPACING: f32 = 20.0;

    fn write_png(dir: &Path, name: &str) {
        let image = RgbaImage::from_pixel(4, 4, Rgba([10, 20, 30, 255]));
        image
            .save(dir.join(name))
            .expect("failed to write temporary png");
    }

    #[test]
    fn from_directory_renders_one_item_per_image() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        write_png(temp_dir.path(), "a.png");
        write_png(temp_dir.path(), "b.png");
        fs::write(temp_dir.path().join("notes.txt"), b"skip me").expect("write");

        let state = State::from_directory(
            temp_dir.path(),
            None,
            CELL,
            SPACING,
            SortOrder::Alphabetical,
        );

        assert_eq!(state.len(), 2);
        assert!(state.items().iter().all(|item| item.image.is_some()));
    }

    #[test]
    fn undecodable_image_becomes_placeholder_item() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        write_png(temp_dir.path(), "good.png");
        fs::write(temp_dir.path().join("bad.png"), b"not a png").expect("write");

        let state = State::from_directory(
            temp_dir.path(),
            None,
            CELL,
            SPACING,
            SortOrder::Alphabetical,
        );

        assert_eq!(state.len(), 2);
        let bad = state
            .items()
            .iter()
            .find(|item| item.name == "bad.png")
            .expect("bad.png should still be listed");
        assert!(bad.image.is_none());
        let good = state
            .items()
            .iter()
            .find(|item| item.name == "good.png")
            .expect("good.png should be listed");
        assert!(good.image.is_some());
    }

    #[test]
    fn caption_mode_scans_fonts_not_images() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        write_png(temp_dir.path(), "ignored.png");
        fs::write(temp_dir.path().join("fake.ttf"), b"not a real font").expect("write");

        let state = State::from_directory(
            temp_dir.path(),
            Some("Rover"),
            CELL,
            SPACING,
            SortOrder::Alphabetical,
        );

        // The font is unparsable, so it renders as a placeholder, but only
        // font files are considered at all.
        assert_eq!(state.len(), 1);
        assert_eq!(state.items()[0].name, "fake.ttf");
        assert!(state.items()[0].image.is_none());
    }

    #[test]
    fn unreadable_directory_yields_empty_gallery() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing = temp_dir.path().join("nowhere");

        let state =
            State::from_directory(&missing, None, CELL, SPACING, SortOrder::Alphabetical);
        assert!(state.is_empty());
    }

    #[test]
    fn items_keep_catalog_order() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        write_png(temp_dir.path(), "c.png");
        write_png(temp_dir.path(), "a.png");
        write_png(temp_dir.path(), "b.png");

        let state = State::from_directory(
            temp_dir.path(),
            None,
            CELL,
            SPACING,
            SortOrder::Alphabetical,
        );

        let names: Vec<_> = state.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["a.png", "b.png", "c.png"]);
    }
}
