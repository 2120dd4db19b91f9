// SPDX-License-Identifier: MPL-2.0
//! Directory scanner module that discovers and classifies gallery assets.
//!
//! A scan lists a directory once, keeps the files whose extension matches the
//! requested asset kind, and sorts them according to the configured sort
//! order. There is no re-scan and no file watching; the catalog is a snapshot.

use crate::config::SortOrder;
use std::path::{Path, PathBuf};

/// Classification of a discovered file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Image,
    Font,
}

/// One discovered file, immutable once scanned.
#[derive(Debug, Clone, PartialEq)]
pub struct Asset {
    pub path: PathBuf,
    pub kind: AssetKind,
}

impl Asset {
    /// Returns the file name portion of the asset path, if representable.
    pub fn file_name(&self) -> Option<&str> {
        self.path.file_name().and_then(|n| n.to_str())
    }
}

/// The scanned, filtered collection of assets for a directory.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AssetCatalog {
    assets: Vec<Asset>,
}

impl AssetCatalog {
    /// Creates a new empty catalog.
    pub fn new() -> Self {
        Self { assets: Vec::new() }
    }

    /// Scans a directory for assets of the given kind.
    ///
    /// Unreadable or nonexistent directories yield an empty catalog rather
    /// than an error; unrecognized extensions and non-file entries are
    /// silently skipped.
    pub fn scan(directory: &Path, kind: AssetKind, sort_order: SortOrder) -> Self {
        let Ok(entries) = std::fs::read_dir(directory) else {
            return Self::new();
        };

        let mut assets = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_file() && classify(&path) == Some(kind) {
                assets.push(Asset { path, kind });
            }
        }

        sort_assets(&mut assets, sort_order);

        Self { assets }
    }

    /// Returns the total number of assets in the catalog.
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Checks if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Returns the asset at the specified index.
    pub fn get(&self, index: usize) -> Option<&Asset> {
        self.assets.get(index)
    }

    /// Iterates over the assets in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Asset> {
        self.assets.iter()
    }
}

impl<'a> IntoIterator for &'a AssetCatalog {
    type Item = &'a Asset;
    type IntoIter = std::slice::Iter<'a, Asset>;

    fn into_iter(self) -> Self::IntoIter {
        self.assets.iter()
    }
}

/// Recognized file extensions per asset kind.
pub mod extensions {
    /// Image file extensions.
    pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "tiff", "bmp", "gif"];

    /// Font file extensions.
    pub const FONT_EXTENSIONS: &[&str] = &["ttf", "otf", "ttc"];
}

/// Classifies a path by its lowercase extension.
pub fn classify<P: AsRef<Path>>(path: P) -> Option<AssetKind> {
    let extension = path
        .as_ref()
        .extension()
        .and_then(|s| s.to_str())
        .map(str::to_lowercase)?;

    if extensions::IMAGE_EXTENSIONS.contains(&extension.as_str()) {
        Some(AssetKind::Image)
    } else if extensions::FONT_EXTENSIONS.contains(&extension.as_str()) {
        Some(AssetKind::Font)
    } else {
        None
    }
}

/// Sorts assets according to the specified sort order.
fn sort_assets(assets: &mut [Asset], sort_order: SortOrder) {
    match sort_order {
        SortOrder::Alphabetical => {
            assets.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
        }
        SortOrder::ModifiedDate => {
            assets.sort_by(|a, b| {
                let a_time = a
                    .path
                    .metadata()
                    .and_then(|m| m.modified())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH);
                let b_time = b
                    .path
                    .metadata()
                    .and_then(|m| m.modified())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH);
                a_time.cmp(&b_time)
            });
        }
        SortOrder::CreatedDate => {
            assets.sort_by(|a, b| {
                let a_time = a
                    .path
                    .metadata()
                    .and_then(|m| m.created())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH);
                let b_time = b
                    .path
                    .metadata()
                    .and_then(|m| m.created())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH);
                a_time.cmp(&b_time)
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::tempdir;

    fn create_file(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).expect("failed to create test file");
        file.write_all(b"fixture data")
            .expect("failed to write test file");
        path
    }

    #[test]
    fn classify_recognizes_image_extensions() {
        assert_eq!(classify("photo.png"), Some(AssetKind::Image));
        assert_eq!(classify("photo.jpg"), Some(AssetKind::Image));
        assert_eq!(classify("photo.jpeg"), Some(AssetKind::Image));
        assert_eq!(classify("scan.tiff"), Some(AssetKind::Image));
        assert_eq!(classify("icon.bmp"), Some(AssetKind::Image));
        assert_eq!(classify("anim.gif"), Some(AssetKind::Image));
    }

    #[test]
    fn classify_recognizes_font_extensions() {
        assert_eq!(classify("serif.ttf"), Some(AssetKind::Font));
        assert_eq!(classify("sans.otf"), Some(AssetKind::Font));
        assert_eq!(classify("collection.ttc"), Some(AssetKind::Font));
    }

    #[test]
    fn classify_is_case_insensitive() {
        assert_eq!(classify("PHOTO.PNG"), Some(AssetKind::Image));
        assert_eq!(classify("Shot.JpEg"), Some(AssetKind::Image));
        assert_eq!(classify("Serif.TTF"), Some(AssetKind::Font));
    }

    #[test]
    fn classify_rejects_unrecognized_extensions() {
        assert_eq!(classify("notes.txt"), None);
        assert_eq!(classify("report.pdf"), None);
        assert_eq!(classify("no_extension"), None);
        assert_eq!(classify("vector.svg"), None);
    }

    #[test]
    fn scan_finds_only_requested_kind() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_file(temp_dir.path(), "a.jpg");
        create_file(temp_dir.path(), "b.png");
        create_file(temp_dir.path(), "serif.ttf");
        create_file(temp_dir.path(), "notes.txt");

        let images = AssetCatalog::scan(temp_dir.path(), AssetKind::Image, SortOrder::Alphabetical);
        assert_eq!(images.len(), 2);
        assert!(images.iter().all(|a| a.kind == AssetKind::Image));

        let fonts = AssetCatalog::scan(temp_dir.path(), AssetKind::Font, SortOrder::Alphabetical);
        assert_eq!(fonts.len(), 1);
        assert_eq!(fonts.get(0).and_then(Asset::file_name), Some("serif.ttf"));
    }

    #[test]
    fn scan_accepts_uppercase_extensions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_file(temp_dir.path(), "SHOUTY.PNG");
        create_file(temp_dir.path(), "quiet.gif");

        let catalog =
            AssetCatalog::scan(temp_dir.path(), AssetKind::Image, SortOrder::Alphabetical);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn scan_sorts_alphabetically_by_file_name() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_file(temp_dir.path(), "c.jpg");
        create_file(temp_dir.path(), "a.jpg");
        create_file(temp_dir.path(), "b.jpg");

        let catalog =
            AssetCatalog::scan(temp_dir.path(), AssetKind::Image, SortOrder::Alphabetical);

        let names: Vec<_> = catalog.iter().filter_map(Asset::file_name).collect();
        assert_eq!(names, vec!["a.jpg", "b.jpg", "c.jpg"]);
    }

    #[test]
    fn scan_skips_directories_with_matching_names() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::create_dir(temp_dir.path().join("decoy.png")).expect("failed to create dir");
        create_file(temp_dir.path(), "real.png");

        let catalog =
            AssetCatalog::scan(temp_dir.path(), AssetKind::Image, SortOrder::Alphabetical);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(0).and_then(Asset::file_name), Some("real.png"));
    }

    #[test]
    fn scan_of_empty_directory_yields_empty_catalog() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let catalog =
            AssetCatalog::scan(temp_dir.path(), AssetKind::Image, SortOrder::Alphabetical);
        assert!(catalog.is_empty());
    }

    #[test]
    fn scan_of_nonexistent_directory_yields_empty_catalog() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing = temp_dir.path().join("does_not_exist");

        let catalog = AssetCatalog::scan(&missing, AssetKind::Image, SortOrder::Alphabetical);
        assert!(catalog.is_empty());
    }
}
