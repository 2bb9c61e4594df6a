// SPDX-License-Identifier: MPL-2.0
//! Ordered, read-only list of image references shown by the gallery.
//!
//! A list comes either from a directory scan or from a JSON manifest holding an
//! array of locators (the format galleries are stored in alongside articles).

use crate::error::{Error, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Extensions recognized by [`is_supported_image`] (lowercase).
const SUPPORTED_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "webp", "bmp", "ico", "tiff", "tif",
];

/// Opaque image locator. The gallery displays it and never interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(locator: impl Into<String>) -> Self {
        Self(locator.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Locator as a filesystem path for rendering.
    #[must_use]
    pub fn to_path(&self) -> PathBuf {
        PathBuf::from(&self.0)
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageRef {
    fn from(locator: &str) -> Self {
        Self::new(locator)
    }
}

/// Where an image list is loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Every supported image directly inside a directory.
    Directory(PathBuf),
    /// A JSON file holding an array of locators.
    Manifest(PathBuf),
}

impl ImageSource {
    /// Directories are scanned, anything else is read as a manifest.
    #[must_use]
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if path.is_dir() {
            ImageSource::Directory(path)
        } else {
            ImageSource::Manifest(path)
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ImageSource::Directory(path) | ImageSource::Manifest(path) => path,
        }
    }
}

/// Immutable ordered sequence of image references. Clones share storage.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageList {
    images: Arc<[ImageRef]>,
}

impl ImageList {
    pub fn new(images: Vec<ImageRef>) -> Self {
        Self {
            images: images.into(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ImageRef> {
        self.images.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageRef> {
        self.images.iter()
    }

    /// Parses a JSON array of locator strings.
    pub fn from_json(json: &str) -> Result<Self> {
        let locators: Vec<String> = serde_json::from_str(json)?;
        Ok(Self::new(locators.into_iter().map(ImageRef::new).collect()))
    }

    /// Reads a JSON manifest. Relative entries resolve against the manifest's
    /// directory and absolute paths are kept as written.
    ///
    /// Only filesystem paths can be displayed, so remote locators (anything
    /// with a `scheme://` prefix) are skipped with a warning.
    pub fn from_manifest(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let list = Self::from_json(&content)?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));

        let resolved = list
            .iter()
            .filter(|image| {
                let remote = is_remote(image);
                if remote {
                    tracing::warn!(locator = %image, "skipping non-filesystem image locator");
                }
                !remote
            })
            .map(|image| resolve_against(base, image))
            .collect();
        Ok(Self::new(resolved))
    }

    /// Collects supported images directly inside `directory`, sorted by file name.
    pub fn scan_directory(directory: &Path) -> Result<Self> {
        if !directory.is_dir() {
            return Err(Error::Io(format!(
                "not a directory: {}",
                directory.display()
            )));
        }

        let mut files = Vec::new();
        for entry in std::fs::read_dir(directory)? {
            let path = entry?.path();
            if path.is_file() && is_supported_image(&path) {
                files.push(path);
            }
        }

        files.sort_by_key(|path| {
            path.file_name()
                .map(|name| name.to_string_lossy().to_lowercase())
                .unwrap_or_default()
        });

        Ok(Self::new(
            files
                .into_iter()
                .map(|path| ImageRef::new(path.to_string_lossy()))
                .collect(),
        ))
    }

    /// Loads a list from either kind of source.
    pub fn load(source: &ImageSource) -> Result<Self> {
        let list = match source {
            ImageSource::Directory(path) => Self::scan_directory(path)?,
            ImageSource::Manifest(path) => Self::from_manifest(path)?,
        };
        tracing::info!(source = %source.path().display(), count = list.len(), "image list loaded");
        Ok(list)
    }
}

impl FromIterator<ImageRef> for ImageList {
    fn from_iter<I: IntoIterator<Item = ImageRef>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

fn is_remote(image: &ImageRef) -> bool {
    image.as_str().contains("://")
}

fn resolve_against(base: &Path, image: &ImageRef) -> ImageRef {
    let locator = image.as_str();
    if Path::new(locator).is_absolute() {
        image.clone()
    } else {
        ImageRef::new(base.join(locator).to_string_lossy())
    }
}

/// Checks whether a path has a supported image extension (case-insensitive).
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            let ext = ext.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn from_json_preserves_order() {
        let list = ImageList::from_json(r#"["c.jpg", "a.jpg", "b.jpg"]"#).expect("valid json");
        let names: Vec<&str> = list.iter().map(ImageRef::as_str).collect();
        assert_eq!(names, vec!["c.jpg", "a.jpg", "b.jpg"]);
    }

    #[test]
    fn from_json_accepts_empty_array() {
        let list = ImageList::from_json("[]").expect("valid json");
        assert!(list.is_empty());
    }

    #[test]
    fn from_json_rejects_non_array() {
        assert!(matches!(
            ImageList::from_json(r#"{"images": []}"#),
            Err(Error::Manifest(_))
        ));
        assert!(matches!(
            ImageList::from_json("[1, 2]"),
            Err(Error::Manifest(_))
        ));
    }

    #[test]
    fn manifest_entries_resolve_against_manifest_dir() {
        let dir = tempdir().expect("temp dir");
        let manifest = dir.path().join("gallery.json");
        fs::write(
            &manifest,
            r#"["one.png", "https://example.com/two.png", "/abs/three.png"]"#,
        )
        .expect("write manifest");

        let list = ImageList::from_manifest(&manifest).expect("manifest loads");

        assert_eq!(list.len(), 2);
        assert_eq!(list.get(0).map(ImageRef::to_path), Some(dir.path().join("one.png")));
        assert_eq!(list.get(1).map(ImageRef::as_str), Some("/abs/three.png"));
    }

    #[test]
    fn manifest_skips_remote_locators() {
        let dir = tempdir().expect("temp dir");
        let manifest = dir.path().join("gallery.json");
        fs::write(
            &manifest,
            r#"["https://cdn.example.com/a.jpg", "http://example.com/b.jpg", "c.jpg"]"#,
        )
        .expect("write manifest");

        let list = ImageList::from_manifest(&manifest).expect("manifest loads");

        let paths: Vec<PathBuf> = list.iter().map(ImageRef::to_path).collect();
        assert_eq!(paths, vec![dir.path().join("c.jpg")]);
    }

    #[test]
    fn manifest_of_only_remote_locators_is_empty() {
        let dir = tempdir().expect("temp dir");
        let manifest = dir.path().join("gallery.json");
        fs::write(&manifest, r#"["https://example.com/only.png"]"#).expect("write manifest");

        let list = ImageList::from_manifest(&manifest).expect("manifest loads");
        assert!(list.is_empty());
    }

    #[test]
    fn scan_directory_filters_and_sorts() {
        let dir = tempdir().expect("temp dir");
        for name in ["b.PNG", "a.jpg", "notes.txt", "c.webp"] {
            fs::write(dir.path().join(name), b"").expect("write file");
        }
        fs::create_dir(dir.path().join("nested.jpg")).expect("create dir");

        let list = ImageList::scan_directory(dir.path()).expect("scan succeeds");
        let names: Vec<String> = list
            .iter()
            .map(|image| {
                image
                    .to_path()
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default()
            })
            .collect();

        assert_eq!(names, vec!["a.jpg", "b.PNG", "c.webp"]);
    }

    #[test]
    fn scan_missing_directory_errors() {
        let dir = tempdir().expect("temp dir");
        let missing = dir.path().join("missing");
        assert!(matches!(
            ImageList::scan_directory(&missing),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn source_from_path_distinguishes_directories() {
        let dir = tempdir().expect("temp dir");
        assert_eq!(
            ImageSource::from_path(dir.path()),
            ImageSource::Directory(dir.path().to_path_buf())
        );
        let file = dir.path().join("gallery.json");
        assert_eq!(
            ImageSource::from_path(&file),
            ImageSource::Manifest(file.clone())
        );
    }

    #[test]
    fn clones_share_storage() {
        let list: ImageList = ["a.png", "b.png"].into_iter().map(ImageRef::from).collect();
        let clone = list.clone();
        assert_eq!(list, clone);
        assert_eq!(clone.len(), 2);
    }

    #[test]
    fn supported_extensions_are_case_insensitive() {
        assert!(is_supported_image(Path::new("photo.JPEG")));
        assert!(is_supported_image(Path::new("photo.tif")));
        assert!(!is_supported_image(Path::new("clip.mp4")));
        assert!(!is_supported_image(Path::new("no_extension")));
    }
}
