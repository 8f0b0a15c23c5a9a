// SPDX-License-Identifier: MPL-2.0
//! Loading of the showcase content: banners, hero images, reviews, rooms,
//! amenities and contact details.
//!
//! Content comes from a TOML file chosen with `--content` or the `[content]`
//! config section. When none is given, a default file embedded in the binary
//! is used.
//!
//! Image paths in a content file are relative to the directory holding that
//! file. See [`resolve_image`].

mod types;

pub use types::{
    Amenity, Banner, Contact, HeroImage, HotelInfo, Photo, Rating, Review, Room, SiteContent,
    MAX_RATING, MIN_RATING,
};

use crate::error::{ContentError, Result};
use rust_embed::RustEmbed;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(RustEmbed)]
#[folder = "assets/content/"]
struct Asset;

const EMBEDDED_FILE: &str = "site.toml";

/// Parsed content together with where its images live.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedContent {
    pub content: SiteContent,
    /// Directory of the content file; `None` for embedded content.
    pub base_dir: Option<PathBuf>,
}

/// Resolves `image` against `base_dir` and checks that the file exists.
///
/// Absolute paths are used as is. Relative paths need a base directory.
#[must_use]
pub fn resolve_image(base_dir: Option<&Path>, image: &Path) -> Option<PathBuf> {
    if image.as_os_str().is_empty() {
        return None;
    }
    let candidate = if image.is_absolute() {
        image.to_path_buf()
    } else {
        base_dir?.join(image)
    };
    candidate.is_file().then_some(candidate)
}

/// Parses a content document and checks that room ids are unique.
pub fn parse(raw: &str) -> Result<SiteContent> {
    let content: SiteContent =
        toml::from_str(raw).map_err(|err| ContentError::Malformed(err.to_string()))?;

    let mut seen = HashSet::new();
    for room in &content.rooms {
        if !seen.insert(room.id.as_str()) {
            return Err(ContentError::DuplicateRoom(room.id.clone()).into());
        }
    }
    Ok(content)
}

/// Loads a content file from disk.
pub fn load_from_path(path: &Path) -> Result<LoadedContent> {
    let raw = fs::read_to_string(path)?;
    let content = parse(&raw)?;
    log::debug!(
        "loaded {} with {} banners, {} reviews and {} rooms",
        path.display(),
        content.banners.len(),
        content.reviews.len(),
        content.rooms.len()
    );
    Ok(LoadedContent {
        content,
        base_dir: path.parent().map(Path::to_path_buf),
    })
}

/// Loads the default content bundled with the application.
pub fn load_embedded() -> Result<LoadedContent> {
    let file = Asset::get(EMBEDDED_FILE).ok_or(ContentError::MissingEmbedded(EMBEDDED_FILE))?;
    let raw = std::str::from_utf8(file.data.as_ref())
        .map_err(|err| ContentError::Malformed(err.to_string()))?;
    Ok(LoadedContent {
        content: parse(raw)?,
        base_dir: None,
    })
}

/// Loads `path` if given, otherwise the embedded content.
///
/// Returns a tuple of (content, optional_warning). If `path` cannot be loaded,
/// the embedded content is returned with a warning explaining what went wrong.
pub fn load_or_embedded(path: Option<&Path>) -> (LoadedContent, Option<String>) {
    let warning = match path {
        Some(path) => match load_from_path(path) {
            Ok(loaded) => return (loaded, None),
            Err(err) => Some(format!("could not load {}: {err}", path.display())),
        },
        None => None,
    };

    match load_embedded() {
        Ok(loaded) => (loaded, warning),
        Err(err) => {
            let embedded = format!("embedded content unusable: {err}");
            let warning = match warning {
                Some(first) => format!("{first}; {embedded}"),
                None => embedded,
            };
            (
                LoadedContent {
                    content: SiteContent::default(),
                    base_dir: None,
                },
                Some(warning),
            )
        }
    }
}
