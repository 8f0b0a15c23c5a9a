// SPDX-License-Identifier: MPL-2.0
//! Displayed items paired with their resolved image file.
//!
//! Image paths are resolved once, when content is (re)loaded, so views never
//! touch the filesystem. Items whose image cannot be found render as a colored
//! placeholder tile carrying the item's caption.

use crate::content;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{image, Container, Text};
use iced::{Color, ContentFit, Element, Length};
use std::path::{Path, PathBuf};

/// An item together with the on-disk location of its image, if it exists.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide<T> {
    pub item: T,
    pub image: Option<PathBuf>,
}

impl<T> Slide<T> {
    /// A slide with no image; always drawn as a placeholder.
    #[must_use]
    pub fn without_image(item: T) -> Self {
        Self { item, image: None }
    }
}

/// Resolves every item's image against `base_dir`.
pub fn resolve_all<T>(
    items: Vec<T>,
    base_dir: Option<&Path>,
    image_of: impl Fn(&T) -> &Path,
) -> Vec<Slide<T>> {
    items
        .into_iter()
        .map(|item| {
            let image = content::resolve_image(base_dir, image_of(&item));
            if image.is_none() {
                log::debug!("image {} not found, using placeholder", image_of(&item).display());
            }
            Slide { item, image }
        })
        .collect()
}

/// Placeholder tint for the item at `index`, so neighbouring slides differ.
#[must_use]
pub fn placeholder_tint(index: usize) -> Color {
    const TINTS: [Color; 3] = [
        palette::PLACEHOLDER_WARM,
        palette::PLACEHOLDER_COOL,
        palette::PLACEHOLDER_GREEN,
    ];
    TINTS[index % TINTS.len()]
}

/// Renders `path` filling the given height, or a placeholder tile.
pub fn view<'a, Message: 'a>(
    path: Option<&Path>,
    caption: &'a str,
    height: f32,
    tint: Color,
) -> Element<'a, Message> {
    match path {
        Some(path) => image(image::Handle::from_path(path))
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .content_fit(ContentFit::Cover)
            .into(),
        None => Container::new(Text::new(caption).size(typography::BODY))
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .padding(spacing::MD)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(styles::container::placeholder(tint))
            .into(),
    }
}
