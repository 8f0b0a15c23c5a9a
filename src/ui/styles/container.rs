// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn scheme(theme: &Theme) -> ColorScheme {
    if theme.extended_palette().is_dark {
        ColorScheme::dark()
    } else {
        ColorScheme::light()
    }
}

/// Page background.
pub fn page(theme: &Theme) -> container::Style {
    let colors = scheme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Card surface used by room, review and info cards.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so cards stay readable in both light and dark modes.
pub fn card(theme: &Theme) -> container::Style {
    let colors = scheme(theme);
    let base = colors.surface_secondary;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        text_color: Some(colors.text_primary),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..colors.accent
            },
            width: 1.0,
            radius: radius::LG.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Site header band.
pub fn header(theme: &Theme) -> container::Style {
    let colors = scheme(theme);
    container::Style {
        background: Some(Background::Color(colors.brand_primary)),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Translucent band behind captions drawn over an image.
pub fn caption(theme: &Theme) -> container::Style {
    let colors = scheme(theme);
    container::Style {
        background: Some(Background::Color(colors.overlay_background)),
        text_color: Some(colors.overlay_text),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Solid tile standing in for an image file that could not be found.
pub fn placeholder(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_follows_theme_brightness() {
        let light = page(&Theme::Light).background;
        let dark = page(&Theme::Dark).background;
        assert_ne!(light, dark);
    }

    #[test]
    fn placeholder_uses_given_color() {
        let style = placeholder(palette::PLACEHOLDER_COOL)(&Theme::Light);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::PLACEHOLDER_COOL))
        );
    }
}
