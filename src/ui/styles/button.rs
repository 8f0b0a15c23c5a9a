// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary header action (reload, theme choices).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::NAVY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::NAVY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::NAVY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::NAVY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        _ => button::Style::default(),
    }
}

/// Arrows and play/pause drawn on top of an image.
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            button::Status::Disabled => opacity::OVERLAY_SUBTLE,
            button::Status::Active => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Dot indicator. The active dot is filled with the accent color.
pub fn dot(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match (active, status) {
            (true, _) => palette::GOLD_500,
            (false, button::Status::Hovered) => palette::GOLD_300,
            (false, _) => Color {
                a: opacity::OVERLAY_MEDIUM,
                ..WHITE
            },
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: WHITE,
            border: Border {
                color: Color {
                    a: opacity::OVERLAY_MEDIUM,
                    ..BLACK
                },
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Style for selected/active button state.
/// Uses the brand colors so toggle groups read the same in light and dark themes.
pub fn selected(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    match status {
        button::Status::Active | button::Status::Pressed | button::Status::Hovered => {
            button::Style {
                background: Some(Background::Color(palette::GOLD_600)),
                text_color: WHITE,
                border: Border {
                    color: palette::GOLD_500,
                    width: 1.0,
                    radius: radius::SM.into(),
                },
                shadow: shadow::SM,
                snap: true,
            }
        }
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(if is_light {
                palette::GRAY_200
            } else {
                palette::GRAY_700
            })),
            text_color: palette::GRAY_400,
            border: Border {
                color: palette::GRAY_400,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_dot_uses_accent() {
        let style = dot(true)(&Theme::Light, button::Status::Active);
        assert_eq!(style.background, Some(Background::Color(palette::GOLD_500)));
    }

    #[test]
    fn inactive_dot_is_translucent() {
        let style = dot(false)(&Theme::Dark, button::Status::Active);
        match style.background {
            Some(Background::Color(color)) => assert!(color.a < 1.0),
            other => panic!("unexpected background {other:?}"),
        }
    }

    #[test]
    fn overlay_hover_is_stronger_than_normal() {
        let style = overlay(WHITE, opacity::OVERLAY_MEDIUM, opacity::OVERLAY_HOVER);
        let alpha = |status| match style(&Theme::Dark, status).background {
            Some(Background::Color(color)) => color.a,
            _ => 0.0,
        };
        assert!(alpha(button::Status::Hovered) > alpha(button::Status::Active));
    }
}
