// SPDX-License-Identifier: MPL-2.0
//! Navigation affordances shared by the rotating widgets: prev/next arrows,
//! dot indicators and the play/pause button.

use crate::ui::design_tokens::{opacity, palette::WHITE, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, Container, Row, Space, Stack, Text};
use iced::{Element, Length};

/// Which arrows can be pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrowState {
    pub has_previous: bool,
    pub has_next: bool,
}

fn arrow<'a, Message: Clone + 'a>(
    glyph: &'static str,
    enabled: bool,
    on_press: Message,
) -> Element<'a, Message> {
    let arrow = button(
        Container::new(Text::new(glyph).size(typography::TITLE_MD))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
    )
    .width(Length::Fixed(sizing::ARROW_BUTTON))
    .height(Length::Fixed(sizing::ARROW_BUTTON))
    .style(styles::button_overlay(
        WHITE,
        opacity::OVERLAY_MEDIUM,
        opacity::OVERLAY_HOVER,
    ));

    if enabled {
        arrow.on_press(on_press).into()
    } else {
        arrow.into()
    }
}

/// Lays a previous and a next arrow over `base`, vertically centered.
pub fn with_arrows<'a, Message: Clone + 'a>(
    base: Element<'a, Message>,
    arrows: ArrowState,
    on_previous: Message,
    on_next: Message,
) -> Element<'a, Message> {
    let bar = Row::new()
        .align_y(Vertical::Center)
        .padding(spacing::SM)
        .push(arrow("‹", arrows.has_previous, on_previous))
        .push(Space::new().width(Length::Fill))
        .push(arrow("›", arrows.has_next, on_next));

    Stack::new()
        .push(base)
        .push(
            Container::new(bar)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_y(Vertical::Center),
        )
        .into()
}

/// A row of dots, one per item, the current one highlighted.
///
/// Renders nothing for fewer than two items.
pub fn dots<'a, Message: Clone + 'a>(
    len: usize,
    current: Option<usize>,
    on_select: impl Fn(usize) -> Message,
) -> Element<'a, Message> {
    if len < 2 {
        return Space::new().into();
    }

    let row = (0..len).fold(
        Row::new().spacing(spacing::XS).align_y(Vertical::Center),
        |row, index| {
            let active = current == Some(index);
            let size = if active {
                sizing::DOT_ACTIVE
            } else {
                sizing::DOT
            };
            row.push(
                button(Space::new())
                    .width(Length::Fixed(size))
                    .height(Length::Fixed(size))
                    .padding(0)
                    .style(styles::button::dot(active))
                    .on_press(on_select(index)),
            )
        },
    );

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}

/// Play/pause toggle. Shows what pressing it will do.
pub fn play_pause<'a, Message: Clone + 'a>(
    is_playing: bool,
    on_toggle: Message,
) -> Element<'a, Message> {
    let glyph = if is_playing { "❚❚" } else { "▶" };
    button(Text::new(glyph).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button_overlay(
            WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ))
        .on_press(on_toggle)
        .into()
}
