// SPDX-License-Identifier: MPL-2.0
//! Light/dark toggler with a "System" option, shown in the site header.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::alignment::Vertical;
use iced::widget::{button, toggler, Row, Text};
use iced::Element;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The toggler was flipped; `true` means dark.
    DarkToggled(bool),
    UseSystem,
}

/// Returns the theme mode chosen by `message`.
#[must_use]
pub fn update(message: Message) -> ThemeMode {
    match message {
        Message::DarkToggled(true) => ThemeMode::Dark,
        Message::DarkToggled(false) => ThemeMode::Light,
        Message::UseSystem => ThemeMode::System,
    }
}

pub fn view<'a>(mode: ThemeMode, is_dark: bool) -> Element<'a, Message> {
    let system = button(Text::new("System").size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS]);
    let system = if mode == ThemeMode::System {
        system.style(styles::button::selected)
    } else {
        system
            .style(styles::button_primary)
            .on_press(Message::UseSystem)
    };

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            toggler(is_dark)
                .label("Dark")
                .on_toggle(Message::DarkToggled)
                .size(20.0),
        )
        .push(system)
        .into()
}
