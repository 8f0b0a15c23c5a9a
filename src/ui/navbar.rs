// SPDX-License-Identifier: MPL-2.0
//! Site header: hotel name, theme switch and content reload.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use crate::ui::widgets::theme_switch;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub hotel_name: &'a str,
    pub tagline: &'a str,
    pub theme_mode: ThemeMode,
    /// Whether the theme on screen is dark.
    pub is_dark: bool,
    /// Whether content comes from a file that can be re-read.
    pub can_reload: bool,
}

/// Messages emitted by the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Theme(theme_switch::Message),
    Reload,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    ThemeChanged(ThemeMode),
    ReloadRequested,
}

/// Process a header message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::Theme(msg) => Event::ThemeChanged(theme_switch::update(msg)),
        Message::Reload => Event::ReloadRequested,
    }
}

/// Render the header.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut title = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(ctx.hotel_name).size(typography::TITLE_LG));
    if !ctx.tagline.is_empty() {
        title = title.push(Text::new(ctx.tagline).size(typography::BODY));
    }

    let reload = button(Text::new("Reload content").size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button_primary);
    let reload = if ctx.can_reload {
        reload.on_press(Message::Reload)
    } else {
        reload
    };

    let row = Row::new()
        .spacing(spacing::MD)
        .padding([spacing::SM, spacing::LG])
        .align_y(Vertical::Center)
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(theme_switch::view(ctx.theme_mode, ctx.is_dark).map(Message::Theme))
        .push(reload);

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Left)
        .style(styles::container::header)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_messages_become_theme_events() {
        assert_eq!(
            update(Message::Theme(theme_switch::Message::DarkToggled(true))),
            Event::ThemeChanged(ThemeMode::Dark)
        );
        assert_eq!(update(Message::Reload), Event::ReloadRequested);
    }
}
