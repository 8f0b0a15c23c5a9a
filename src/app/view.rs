// SPDX-License-Identifier: MPL-2.0
//! Page layout: header, rotating widgets, room cards and info cards.

use super::{App, Message};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::navbar;
use crate::ui::styles;
use crate::ui::widgets::info_card;
use iced::widget::{scrollable, Column, Container, Row, Text};
use iced::{Element, Length, Padding, Theme};

fn section<'a>(title: &'a str, body: Element<'a, Message>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::SM)
        .push(Text::new(title).size(typography::TITLE_MD))
        .push(body)
        .into()
}

fn horizontal<'a>(row: Row<'a, Message>) -> Element<'a, Message> {
    let row = row.padding(Padding {
        bottom: spacing::SM,
        ..Padding::ZERO
    });
    scrollable(row)
        .direction(scrollable::Direction::Horizontal(scrollable::Scrollbar::default()))
        .width(Length::Fill)
        .into()
}

pub(super) fn view(app: &App) -> Element<'_, Message> {
    let hotel = &app.content.content.hotel;
    let header = navbar::view(navbar::ViewContext {
        hotel_name: if hotel.name.is_empty() {
            "Hotel Showcase"
        } else {
            hotel.name.as_str()
        },
        tagline: &hotel.tagline,
        theme_mode: app.theme_mode,
        is_dark: app.theme == Theme::Dark,
        can_reload: app.content_path.is_some(),
    })
    .map(Message::Navbar);

    let mut body = Column::new()
        .spacing(spacing::XL)
        .padding(spacing::LG)
        .push(app.banner.view().map(Message::Banner))
        .push(app.hero.view().map(Message::Hero));

    if !app.rooms.is_empty() {
        let rooms = app.rooms.iter().fold(Row::new().spacing(spacing::MD), |row, card| {
            let id = card.id().to_string();
            row.push(card.view().map(move |message| Message::Room {
                id: id.clone(),
                message,
            }))
        });
        body = body.push(section("Our rooms", horizontal(rooms)));
    }

    body = body.push(app.reviews.view().map(Message::Reviews));

    let content = &app.content.content;
    let mut cards = content
        .amenities
        .iter()
        .fold(Row::new().spacing(spacing::MD), |row, amenity| {
            row.push(info_card::amenity(amenity))
        });
    if !content.contact.is_empty() {
        cards = cards.push(info_card::contact(&content.contact));
    }
    body = body.push(section("At the hotel", horizontal(cards)));

    let page = Column::new()
        .push(header)
        .push(scrollable(body).height(Length::Fill));

    Container::new(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page)
        .into()
}
