// SPDX-License-Identifier: MPL-2.0
//! Static amenity and contact cards.

use crate::content::{Amenity, Contact};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Container, Text};
use iced::{Element, Length};

pub fn amenity<'a, Message: 'a>(amenity: &'a Amenity) -> Element<'a, Message> {
    let column = Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(&amenity.title)
                .size(typography::TITLE_SM)
                .color(palette::GOLD_600),
        )
        .push(Text::new(&amenity.description).size(typography::BODY));

    card(column.into())
}

pub fn contact<'a, Message: 'a>(contact: &'a Contact) -> Element<'a, Message> {
    let column = [
        ("Address", &contact.address),
        ("Phone", &contact.phone),
        ("Email", &contact.email),
    ]
    .into_iter()
    .filter(|(_, value)| !value.is_empty())
    .fold(
        Column::new()
            .spacing(spacing::XXS)
            .push(Text::new("Contact").size(typography::TITLE_SM)),
        |column, (label, value)| {
            column.push(Text::new(format!("{label}: {value}")).size(typography::BODY))
        },
    );

    card(column.into())
}

fn card<'a, Message: 'a>(content: Element<'a, Message>) -> Element<'a, Message> {
    Container::new(content)
        .width(Length::Fixed(sizing::INFO_CARD_WIDTH))
        .padding(spacing::MD)
        .style(styles::container::card)
        .into()
}
