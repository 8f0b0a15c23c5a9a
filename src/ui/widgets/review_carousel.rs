// SPDX-License-Identifier: MPL-2.0
//! Guest review carousel with arrows and dots.
//!
//! Keeps rotating after manual navigation; a click restarts the interval.

use super::controls;
use crate::content::{Review, SiteContent};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::state::rotation::{self, Effect};
use crate::ui::state::{Rotation, RotationConfig, Timer, TimerKey};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, Column, Container, Row, Text};
use iced::{Element, Length};

const EMPTY_MESSAGE: &str = "No reviews yet. Be the first to share your stay!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Previous,
    Next,
    GoTo(usize),
}

impl From<Message> for rotation::Message {
    fn from(message: Message) -> Self {
        match message {
            Message::Previous => rotation::Message::Previous,
            Message::Next => rotation::Message::Next,
            Message::GoTo(index) => rotation::Message::GoTo(index),
        }
    }
}

#[derive(Debug)]
pub struct State {
    rotation: Rotation<Review>,
}

impl State {
    #[must_use]
    pub fn new(content: &SiteContent, config: RotationConfig) -> Self {
        Self {
            rotation: Rotation::new(content.reviews.clone(), config),
        }
    }

    pub fn replace_content(&mut self, content: &SiteContent) {
        self.rotation.replace_items(content.reviews.clone());
    }

    #[must_use]
    pub fn rotation(&self) -> &Rotation<Review> {
        &self.rotation
    }

    pub fn update(&mut self, message: Message) -> Effect {
        self.rotation.handle(message.into())
    }

    pub fn tick(&mut self, key: TimerKey) -> Effect {
        self.rotation.tick(key)
    }

    #[must_use]
    pub fn owns(&self, key: TimerKey) -> bool {
        self.rotation.owns(key)
    }

    #[must_use]
    pub fn timer(&self) -> Option<Timer> {
        self.rotation.timer()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let body: Element<'_, Message> = match self.rotation.current_item() {
            Some(review) => Column::new()
                .spacing(spacing::XS)
                .align_x(Horizontal::Center)
                .push(
                    Text::new(review.rating.stars())
                        .size(typography::TITLE_SM)
                        .color(palette::GOLD_500),
                )
                .push(Text::new(format!("“{}”", review.quote)).size(typography::BODY_LG))
                .push(Text::new(format!("- {}", review.author)).size(typography::CAPTION))
                .into(),
            None => Text::new(EMPTY_MESSAGE).size(typography::BODY).into(),
        };

        let mut row = Row::new()
            .spacing(spacing::MD)
            .align_y(Vertical::Center)
            .width(Length::Fill);
        if self.rotation.can_navigate() {
            row = row.push(arrow("‹", self.rotation.has_previous(), Message::Previous));
        }
        row = row.push(
            Container::new(body)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        );
        if self.rotation.can_navigate() {
            row = row.push(arrow("›", self.rotation.has_next(), Message::Next));
        }

        let column = Column::new()
            .spacing(spacing::SM)
            .push(Text::new("What our guests say").size(typography::TITLE_MD))
            .push(row)
            .push(controls::dots(
                self.rotation.len(),
                self.rotation.current_index(),
                Message::GoTo,
            ));

        Container::new(column)
            .width(Length::Fill)
            .padding(spacing::LG)
            .style(styles::container::card)
            .into()
    }
}

fn arrow(glyph: &'static str, enabled: bool, message: Message) -> Element<'static, Message> {
    let arrow = button(Text::new(glyph).size(typography::TITLE_MD))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button_primary);
    if enabled {
        arrow.on_press(message).into()
    } else {
        arrow.into()
    }
}
