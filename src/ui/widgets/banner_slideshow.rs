// SPDX-License-Identifier: MPL-2.0
//! Banner slideshow at the top of the page.
//!
//! Advances on its own, offers arrows, dots and a play/pause button. Any
//! manual navigation pauses the slideshow until play is pressed again.

use super::controls::{self, ArrowState};
use super::picture::{self, Slide};
use crate::content::{Banner, LoadedContent};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::state::rotation::{self, Effect};
use crate::ui::state::{Rotation, RotationConfig, Timer, TimerKey};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{Column, Container, Row, Space, Stack, Text};
use iced::{Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Previous,
    Next,
    GoTo(usize),
    TogglePlayback,
}

impl From<Message> for rotation::Message {
    fn from(message: Message) -> Self {
        match message {
            Message::Previous => rotation::Message::Previous,
            Message::Next => rotation::Message::Next,
            Message::GoTo(index) => rotation::Message::GoTo(index),
            Message::TogglePlayback => rotation::Message::ToggleAutoPlay,
        }
    }
}

#[derive(Debug)]
pub struct State {
    rotation: Rotation<Slide<Banner>>,
    fallback: Slide<Banner>,
}

fn slides(loaded: &LoadedContent) -> Vec<Slide<Banner>> {
    picture::resolve_all(
        loaded.content.banners.clone(),
        loaded.base_dir.as_deref(),
        |banner| banner.image.as_path(),
    )
}

impl State {
    #[must_use]
    pub fn new(loaded: &LoadedContent, config: RotationConfig) -> Self {
        Self {
            rotation: Rotation::new(slides(loaded), config),
            fallback: Slide::without_image(Banner::placeholder(&loaded.content.hotel)),
        }
    }

    /// Takes the banners of freshly loaded content, keeping the position.
    pub fn replace_content(&mut self, loaded: &LoadedContent) {
        self.rotation.replace_items(slides(loaded));
        self.fallback = Slide::without_image(Banner::placeholder(&loaded.content.hotel));
    }

    #[must_use]
    pub fn rotation(&self) -> &Rotation<Slide<Banner>> {
        &self.rotation
    }

    /// The slide on screen, the placeholder when there are no banners.
    #[must_use]
    pub fn current(&self) -> &Slide<Banner> {
        self.rotation.current_item_or(&self.fallback)
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
        let slide = self.current();
        let index = self.rotation.current_index().unwrap_or(0);

        let base: Element<'_, Message> = picture::view(
            slide.image.as_deref(),
            "",
            sizing::BANNER_HEIGHT,
            picture::placeholder_tint(index),
        );

        let mut caption = Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(&slide.item.title).size(typography::DISPLAY));
        if !slide.item.subtitle.is_empty() {
            caption = caption.push(Text::new(&slide.item.subtitle).size(typography::BODY_LG));
        }

        let mut footer = Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(controls::dots(
                self.rotation.len(),
                self.rotation.current_index(),
                Message::GoTo,
            ));
        if self.rotation.is_pausable() && self.rotation.can_navigate() {
            footer = footer.push(controls::play_pause(
                self.rotation.is_auto_playing(),
                Message::TogglePlayback,
            ));
        }

        let overlay = Column::new()
            .height(Length::Fill)
            .padding(spacing::LG)
            .spacing(spacing::SM)
            .push(Space::new().height(Length::Fill))
            .push(
                Container::new(caption)
                    .padding(spacing::MD)
                    .style(styles::container::caption),
            )
            .push(footer);

        let stacked: Element<'_, Message> = Stack::new().push(base).push(overlay).into();

        if self.rotation.can_navigate() {
            controls::with_arrows(
                stacked,
                ArrowState {
                    has_previous: self.rotation.has_previous(),
                    has_next: self.rotation.has_next(),
                },
                Message::Previous,
                Message::Next,
            )
        } else {
            stacked
        }
    }
}
