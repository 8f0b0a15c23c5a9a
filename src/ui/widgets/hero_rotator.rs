// SPDX-License-Identifier: MPL-2.0
//! Hero image strip. Rotates continuously; dots jump straight to an image.

use super::controls;
use super::picture::{self, Slide};
use crate::content::{HeroImage, LoadedContent};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::state::rotation::{self, Effect};
use crate::ui::state::{Rotation, RotationConfig, Timer, TimerKey};
use crate::ui::styles;
use iced::widget::{Column, Container, Space, Stack, Text};
use iced::{Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    GoTo(usize),
}

#[derive(Debug)]
pub struct State {
    rotation: Rotation<Slide<HeroImage>>,
    fallback: Slide<HeroImage>,
}

fn slides(loaded: &LoadedContent) -> Vec<Slide<HeroImage>> {
    picture::resolve_all(
        loaded.content.hero_images.clone(),
        loaded.base_dir.as_deref(),
        |hero| hero.image.as_path(),
    )
}

impl State {
    #[must_use]
    pub fn new(loaded: &LoadedContent, config: RotationConfig) -> Self {
        Self {
            rotation: Rotation::new(slides(loaded), config),
            fallback: Slide::without_image(HeroImage::placeholder()),
        }
    }

    pub fn replace_content(&mut self, loaded: &LoadedContent) {
        self.rotation.replace_items(slides(loaded));
    }

    #[must_use]
    pub fn rotation(&self) -> &Rotation<Slide<HeroImage>> {
        &self.rotation
    }

    #[must_use]
    pub fn current(&self) -> &Slide<HeroImage> {
        self.rotation.current_item_or(&self.fallback)
    }

    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::GoTo(index) => self.rotation.handle(rotation::Message::GoTo(index)),
        }
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
            &slide.item.caption,
            sizing::HERO_HEIGHT,
            picture::placeholder_tint(index + 1),
        );

        let mut overlay = Column::new()
            .height(Length::Fill)
            .padding(spacing::MD)
            .spacing(spacing::XS)
            .push(Space::new().height(Length::Fill));
        if slide.image.is_some() && !slide.item.caption.is_empty() {
            overlay = overlay.push(
                Container::new(Text::new(&slide.item.caption).size(typography::CAPTION))
                    .padding([spacing::XXS, spacing::XS])
                    .style(styles::container::caption),
            );
        }
        overlay = overlay.push(controls::dots(
            self.rotation.len(),
            self.rotation.current_index(),
            Message::GoTo,
        ));

        Stack::new().push(base).push(overlay).into()
    }
}
