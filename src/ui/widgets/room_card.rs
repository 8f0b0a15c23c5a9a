// SPDX-License-Identifier: MPL-2.0
//! Room card with an inline photo gallery.
//!
//! The gallery rotates on its own timer. Its arrows are drawn while the
//! pointer is over the photo. A room without photos shows its primary image.

use super::controls::{self, ArrowState};
use super::picture::{self, Slide};
use crate::content::{self, Photo, Room};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::state::hover::{self, HoverGate};
use crate::ui::state::rotation::{self, Effect};
use crate::ui::state::{Rotation, RotationConfig, Timer, TimerKey};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{mouse_area, Column, Container, Row, Space, Text};
use iced::{Element, Length};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Previous,
    Next,
    GoTo(usize),
    Hover(hover::Message),
}

#[derive(Debug)]
pub struct State {
    room: Room,
    gallery: Rotation<Slide<Photo>>,
    fallback: Slide<Photo>,
    hover: HoverGate,
}

fn gallery_parts(room: &Room, base_dir: Option<&Path>) -> (Vec<Slide<Photo>>, Slide<Photo>) {
    let photos = picture::resolve_all(room.photos.clone(), base_dir, |photo| {
        photo.image.as_path()
    });
    let primary = room.primary_photo();
    let fallback = Slide {
        image: content::resolve_image(base_dir, &primary.image),
        item: primary,
    };
    (photos, fallback)
}

impl State {
    #[must_use]
    pub fn new(room: Room, base_dir: Option<&Path>, config: RotationConfig) -> Self {
        let (photos, fallback) = gallery_parts(&room, base_dir);
        Self {
            room,
            gallery: Rotation::new(photos, config),
            fallback,
            hover: HoverGate::new(),
        }
    }

    /// Stable id of the room this card shows.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.room.id
    }

    #[must_use]
    pub fn room(&self) -> &Room {
        &self.room
    }

    /// Takes the reloaded version of the same room, keeping gallery position
    /// and hover state.
    pub fn replace_room(&mut self, room: Room, base_dir: Option<&Path>) {
        let (photos, fallback) = gallery_parts(&room, base_dir);
        self.gallery.replace_items(photos);
        self.fallback = fallback;
        self.room = room;
    }

    #[must_use]
    pub fn gallery(&self) -> &Rotation<Slide<Photo>> {
        &self.gallery
    }

    /// The photo on screen, the primary image when the room has no photos.
    #[must_use]
    pub fn current_photo(&self) -> &Slide<Photo> {
        self.gallery.current_item_or(&self.fallback)
    }

    #[must_use]
    pub fn arrows_visible(&self) -> bool {
        self.hover.is_active() && self.gallery.can_navigate()
    }

    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::Previous => self.gallery.handle(rotation::Message::Previous),
            Message::Next => self.gallery.handle(rotation::Message::Next),
            Message::GoTo(index) => self.gallery.handle(rotation::Message::GoTo(index)),
            Message::Hover(msg) => {
                self.hover.handle(msg);
                Effect::None
            }
        }
    }

    pub fn tick(&mut self, key: TimerKey) -> Effect {
        self.gallery.tick(key)
    }

    #[must_use]
    pub fn owns(&self, key: TimerKey) -> bool {
        self.gallery.owns(key)
    }

    #[must_use]
    pub fn timer(&self) -> Option<Timer> {
        self.gallery.timer()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let photo = self.current_photo();
        let index = self.gallery.current_index().unwrap_or(0);

        let base: Element<'_, Message> = picture::view(
            photo.image.as_deref(),
            &photo.item.caption,
            sizing::GALLERY_HEIGHT,
            picture::placeholder_tint(index + 2),
        );
        let gallery = if self.arrows_visible() {
            controls::with_arrows(
                base,
                ArrowState {
                    has_previous: self.gallery.has_previous(),
                    has_next: self.gallery.has_next(),
                },
                Message::Previous,
                Message::Next,
            )
        } else {
            base
        };
        let gallery = mouse_area(gallery)
            .on_enter(Message::Hover(hover::Message::Entered))
            .on_exit(Message::Hover(hover::Message::Left));

        let heading = Row::new()
            .align_y(Vertical::Center)
            .push(Text::new(&self.room.name).size(typography::TITLE_SM))
            .push(Space::new().width(Length::Fill))
            .push(
                Text::new(format!("€{} / night", self.room.nightly_rate))
                    .size(typography::BODY),
            );

        let column = Column::new()
            .spacing(spacing::SM)
            .push(gallery)
            .push(controls::dots(
                self.gallery.len(),
                self.gallery.current_index(),
                Message::GoTo,
            ))
            .push(heading)
            .push(Text::new(&self.room.description).size(typography::BODY));

        Container::new(column)
            .width(Length::Fixed(sizing::ROOM_CARD_WIDTH))
            .padding(spacing::MD)
            .style(styles::container::card)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::state::AutoPlay;
    use std::path::PathBuf;

    fn room(photos: usize) -> Room {
        Room {
            id: "garden".into(),
            name: "Garden Room".into(),
            description: "Ground floor".into(),
            nightly_rate: 150,
            primary_image: PathBuf::from("garden.jpg"),
            photos: (0..photos)
                .map(|i| Photo {
                    image: PathBuf::from(format!("garden-{i}.jpg")),
                    caption: format!("photo {i}"),
                })
                .collect(),
        }
    }

    fn manual() -> RotationConfig {
        RotationConfig {
            auto_play: AutoPlay::Off,
            ..RotationConfig::default()
        }
    }

    #[test]
    fn no_photos_falls_back_to_primary_image() {
        let state = State::new(room(0), None, manual());
        assert_eq!(state.current_photo().item.image, PathBuf::from("garden.jpg"));
        assert_eq!(state.current_photo().item.caption, "Garden Room");
    }

    #[test]
    fn arrows_follow_hover() {
        let mut state = State::new(room(3), None, manual());
        assert!(!state.arrows_visible());

        state.update(Message::Hover(hover::Message::Entered));
        assert!(state.arrows_visible());

        state.update(Message::Hover(hover::Message::Left));
        assert!(!state.arrows_visible());
    }

    #[test]
    fn hover_does_not_move_gallery() {
        let mut state = State::new(room(3), None, manual());
        state.update(Message::Next);
        state.update(Message::Hover(hover::Message::Entered));
        state.update(Message::Hover(hover::Message::Left));
        assert_eq!(state.gallery().current_index(), Some(1));
    }

    #[test]
    fn single_photo_hides_arrows_even_when_hovered() {
        let mut state = State::new(room(1), None, manual());
        state.update(Message::Hover(hover::Message::Entered));
        assert!(!state.arrows_visible());
    }

    #[test]
    fn default_gallery_rotates_while_hovered() {
        let config = crate::config::Config::default().rooms_rotation();
        let mut state = State::new(room(3), None, config);
        let key = state.timer().expect("gallery rotates").key;

        state.update(Message::Hover(hover::Message::Entered));
        assert_eq!(state.timer().map(|timer| timer.key), Some(key));
        assert!(state.arrows_visible());

        assert_eq!(state.tick(key), Effect::Moved { from: 0, to: 1 });
        state.update(Message::Hover(hover::Message::Left));
        assert_eq!(state.timer().map(|timer| timer.key), Some(key));
        assert_eq!(state.current_photo().item.caption, "photo 1");
    }

    #[test]
    fn manual_gallery_has_no_timer() {
        let mut state = State::new(room(4), None, manual());
        state.update(Message::GoTo(2));
        assert!(state.timer().is_none());
        assert_eq!(state.current_photo().item.caption, "photo 2");
    }

    #[test]
    fn replacing_room_clamps_gallery() {
        let mut state = State::new(room(4), None, manual());
        state.update(Message::GoTo(3));
        state.replace_room(room(2), None);
        assert_eq!(state.gallery().current_index(), Some(1));

        state.replace_room(room(0), None);
        assert_eq!(state.gallery().current_index(), None);
        assert_eq!(state.current_photo().item.caption, "Garden Room");
    }
}
