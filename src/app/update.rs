// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application update loop.

use super::{config, App};
use crate::content::{self, LoadedContent, Room};
use crate::ui::navbar;
use crate::ui::state::rotation::Effect;
use crate::ui::state::{RotationConfig, TimerKey};
use crate::ui::widgets::room_card;
use std::collections::HashMap;
use std::path::Path;

pub(super) fn log_effect(widget: &str, effect: Effect) {
    match effect {
        Effect::None => {}
        Effect::Moved { from, to } => log::trace!("{widget}: {from} -> {to}"),
        Effect::AutoPlayChanged(playing) => log::debug!("{widget}: auto-play {playing}"),
    }
}

pub(super) fn handle_navbar_message(app: &mut App, message: navbar::Message) {
    match navbar::update(message) {
        navbar::Event::ThemeChanged(mode) => {
            app.set_theme_mode(mode);
            app.config.general.theme_mode = mode;
            if let Err(err) = config::save_with_override(&app.config, app.config_dir.clone()) {
                log::warn!("could not save theme preference: {err}");
            }
        }
        navbar::Event::ReloadRequested => reload_content(app),
    }
}

pub(super) fn handle_room_message(app: &mut App, id: &str, message: room_card::Message) {
    match app.rooms.iter_mut().find(|room| room.id() == id) {
        Some(room) => log_effect(id, room.update(message)),
        None => log::debug!("message for unknown room {id} dropped"),
    }
}

/// Routes a timer tick to the rotation that issued the key.
pub(super) fn handle_rotation_tick(app: &mut App, key: TimerKey) {
    let effect = if app.banner.owns(key) {
        app.banner.tick(key)
    } else if app.hero.owns(key) {
        app.hero.tick(key)
    } else if app.reviews.owns(key) {
        app.reviews.tick(key)
    } else if let Some(room) = app.rooms.iter_mut().find(|room| room.owns(key)) {
        room.tick(key)
    } else {
        // The owner was unmounted, e.g. a room removed by a reload.
        log::trace!("tick {key:?} has no owner");
        Effect::None
    };
    log_effect("tick", effect);
}

/// Re-reads the content file and hands the new collections to every widget.
///
/// On failure the current content stays on screen.
fn reload_content(app: &mut App) {
    let Some(path) = app.content_path.clone() else {
        log::info!("showing embedded content, nothing to reload");
        return;
    };

    match content::load_from_path(&path) {
        Ok(loaded) => {
            log::info!("reloaded content from {}", path.display());
            apply_content(app, loaded);
        }
        Err(err) => log::error!("could not reload {}: {err}", path.display()),
    }
}

fn apply_content(app: &mut App, loaded: LoadedContent) {
    app.banner.replace_content(&loaded);
    app.hero.replace_content(&loaded);
    app.reviews.replace_content(&loaded.content);
    reconcile_rooms(
        &mut app.rooms,
        &loaded.content.rooms,
        loaded.base_dir.as_deref(),
        app.config.rooms_rotation(),
    );
    app.content = loaded;
}

/// Matches reloaded rooms to existing cards by id.
///
/// Kept rooms keep their gallery state, removed rooms drop theirs (and with it
/// their timer), new rooms get a fresh card. Order follows `rooms`.
fn reconcile_rooms(
    cards: &mut Vec<room_card::State>,
    rooms: &[Room],
    base_dir: Option<&Path>,
    config: RotationConfig,
) {
    let mut previous: HashMap<String, room_card::State> = cards
        .drain(..)
        .map(|card| (card.id().to_string(), card))
        .collect();

    *cards = rooms
        .iter()
        .cloned()
        .map(|room| match previous.remove(&room.id) {
            Some(mut card) => {
                card.replace_room(room, base_dir);
                card
            }
            None => room_card::State::new(room, base_dir, config),
        })
        .collect();

    for id in previous.keys() {
        log::debug!("room {id} removed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::state::AutoPlay;
    use std::path::PathBuf;

    fn room(id: &str, photos: usize) -> Room {
        Room {
            id: id.to_string(),
            name: id.to_uppercase(),
            description: String::new(),
            nightly_rate: 100,
            primary_image: PathBuf::from(format!("{id}.jpg")),
            photos: (0..photos)
                .map(|i| crate::content::Photo {
                    image: PathBuf::from(format!("{id}-{i}.jpg")),
                    caption: String::new(),
                })
                .collect(),
        }
    }

    fn config() -> RotationConfig {
        RotationConfig {
            auto_play: AutoPlay::Always,
            ..RotationConfig::default()
        }
    }

    #[test]
    fn removed_rooms_take_their_timers_with_them() {
        let mut cards = vec![
            room_card::State::new(room("a", 3), None, config()),
            room_card::State::new(room("b", 3), None, config()),
        ];
        let removed_key = cards[1].timer().expect("b rotates").key;

        reconcile_rooms(&mut cards, &[room("a", 3)], None, config());

        assert_eq!(cards.len(), 1);
        assert!(cards.iter().all(|card| !card.owns(removed_key)));
    }

    #[test]
    fn kept_rooms_keep_their_identity() {
        let mut cards = vec![room_card::State::new(room("a", 3), None, config())];
        let key = cards[0].timer().expect("a rotates").key;

        reconcile_rooms(&mut cards, &[room("z", 2), room("a", 3)], None, config());

        assert_eq!(cards[0].id(), "z");
        assert_eq!(cards[1].id(), "a");
        assert_eq!(cards[1].timer().map(|timer| timer.key), Some(key));
    }
}
