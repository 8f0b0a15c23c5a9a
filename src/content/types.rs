// SPDX-License-Identifier: MPL-2.0
//! Showcase content model, as read from a content TOML file.

use serde::Deserialize;
use std::path::PathBuf;

/// Lowest star rating a review can carry.
pub const MIN_RATING: u8 = 1;
/// Highest star rating a review can carry.
pub const MAX_RATING: u8 = 5;

/// Everything the showcase page displays.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub hotel: HotelInfo,
    pub banners: Vec<Banner>,
    pub hero_images: Vec<HeroImage>,
    pub reviews: Vec<Review>,
    pub rooms: Vec<Room>,
    pub amenities: Vec<Amenity>,
    pub contact: Contact,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HotelInfo {
    pub name: String,
    pub tagline: String,
}

/// One slide of the banner slideshow.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Banner {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    pub image: PathBuf,
}

impl Banner {
    /// Slide shown when the content defines no banners.
    #[must_use]
    pub fn placeholder(hotel: &HotelInfo) -> Self {
        Self {
            title: if hotel.name.is_empty() {
                "Welcome".to_string()
            } else {
                format!("Welcome to {}", hotel.name)
            },
            subtitle: hotel.tagline.clone(),
            image: PathBuf::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HeroImage {
    pub image: PathBuf,
    #[serde(default)]
    pub caption: String,
}

impl HeroImage {
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            image: PathBuf::new(),
            caption: String::new(),
        }
    }
}

/// Star rating, always within `MIN_RATING..=MAX_RATING`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(from = "i64")]
pub struct Rating(u8);

impl Rating {
    #[must_use]
    pub fn new(value: i64) -> Self {
        let clamped = value.clamp(i64::from(MIN_RATING), i64::from(MAX_RATING));
        // Clamped above, always fits.
        Self(u8::try_from(clamped).unwrap_or(MAX_RATING))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Filled and empty stars, e.g. `★★★★☆`.
    #[must_use]
    pub fn stars(self) -> String {
        let filled = usize::from(self.0);
        let empty = usize::from(MAX_RATING) - filled;
        format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self(MAX_RATING)
    }
}

impl From<i64> for Rating {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Review {
    pub author: String,
    pub quote: String,
    #[serde(default)]
    pub rating: Rating,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Photo {
    pub image: PathBuf,
    #[serde(default)]
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Room {
    /// Stable identifier used to keep gallery state across content reloads.
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Price per night, in whole currency units.
    pub nightly_rate: u32,
    pub primary_image: PathBuf,
    #[serde(default)]
    pub photos: Vec<Photo>,
}

impl Room {
    /// The primary image, as a gallery photo.
    #[must_use]
    pub fn primary_photo(&self) -> Photo {
        Photo {
            image: self.primary_image.clone(),
            caption: self.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Amenity {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub address: String,
    pub phone: String,
    pub email: String,
}

impl Contact {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.address.is_empty() && self.phone.is_empty() && self.email.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_clamps_out_of_range_values() {
        assert_eq!(Rating::new(0).value(), MIN_RATING);
        assert_eq!(Rating::new(-3).value(), MIN_RATING);
        assert_eq!(Rating::new(9).value(), MAX_RATING);
        assert_eq!(Rating::new(4).value(), 4);
    }

    #[test]
    fn stars_render_five_glyphs() {
        assert_eq!(Rating::new(3).stars(), "★★★☆☆");
        assert_eq!(Rating::new(5).stars().chars().count(), 5);
    }

    #[test]
    fn banner_placeholder_mentions_hotel() {
        let hotel = HotelInfo {
            name: "Hotel Miramar".into(),
            tagline: "By the sea".into(),
        };
        let banner = Banner::placeholder(&hotel);
        assert!(banner.title.contains("Hotel Miramar"));
        assert_eq!(banner.subtitle, "By the sea");
        assert_eq!(Banner::placeholder(&HotelInfo::default()).title, "Welcome");
    }

    #[test]
    fn primary_photo_uses_room_name_as_caption() {
        let room = Room {
            id: "deluxe".into(),
            name: "Deluxe Room".into(),
            description: String::new(),
            nightly_rate: 180,
            primary_image: PathBuf::from("rooms/deluxe.jpg"),
            photos: Vec::new(),
        };
        let photo = room.primary_photo();
        assert_eq!(photo.image, PathBuf::from("rooms/deluxe.jpg"));
        assert_eq!(photo.caption, "Deluxe Room");
    }
}
