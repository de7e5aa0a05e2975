//! Emoji sticker catalog.

use crate::element::StickerType;
use serde::{Deserialize, Serialize};

/// A sticker as listed in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StickerDef {
    pub name: &'static str,
    pub emoji: &'static str,
}

/// A named group of stickers.
#[derive(Debug, Clone, Copy)]
pub struct StickerCategory {
    pub name: &'static str,
    pub stickers: &'static [StickerDef],
}

const fn sticker(name: &'static str, emoji: &'static str) -> StickerDef {
    StickerDef { name, emoji }
}

pub const STICKER_CATEGORIES: &[StickerCategory] = &[
    StickerCategory {
        name: "smileys",
        stickers: &[
            sticker("Grinning Face", "😀"),
            sticker("Tears of Joy", "😂"),
            sticker("Heart Eyes", "😍"),
            sticker("Cool", "😎"),
            sticker("Thinking", "🤔"),
            sticker("Party Face", "🥳"),
            sticker("Wink", "😉"),
            sticker("Surprised", "😮"),
        ],
    },
    StickerCategory {
        name: "animals",
        stickers: &[
            sticker("Dog", "🐶"),
            sticker("Cat", "🐱"),
            sticker("Fox", "🦊"),
            sticker("Panda", "🐼"),
            sticker("Lion", "🦁"),
            sticker("Unicorn", "🦄"),
            sticker("Butterfly", "🦋"),
            sticker("Octopus", "🐙"),
        ],
    },
    StickerCategory {
        name: "food",
        stickers: &[
            sticker("Pizza", "🍕"),
            sticker("Burger", "🍔"),
            sticker("Taco", "🌮"),
            sticker("Ice Cream", "🍦"),
            sticker("Donut", "🍩"),
            sticker("Watermelon", "🍉"),
            sticker("Coffee", "☕"),
            sticker("Birthday Cake", "🎂"),
        ],
    },
    StickerCategory {
        name: "nature",
        stickers: &[
            sticker("Sun", "☀️"),
            sticker("Rainbow", "🌈"),
            sticker("Snowflake", "❄️"),
            sticker("Palm Tree", "🌴"),
            sticker("Sunflower", "🌻"),
            sticker("Wave", "🌊"),
            sticker("Mountain", "⛰️"),
            sticker("Lightning", "⚡"),
        ],
    },
    StickerCategory {
        name: "celebration",
        stickers: &[
            sticker("Party Popper", "🎉"),
            sticker("Balloon", "🎈"),
            sticker("Gift", "🎁"),
            sticker("Confetti", "🎊"),
            sticker("Trophy", "🏆"),
            sticker("Fireworks", "🎆"),
        ],
    },
    StickerCategory {
        name: "travel",
        stickers: &[
            sticker("Airplane", "✈️"),
            sticker("Rocket", "🚀"),
            sticker("Car", "🚗"),
            sticker("Globe", "🌍"),
            sticker("Compass", "🧭"),
            sticker("Camera", "📷"),
        ],
    },
    StickerCategory {
        name: "symbols",
        stickers: &[
            sticker("Red Heart", "❤️"),
            sticker("Star", "⭐"),
            sticker("Sparkles", "✨"),
            sticker("Fire", "🔥"),
            sticker("Check Mark", "✅"),
            sticker("Hundred Points", "💯"),
        ],
    },
];

/// Stickers in a category. Unknown categories are empty.
pub fn stickers_in(category: &str) -> &'static [StickerDef] {
    STICKER_CATEGORIES
        .iter()
        .find(|c| c.name == category)
        .map(|c| c.stickers)
        .unwrap_or(&[])
}

/// Sticker input to the insertion pipeline.
///
/// Every geometric and style field is optional; missing fields receive
/// defaults independently of each other.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StickerEntry {
    pub id: String,
    pub name: String,
    pub emoji: String,
    #[serde(default)]
    pub sticker_type: Option<StickerType>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub x: Option<f64>,
    #[serde(default)]
    pub y: Option<f64>,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub rotation: Option<f64>,
    #[serde(default)]
    pub opacity: Option<f64>,
    #[serde(default)]
    pub z_index: Option<i32>,
}

impl StickerEntry {
    pub fn new(id: impl Into<String>, name: impl Into<String>, emoji: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            emoji: emoji.into(),
            ..Default::default()
        }
    }
}

impl StickerDef {
    /// Entry for this sticker with all optional fields unset.
    pub fn to_entry(&self, category: &str) -> StickerEntry {
        let slug: String = self
            .name
            .chars()
            .map(|c| if c.is_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
            .collect();
        StickerEntry::new(format!("{}-{}", category, slug), self.name, self.emoji)
    }
}
