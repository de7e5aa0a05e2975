//! Static library entries for text, media, audio and maps.

use crate::element::{ElementProperties, LibraryElement};

fn text(id: &str, name: &str, content: &str, font_size: f64, font_family: &str) -> LibraryElement {
    LibraryElement::new(
        id,
        name,
        "",
        ElementProperties::Text {
            content: content.to_string(),
            font_size,
            font_family: font_family.to_string(),
            color: "#000000".to_string(),
        },
    )
}

fn media(id: &str, name: &str, src: &str, thumbnail: &str, duration: f64) -> LibraryElement {
    LibraryElement::new(
        id,
        name,
        thumbnail,
        ElementProperties::Media {
            src: src.to_string(),
            duration: Some(duration),
        },
    )
}

fn audio(id: &str, name: &str, src: &str, duration: f64) -> LibraryElement {
    LibraryElement::new(
        id,
        name,
        "",
        ElementProperties::Audio {
            src: src.to_string(),
            duration: Some(duration),
        },
    )
}

fn map(id: &str, name: &str, region: &str) -> LibraryElement {
    LibraryElement::new(
        id,
        name,
        format!("/maps/{}.svg", region),
        ElementProperties::Map {
            region: region.to_string(),
        },
    )
}

/// Text styles offered by the library.
pub fn text_presets() -> Vec<LibraryElement> {
    vec![
        text("text-heading", "Heading", "Add a heading", 48.0, "Inter"),
        text("text-subheading", "Subheading", "Add a subheading", 32.0, "Inter"),
        text("text-body", "Body Text", "Add some body text", 16.0, "Inter"),
        text("text-caption", "Caption", "Add a caption", 12.0, "Inter"),
        text("text-quote", "Quote", "\u{201C}Add a quote\u{201D}", 24.0, "Georgia"),
    ]
}

/// Video clips offered by the library.
pub fn media_presets() -> Vec<LibraryElement> {
    vec![
        media("media-ocean", "Ocean Waves", "/media/ocean.mp4", "/media/ocean.jpg", 12.0),
        media("media-city", "City Timelapse", "/media/city.mp4", "/media/city.jpg", 20.0),
        media("media-forest", "Forest Walk", "/media/forest.mp4", "/media/forest.jpg", 15.0),
    ]
}

/// Audio tracks offered by the library.
pub fn audio_presets() -> Vec<LibraryElement> {
    vec![
        audio("audio-ambient", "Ambient Pad", "/audio/ambient.mp3", 60.0),
        audio("audio-upbeat", "Upbeat Pop", "/audio/upbeat.mp3", 45.0),
        audio("audio-piano", "Soft Piano", "/audio/piano.mp3", 90.0),
    ]
}

/// Map regions offered by the library.
pub fn map_presets() -> Vec<LibraryElement> {
    vec![
        map("map-world", "World", "world"),
        map("map-europe", "Europe", "europe"),
        map("map-north-america", "North America", "north-america"),
        map("map-asia", "Asia", "asia"),
        map("map-africa", "Africa", "africa"),
    ]
}
