//! Timeline data attached to every canvas element.
//!
//! Each element carries an entry point, an optional exit point and a small
//! list of keyframes describing its entrance animation. Keyframe times are
//! normalized to the `[0, 1]` range of the element's visible span.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A property that keyframes can animate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnimatableProperty {
    Opacity,
    Scale,
    Rotation,
    X,
    Y,
}

/// A single keyframe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    /// Normalized time in `[0, 1]`.
    pub time: f64,
    /// Property values at this time.
    pub properties: BTreeMap<AnimatableProperty, f64>,
}

impl Keyframe {
    /// Create an empty keyframe. The time is clamped into `[0, 1]`.
    pub fn new(time: f64) -> Self {
        let time = if time.is_nan() { 0.0 } else { time.clamp(0.0, 1.0) };
        Self {
            time,
            properties: BTreeMap::new(),
        }
    }

    /// Set a property value.
    pub fn with(mut self, property: AnimatableProperty, value: f64) -> Self {
        self.properties.insert(property, value);
        self
    }

    /// Get a property value.
    pub fn get(&self, property: AnimatableProperty) -> Option<f64> {
        self.properties.get(&property).copied()
    }
}

/// Timeline placement and animation for an element.
///
/// Deserialized data goes through [`RawTimeline`] so keyframes read from a
/// payload are clamped and ordered like constructed ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawTimeline")]
pub struct TimelineData {
    /// Time (seconds) at which the element appears.
    pub entry_point: f64,
    /// Time (seconds) at which the element leaves, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_point: Option<f64>,
    /// Whether the element stays visible after its animation ends.
    pub persist: bool,
    /// Keyframes, ordered by non-decreasing time.
    keyframes: Vec<Keyframe>,
}

/// Timeline data as read from the wire, before normalization.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTimeline {
    entry_point: f64,
    #[serde(default)]
    exit_point: Option<f64>,
    persist: bool,
    keyframes: Vec<Keyframe>,
}

impl From<RawTimeline> for TimelineData {
    fn from(raw: RawTimeline) -> Self {
        let keyframes = raw
            .keyframes
            .into_iter()
            .map(|k| Keyframe {
                properties: k.properties,
                ..Keyframe::new(k.time)
            })
            .collect();
        Self::with_keyframes(raw.entry_point, raw.exit_point, raw.persist, keyframes)
    }
}

impl Default for TimelineData {
    /// Fade and scale in from 80% to full size.
    fn default() -> Self {
        Self {
            entry_point: 0.0,
            exit_point: None,
            persist: true,
            keyframes: vec![
                Keyframe::new(0.0)
                    .with(AnimatableProperty::Opacity, 0.0)
                    .with(AnimatableProperty::Scale, 0.8),
                Keyframe::new(1.0)
                    .with(AnimatableProperty::Opacity, 1.0)
                    .with(AnimatableProperty::Scale, 1.0),
            ],
        }
    }
}

impl TimelineData {
    /// Create timeline data with custom keyframes. Keyframes are sorted by time.
    pub fn with_keyframes(entry_point: f64, exit_point: Option<f64>, persist: bool, mut keyframes: Vec<Keyframe>) -> Self {
        keyframes.sort_by(|a, b| a.time.total_cmp(&b.time));
        Self {
            entry_point,
            exit_point,
            persist,
            keyframes,
        }
    }

    /// Keyframes in time order.
    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    /// Insert a keyframe after any existing keyframes with the same time.
    pub fn push_keyframe(&mut self, keyframe: Keyframe) {
        let index = self.keyframes.partition_point(|k| k.time <= keyframe.time);
        self.keyframes.insert(index, keyframe);
    }

    /// Check the ordering invariant.
    pub fn is_ordered(&self) -> bool {
        self.keyframes.windows(2).all(|w| w[0].time <= w[1].time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_two_keyframes() {
        let timeline = TimelineData::default();
        let frames = timeline.keyframes();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].time, 0.0);
        assert_eq!(frames[1].time, 1.0);
        assert_eq!(frames[0].get(AnimatableProperty::Opacity), Some(0.0));
        assert_eq!(frames[1].get(AnimatableProperty::Opacity), Some(1.0));
        assert_eq!(frames[1].get(AnimatableProperty::Scale), Some(1.0));
        assert!(timeline.persist);
        assert!(timeline.exit_point.is_none());
    }

    #[test]
    fn test_keyframe_time_clamped() {
        assert_eq!(Keyframe::new(-0.5).time, 0.0);
        assert_eq!(Keyframe::new(3.0).time, 1.0);
        assert_eq!(Keyframe::new(f64::NAN).time, 0.0);
    }

    #[test]
    fn test_push_keyframe_keeps_order() {
        let mut timeline = TimelineData::default();
        timeline.push_keyframe(Keyframe::new(0.5).with(AnimatableProperty::Rotation, 45.0));
        timeline.push_keyframe(Keyframe::new(0.25));

        let times: Vec<f64> = timeline.keyframes().iter().map(|k| k.time).collect();
        assert_eq!(times, vec![0.0, 0.25, 0.5, 1.0]);
        assert!(timeline.is_ordered());
    }

    #[test]
    fn test_with_keyframes_sorts() {
        let timeline = TimelineData::with_keyframes(
            2.0,
            Some(5.0),
            false,
            vec![Keyframe::new(1.0), Keyframe::new(0.0), Keyframe::new(0.5)],
        );
        assert!(timeline.is_ordered());
        assert_eq!(timeline.exit_point, Some(5.0));
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(TimelineData::default()).unwrap();
        assert_eq!(json["entryPoint"], 0.0);
        assert!(json.get("exitPoint").is_none());
        assert_eq!(json["keyframes"][0]["properties"]["opacity"], 0.0);
    }

    #[test]
    fn test_deserialize_sorts_and_clamps() {
        let json = r#"{
            "entryPoint": 1.5,
            "persist": false,
            "keyframes": [
                { "time": 1.0, "properties": { "opacity": 1.0 } },
                { "time": 2.5, "properties": {} },
                { "time": -1.0, "properties": { "opacity": 0.0 } },
                { "time": 0.5, "properties": { "scale": 0.9 } }
            ]
        }"#;
        let timeline: TimelineData = serde_json::from_str(json).unwrap();
        assert!(timeline.is_ordered());

        let times: Vec<f64> = timeline.keyframes().iter().map(|k| k.time).collect();
        assert_eq!(times, vec![0.0, 0.5, 1.0, 1.0]);
        assert_eq!(timeline.keyframes()[0].get(AnimatableProperty::Opacity), Some(0.0));
        assert_eq!(timeline.keyframes()[1].get(AnimatableProperty::Scale), Some(0.9));
        assert_eq!(timeline.entry_point, 1.5);
        assert!(!timeline.persist);
    }

    #[test]
    fn test_default_survives_json() {
        let json = serde_json::to_string(&TimelineData::default()).unwrap();
        let parsed: TimelineData = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, TimelineData::default());
    }
}
