//! JSON loader for stored channel-set documents.
//!
//! Public API: parse a channel-set JSON document into the crate's canonical
//! [`AnimationChannel`] model plus the default channel name.
//!
//! Notes:
//! - Durations are given in seconds in the JSON and kept as seconds.
//! - Geometry is NOT validated here; a parsed set is checked against the
//!   actual composed sheet by `AnimatedSprite::finalize`.

use serde::Deserialize;
use thiserror::Error;

use crate::data::{AnimationChannel, Region};

/// Errors produced while parsing a stored channel-set document.
#[derive(Debug, Error)]
pub enum ChannelSetError {
    #[error("channel set parse error: {0}")]
    Parse(String),
}

/// A parsed channel set ready to be finalized against a composed sheet.
#[derive(Clone, Debug, PartialEq)]
pub struct ChannelSet {
    pub channels: Vec<AnimationChannel>,
    pub default_channel: String,
}

/// Parse channel definitions from JSON:
///
/// ```json
/// {
///   "channels": [
///     { "name": "RUN", "area": { "x": 0, "y": 500, "w": 3760, "h": 520 },
///       "frames": 10, "duration": 0.33 }
///   ],
///   "default": "IDLE"
/// }
/// ```
pub fn parse_channel_set_json(s: &str) -> Result<ChannelSet, ChannelSetError> {
    let stored: StoredChannelSet =
        serde_json::from_str(s).map_err(|e| ChannelSetError::Parse(e.to_string()))?;

    let channels = stored
        .channels
        .into_iter()
        .map(|ch| AnimationChannel {
            name: ch.name,
            area: Region::new(ch.area.x, ch.area.y, ch.area.w, ch.area.h),
            frame_count: ch.frames,
            duration: ch.duration as f32,
        })
        .collect();

    Ok(ChannelSet {
        channels,
        default_channel: stored.default,
    })
}

// ----- JSON schema (serde) -----

#[derive(Debug, Deserialize)]
struct StoredChannelSet {
    pub channels: Vec<ScChannel>,
    pub default: String,
}

#[derive(Debug, Deserialize)]
struct ScChannel {
    pub name: String,
    pub area: ScArea,
    pub frames: u32,
    pub duration: f64, // seconds
}

#[derive(Debug, Deserialize)]
struct ScArea {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}
