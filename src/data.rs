//! Sheet geometry and the channel data model.

use serde::{Deserialize, Serialize};

/// Integer rectangle in composed-sheet texel coordinates.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Region {
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Whether this region lies fully inside a sheet of the given size.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.x.checked_add(self.w).map_or(false, |right| right <= width)
            && self.y.checked_add(self.h).map_or(false, |bottom| bottom <= height)
    }
}

/// Render-facing frame rectangle in `f32` sheet coordinates.
///
/// A negative `w` encodes in-place x-mirroring: `x` sits on the frame's
/// right edge and the renderer samples right-to-left. Buffer data is never
/// touched by flipping.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// One named pose: a rectangular sub-region of a composed sheet split into
/// `frame_count` equal-width horizontal slices, looping over `duration`.
/// Immutable after registration with a sprite.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationChannel {
    pub name: String,
    pub area: Region,
    #[serde(rename = "frames")]
    pub frame_count: u32,
    /// Loop duration in seconds.
    pub duration: f32,
}

impl AnimationChannel {
    pub fn new(name: impl Into<String>, area: Region, frame_count: u32, duration: f32) -> Self {
        Self {
            name: name.into(),
            area,
            frame_count,
            duration,
        }
    }

    /// Width of one frame slice. Meaningful once geometry has been validated
    /// (`area.w % frame_count == 0`).
    #[inline]
    pub fn frame_width(&self) -> u32 {
        self.area.w / self.frame_count.max(1)
    }
}
