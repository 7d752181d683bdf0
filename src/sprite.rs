//! Channel-based animation playback over a composed sheet.
//!
//! An [`AnimatedSprite`] owns the finished sheet plus a frozen channel set,
//! tracks the active channel, elapsed playback time, and a horizontal-flip
//! flag, and derives the visible sub-rectangle for each tick. Playback
//! always loops; there is no terminal state.

use log::warn;

use crate::data::{AnimationChannel, FrameRect, Region};
use crate::error::CoreError;
use crate::pixel::PixelBuffer;

/// Euclidean float remainder (result in `[0, b)` for positive `b`).
fn fmod(a: f32, b: f32) -> f32 {
    if b == 0.0 {
        return 0.0;
    }
    let m = a % b;
    if (m < 0.0 && b > 0.0) || (m > 0.0 && b < 0.0) {
        m + b
    } else {
        m
    }
}

#[derive(Debug)]
pub struct AnimatedSprite {
    sheet: PixelBuffer,
    channels: Vec<AnimationChannel>,
    active: usize,
    elapsed: f32,
    flipped_x: bool,
}

impl AnimatedSprite {
    /// Validate a finished sheet plus channel set and enter service.
    ///
    /// Fails fast: geometry problems or an unknown default channel abort
    /// construction and no partial sprite escapes. The channel set is frozen
    /// afterwards; channels can only be selected, never added or removed.
    pub fn finalize(
        sheet: PixelBuffer,
        channels: Vec<AnimationChannel>,
        default_channel: &str,
    ) -> Result<Self, CoreError> {
        for (i, ch) in channels.iter().enumerate() {
            if channels[..i].iter().any(|prev| prev.name == ch.name) {
                return Err(CoreError::DuplicateChannelName(ch.name.clone()));
            }
            if ch.frame_count == 0 {
                return Err(invalid_geometry(ch, "frame count must be >= 1"));
            }
            if !(ch.duration > 0.0) {
                return Err(invalid_geometry(ch, "duration must be > 0 seconds"));
            }
            if !ch.area.fits_within(sheet.width(), sheet.height()) {
                return Err(invalid_geometry(ch, "area exceeds sheet bounds"));
            }
            if ch.area.w % ch.frame_count != 0 {
                return Err(invalid_geometry(
                    ch,
                    "area width is not divisible by frame count",
                ));
            }
        }

        let active = channels
            .iter()
            .position(|ch| ch.name == default_channel)
            .ok_or_else(|| CoreError::UnknownDefaultChannel(default_channel.to_string()))?;

        Ok(Self {
            sheet,
            channels,
            active,
            elapsed: 0.0,
            flipped_x: false,
        })
    }

    /// Select a channel by name.
    ///
    /// Re-selecting the already-active channel preserves elapsed time (it
    /// does not restart); switching to another channel resets elapsed to
    /// zero. Unknown names are ignored with a warning so that per-tick hook
    /// code stays total.
    pub fn set_channel(&mut self, name: &str) {
        if self.channels[self.active].name == name {
            return;
        }
        match self.channels.iter().position(|ch| ch.name == name) {
            Some(idx) => {
                self.active = idx;
                self.elapsed = 0.0;
            }
            None => warn!("set_channel: unknown channel '{name}', keeping current"),
        }
    }

    /// Advance playback by `dt` seconds, wrapping within the active
    /// channel's duration. Splitting a delta across calls lands on the same
    /// elapsed time as one combined call.
    pub fn advance(&mut self, dt: f32) {
        let duration = self.channels[self.active].duration;
        self.elapsed = fmod(self.elapsed + dt, duration);
    }

    /// Mirror the x-axis of the rect produced by [`current_frame_rect`].
    /// Pure flag flip; buffer data is untouched.
    ///
    /// [`current_frame_rect`]: AnimatedSprite::current_frame_rect
    pub fn set_flipped(&mut self, flipped: bool) {
        self.flipped_x = flipped;
    }

    #[inline]
    pub fn is_flipped(&self) -> bool {
        self.flipped_x
    }

    /// Index of the currently visible frame within the active channel.
    pub fn frame_index(&self) -> u32 {
        let ch = &self.channels[self.active];
        let idx = (self.elapsed / ch.duration * ch.frame_count as f32).floor() as u32;
        idx.min(ch.frame_count - 1)
    }

    /// Unmirrored integer region of the visible frame, in sheet texels.
    pub fn frame_region(&self) -> Region {
        let ch = &self.channels[self.active];
        let frame_width = ch.frame_width();
        Region::new(
            ch.area.x + self.frame_index() * frame_width,
            ch.area.y,
            frame_width,
            ch.area.h,
        )
    }

    /// Visible sub-rectangle for this tick, x-mirrored in place when the
    /// flip flag is set.
    ///
    /// Pure in `(active channel, elapsed, flipped_x)`: identical state
    /// always yields an identical rect, so replay is deterministic.
    pub fn current_frame_rect(&self) -> FrameRect {
        let region = self.frame_region();
        let (x, w) = if self.flipped_x {
            ((region.x + region.w) as f32, -(region.w as f32))
        } else {
            (region.x as f32, region.w as f32)
        };
        FrameRect {
            x,
            y: region.y as f32,
            w,
            h: region.h as f32,
        }
    }

    /// The composed sheet this sprite samples from.
    #[inline]
    pub fn sheet(&self) -> &PixelBuffer {
        &self.sheet
    }

    #[inline]
    pub fn active_channel(&self) -> &AnimationChannel {
        &self.channels[self.active]
    }

    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn channel_names(&self) -> impl Iterator<Item = &str> {
        self.channels.iter().map(|ch| ch.name.as_str())
    }
}

fn invalid_geometry(ch: &AnimationChannel, reason: &str) -> CoreError {
    CoreError::InvalidChannelGeometry {
        channel: ch.name.clone(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmod_wraps_into_positive_range() {
        assert_eq!(fmod(0.0, 0.33), 0.0);
        assert!((fmod(0.5, 0.33) - 0.17).abs() < 1e-6);
        assert!(fmod(-0.1, 0.33) >= 0.0);
        assert_eq!(fmod(1.0, 0.0), 0.0);
    }
}
