//! Owned 2-D pixel grid, the substrate for sheet composition.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// 8-bit RGBA color value.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Rgba8(pub [u8; 4]);

impl Rgba8 {
    /// Padding color written wherever a composed result is not covered by an input.
    pub const TRANSPARENT: Rgba8 = Rgba8([0, 0, 0, 0]);

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Rgba8([r, g, b, 0xff])
    }
}

/// Immutable row-major pixel grid.
///
/// A buffer is never written after construction, so references may be shared
/// freely across readers (including a render thread) without locking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgba8>,
}

impl PixelBuffer {
    /// Build a buffer from externally decoded pixel data.
    /// `pixels.len()` must equal `width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgba8>) -> Result<Self, CoreError> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(CoreError::InvalidBufferGeometry {
                width,
                height,
                len: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Buffer filled with a single color.
    pub fn filled(width: u32, height: u32, color: Rgba8) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    /// Fully transparent buffer.
    pub fn transparent(width: u32, height: u32) -> Self {
        Self::filled(width, height, Rgba8::TRANSPARENT)
    }

    /// Unchecked constructor for internal producers (the compositor builds
    /// its output vector with the exact length already known).
    pub(crate) fn from_raw(width: u32, height: u32, pixels: Vec<Rgba8>) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize);
        Self {
            width,
            height,
            pixels,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Texel at (x, y); `None` outside bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x < self.width && y < self.height {
            Some(self.pixels[y as usize * self.width as usize + x as usize])
        } else {
            None
        }
    }

    /// Row-major pixel data.
    #[inline]
    pub fn pixels(&self) -> &[Rgba8] {
        &self.pixels
    }

    /// One full row of texels. Panics if `y` is out of bounds.
    pub fn row(&self, y: u32) -> &[Rgba8] {
        let w = self.width as usize;
        let start = y as usize * w;
        &self.pixels[start..start + w]
    }
}
