//! Pure sprite-sheet composition.
//!
//! `compose` combines two buffers into a new, larger one by placement and
//! never mutates its inputs. Mismatched dimensions are permitted: texels the
//! shorter input does not cover are padded with [`Rgba8::TRANSPARENT`].
//! Chained composition produces the same pixel layout as sequential append,
//! which is what lets a sheet be built from N frame images and then N
//! channel rows.

use serde::{Deserialize, Serialize};

use crate::pixel::{PixelBuffer, Rgba8};

/// Where the second buffer lands relative to the first.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Placement {
    RightOf,
    Below,
}

/// Combine `a` and `b` into a freshly allocated buffer.
///
/// `RightOf`: result is `a.w + b.w` wide and `max(a.h, b.h)` tall, with `a`
/// occupying columns `[0, a.w)` and `b` columns `[a.w, a.w + b.w)`.
/// `Below` stacks along height symmetrically. Always succeeds.
pub fn compose(a: &PixelBuffer, b: &PixelBuffer, placement: Placement) -> PixelBuffer {
    let (width, height, b_x, b_y) = match placement {
        Placement::RightOf => (
            a.width() + b.width(),
            a.height().max(b.height()),
            a.width(),
            0,
        ),
        Placement::Below => (
            a.width().max(b.width()),
            a.height() + b.height(),
            0,
            a.height(),
        ),
    };

    let mut pixels = vec![Rgba8::TRANSPARENT; width as usize * height as usize];
    blit(&mut pixels, width, a, 0, 0);
    blit(&mut pixels, width, b, b_x, b_y);
    PixelBuffer::from_raw(width, height, pixels)
}

/// Fold a strip of frames into one sheet, left-to-right or top-to-bottom.
pub fn compose_strip<'a, I>(first: &PixelBuffer, rest: I, placement: Placement) -> PixelBuffer
where
    I: IntoIterator<Item = &'a PixelBuffer>,
{
    rest.into_iter()
        .fold(first.clone(), |acc, next| compose(&acc, next, placement))
}

fn blit(dst: &mut [Rgba8], dst_width: u32, src: &PixelBuffer, off_x: u32, off_y: u32) {
    let dst_width = dst_width as usize;
    for y in 0..src.height() {
        let row = src.row(y);
        let start = (off_y + y) as usize * dst_width + off_x as usize;
        dst[start..start + row.len()].copy_from_slice(row);
    }
}
