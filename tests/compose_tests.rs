use sprite_animation_core::{compose, compose_strip, Placement, PixelBuffer, Rgba8};

const RED: Rgba8 = Rgba8::opaque(0xff, 0, 0);
const GREEN: Rgba8 = Rgba8::opaque(0, 0xff, 0);
const BLUE: Rgba8 = Rgba8::opaque(0, 0, 0xff);

/// it should append widths under RightOf and copy the left buffer's columns exactly
#[test]
fn right_of_appends_widths_and_copies_left() {
    let a = PixelBuffer::filled(3, 2, RED);
    let b = PixelBuffer::filled(2, 4, BLUE);
    let out = compose(&a, &b, Placement::RightOf);

    assert_eq!(out.width(), a.width() + b.width());
    assert_eq!(out.height(), a.height().max(b.height()));

    // Left a.width columns equal a's pixels row-by-row.
    for y in 0..a.height() {
        for x in 0..a.width() {
            assert_eq!(out.get(x, y), a.get(x, y));
        }
    }
    // b occupies columns [a.w, a.w + b.w).
    for y in 0..b.height() {
        for x in 0..b.width() {
            assert_eq!(out.get(a.width() + x, y), b.get(x, y));
        }
    }
}

/// it should pad rows beyond the shorter input with the transparent color
#[test]
fn right_of_pads_shorter_input_transparent() {
    let a = PixelBuffer::filled(3, 2, RED);
    let b = PixelBuffer::filled(2, 4, BLUE);
    let out = compose(&a, &b, Placement::RightOf);

    for y in a.height()..out.height() {
        for x in 0..a.width() {
            assert_eq!(out.get(x, y), Some(Rgba8::TRANSPARENT));
        }
    }
}

/// it should stack heights under Below and pad the narrower row
#[test]
fn below_stacks_heights_and_pads_narrow_rows() {
    // Differently-widthed rows, like idle/run/attack rows of a real sheet.
    let idle = PixelBuffer::filled(4, 1, RED);
    let run = PixelBuffer::filled(6, 2, GREEN);
    let out = compose(&idle, &run, Placement::Below);

    assert_eq!(out.width(), 6);
    assert_eq!(out.height(), 3);
    assert_eq!(out.get(0, 0), Some(RED));
    // Columns the idle row does not cover are transparent.
    assert_eq!(out.get(4, 0), Some(Rgba8::TRANSPARENT));
    assert_eq!(out.get(5, 0), Some(Rgba8::TRANSPARENT));
    // run row starts at y = idle.height.
    assert_eq!(out.get(0, 1), Some(GREEN));
    assert_eq!(out.get(5, 2), Some(GREEN));
}

/// it should make chained composition equal to sequential strip append
#[test]
fn chained_composition_matches_strip_fold() {
    let a = PixelBuffer::filled(2, 1, RED);
    let b = PixelBuffer::filled(3, 1, GREEN);
    let c = PixelBuffer::filled(1, 1, BLUE);

    let chained = compose(&compose(&a, &b, Placement::RightOf), &c, Placement::RightOf);
    let strip = compose_strip(&a, [&b, &c], Placement::RightOf);

    assert_eq!(chained, strip);
    assert_eq!(strip.width(), 6);
    assert_eq!(strip.get(0, 0), Some(RED));
    assert_eq!(strip.get(2, 0), Some(GREEN));
    assert_eq!(strip.get(5, 0), Some(BLUE));
}

/// it should build a frames-then-rows sheet whose texels land where channels expect them
#[test]
fn frames_then_rows_layout() {
    // Two rows of three 1x1 frames each, built the same way a real sheet is:
    // frames composed RightOf into rows, rows composed Below into the sheet.
    let row0 = compose_strip(
        &PixelBuffer::filled(1, 1, RED),
        [&PixelBuffer::filled(1, 1, RED), &PixelBuffer::filled(1, 1, RED)],
        Placement::RightOf,
    );
    let row1 = compose_strip(
        &PixelBuffer::filled(1, 1, BLUE),
        [&PixelBuffer::filled(1, 1, BLUE), &PixelBuffer::filled(1, 1, BLUE)],
        Placement::RightOf,
    );
    let sheet = compose(&row0, &row1, Placement::Below);

    assert_eq!(sheet.width(), 3);
    assert_eq!(sheet.height(), 2);
    for x in 0..3 {
        assert_eq!(sheet.get(x, 0), Some(RED));
        assert_eq!(sheet.get(x, 1), Some(BLUE));
    }
}
