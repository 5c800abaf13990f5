//! Text scale to mono font mapping shared by the display drivers.

use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10};
use embedded_graphics::mono_font::MonoFont;

/// Font used for text scale `scale`.
///
/// Scale 1 (and 0) is the 6×10 font; anything larger uses 10×20.
pub(crate) fn font_for_scale(scale: u8) -> &'static MonoFont<'static> {
    match scale {
        0 | 1 => &FONT_6X10,
        _ => &FONT_10X20,
    }
}
