//! Compact value formatting for a 21-column display
//!
//! All numbers are truncated toward zero, not rounded.

use core::fmt::{self, Write};

/// Disk sizes above this many MB are shown in GB
const DISK_MB_LIMIT: u64 = 9999;

/// `21C`, `-3C`
pub fn write_temperature<W: Write>(w: &mut W, celsius: f32) -> fmt::Result {
    write!(w, "{}C", celsius as i32)
}

/// `23%`
pub fn write_percent<W: Write>(w: &mut W, percent: f32) -> fmt::Result {
    write!(w, "{}%", percent as i32)
}

/// `512MB`, `1024MB`, `97GB`
pub fn write_disk<W: Write>(w: &mut W, kb: u64) -> fmt::Result {
    let mb = kb / 1024;
    if mb > DISK_MB_LIMIT {
        write!(w, "{}GB", mb / 1024)
    } else {
        write!(w, "{}MB", mb)
    }
}

/// `15h5m`, `2d 3h0m`
pub fn write_uptime<W: Write>(w: &mut W, seconds: u64) -> fmt::Result {
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;
    if days > 0 {
        write!(w, "{}d ", days)?;
    }
    write!(w, "{}h{}m", hours % 24, minutes % 60)
}

/// Longest prefix of `text` that fits in `width_px` at `glyph_width` px per char
pub fn clip_to_width(text: &str, width_px: i32, glyph_width: i32) -> &str {
    let max_chars = if glyph_width > 0 {
        (width_px / glyph_width).max(0) as usize
    } else {
        0
    };
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
