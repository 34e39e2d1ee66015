//! Canvas trait
//!
//! Pixel-level drawing interface for a monochrome panel. Coordinates are
//! signed so partially off-screen shapes (the scrolling ticker) can be
//! expressed directly; implementations clip.

/// Pixel colour on a monochrome panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Ink {
    /// Lit pixel
    On,
    /// Dark pixel
    Off,
}

/// Drawing primitives used by the dashboard
///
/// Zero or negative sizes draw nothing. Text uses a 6 px advance and 8 px
/// line height with `(x, y)` at the top-left corner of the first glyph.
pub trait Canvas {
    /// Error reported by the underlying target
    type Error;

    /// Turn every pixel off
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Fill a `w` x `h` rectangle
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, ink: Ink) -> Result<(), Self::Error>;

    /// Outline a `w` x `h` rectangle with a 1 px border
    fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, ink: Ink) -> Result<(), Self::Error>;

    /// Horizontal line of `len` pixels starting at `(x, y)`
    fn hline(&mut self, x: i32, y: i32, len: i32, ink: Ink) -> Result<(), Self::Error>;

    /// Vertical line of `len` pixels starting at `(x, y)`
    fn vline(&mut self, x: i32, y: i32, len: i32, ink: Ink) -> Result<(), Self::Error>;

    /// Line between two points, both inclusive
    fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, ink: Ink) -> Result<(), Self::Error>;

    /// Single line of text
    fn text(&mut self, x: i32, y: i32, text: &str, ink: Ink) -> Result<(), Self::Error>;
}
