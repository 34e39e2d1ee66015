//! `Canvas` over embedded-graphics
//!
//! Lets the composer draw into any `DrawTarget<Color = BinaryColor>`: the
//! SH1106 framebuffer on hardware, `MockDisplay` in tests.

use embedded_graphics::mono_font::ascii::FONT_5X8;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};

use crate::canvas::{Canvas, Ink};

/// 5x8 glyphs with 1 px spacing, a 6 px advance
pub const FONT: MonoFont<'static> = MonoFont {
    character_spacing: 1,
    ..FONT_5X8
};

impl From<Ink> for BinaryColor {
    fn from(ink: Ink) -> Self {
        match ink {
            Ink::On => BinaryColor::On,
            Ink::Off => BinaryColor::Off,
        }
    }
}

/// Adapter from [`Canvas`] to an embedded-graphics draw target
pub struct GraphicsCanvas<D> {
    target: D,
}

impl<D> GraphicsCanvas<D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    pub fn new(target: D) -> Self {
        Self { target }
    }

    /// Borrow the wrapped target (to flush it, for example)
    pub fn target(&self) -> &D {
        &self.target
    }

    fn rect(x: i32, y: i32, w: i32, h: i32) -> Option<Rectangle> {
        if w <= 0 || h <= 0 {
            return None;
        }
        Some(Rectangle::new(Point::new(x, y), Size::new(w as u32, h as u32)))
    }
}

impl<D> Canvas for GraphicsCanvas<D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    type Error = D::Error;

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.target.clear(BinaryColor::Off)
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, ink: Ink) -> Result<(), Self::Error> {
        match Self::rect(x, y, w, h) {
            Some(rect) => rect
                .into_styled(PrimitiveStyle::with_fill(BinaryColor::from(ink)))
                .draw(&mut self.target),
            None => Ok(()),
        }
    }

    fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, ink: Ink) -> Result<(), Self::Error> {
        match Self::rect(x, y, w, h) {
            Some(rect) => rect
                .into_styled(PrimitiveStyle::with_stroke(BinaryColor::from(ink), 1))
                .draw(&mut self.target),
            None => Ok(()),
        }
    }

    fn hline(&mut self, x: i32, y: i32, len: i32, ink: Ink) -> Result<(), Self::Error> {
        self.fill_rect(x, y, len, 1, ink)
    }

    fn vline(&mut self, x: i32, y: i32, len: i32, ink: Ink) -> Result<(), Self::Error> {
        self.fill_rect(x, y, 1, len, ink)
    }

    fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, ink: Ink) -> Result<(), Self::Error> {
        Line::new(Point::new(x0, y0), Point::new(x1, y1))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::from(ink), 1))
            .draw(&mut self.target)
    }

    fn text(&mut self, x: i32, y: i32, text: &str, ink: Ink) -> Result<(), Self::Error> {
        let style = MonoTextStyle::new(&FONT, BinaryColor::from(ink));
        Text::with_baseline(text, Point::new(x, y), style, Baseline::Top)
            .draw(&mut self.target)
            .map(|_| ())
    }
}
