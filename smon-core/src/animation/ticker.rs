//! Scrolling ticker line

use heapless::String;

use crate::config::{GLYPH_WIDTH, SCREEN_WIDTH};

/// Maximum ticker length in bytes
pub const TICKER_CAPACITY: usize = 96;

/// Text scrolled right-to-left along the bottom of the screen
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Ticker {
    text: String<TICKER_CAPACITY>,
    /// Rendered width in pixels, at least 1
    width: i32,
    /// X position of the first glyph
    offset: i32,
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new()
    }
}

impl Ticker {
    /// Empty ticker parked at the right edge
    pub const fn new() -> Self {
        Self {
            text: String::new(),
            width: 1,
            offset: SCREEN_WIDTH,
        }
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }

    /// Replace the text, keeping the scroll position
    ///
    /// The offset is pulled back to the right edge if it was beyond it.
    pub fn set_text(&mut self, text: &str) {
        self.text.clear();
        for ch in text.chars() {
            if self.text.push(ch).is_err() {
                break;
            }
        }
        self.width = (self.text.chars().count() as i32 * GLYPH_WIDTH).max(1);
        if self.offset > SCREEN_WIDTH {
            self.offset = SCREEN_WIDTH;
        }
    }

    /// Move one pixel left, wrapping to `right_edge` once fully off screen
    pub fn scroll(&mut self, right_edge: i32) {
        self.offset -= 1;
        if self.offset + self.width < 0 {
            self.offset = right_edge;
        }
    }
}
