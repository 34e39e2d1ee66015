//! Dashboard and waiting screen
//!
//! ```text
//!  0 ┌──────────────────────────────┐
//!    │ 21C        Terminal          │  header, inverted
//! 10 ├──────────────────────────────┤
//!    │CPU:             ◠     ◠      │
//!    │[#####    ]      ■     ■      │  gauges left,
//!    │RAM:                          │  face right
//!    │[#######  ]         ‿         │
//!    │[==       ]                   │
//! 55 ├──────────────────────────────┤
//!    │ 21C  CPU 23%  RAM 7905MB  DI…│  ticker
//! 64 └──────────────────────────────┘
//! ```

use core::fmt::Write;

use heapless::String;
use smon_core::animation::{AnimationState, Face, Mood};
use smon_core::config::{GLYPH_WIDTH, SCREEN_WIDTH};
use smon_core::format::{clip_to_width, write_temperature};
use smon_core::telemetry::Snapshot;

use crate::canvas::{Canvas, Ink};

/// Fixed screen coordinates
pub mod layout {
    pub const HEADER_HEIGHT: i32 = 10;
    pub const HEADER_TEXT_X: i32 = 2;
    pub const HEADER_TEXT_Y: i32 = 2;
    /// Gap between temperature and title
    pub const HEADER_GAP: i32 = 4;

    pub const GAUGE_X: i32 = 2;
    pub const GAUGE_WIDTH: i32 = 40;
    pub const GAUGE_HEIGHT: i32 = 7;
    pub const LABEL_X: i32 = 0;
    pub const CPU_LABEL_Y: i32 = 12;
    pub const CPU_GAUGE_Y: i32 = 20;
    pub const RAM_LABEL_Y: i32 = 30;
    pub const RAM_GAUGE_Y: i32 = 38;
    pub const NET_GAUGE_Y: i32 = 47;
    pub const NET_GAUGE_HEIGHT: i32 = 5;

    /// Face centre at rest
    pub const FACE_X: i32 = 85;
    pub const FACE_Y: i32 = 33;
    pub const FACE_RADIUS: i32 = 20;
    pub const EYE_SPREAD: i32 = 10;
    pub const EYE_SIZE: i32 = 4;
    pub const EYE_RISE: i32 = 5;
    pub const MOUTH_DROP: i32 = 5;
    pub const MOUTH_WIDTH: i32 = 14;

    pub const TICKER_RULE_Y: i32 = 55;
    pub const TICKER_TEXT_Y: i32 = 57;

    pub const WAITING_LINES_Y: [i32; 4] = [0, 16, 28, 40];
}

use layout::*;

/// Paints complete frames onto a [`Canvas`]
#[derive(Debug, Clone)]
pub struct FrameComposer {
    baud: u32,
}

impl FrameComposer {
    /// `baud` is shown on the waiting screen
    pub const fn new(baud: u32) -> Self {
        Self { baud }
    }

    /// Static screen shown until the first valid message
    pub fn draw_waiting<C: Canvas>(&self, canvas: &mut C) -> Result<(), C::Error> {
        let mut baud: String<16> = String::new();
        let _ = write!(baud, "{} baud", self.baud);

        canvas.clear()?;
        let lines = ["Smart Monitor", "Waiting for data...", "Check host bridge", baud.as_str()];
        for (text, y) in lines.iter().zip(WAITING_LINES_Y) {
            canvas.text(0, y, text, Ink::On)?;
        }
        Ok(())
    }

    /// Full dashboard for the current state
    pub fn draw_dashboard<C: Canvas>(
        &self,
        canvas: &mut C,
        snapshot: &Snapshot,
        state: &AnimationState,
        face: &Face,
    ) -> Result<(), C::Error> {
        canvas.clear()?;
        draw_header(canvas, snapshot)?;
        draw_gauges(canvas, state)?;
        draw_face(canvas, face)?;
        draw_ticker(canvas, state)
    }
}

fn text_width(text: &str) -> i32 {
    text.chars().count() as i32 * GLYPH_WIDTH
}

fn draw_header<C: Canvas>(canvas: &mut C, snapshot: &Snapshot) -> Result<(), C::Error> {
    canvas.fill_rect(0, 0, SCREEN_WIDTH, HEADER_HEIGHT, Ink::On)?;

    let mut temp: String<12> = String::new();
    match snapshot.ambient_temp_c {
        Some(celsius) => {
            let _ = write_temperature(&mut temp, celsius);
        }
        None => {
            let _ = temp.push_str("--C");
        }
    }
    canvas.text(HEADER_TEXT_X, HEADER_TEXT_Y, &temp, Ink::Off)?;

    let title = if snapshot.active_app.is_empty() {
        "SMON"
    } else {
        snapshot.active_app.as_str()
    };
    let x_avail = HEADER_TEXT_X + text_width(&temp) + HEADER_GAP;
    let avail = (SCREEN_WIDTH - x_avail - HEADER_TEXT_X).max(0);
    let clipped = clip_to_width(title, avail, GLYPH_WIDTH);
    let x = (x_avail + (avail - text_width(clipped)) / 2).max(x_avail);
    canvas.text(x, HEADER_TEXT_Y, clipped, Ink::Off)
}

/// Filled width for `ratio` inside a gauge of `inner` pixels
fn fill_width(inner: i32, ratio: f32) -> i32 {
    ((inner as f32 * ratio + 0.5) as i32).clamp(0, inner)
}

fn draw_gauge<C: Canvas>(canvas: &mut C, y: i32, height: i32, ratio: f32) -> Result<(), C::Error> {
    canvas.draw_rect(GAUGE_X, y, GAUGE_WIDTH, height, Ink::On)?;
    let fill = fill_width(GAUGE_WIDTH - 2, ratio);
    if fill > 0 {
        canvas.fill_rect(GAUGE_X + 1, y + 1, fill, height - 2, Ink::On)?;
    }
    Ok(())
}

fn draw_gauges<C: Canvas>(canvas: &mut C, state: &AnimationState) -> Result<(), C::Error> {
    canvas.text(LABEL_X, CPU_LABEL_Y, "CPU:", Ink::On)?;
    draw_gauge(canvas, CPU_GAUGE_Y, GAUGE_HEIGHT, state.current.cpu)?;
    canvas.text(LABEL_X, RAM_LABEL_Y, "RAM:", Ink::On)?;
    draw_gauge(canvas, RAM_GAUGE_Y, GAUGE_HEIGHT, state.current.mem)?;
    draw_gauge(canvas, NET_GAUGE_Y, NET_GAUGE_HEIGHT, state.current.net)
}

fn draw_face<C: Canvas>(canvas: &mut C, face: &Face) -> Result<(), C::Error> {
    let cx = FACE_X;
    let cy = FACE_Y + face.bob;
    let eye_y = cy - EYE_RISE;
    let left_x = cx - EYE_SPREAD;
    let right_x = cx + EYE_SPREAD;
    let half = EYE_SIZE / 2;
    let left_h = if face.left_eye_closed { 1 } else { EYE_SIZE };
    let right_h = if face.right_eye_closed { 1 } else { EYE_SIZE };

    // Eyes
    if face.mood == Mood::Asleep {
        canvas.hline(left_x - half, eye_y, EYE_SIZE, Ink::On)?;
        canvas.hline(right_x - half, eye_y, EYE_SIZE, Ink::On)?;
    } else {
        canvas.fill_rect(left_x - half, eye_y - left_h / 2, EYE_SIZE, left_h, Ink::On)?;
        canvas.fill_rect(right_x - half, eye_y - right_h / 2, EYE_SIZE, right_h, Ink::On)?;
    }

    // Brows
    match face.mood {
        Mood::Happy => {
            for (x, h) in [(left_x, left_h), (right_x, right_h)] {
                let y = eye_y - h - 4;
                canvas.line(x - EYE_SIZE, y, x, y - 2, Ink::On)?;
                canvas.line(x, y - 2, x + EYE_SIZE, y, Ink::On)?;
            }
        }
        Mood::Sad => {
            let y = eye_y - left_h;
            canvas.line(left_x - EYE_SIZE, y - 1, left_x + EYE_SIZE, y, Ink::On)?;
            let y = eye_y - right_h;
            canvas.line(right_x - EYE_SIZE, y, right_x + EYE_SIZE, y - 1, Ink::On)?;
        }
        Mood::Neutral | Mood::Asleep => {}
    }

    // Mouth
    let mouth_y = cy + MOUTH_DROP;
    let mouth_half = MOUTH_WIDTH / 2;
    match face.mood {
        Mood::Happy => {
            canvas.line(cx - mouth_half, mouth_y + 2, cx, mouth_y + 4, Ink::On)?;
            canvas.line(cx, mouth_y + 4, cx + mouth_half, mouth_y + 2, Ink::On)?;
        }
        Mood::Sad => {
            canvas.line(cx - mouth_half, mouth_y + 2, cx, mouth_y, Ink::On)?;
            canvas.line(cx, mouth_y, cx + mouth_half, mouth_y + 2, Ink::On)?;
        }
        Mood::Neutral | Mood::Asleep => {
            canvas.hline(cx - mouth_half, mouth_y, MOUTH_WIDTH, Ink::On)?;
        }
    }

    if face.mood == Mood::Asleep {
        draw_bubble(canvas, cx + FACE_RADIUS - 4, cy - FACE_RADIUS + 4 - face.bubble_step as i32)?;
    }

    if face.sweating {
        let x = right_x + 2;
        let y = eye_y - 2;
        canvas.line(x, y, x + 1, y + 2, Ink::On)?;
        canvas.line(x + 1, y + 2, x, y + 4, Ink::On)?;
    }
    Ok(())
}

/// Two stacked Zs, the small one at `(x, y)`
fn draw_bubble<C: Canvas>(canvas: &mut C, x: i32, y: i32) -> Result<(), C::Error> {
    canvas.line(x, y, x + 3, y, Ink::On)?;
    canvas.line(x + 1, y - 1, x + 1, y + 2, Ink::On)?;
    canvas.line(x, y + 2, x + 3, y + 2, Ink::On)?;
    canvas.line(x + 5, y - 3, x + 8, y - 3, Ink::On)?;
    canvas.line(x + 6, y - 4, x + 6, y - 1, Ink::On)?;
    canvas.line(x + 5, y - 1, x + 8, y - 1, Ink::On)
}

fn draw_ticker<C: Canvas>(canvas: &mut C, state: &AnimationState) -> Result<(), C::Error> {
    canvas.hline(0, TICKER_RULE_Y, SCREEN_WIDTH, Ink::On)?;
    canvas.text(state.ticker.offset(), TICKER_TEXT_Y, state.ticker.text(), Ink::On)
}
