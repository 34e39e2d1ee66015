//! Monitor task
//!
//! Single cooperative loop: UART bytes are assembled into lines and decoded
//! as they arrive, and a frame ticker drives animation and rendering. All
//! state lives on this task's stack.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::i2c::{Async, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_rp::uart::BufferedUartRx;
use embassy_time::{Duration, Instant, Ticker};
use embedded_io_async::Read;

use smon_core::{Frame, LinkStatus, Millis, Monitor, XorShift32};
use smon_display::{FrameComposer, GraphicsCanvas};
use smon_protocol::{Line, LineAssembler};

use crate::config;
use crate::sh1106::{FrameBuffer, Sh1106};

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 64;

/// How often the frame cadence is polled; the monitor gates the real rate
const FRAME_POLL_MS: u64 = 10;

type Display = Sh1106<I2c<'static, I2C0, Async>>;

fn now_ms() -> Millis {
    Instant::now().as_millis()
}

/// Telemetry display task
#[embassy_executor::task]
pub async fn monitor_task(mut rx: BufferedUartRx, mut display: Display, seed: u32) {
    info!("Monitor task started");

    let mut monitor = Monitor::new(XorShift32::new(seed), config::TIMING);
    let composer = FrameComposer::new(config::UART_BAUD);
    let mut canvas = GraphicsCanvas::new(FrameBuffer::new());
    let mut assembler = LineAssembler::new();
    let mut link = LinkStatus::Waiting;

    let mut buf = [0u8; RX_BUF_SIZE];
    let mut ticker = Ticker::every(Duration::from_millis(FRAME_POLL_MS));

    loop {
        match select(rx.read(&mut buf), ticker.next()).await {
            Either::First(Ok(n)) => {
                trace!("RX: {} bytes", n);
                assembler.feed_bytes(&buf[..n], |line| handle_line(&mut monitor, &line));
            }
            Either::First(Err(e)) => {
                warn!("UART read error: {:?}", e);
            }
            Either::Second(()) => {
                let now = now_ms();

                let status = monitor.status(now);
                if status != link {
                    info!("Link {:?} -> {:?}", link, status);
                    link = status;
                }

                let drawn = match monitor.poll_frame(now) {
                    Some(Frame::Waiting) => composer.draw_waiting(&mut canvas).is_ok(),
                    Some(Frame::Dashboard) => {
                        let face = monitor.face(now);
                        composer
                            .draw_dashboard(&mut canvas, monitor.snapshot(), monitor.state(), &face)
                            .is_ok()
                    }
                    None => false,
                };

                if drawn {
                    if let Err(e) = display.flush(canvas.target()).await {
                        warn!("Display flush failed: {:?}", e);
                    }
                }
            }
        }
    }
}

/// Decode one completed line into the monitor
fn handle_line(monitor: &mut Monitor<XorShift32>, line: &Line) {
    let first = monitor.is_waiting();
    match monitor.ingest_line(line.as_bytes(), now_ms()) {
        Ok(()) => {
            if first {
                info!("First telemetry received");
            }
            debug!("Telemetry line decoded ({} bytes)", line.len());
        }
        Err(e) => {
            warn!("Dropped telemetry line ({} bytes): {:?}", line.len(), e);
        }
    }
}
