//! SMON - Smart Monitor display firmware
//!
//! Reads host telemetry as line-delimited JSON on UART0 and drives an
//! SH1106 128x64 OLED on I2C0 with gauges, a scrolling ticker and an
//! animated face.
//!
//! Pins (Raspberry Pi Pico): UART0 TX=GPIO0, RX=GPIO1; I2C0 SDA=GPIO4,
//! SCL=GPIO5.

#![no_std]
#![no_main]

extern crate alloc;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::clocks::RoscRng;
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::{I2C0, UART0};
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use embedded_alloc::LlffHeap as Heap;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use crate::sh1106::Sh1106;

mod config;
mod sh1106;
mod tasks;

// Heap allocator for JSON decoding
#[global_allocator]
static HEAP: Heap = Heap::empty();

// Heap size: 16KB, enough for a full 1536-byte line plus parsed strings
const HEAP_SIZE: usize = 16 * 1024;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 16]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 1024]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("SMON firmware starting...");

    init_heap();

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // UART0 for the host bridge; only RX is used
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = config::UART_BAUD;

    let tx_buf = TX_BUF.init([0u8; 16]);
    let rx_buf = RX_BUF.init([0u8; 1024]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (_tx, rx) = uart.split();

    info!("UART initialized at {} baud", config::UART_BAUD);

    // I2C0 for the OLED
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = config::I2C_FREQUENCY_HZ;
    let i2c = I2c::new_async(p.I2C0, p.PIN_5, p.PIN_4, Irqs, i2c_config);

    let mut display = Sh1106::new(i2c, config::I2C_ADDRESS);
    if let Err(e) = display.init().await {
        error!("Failed to initialize display: {:?}", e);
    } else {
        info!("OLED initialized at {=u8:#x}", config::I2C_ADDRESS);
    }

    let seed = entropy_seed();
    debug!("Animation seed {=u32:#x}", seed);

    spawner.spawn(tasks::monitor_task(rx, display, seed)).unwrap();

    info!("All tasks spawned");
}

/// Initialize the heap allocator
fn init_heap() {
    use core::mem::MaybeUninit;
    static mut HEAP_MEM: [MaybeUninit<u8>; HEAP_SIZE] = [MaybeUninit::uninit(); HEAP_SIZE];
    #[allow(static_mut_refs)]
    unsafe {
        HEAP.init(HEAP_MEM.as_ptr() as usize, HEAP_SIZE)
    }
}

/// Gather a seed from the ring oscillator mixed with boot time
fn entropy_seed() -> u32 {
    let mut rng = RoscRng;
    rng.next_u32() ^ embassy_time::Instant::now().as_ticks() as u32
}
