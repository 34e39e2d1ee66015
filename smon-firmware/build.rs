//! Build script for smon-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates monitor.toml and turns it into constants

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

fn main() {
    setup_linker();
    let settings = validate_config();
    generate_config(&settings);
}

/// Validated monitor.toml values
struct Settings {
    baud: u32,
    i2c_address: u8,
    i2c_frequency_hz: u32,
    frame_interval_ms: u64,
    waiting_repaint_ms: u64,
    stale_after_ms: u64,
    low_load_sleep_ms: u64,
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Parse and range-check monitor.toml
fn validate_config() -> Settings {
    println!("cargo:rerun-if-changed=monitor.toml");

    let config_path = Path::new("monitor.toml");
    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: monitor.toml not found!                                  ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a monitor.toml configuration file         ║\n\
            ║  in the smon-firmware directory.                                 ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read monitor.toml                              ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&content) {
        Ok(value) => value,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in monitor.toml                      ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&e.to_string())
            );
        }
    };

    let mut errors = Vec::new();

    let baud = integer(&config, "serial", "baud", 1200, 3_000_000, &mut errors);
    let i2c_address = integer(&config, "display", "i2c_address", 0x08, 0x77, &mut errors);
    let i2c_frequency_hz =
        integer(&config, "display", "i2c_frequency_hz", 10_000, 1_000_000, &mut errors);
    let frame_interval_ms = integer(&config, "timing", "frame_interval_ms", 10, 1000, &mut errors);
    let waiting_repaint_ms =
        integer(&config, "timing", "waiting_repaint_ms", 100, 60_000, &mut errors);
    let stale_after_ms = integer(&config, "timing", "stale_after_ms", 500, 600_000, &mut errors);
    let low_load_sleep_ms =
        integer(&config, "timing", "low_load_sleep_ms", 1000, 3_600_000, &mut errors);

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid configuration in monitor.toml                    ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=monitor.toml validated successfully");

    Settings {
        baud: baud as u32,
        i2c_address: i2c_address as u8,
        i2c_frequency_hz: i2c_frequency_hz as u32,
        frame_interval_ms: frame_interval_ms as u64,
        waiting_repaint_ms: waiting_repaint_ms as u64,
        stale_after_ms: stale_after_ms as u64,
        low_load_sleep_ms: low_load_sleep_ms as u64,
    }
}

/// Look up `[section] key` as an integer within `min..=max`
///
/// Records an error and returns `min` when missing or out of range.
fn integer(
    config: &toml::Value,
    section: &str,
    key: &str,
    min: i64,
    max: i64,
    errors: &mut Vec<String>,
) -> i64 {
    match config.get(section).and_then(|s| s.get(key)) {
        Some(toml::Value::Integer(value)) if (min..=max).contains(value) => *value,
        Some(toml::Value::Integer(_)) => {
            errors.push(format!("[{}] {} must be {}-{}", section, key, min, max));
            min
        }
        Some(_) => {
            errors.push(format!("[{}] {} must be an integer", section, key));
            min
        }
        None => {
            errors.push(format!("[{}] missing '{}'", section, key));
            min
        }
    }
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write `$OUT_DIR/monitor_config.rs`
fn generate_config(settings: &Settings) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let mut f = File::create(out_dir.join("monitor_config.rs")).unwrap();
    write!(
        f,
        "/// Serial baud rate\n\
         pub const UART_BAUD: u32 = {};\n\
         /// SH1106 I2C address\n\
         pub const I2C_ADDRESS: u8 = {:#04x};\n\
         /// I2C bus frequency\n\
         pub const I2C_FREQUENCY_HZ: u32 = {};\n\
         /// Animation and liveness timing\n\
         pub const TIMING: TimingConfig = TimingConfig {{\n    \
             frame_interval_ms: {},\n    \
             waiting_repaint_ms: {},\n    \
             stale_after_ms: {},\n    \
             low_load_sleep_ms: {},\n\
         }};\n",
        settings.baud,
        settings.i2c_address,
        settings.i2c_frequency_hz,
        settings.frame_interval_ms,
        settings.waiting_repaint_ms,
        settings.stale_after_ms,
        settings.low_load_sleep_ms,
    )
    .unwrap();
}
