//! Build-time configuration
//!
//! Generated by `build.rs` from `monitor.toml`.

use smon_core::TimingConfig;

include!(concat!(env!("OUT_DIR"), "/monitor_config.rs"));
