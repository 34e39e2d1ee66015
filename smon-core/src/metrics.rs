//! Derived gauge targets and ticker text
//!
//! Runs once after every successfully decoded message. Targets only move
//! for fields the snapshot knows; unknown fields leave the previous target
//! in place.

use core::fmt::Write;

use heapless::String;

use crate::animation::state::NET_SCALE_FLOOR;
use crate::animation::{AnimationState, TICKER_CAPACITY};
use crate::format::{write_disk, write_percent, write_temperature, write_uptime};
use crate::telemetry::Snapshot;

/// Per-message decay of the network scale ceiling
pub const NET_SCALE_DECAY: f32 = 0.996;

/// Ticker text when no metric is known yet
pub const IDLE_TICKER: &str = " Smart Monitor";

/// Padding appended so consecutive passes don't touch
const TICKER_TAIL: &str = "   ";

/// Update gauge targets, network scale and ticker from `snapshot`
pub fn recompute(snapshot: &Snapshot, state: &mut AnimationState) {
    if let Some(cpu) = snapshot.cpu_percent {
        state.target.cpu = (cpu / 100.0).clamp(0.0, 1.0);
    }
    if let Some(ratio) = snapshot.memory_ratio() {
        state.target.mem = ratio;
    }
    if let (Some(rx), Some(tx)) = (snapshot.net_rx_kbs, snapshot.net_tx_kbs) {
        let total = (rx + tx).max(0.0);
        if total > state.net_scale_max {
            state.net_scale_max = total;
        }
        state.target.net = (total / state.net_scale_max).clamp(0.0, 1.0);
        state.net_scale_max = (state.net_scale_max * NET_SCALE_DECAY).max(NET_SCALE_FLOOR);
    }

    let text = ticker_text(snapshot);
    state.ticker.set_text(&text);
}

/// Build the ticker line from whatever the snapshot knows
pub fn ticker_text(snapshot: &Snapshot) -> String<TICKER_CAPACITY> {
    let mut text = String::new();
    // Overflowing the buffer only truncates the ticker
    if let Some(temp) = snapshot.ambient_temp_c {
        let _ = text.push(' ');
        let _ = write_temperature(&mut text, temp);
    }
    if let Some(cpu) = snapshot.cpu_percent {
        let _ = text.push_str("  CPU ");
        let _ = write_percent(&mut text, cpu);
    }
    if let Some(free_mb) = snapshot.free_memory_mb() {
        let _ = write!(text, "  RAM {}MB", free_mb);
    }
    if let Some(disk) = snapshot.disk_free_kb {
        let _ = text.push_str("  DISK ");
        let _ = write_disk(&mut text, disk);
    }
    if let Some(uptime) = snapshot.uptime_seconds {
        let _ = text.push_str("  UPT ");
        let _ = write_uptime(&mut text, uptime);
    }
    if text.is_empty() {
        let _ = text.push_str(IDLE_TICKER);
    }
    let _ = text.push_str(TICKER_TAIL);
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::decode;

    const EXAMPLE: &[u8] = br#"{"cpu":23.4,"ram":16329872,"ram_used":8234567,"weather":{"temp":21.3},"disk_free":1048576,"uptime":54321}"#;

    fn ingest(line: &[u8], snapshot: &mut Snapshot, state: &mut AnimationState) -> bool {
        match decode(line, snapshot) {
            Ok(()) => {
                recompute(snapshot, state);
                true
            }
            Err(_) => false,
        }
    }

    #[test]
    fn test_example_message() {
        let mut snapshot = Snapshot::new();
        let mut state = AnimationState::new();
        assert!(ingest(EXAMPLE, &mut snapshot, &mut state));

        assert!((state.target.cpu - 0.234).abs() < 1e-4);
        assert!((state.target.mem - 0.5043).abs() < 1e-3);

        let text = state.ticker.text();
        assert_eq!(text, " 21C  CPU 23%  RAM 7905MB  DISK 1024MB  UPT 15h5m   ");
        assert!(text.contains("21C"));
        assert!(text.contains("CPU 23%"));
        assert!(text.contains("RAM 7905MB"));
        assert!(text.contains("DISK 1024MB"));
        assert!(text.contains("UPT 15h5m"));
        assert_eq!(state.ticker.width(), text.len() as i32 * 6);
    }

    #[test]
    fn test_malformed_keeps_targets() {
        let mut snapshot = Snapshot::new();
        let mut state = AnimationState::new();
        ingest(EXAMPLE, &mut snapshot, &mut state);
        let target = state.target;
        let before = snapshot.clone();

        assert!(!ingest(br#"{"cpu":}"#, &mut snapshot, &mut state));
        assert_eq!(state.target, target);
        assert_eq!(snapshot, before);
    }

    #[test]
    fn test_idle_ticker() {
        let snapshot = Snapshot::new();
        assert_eq!(ticker_text(&snapshot).as_str(), " Smart Monitor   ");

        let mut snapshot = Snapshot::new();
        let mut state = AnimationState::new();
        ingest(br#"{"host":"alpha","app":"Mail"}"#, &mut snapshot, &mut state);
        assert_eq!(state.ticker.text(), " Smart Monitor   ");
    }

    #[test]
    fn test_partial_ticker_keeps_order() {
        let mut snapshot = Snapshot::new();
        let mut state = AnimationState::new();
        ingest(br#"{"uptime":200000,"cpu":5}"#, &mut snapshot, &mut state);
        assert_eq!(state.ticker.text(), "  CPU 5%  UPT 2d 7h33m   ");
    }

    #[test]
    fn test_unknown_fields_leave_targets() {
        let mut snapshot = Snapshot::new();
        let mut state = AnimationState::new();
        ingest(br#"{"cpu":50}"#, &mut snapshot, &mut state);
        assert_eq!(state.target.mem, 0.0);
        ingest(br#"{"ram":1000,"ram_used":250}"#, &mut snapshot, &mut state);
        assert_eq!(state.target.cpu, 0.5);
        assert_eq!(state.target.mem, 0.25);
    }

    #[test]
    fn test_net_scale_rises_instantly_and_decays() {
        let mut snapshot = Snapshot::new();
        let mut state = AnimationState::new();

        ingest(br#"{"net":{"rx":300,"tx":100}}"#, &mut snapshot, &mut state);
        assert_eq!(state.target.net, 1.0);
        assert!((state.net_scale_max - 400.0 * NET_SCALE_DECAY).abs() < 1e-3);

        ingest(br#"{"net":{"rx":100,"tx":0}}"#, &mut snapshot, &mut state);
        let expected = 100.0 / (400.0 * NET_SCALE_DECAY);
        assert!((state.target.net - expected).abs() < 1e-4);
    }

    #[test]
    fn test_net_scale_floor() {
        let mut snapshot = Snapshot::new();
        let mut state = AnimationState::new();
        for _ in 0..100 {
            ingest(br#"{"net":{"rx":0,"tx":0}}"#, &mut snapshot, &mut state);
        }
        assert_eq!(state.net_scale_max, 1.0);
        assert_eq!(state.target.net, 0.0);
    }

    #[test]
    fn test_net_needs_both_directions() {
        let mut snapshot = Snapshot::new();
        let mut state = AnimationState::new();
        ingest(br#"{"net":{"rx":50}}"#, &mut snapshot, &mut state);
        assert_eq!(state.target.net, 0.0);
        assert_eq!(state.net_scale_max, 1.0);
    }

    #[test]
    fn test_ticker_rebuild_clamps_offset() {
        let mut snapshot = Snapshot::new();
        let mut state = AnimationState::new();
        ingest(br#"{"cpu":1}"#, &mut snapshot, &mut state);
        assert_eq!(state.ticker.offset(), 128);
        for _ in 0..10 {
            state.ticker.scroll(128);
        }
        ingest(br#"{"cpu":99}"#, &mut snapshot, &mut state);
        assert_eq!(state.ticker.offset(), 118);
    }
}
