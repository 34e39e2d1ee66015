//! Sticky telemetry snapshot

use heapless::String;
use smon_protocol::TelemetryMessage;

/// Capacity of the host and application name fields, in bytes
pub const MAX_NAME_LEN: usize = 32;

/// Latest known value of every telemetry field
///
/// `None` means the field has never been received. Once a field holds a
/// value it is only ever replaced by another valid value, never cleared.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Snapshot {
    /// CPU load, 0-100 %
    pub cpu_percent: Option<f32>,
    /// Total memory, KB
    pub mem_total_kb: Option<u64>,
    /// Used memory, KB
    pub mem_used_kb: Option<u64>,
    /// Ambient temperature, °C
    pub ambient_temp_c: Option<f32>,
    /// Producer host name (empty if never sent)
    pub host_name: String<MAX_NAME_LEN>,
    /// Foreground application (empty if never sent)
    pub active_app: String<MAX_NAME_LEN>,
    /// Producer wall clock, epoch seconds
    pub epoch_seconds: Option<u64>,
    /// Producer uptime, seconds
    pub uptime_seconds: Option<u64>,
    /// Free disk space, KB
    pub disk_free_kb: Option<u64>,
    /// Network receive rate, KB/s
    pub net_rx_kbs: Option<f32>,
    /// Network transmit rate, KB/s
    pub net_tx_kbs: Option<f32>,
}

impl Snapshot {
    /// Create a snapshot with every field unknown
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a decoded message
    ///
    /// Absent fields are left as they are. Negative values for fields that
    /// cannot be negative are the producer's "could not collect" sentinel
    /// and are treated as absent too.
    pub fn apply(&mut self, msg: &TelemetryMessage) {
        if let Some(cpu) = non_negative_f32(msg.cpu) {
            self.cpu_percent = Some(cpu.min(100.0));
        }
        merge(&mut self.mem_total_kb, non_negative(msg.ram));
        merge(&mut self.mem_used_kb, non_negative(msg.ram_used));
        merge(
            &mut self.ambient_temp_c,
            msg.temperature().filter(|t| t.is_finite()),
        );
        if let Some(host) = &msg.host {
            set_text(&mut self.host_name, host.trim());
        }
        merge(&mut self.epoch_seconds, non_negative(msg.time));
        merge(&mut self.uptime_seconds, non_negative(msg.uptime));
        merge(&mut self.disk_free_kb, non_negative(msg.disk_free));
        merge(&mut self.net_rx_kbs, non_negative_f32(msg.net_rx()));
        merge(&mut self.net_tx_kbs, non_negative_f32(msg.net_tx()));
        if let Some(app) = &msg.app {
            set_text(&mut self.active_app, app.trim());
        }
    }

    /// Used/total memory ratio, when both are known and total is non-zero
    pub fn memory_ratio(&self) -> Option<f32> {
        let (total, used) = self.memory()?;
        Some((used as f32 / total as f32).clamp(0.0, 1.0))
    }

    /// Free memory in whole MB, when both figures are known
    pub fn free_memory_mb(&self) -> Option<u64> {
        let (total, used) = self.memory()?;
        Some(total.saturating_sub(used) / 1024)
    }

    fn memory(&self) -> Option<(u64, u64)> {
        match (self.mem_total_kb, self.mem_used_kb) {
            (Some(total), Some(used)) if total > 0 => Some((total, used)),
            _ => None,
        }
    }
}

fn merge<T>(field: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *field = value;
    }
}

fn non_negative(value: Option<i64>) -> Option<u64> {
    value.and_then(|v| u64::try_from(v).ok())
}

fn non_negative_f32(value: Option<f32>) -> Option<f32> {
    value.filter(|v| v.is_finite() && *v >= 0.0)
}

/// Replace `dst` with `src`, truncated on a char boundary
fn set_text<const N: usize>(dst: &mut String<N>, src: &str) {
    dst.clear();
    for ch in src.chars() {
        if dst.push(ch).is_err() {
            break;
        }
    }
}
