//! Telemetry snapshot and line decoding
//!
//! The snapshot holds the latest known value of every field. Messages are
//! merged into it: fields a message leaves out keep their previous value.

pub mod snapshot;

pub use snapshot::{Snapshot, MAX_NAME_LEN};

use smon_protocol::{DecodeError, TelemetryMessage};

/// Decode one line and merge it into `snapshot`
///
/// On error the snapshot is left untouched.
pub fn decode(line: &[u8], snapshot: &mut Snapshot) -> Result<(), DecodeError> {
    let message = TelemetryMessage::parse(line)?;
    snapshot.apply(&message);
    Ok(())
}
