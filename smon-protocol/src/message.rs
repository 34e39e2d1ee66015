//! Telemetry message schema
//!
//! One JSON object per line. Every field is optional; unknown fields
//! (for example `weather.desc` or `weather.wcode`) are ignored.
//!
//! | field | type | meaning |
//! |---|---|---|
//! | `cpu` | number 0-100 | CPU load percent |
//! | `ram` | integer | total memory, KB |
//! | `ram_used` | integer | used memory, KB |
//! | `weather.temp` | number | ambient temperature, °C |
//! | `host` | text | producer host name |
//! | `time` | integer | epoch seconds |
//! | `uptime` | integer | producer uptime, seconds |
//! | `disk_free` | integer | free disk, KB |
//! | `net.rx` / `net.tx` | number | throughput, KB/s |
//! | `app` | text | active foreground application |
//!
//! Integers are signed on the wire: the host bridge reports `-1` for values
//! it could not collect. Interpreting such sentinels is left to the consumer.
//!
//! A field holding a value of the wrong type decodes as absent; the rest of
//! the line still applies. Only a line that is not a well-formed JSON object
//! is rejected.

use alloc::string::String;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::error::Category;
use serde_json::Value;

/// Errors that can occur while decoding a telemetry line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeError {
    /// Not well-formed JSON
    Syntax,
    /// Input ended in the middle of a value (usually a truncated line)
    Truncated,
    /// Well-formed JSON that is not an object
    InvalidField,
    /// Line is not valid UTF-8
    NotUtf8,
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Eof => DecodeError::Truncated,
            Category::Data => DecodeError::InvalidField,
            Category::Syntax | Category::Io => DecodeError::Syntax,
        }
    }
}

impl core::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            DecodeError::Syntax => "malformed JSON",
            DecodeError::Truncated => "truncated message",
            DecodeError::InvalidField => "not a JSON object",
            DecodeError::NotUtf8 => "invalid UTF-8",
        };
        f.write_str(msg)
    }
}

/// Decode a field as `Some` only when it holds a value of the expected type
///
/// `null` and mismatched types both yield `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

/// Weather block (`"weather": {"temp": 21.3}`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct Weather {
    /// Ambient temperature in °C
    #[serde(default, deserialize_with = "lenient")]
    pub temp: Option<f32>,
}

/// Network block (`"net": {"rx": 12.0, "tx": 3.5}`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct NetRates {
    /// Receive rate in KB/s
    #[serde(default, deserialize_with = "lenient")]
    pub rx: Option<f32>,
    /// Transmit rate in KB/s
    #[serde(default, deserialize_with = "lenient")]
    pub tx: Option<f32>,
}

/// One decoded status line
///
/// `None` means the field was absent, `null` or of the wrong type in this
/// message.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TelemetryMessage {
    #[serde(default, deserialize_with = "lenient")]
    pub cpu: Option<f32>,
    #[serde(default, deserialize_with = "lenient")]
    pub ram: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub ram_used: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub weather: Option<Weather>,
    #[serde(default, deserialize_with = "lenient")]
    pub host: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub time: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub uptime: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub disk_free: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub net: Option<NetRates>,
    #[serde(default, deserialize_with = "lenient")]
    pub app: Option<String>,
}

impl TelemetryMessage {
    /// Parse one line (without terminator)
    pub fn parse(line: &[u8]) -> Result<Self, DecodeError> {
        let text = core::str::from_utf8(line).map_err(|_| DecodeError::NotUtf8)?;
        Ok(serde_json::from_str(text)?)
    }

    /// Ambient temperature, if the weather block carried one
    pub fn temperature(&self) -> Option<f32> {
        self.weather.and_then(|w| w.temp)
    }

    /// Receive rate, if present
    pub fn net_rx(&self) -> Option<f32> {
        self.net.and_then(|n| n.rx)
    }

    /// Transmit rate, if present
    pub fn net_tx(&self) -> Option<f32> {
        self.net.and_then(|n| n.tx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_message() {
        let line = br#"{"cpu":23.4,"ram":16329872,"ram_used":8234567,"weather":{"temp":21.3,"desc":"Clear","wcode":0},"host":"box","time":1700000000,"uptime":54321,"disk_free":1048576,"net":{"rx":12.5,"tx":3.0},"app":"Terminal"}"#;
        let msg = TelemetryMessage::parse(line).unwrap();

        assert_eq!(msg.cpu, Some(23.4));
        assert_eq!(msg.ram, Some(16_329_872));
        assert_eq!(msg.ram_used, Some(8_234_567));
        assert_eq!(msg.temperature(), Some(21.3));
        assert_eq!(msg.host.as_deref(), Some("box"));
        assert_eq!(msg.time, Some(1_700_000_000));
        assert_eq!(msg.uptime, Some(54321));
        assert_eq!(msg.disk_free, Some(1_048_576));
        assert_eq!(msg.net_rx(), Some(12.5));
        assert_eq!(msg.net_tx(), Some(3.0));
        assert_eq!(msg.app.as_deref(), Some("Terminal"));
    }

    #[test]
    fn test_parse_empty_object() {
        let msg = TelemetryMessage::parse(b"{}").unwrap();
        assert_eq!(msg, TelemetryMessage::default());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let msg = TelemetryMessage::parse(br#"{"gpu":99,"cpu":5,"extra":{"a":[1,2]}}"#).unwrap();
        assert_eq!(msg.cpu, Some(5.0));
    }

    #[test]
    fn test_null_is_absent() {
        let msg = TelemetryMessage::parse(br#"{"cpu":null,"weather":{"temp":null}}"#).unwrap();
        assert_eq!(msg.cpu, None);
        assert_eq!(msg.temperature(), None);
    }

    #[test]
    fn test_negative_sentinel_passed_through() {
        let msg = TelemetryMessage::parse(br#"{"disk_free":-1}"#).unwrap();
        assert_eq!(msg.disk_free, Some(-1));
    }

    #[test]
    fn test_missing_value_is_syntax_error() {
        assert_eq!(
            TelemetryMessage::parse(br#"{"cpu":}"#),
            Err(DecodeError::Syntax)
        );
    }

    #[test]
    fn test_truncated_line() {
        assert_eq!(
            TelemetryMessage::parse(br#"{"cpu":12,"ram":"#),
            Err(DecodeError::Truncated)
        );
    }

    #[test]
    fn test_wrong_type_field_is_absent() {
        let msg =
            TelemetryMessage::parse(br#"{"cpu":50,"ram":"lots","ram_used":500,"app":123}"#).unwrap();
        assert_eq!(msg.cpu, Some(50.0));
        assert_eq!(msg.ram, None);
        assert_eq!(msg.ram_used, Some(500));
        assert_eq!(msg.app, None);
    }

    #[test]
    fn test_wrong_type_nested_field_is_absent() {
        let msg = TelemetryMessage::parse(br#"{"cpu":50,"weather":{"temp":"n/a"}}"#).unwrap();
        assert_eq!(msg.cpu, Some(50.0));
        assert_eq!(msg.temperature(), None);

        let msg = TelemetryMessage::parse(br#"{"net":"down","uptime":1.5,"time":60}"#).unwrap();
        assert_eq!(msg.net, None);
        assert_eq!(msg.uptime, None);
        assert_eq!(msg.time, Some(60));
    }

    #[test]
    fn test_non_object_rejected() {
        assert_eq!(
            TelemetryMessage::parse(b"42"),
            Err(DecodeError::InvalidField)
        );
        assert_eq!(
            TelemetryMessage::parse(br#""cpu""#),
            Err(DecodeError::InvalidField)
        );
    }

    #[test]
    fn test_invalid_utf8_rejected() {
        assert_eq!(
            TelemetryMessage::parse(&[b'{', 0xFF, 0xFE, b'}']),
            Err(DecodeError::NotUtf8)
        );
    }

    #[test]
    fn test_trailing_garbage_rejected() {
        assert_eq!(
            TelemetryMessage::parse(br#"{"cpu":1} junk"#),
            Err(DecodeError::Syntax)
        );
    }
}
