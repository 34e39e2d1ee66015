//! SMON serial telemetry protocol
//!
//! This crate defines the line protocol between the host bridge (the producer
//! running on the monitored computer) and the SMON display. The link is one
//! way: the display never answers.
//!
//! # Protocol Overview
//!
//! Every update is a single UTF-8 JSON object terminated by CR or LF:
//! ```text
//! {"cpu":23.4,"ram":16329872,"ram_used":8234567,"weather":{"temp":21.3},"uptime":54321}\n
//! ```
//!
//! All fields are optional. A field that is left out means "unchanged since
//! the previous message", so producers may send partial updates.
//!
//! Two stages turn the byte stream into messages:
//! - [`LineAssembler`] splits bytes into bounded lines
//! - [`TelemetryMessage::parse`] decodes one line into optional fields

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

pub mod line;
pub mod message;

pub use line::{Line, LineAssembler, MAX_LINE_LEN};
pub use message::{DecodeError, NetRates, TelemetryMessage, Weather};
