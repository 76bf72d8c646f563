//! JSON bodies exchanged with the collaborator's control plane.
//!
//! Decoding is forgiving where a body is recognisable: unknown fields are
//! ignored, missing fields default, an empty `/api/logs` body is an empty list
//! and a bad log record is skipped on its own. A body that is not a snapshot
//! at all is a decode error, so it never replaces the last good one.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use psmon_core::prelude::*;
use psmon_core::{Category, DetailFields, Event, EventDetails, Level, Snapshot};

// ── Paths ───────────────────────────────────────────────────────────────────

pub const STATS_PATH: &str = "/api/stats";
pub const LOGS_PATH: &str = "/api/logs";
pub const CONNECTION_PATH: &str = "/api/connection";
pub const KILL_SWITCH_PATH: &str = "/api/kill-switch";
pub const EXIT_COUNTRY_PATH: &str = "/api/exit-country";
pub const SHUTDOWN_PATH: &str = "/api/shutdown";

// ── Requests ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct ConnectionRequest {
    pub connect: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_country: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct KillSwitchRequest {
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExitCountryRequest {
    /// `None` serializes as `null`, meaning "auto".
    pub country: Option<String>,
}

// ── Responses ───────────────────────────────────────────────────────────────

/// Confirmation of a connection toggle.
///
/// Collaborator builds disagree on the field name, so both are read and the
/// answer is their OR. A full snapshot body also decodes here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConnectionResponse {
    pub is_connected: Option<bool>,
    pub tor_connected: Option<bool>,
}

impl ConnectionResponse {
    pub fn connected(&self) -> Option<bool> {
        match (self.is_connected, self.tor_connected) {
            (None, None) => None,
            (a, b) => Some(a.unwrap_or(false) || b.unwrap_or(false)),
        }
    }
}

/// Confirmation of a kill-switch toggle. `enabled` wins over a snapshot's
/// `kill_switch_active` when both are present.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct KillSwitchResponse {
    pub enabled: Option<bool>,
    pub kill_switch_active: Option<bool>,
}

impl KillSwitchResponse {
    pub fn enabled(&self) -> Option<bool> {
        self.enabled.or(self.kill_switch_active)
    }
}

/// One element of the `/api/logs` array.
///
/// `level` and `category` stay strings so unknown or null values fall back
/// instead of failing the record. `details` stays raw and is decoded apart.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawEvent {
    pub timestamp: Option<String>,
    pub level: Option<String>,
    pub category: Option<String>,
    pub message: Option<String>,
    pub details: Option<Value>,
}

impl RawEvent {
    pub fn into_event(self) -> Event {
        let category = Category::parse_lenient(self.category.as_deref().unwrap_or_default());
        let details = self
            .details
            .and_then(|raw| decode_detail_fields(raw, self.message.as_deref()))
            .and_then(|fields| EventDetails::classify(category, fields));
        Event::new(
            self.timestamp.unwrap_or_default(),
            Level::parse_lenient(self.level.as_deref().unwrap_or_default()),
            category,
            self.message.unwrap_or_default(),
            details,
        )
    }
}

/// Details that do not fit [`DetailFields`] are dropped; the event is kept.
fn decode_detail_fields(raw: Value, message: Option<&str>) -> Option<DetailFields> {
    if raw.is_null() {
        return None;
    }
    match serde_json::from_value(raw) {
        Ok(fields) => Some(fields),
        Err(e) => {
            debug!(
                "Dropping undecodable details of {:?}: {}",
                message.unwrap_or_default(),
                e
            );
            None
        }
    }
}

// ── Decoders ────────────────────────────────────────────────────────────────

pub fn decode_snapshot(body: &[u8]) -> Result<Snapshot> {
    decode_snapshot_from(STATS_PATH, body)
}

/// Decode a snapshot-shaped body answered by `endpoint`.
///
/// The body must be an object carrying at least one snapshot field; the
/// rest default. `{}`, `[]` or `{"error": ..}` are decode errors.
fn decode_snapshot_from(endpoint: &str, body: &[u8]) -> Result<Snapshot> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| Error::decode(endpoint, e.to_string()))?;
    let Some(object) = value.as_object() else {
        return Err(Error::decode(endpoint, "expected a JSON object"));
    };
    if !Snapshot::FIELDS.iter().any(|field| object.contains_key(*field)) {
        return Err(Error::decode(endpoint, "no snapshot fields present"));
    }
    serde_json::from_value(value).map_err(|e| Error::decode(endpoint, e.to_string()))
}

/// Decode the event list. An empty body or `null` yields no events.
///
/// Records that are not objects, or whose fields have the wrong type, are
/// skipped one by one so a single bad record cannot stall the log.
pub fn decode_events(body: &[u8]) -> Result<Vec<Event>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    let raw: Option<Vec<Value>> =
        serde_json::from_slice(body).map_err(|e| Error::decode(LOGS_PATH, e.to_string()))?;

    let raw = raw.unwrap_or_default();
    let mut events = Vec::with_capacity(raw.len());
    for (index, value) in raw.into_iter().enumerate() {
        match serde_json::from_value::<RawEvent>(value) {
            Ok(record) => events.push(record.into_event()),
            Err(e) => debug!("Skipping {} record {}: {}", LOGS_PATH, index, e),
        }
    }
    Ok(events)
}

pub fn decode_connection(body: &[u8]) -> Result<bool> {
    let resp: ConnectionResponse = serde_json::from_slice(body)
        .map_err(|e| Error::decode(CONNECTION_PATH, e.to_string()))?;
    resp.connected().ok_or_else(|| {
        Error::decode(
            CONNECTION_PATH,
            "neither is_connected nor tor_connected present",
        )
    })
}

pub fn decode_kill_switch(body: &[u8]) -> Result<bool> {
    let resp: KillSwitchResponse = serde_json::from_slice(body)
        .map_err(|e| Error::decode(KILL_SWITCH_PATH, e.to_string()))?;
    resp.enabled().ok_or_else(|| {
        Error::decode(
            KILL_SWITCH_PATH,
            "neither enabled nor kill_switch_active present",
        )
    })
}

/// The exit country echoed back by `PUT /api/exit-country`.
pub fn decode_exit_country(body: &[u8]) -> Result<Option<String>> {
    Ok(decode_snapshot_from(EXIT_COUNTRY_PATH, body)?.exit_country)
}
