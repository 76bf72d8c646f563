//! Event records reported by `GET /api/logs`.
//!
//! The collaborator sends a flat, all-optional detail record. Here it is
//! narrowed into [`EventDetails`], a union keyed by [`Category`], so code that
//! renders a tracker block can never reach for request headers that only
//! network and security events carry.

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use tracing::debug;

// ── Level ───────────────────────────────────────────────────────────────────

/// Severity of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    /// Parse the collaborator's level string. Unknown strings become `Info`.
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" | "trace" => Level::Debug,
            "warn" | "warning" => Level::Warn,
            "error" | "err" => Level::Error,
            _ => Level::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
        }
    }

    /// Fixed-width prefix for the log view
    pub fn prefix(&self) -> &'static str {
        match self {
            Level::Debug => "DBG",
            Level::Info => "INF",
            Level::Warn => "WRN",
            Level::Error => "ERR",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Category ────────────────────────────────────────────────────────────────

/// What part of the proxy produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Network,
    Tracker,
    Webrtc,
    Ipv6,
    Security,
    General,
}

impl Category {
    /// Categories that represent a protection firing.
    pub const PROTECTIONS: [Category; 4] = [
        Category::Tracker,
        Category::Webrtc,
        Category::Ipv6,
        Category::Security,
    ];

    /// Parse the collaborator's category string. Unknown strings become `General`.
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "network" => Category::Network,
            "tracker" => Category::Tracker,
            "webrtc" => Category::Webrtc,
            "ipv6" => Category::Ipv6,
            "security" => Category::Security,
            _ => Category::General,
        }
    }

    pub fn is_protection(&self) -> bool {
        Self::PROTECTIONS.contains(self)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Network => "network",
            Category::Tracker => "tracker",
            Category::Webrtc => "webrtc",
            Category::Ipv6 => "ipv6",
            Category::Security => "security",
            Category::General => "general",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Network => "Network",
            Category::Tracker => "Trackers",
            Category::Webrtc => "WebRTC",
            Category::Ipv6 => "IPv6",
            Category::Security => "Security",
            Category::General => "General",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Details ─────────────────────────────────────────────────────────────────

/// Flat detail record exactly as the collaborator serializes it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetailFields {
    pub url: Option<String>,
    pub domain: Option<String>,
    pub path: Option<String>,
    pub port: Option<u16>,
    pub method: Option<String>,
    pub client_ip: Option<String>,
    pub threat_type: Option<String>,
    pub reason: Option<String>,
    pub request_headers: Option<Vec<String>>,
}

/// Where a request was headed and who sent it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Endpoint {
    pub url: Option<String>,
    pub domain: Option<String>,
    pub path: Option<String>,
    pub port: Option<u16>,
    pub method: Option<String>,
    pub client_ip: Option<String>,
}

impl Endpoint {
    fn is_empty(&self) -> bool {
        *self == Endpoint::default()
    }
}

/// Why a protection fired.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Verdict {
    pub threat_type: Option<String>,
    pub reason: Option<String>,
}

impl Verdict {
    fn is_empty(&self) -> bool {
        self.threat_type.is_none() && self.reason.is_none()
    }
}

/// Category-specific detail payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventDetails {
    /// Observed traffic (`network`).
    Traffic {
        endpoint: Endpoint,
        request_headers: Vec<String>,
    },
    /// A tracker, WebRTC or IPv6 block.
    Blocked { endpoint: Endpoint, verdict: Verdict },
    /// A detected security threat, with the offending request's headers.
    Threat {
        endpoint: Endpoint,
        verdict: Verdict,
        request_headers: Vec<String>,
    },
    /// Free-form note attached to a `general` event.
    Note { endpoint: Endpoint, reason: Option<String> },
}

impl EventDetails {
    /// Narrow a flat record to the shape `category` allows.
    ///
    /// Fields the category does not carry are dropped and logged at `debug`.
    /// Returns `None` when nothing renderable is left.
    pub fn classify(category: Category, fields: DetailFields) -> Option<Self> {
        let DetailFields {
            url,
            domain,
            path,
            port,
            method,
            client_ip,
            threat_type,
            reason,
            request_headers,
        } = fields;
        let endpoint = Endpoint {
            url,
            domain,
            path,
            port,
            method,
            client_ip,
        };
        let verdict = Verdict {
            threat_type,
            reason,
        };
        let headers = request_headers.unwrap_or_default();

        let dropped = dropped_fields(category, &verdict, &headers);
        if !dropped.is_empty() {
            debug!("Dropping {:?} from {} event details", dropped, category);
        }

        let details = match category {
            Category::Network => {
                if endpoint.is_empty() && headers.is_empty() {
                    return None;
                }
                EventDetails::Traffic {
                    endpoint,
                    request_headers: headers,
                }
            }
            Category::Tracker | Category::Webrtc | Category::Ipv6 => {
                if endpoint.is_empty() && verdict.is_empty() {
                    return None;
                }
                EventDetails::Blocked { endpoint, verdict }
            }
            Category::Security => {
                if endpoint.is_empty() && verdict.is_empty() && headers.is_empty() {
                    return None;
                }
                EventDetails::Threat {
                    endpoint,
                    verdict,
                    request_headers: headers,
                }
            }
            Category::General => {
                if endpoint.is_empty() && verdict.reason.is_none() {
                    return None;
                }
                EventDetails::Note {
                    endpoint,
                    reason: verdict.reason,
                }
            }
        };
        Some(details)
    }

    pub fn endpoint(&self) -> &Endpoint {
        match self {
            EventDetails::Traffic { endpoint, .. }
            | EventDetails::Blocked { endpoint, .. }
            | EventDetails::Threat { endpoint, .. }
            | EventDetails::Note { endpoint, .. } => endpoint,
        }
    }

    /// Label/value pairs for the fields that are present, in display order.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        match self {
            EventDetails::Blocked { verdict, .. } | EventDetails::Threat { verdict, .. } => {
                push_opt(&mut out, "Threat", verdict.threat_type.as_ref());
                push_opt(&mut out, "Reason", verdict.reason.as_ref());
            }
            EventDetails::Note { reason, .. } => push_opt(&mut out, "Reason", reason.as_ref()),
            EventDetails::Traffic { .. } => {}
        }

        let ep = self.endpoint();
        push_opt(&mut out, "Method", ep.method.as_ref());
        push_opt(&mut out, "URL", ep.url.as_ref());
        push_opt(&mut out, "Domain", ep.domain.as_ref());
        push_opt(&mut out, "Path", ep.path.as_ref());
        if let Some(port) = ep.port {
            out.push(("Port", port.to_string()));
        }
        push_opt(&mut out, "Client", ep.client_ip.as_ref());

        if let EventDetails::Traffic {
            request_headers, ..
        }
        | EventDetails::Threat {
            request_headers, ..
        } = self
        {
            for header in request_headers {
                out.push(("Header", header.clone()));
            }
        }
        out
    }
}

/// Fields present in a flat record that `category`'s variant has no slot for.
fn dropped_fields(category: Category, verdict: &Verdict, headers: &[String]) -> Vec<&'static str> {
    let keeps_threat_type = !matches!(category, Category::Network | Category::General);
    let keeps_reason = category != Category::Network;
    let keeps_headers = matches!(category, Category::Network | Category::Security);

    let mut dropped = Vec::new();
    if !keeps_threat_type && verdict.threat_type.is_some() {
        dropped.push("threat_type");
    }
    if !keeps_reason && verdict.reason.is_some() {
        dropped.push("reason");
    }
    if !keeps_headers && !headers.is_empty() {
        dropped.push("request_headers");
    }
    dropped
}

fn push_opt(out: &mut Vec<(&'static str, String)>, label: &'static str, value: Option<&String>) {
    if let Some(v) = value {
        out.push((label, v.clone()));
    }
}

// ── Event ───────────────────────────────────────────────────────────────────

/// Stable identity of an event, derived from its content.
///
/// The collaborator resends the whole list every poll without ids, so UI
/// state such as row expansion hangs off this key rather than list position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventKey(pub u64);

impl EventKey {
    pub fn of(timestamp: &str, category: Category, message: &str) -> Self {
        let mut hasher = DefaultHasher::new();
        timestamp.hash(&mut hasher);
        category.hash(&mut hasher);
        message.hash(&mut hasher);
        EventKey(hasher.finish())
    }
}

/// A single classified log record. Immutable once received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Collaborator-formatted, displayed verbatim
    pub timestamp: String,
    pub level: Level,
    pub category: Category,
    pub message: String,
    pub details: Option<EventDetails>,
    key: EventKey,
}

impl Event {
    pub fn new(
        timestamp: impl Into<String>,
        level: Level,
        category: Category,
        message: impl Into<String>,
        details: Option<EventDetails>,
    ) -> Self {
        let timestamp = timestamp.into();
        let message = message.into();
        let key = EventKey::of(&timestamp, category, &message);
        Self {
            timestamp,
            level,
            category,
            message,
            details,
            key,
        }
    }

    pub fn key(&self) -> EventKey {
        self.key
    }

    /// Only events with details can be expanded.
    pub fn has_details(&self) -> bool {
        self.details.is_some()
    }
}
