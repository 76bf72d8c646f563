//! Aggregate status of the collaborator as reported by `GET /api/stats`.

use serde::{Deserialize, Serialize};

/// Point-in-time counters and flags reported by the proxy.
///
/// Every successful poll replaces the whole value; nothing is merged field by
/// field. Missing fields decode to their zero value so an older collaborator
/// that omits, say, `security_threats_detected` still yields a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub tor_connected: bool,
    pub kill_switch_active: bool,
    pub requests_blocked: u64,
    pub trackers_blocked: u64,
    pub webrtc_blocked: u64,
    pub ipv6_blocked: u64,
    pub total_requests: u64,
    pub security_threats_detected: u64,
    pub proxy_running: bool,
    pub auto_proxy_enabled: bool,
    pub uptime_seconds: u64,
    pub exit_country: Option<String>,
}

impl Snapshot {
    /// Wire names of every field. A body carrying none of them is not a
    /// snapshot, whatever else it holds.
    pub const FIELDS: [&'static str; 12] = [
        "tor_connected",
        "kill_switch_active",
        "requests_blocked",
        "trackers_blocked",
        "webrtc_blocked",
        "ipv6_blocked",
        "total_requests",
        "security_threats_detected",
        "proxy_running",
        "auto_proxy_enabled",
        "uptime_seconds",
        "exit_country",
    ];

    /// Share of requests that were blocked, as a percentage in `0..=100`.
    ///
    /// The collaborator does not promise `requests_blocked <= total_requests`,
    /// so the ratio is clamped rather than trusted.
    pub fn block_rate_percent(&self) -> u8 {
        if self.total_requests == 0 {
            return 0;
        }
        let pct = (self.requests_blocked as u128 * 100) / self.total_requests as u128;
        pct.min(100) as u8
    }

    /// Sum of the per-protection counters.
    pub fn protections_triggered(&self) -> u64 {
        self.trackers_blocked
            .saturating_add(self.webrtc_blocked)
            .saturating_add(self.ipv6_blocked)
            .saturating_add(self.security_threats_detected)
    }

    /// True when `next` looks like the start of a new connection session.
    ///
    /// Counters only grow within a session, so any decrease means the
    /// collaborator reset them.
    pub fn is_session_reset(&self, next: &Snapshot) -> bool {
        next.total_requests < self.total_requests || next.requests_blocked < self.requests_blocked
    }

    /// Uptime as `HH:MM:SS`, prefixed with `Nd` once past a day.
    pub fn uptime_display(&self) -> String {
        format_uptime(self.uptime_seconds)
    }
}

/// Format a duration in seconds the way the dashboard header shows it.
pub fn format_uptime(seconds: u64) -> String {
    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3_600;
    let minutes = (seconds % 3_600) / 60;
    let secs = seconds % 60;
    if days > 0 {
        format!("{days}d {hours:02}:{minutes:02}:{secs:02}")
    } else {
        format!("{hours:02}:{minutes:02}:{secs:02}")
    }
}

// ── Exit countries ──────────────────────────────────────────────────────────

/// Exit locations the collaborator understands, in selector order.
pub const EXIT_COUNTRIES: &[&str] = &["us", "uk", "de", "nl", "fr", "se", "ch", "ca", "au", "jp"];

/// Human readable name for an exit country code. `None` means "auto".
pub fn exit_country_name(code: Option<&str>) -> &str {
    match code {
        None => "Auto",
        Some("us") => "United States",
        Some("uk") => "United Kingdom",
        Some("de") => "Germany",
        Some("nl") => "Netherlands",
        Some("fr") => "France",
        Some("se") => "Sweden",
        Some("ch") => "Switzerland",
        Some("ca") => "Canada",
        Some("au") => "Australia",
        Some("jp") => "Japan",
        Some(other) => other,
    }
}

/// Next selection after `current`: auto → us → … → jp → auto.
///
/// Unknown codes restart the cycle at the first known country.
pub fn next_exit_country(current: Option<&str>) -> Option<String> {
    let next = match current {
        None => EXIT_COUNTRIES.first(),
        Some(code) => match EXIT_COUNTRIES.iter().position(|c| *c == code) {
            Some(idx) => EXIT_COUNTRIES.get(idx + 1),
            None => EXIT_COUNTRIES.first(),
        },
    };
    next.map(|c| c.to_string())
}
