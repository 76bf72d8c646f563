//! Message types for the application (TEA pattern)

use psmon_core::{Event, Snapshot};

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit (signal handler, Ctrl+C, `q`)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Poll Results
    // ─────────────────────────────────────────────────────────
    /// `/api/stats` answered for poll `tick`
    SnapshotReceived { tick: u64, snapshot: Snapshot },

    /// `/api/stats` failed for poll `tick`
    SnapshotFailed { tick: u64, error: String },

    /// `/api/logs` answered for poll `tick`
    EventsReceived { tick: u64, events: Vec<Event> },

    /// `/api/logs` failed for poll `tick`
    EventsFailed { tick: u64, error: String },

    // ─────────────────────────────────────────────────────────
    // Command Intents
    // ─────────────────────────────────────────────────────────
    /// Flip the connection relative to its confirmed state
    ToggleConnection,

    /// Ask for a specific connection state
    RequestConnection { connect: bool },

    /// Flip the kill switch relative to its confirmed state
    ToggleKillSwitch,

    /// Ask for a specific kill-switch state
    RequestKillSwitch { enabled: bool },

    /// Advance the exit-country selection (auto → us → … → auto)
    CycleExitCountry,

    /// Ask for a specific exit country (`None` = auto)
    RequestExitCountry { country: Option<String> },

    /// Show the shutdown confirmation (or shut down directly if disabled)
    RequestShutdown,
    ConfirmShutdown,
    CancelShutdown,

    // ─────────────────────────────────────────────────────────
    // Command Outcomes
    // ─────────────────────────────────────────────────────────
    ConnectionConfirmed { connected: bool },
    ConnectionFailed { error: String },
    KillSwitchConfirmed { enabled: bool },
    KillSwitchFailed { error: String },
    ExitCountryConfirmed { country: Option<String> },
    ExitCountryFailed { error: String },
    ShutdownSent,
    ShutdownFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Filter Messages
    // ─────────────────────────────────────────────────────────
    CycleCategoryFilter,
    CycleCategoryFilterBack,
    CycleLevelFilter,
    CycleLevelFilterBack,
    ResetFilters,

    // ─────────────────────────────────────────────────────────
    // Log View Messages
    // ─────────────────────────────────────────────────────────
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,
    /// Expand/collapse the selected row
    ToggleExpand,
    CollapseAll,
    ToggleAutoScroll,
    PageUp,
    PageDown,

    /// Hide the current notice
    DismissNotice,
}
