//! Test utilities for control-plane consumers
//!
//! Provides [`ScriptedControlPlane`], a [`ControlPlane`] that replays queued
//! responses (optionally after a delay) and records every call it receives.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use psmon_core::prelude::*;
use psmon_core::{Category, Event, Level, Snapshot};

use crate::control::ControlPlane;
use crate::wire;

/// A call observed by [`ScriptedControlPlane`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    FetchSnapshot,
    FetchEvents,
    SetConnection {
        connect: bool,
        exit_country: Option<String>,
    },
    SetKillSwitch(bool),
    SetExitCountry(Option<String>),
    Shutdown,
}

struct Scripted<T> {
    delay: Duration,
    result: Result<T>,
}

#[derive(Default)]
struct Script {
    snapshots: VecDeque<Scripted<Snapshot>>,
    events: VecDeque<Scripted<Vec<Event>>>,
    connection: VecDeque<Scripted<bool>>,
    kill_switch: VecDeque<Scripted<bool>>,
    exit_country: VecDeque<Scripted<Option<String>>>,
    calls: Vec<Call>,
}

/// Replays queued responses in FIFO order per operation.
///
/// An operation with nothing queued fails with a request error, which looks
/// like an unreachable collaborator to the caller.
#[derive(Default)]
pub struct ScriptedControlPlane {
    script: Mutex<Script>,
}

macro_rules! push_fns {
    ($push:ident, $push_delayed:ident, $field:ident, $ty:ty) => {
        pub fn $push(&self, result: Result<$ty>) -> &Self {
            self.$push_delayed(Duration::ZERO, result)
        }

        pub fn $push_delayed(&self, delay: Duration, result: Result<$ty>) -> &Self {
            if let Ok(mut script) = self.script.lock() {
                script.$field.push_back(Scripted { delay, result });
            }
            self
        }
    };
}

impl ScriptedControlPlane {
    pub fn new() -> Self {
        Self::default()
    }

    push_fns!(push_snapshot, push_snapshot_delayed, snapshots, Snapshot);
    push_fns!(push_events, push_events_delayed, events, Vec<Event>);
    push_fns!(push_connection, push_connection_delayed, connection, bool);
    push_fns!(push_kill_switch, push_kill_switch_delayed, kill_switch, bool);
    push_fns!(push_exit_country, push_exit_country_delayed, exit_country, Option<String>);

    /// Every call received so far, in order.
    pub fn calls(&self) -> Vec<Call> {
        self.script
            .lock()
            .map(|s| s.calls.clone())
            .unwrap_or_default()
    }

    fn take<T>(
        &self,
        call: Call,
        endpoint: &'static str,
        pick: impl FnOnce(&mut Script) -> Option<Scripted<T>>,
    ) -> Scripted<T> {
        let next = match self.script.lock() {
            Ok(mut script) => {
                script.calls.push(call);
                pick(&mut script)
            }
            Err(_) => None,
        };
        next.unwrap_or_else(|| Scripted {
            delay: Duration::ZERO,
            result: Err(Error::request(endpoint, "no scripted response")),
        })
    }
}

async fn replay<T>(scripted: Scripted<T>) -> Result<T> {
    if !scripted.delay.is_zero() {
        tokio::time::sleep(scripted.delay).await;
    }
    scripted.result
}

impl ControlPlane for ScriptedControlPlane {
    async fn fetch_snapshot(&self) -> Result<Snapshot> {
        let next = self.take(Call::FetchSnapshot, wire::STATS_PATH, |s| {
            s.snapshots.pop_front()
        });
        replay(next).await
    }

    async fn fetch_events(&self) -> Result<Vec<Event>> {
        let next = self.take(Call::FetchEvents, wire::LOGS_PATH, |s| s.events.pop_front());
        replay(next).await
    }

    async fn set_connection(&self, connect: bool, exit_country: Option<String>) -> Result<bool> {
        let call = Call::SetConnection {
            connect,
            exit_country,
        };
        let next = self.take(call, wire::CONNECTION_PATH, |s| s.connection.pop_front());
        replay(next).await
    }

    async fn set_kill_switch(&self, enabled: bool) -> Result<bool> {
        let next = self.take(Call::SetKillSwitch(enabled), wire::KILL_SWITCH_PATH, |s| {
            s.kill_switch.pop_front()
        });
        replay(next).await
    }

    async fn set_exit_country(&self, country: Option<String>) -> Result<Option<String>> {
        let next = self.take(Call::SetExitCountry(country), wire::EXIT_COUNTRY_PATH, |s| {
            s.exit_country.pop_front()
        });
        replay(next).await
    }

    async fn shutdown(&self) -> Result<()> {
        if let Ok(mut script) = self.script.lock() {
            script.calls.push(Call::Shutdown);
        }
        Ok(())
    }
}

/// Creates a test event with an `info` level.
pub fn test_event(timestamp: &str, category: Category, message: &str) -> Event {
    Event::new(timestamp, Level::Info, category, message, None)
}

/// Creates a snapshot with the connection flag and blocked counters set.
pub fn test_snapshot(tor_connected: bool, requests_blocked: u64, trackers_blocked: u64) -> Snapshot {
    Snapshot {
        tor_connected,
        requests_blocked,
        trackers_blocked,
        total_requests: requests_blocked * 3,
        proxy_running: true,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_replays_in_order_then_fails() {
        let plane = ScriptedControlPlane::new();
        plane
            .push_kill_switch(Ok(true))
            .push_kill_switch(Ok(false));

        assert!(plane.set_kill_switch(true).await.unwrap());
        assert!(!plane.set_kill_switch(true).await.unwrap());
        assert!(plane.set_kill_switch(true).await.is_err());
        assert_eq!(plane.calls().len(), 3);
    }

    #[tokio::test]
    async fn test_records_call_arguments() {
        let plane = ScriptedControlPlane::new();
        plane.push_connection(Ok(true));
        plane.set_connection(true, Some("de".into())).await.unwrap();
        assert_eq!(
            plane.calls(),
            vec![Call::SetConnection {
                connect: true,
                exit_country: Some("de".into())
            }]
        );
    }

    #[test]
    fn test_snapshot_helper() {
        let snap = test_snapshot(false, 12, 5);
        assert!(!snap.tor_connected);
        assert_eq!(snap.total_requests, 36);
    }
}
