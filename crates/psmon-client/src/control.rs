//! Control-plane operations against the collaborator
//!
//! [`ControlPlane`] is the seam the app layer depends on. [`HttpControlPlane`]
//! talks to the real collaborator over loopback HTTP; tests substitute the
//! scripted implementation from `test_utils`.

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;

use psmon_core::prelude::*;
use psmon_core::{Event, Snapshot};

use crate::wire::{self, ConnectionRequest, ExitCountryRequest, KillSwitchRequest};

/// Default collaborator address
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3030";

/// Timeout for poll requests
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Timeout for commands; connecting may wait on circuit setup
pub const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_secs(10);

/// The collaborator exits without answering, so there is no point waiting long.
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(2);

/// Operations the dashboard performs against the collaborator.
#[trait_variant::make(ControlPlane: Send)]
pub trait LocalControlPlane {
    /// Fetch the current aggregate snapshot
    async fn fetch_snapshot(&self) -> Result<Snapshot>;

    /// Fetch the full current event list
    async fn fetch_events(&self) -> Result<Vec<Event>>;

    /// Ask for the connection to be brought up or down.
    ///
    /// Returns the collaborator's confirmed connection state, which may differ
    /// from `connect`.
    async fn set_connection(&self, connect: bool, exit_country: Option<String>) -> Result<bool>;

    /// Enable or disable the kill switch; returns the confirmed state.
    async fn set_kill_switch(&self, enabled: bool) -> Result<bool>;

    /// Change the preferred exit country (`None` = auto); returns the
    /// confirmed selection.
    async fn set_exit_country(&self, country: Option<String>) -> Result<Option<String>>;

    /// Ask the collaborator process to exit.
    async fn shutdown(&self) -> Result<()>;
}

/// Connection parameters for [`HttpControlPlane`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub request_timeout: Duration,
    pub command_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            command_timeout: DEFAULT_COMMAND_TIMEOUT,
        }
    }
}

/// [`ControlPlane`] over the collaborator's HTTP API.
#[derive(Debug, Clone)]
pub struct HttpControlPlane {
    client: Client,
    base_url: String,
    request_timeout: Duration,
    command_timeout: Duration,
}

impl HttpControlPlane {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let base_url = normalize_base_url(&config.base_url)?;
        let client = Client::builder()
            .build()
            .map_err(|e| Error::request(base_url.as_str(), e.to_string()))?;
        Ok(Self {
            client,
            base_url,
            request_timeout: config.request_timeout,
            command_timeout: config.command_timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str, timeout: Duration) -> RequestBuilder {
        self.client
            .request(method, format!("{}{}", self.base_url, path))
            .timeout(timeout)
    }

    /// Send, require a 2xx status, and return the raw body.
    async fn send(
        &self,
        path: &'static str,
        req: RequestBuilder,
        timeout: Duration,
    ) -> Result<Vec<u8>> {
        let resp = req.send().await.map_err(|e| map_reqwest(path, timeout, e))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::status(path, status.as_u16()));
        }
        let body = resp
            .bytes()
            .await
            .map_err(|e| map_reqwest(path, timeout, e))?;
        trace!("{} -> {} ({} bytes)", path, status, body.len());
        Ok(body.to_vec())
    }

    async fn get(&self, path: &'static str) -> Result<Vec<u8>> {
        let timeout = self.request_timeout;
        let req = self.request(Method::GET, path, timeout);
        self.send(path, req, timeout).await
    }

    async fn command<B: Serialize>(
        &self,
        method: Method,
        path: &'static str,
        body: &B,
    ) -> Result<Vec<u8>> {
        let timeout = self.command_timeout;
        let req = self.request(method, path, timeout).json(body);
        self.send(path, req, timeout).await
    }
}

impl ControlPlane for HttpControlPlane {
    async fn fetch_snapshot(&self) -> Result<Snapshot> {
        let body = self.get(wire::STATS_PATH).await?;
        wire::decode_snapshot(&body)
    }

    async fn fetch_events(&self) -> Result<Vec<Event>> {
        let body = self.get(wire::LOGS_PATH).await?;
        wire::decode_events(&body)
    }

    async fn set_connection(&self, connect: bool, exit_country: Option<String>) -> Result<bool> {
        let req = ConnectionRequest {
            connect,
            exit_country,
        };
        let body = self
            .command(Method::POST, wire::CONNECTION_PATH, &req)
            .await?;
        wire::decode_connection(&body)
    }

    async fn set_kill_switch(&self, enabled: bool) -> Result<bool> {
        let body = self
            .command(Method::POST, wire::KILL_SWITCH_PATH, &KillSwitchRequest { enabled })
            .await?;
        wire::decode_kill_switch(&body)
    }

    async fn set_exit_country(&self, country: Option<String>) -> Result<Option<String>> {
        let body = self
            .command(Method::PUT, wire::EXIT_COUNTRY_PATH, &ExitCountryRequest { country })
            .await?;
        wire::decode_exit_country(&body)
    }

    async fn shutdown(&self) -> Result<()> {
        let path = wire::SHUTDOWN_PATH;
        let result = self
            .request(Method::POST, path, SHUTDOWN_TIMEOUT)
            .send()
            .await;
        match result {
            Ok(resp) => {
                debug!("Shutdown acknowledged with {}", resp.status());
                Ok(())
            }
            // Never reached the collaborator
            Err(e) if e.is_connect() => Err(Error::request(path, e.to_string())),
            // The process exits mid-request; a dropped connection means it went away
            Err(e) => {
                debug!("Shutdown request ended without a reply: {}", e);
                Ok(())
            }
        }
    }
}

fn map_reqwest(endpoint: &str, timeout: Duration, e: reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::timeout(endpoint, timeout)
    } else if e.is_decode() {
        Error::decode(endpoint, e.to_string())
    } else {
        Error::request(endpoint, e.to_string())
    }
}

/// Validate the base URL and strip trailing slashes.
pub fn normalize_base_url(url: &str) -> Result<String> {
    let trimmed = url.trim().trim_end_matches('/');
    // Loopback only; the client is built without TLS
    match trimmed.strip_prefix("http://") {
        Some(host) if !host.is_empty() => Ok(trimmed.to_string()),
        _ => Err(Error::invalid_url(url)),
    }
}
