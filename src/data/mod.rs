//! Dataset sources and the background load handle.
//!
//! A load runs on its own thread and hands its result back through a
//! channel. Dropping the [`PendingLoad`] detaches the receiver, so a result
//! that arrives after unmount is silently discarded.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use tracing::{debug, trace};

use crate::core::{Record, parse_records_json};
use crate::error::{PlotError, PlotResult};

pub const DEFAULT_DATASET_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/cyclist-data.json";

/// Anything able to produce the record set in one call.
pub trait DataSource {
    fn fetch(&self) -> PlotResult<Vec<Record>>;

    /// Short human-readable origin used in log fields.
    fn describe(&self) -> String;
}

/// Records decoded from an in-memory JSON document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticDataSource {
    json: String,
}

impl StaticDataSource {
    #[must_use]
    pub fn from_json(json: impl Into<String>) -> Self {
        Self { json: json.into() }
    }

    pub fn from_records(records: &[Record]) -> PlotResult<Self> {
        let json = serde_json::to_string(records)
            .map_err(|e| PlotError::Decode(format!("failed to serialize records: {e}")))?;
        Ok(Self { json })
    }
}

impl DataSource for StaticDataSource {
    fn fetch(&self) -> PlotResult<Vec<Record>> {
        parse_records_json(&self.json)
    }

    fn describe(&self) -> String {
        format!("static json ({} bytes)", self.json.len())
    }
}

/// One blocking GET against a fixed URL; no retry, no authentication.
#[cfg(feature = "remote-data")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpDataSource {
    url: String,
    timeout: std::time::Duration,
}

#[cfg(feature = "remote-data")]
impl HttpDataSource {
    pub const DEFAULT_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(12);

    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[cfg(feature = "remote-data")]
impl Default for HttpDataSource {
    fn default() -> Self {
        Self::new(DEFAULT_DATASET_URL)
    }
}

#[cfg(feature = "remote-data")]
impl DataSource for HttpDataSource {
    fn fetch(&self) -> PlotResult<Vec<Record>> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| PlotError::Fetch(format!("http client error: {e}")))?;
        client
            .get(&self.url)
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(|e| PlotError::Fetch(format!("request to {} failed: {e}", self.url)))?
            .json::<Vec<Record>>()
            .map_err(|e| PlotError::Decode(format!("invalid dataset payload: {e}")))
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Lifecycle of the plot's single load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// Nothing requested yet, or the plot was unmounted.
    Idle,
    Pending,
    Loaded { count: usize },
    /// The record set was left as it was; the message is for diagnostics.
    Failed(String),
}

/// Handle to a load running on a worker thread.
#[derive(Debug)]
pub struct PendingLoad {
    origin: String,
    receiver: Receiver<PlotResult<Vec<Record>>>,
}

impl PendingLoad {
    /// Starts `source.fetch()` on a new thread.
    pub fn spawn<S>(source: S) -> PlotResult<Self>
    where
        S: DataSource + Send + 'static,
    {
        let origin = source.describe();
        let (sender, receiver) = mpsc::channel();
        thread::Builder::new()
            .name("dataset-loader".to_owned())
            .spawn(move || {
                let result = source.fetch();
                // The receiver is gone once the plot unmounts.
                if sender.send(result).is_err() {
                    trace!("load finished after unmount; result dropped");
                }
            })
            .map_err(|e| PlotError::Fetch(format!("failed to spawn loader thread: {e}")))?;

        debug!(origin = %origin, "dataset load started");
        Ok(Self { origin, receiver })
    }

    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Non-blocking check; `None` while the worker is still running.
    #[must_use]
    pub fn try_take(&self) -> Option<PlotResult<Vec<Record>>> {
        match self.receiver.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(PlotError::Fetch(
                "loader thread ended without a result".to_owned(),
            ))),
        }
    }

    /// Blocks until the worker reports.
    pub fn wait(self) -> PlotResult<Vec<Record>> {
        self.receiver.recv().map_err(|_| {
            PlotError::Fetch("loader thread ended without a result".to_owned())
        })?
    }
}
