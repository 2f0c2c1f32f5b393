use tracing::{debug, warn};

use crate::core::Record;
use crate::data::{DataSource, LoadStatus, PendingLoad};
use crate::error::{PlotError, PlotResult};
use crate::render::Renderer;

use super::ScatterPlot;

impl<R: Renderer> ScatterPlot<R> {
    /// Replaces the record set, hides the tooltip and marks the plot for
    /// re-render.
    pub fn set_records(&mut self, records: Vec<Record>) {
        debug!(count = records.len(), "set records");
        self.load_status = LoadStatus::Loaded {
            count: records.len(),
        };
        self.records = records;
        self.tooltip.hide();
        self.hovered = None;
        self.needs_render = true;
    }

    /// Starts the one load of this mount on a worker thread.
    ///
    /// Any load still in flight from an earlier mount is detached first.
    pub fn mount<S>(&mut self, source: S) -> PlotResult<()>
    where
        S: DataSource + Send + 'static,
    {
        self.pending_load = None;
        match PendingLoad::spawn(source) {
            Ok(pending) => {
                self.pending_load = Some(pending);
                self.load_status = LoadStatus::Pending;
                Ok(())
            }
            Err(err) => {
                self.record_load_failure(&err);
                Err(err)
            }
        }
    }

    /// Applies a finished load, if any. Returns `true` when the load
    /// completed during this call, successfully or not.
    pub fn poll_load(&mut self) -> bool {
        let Some(result) = self.pending_load.as_ref().and_then(PendingLoad::try_take) else {
            return false;
        };
        let origin = self
            .pending_load
            .take()
            .map(|pending| pending.origin().to_owned())
            .unwrap_or_default();

        match result {
            Ok(records) => {
                debug!(origin = %origin, count = records.len(), "dataset load completed");
                self.set_records(records);
            }
            Err(err) => self.record_load_failure(&err),
        }
        true
    }

    /// Fetches on the calling thread and applies the result.
    ///
    /// Failures leave the record set untouched and are returned after being
    /// recorded in [`LoadStatus::Failed`].
    pub fn load_blocking(&mut self, source: &dyn DataSource) -> PlotResult<()> {
        self.pending_load = None;
        match source.fetch() {
            Ok(records) => {
                debug!(origin = %source.describe(), count = records.len(), "dataset loaded");
                self.set_records(records);
                Ok(())
            }
            Err(err) => {
                self.record_load_failure(&err);
                Err(err)
            }
        }
    }

    /// Drops the load handle; a result arriving afterwards is discarded.
    pub fn unmount(&mut self) {
        if self.pending_load.take().is_some() {
            debug!("unmounted with a load in flight");
            self.load_status = LoadStatus::Idle;
        }
        self.tooltip.hide();
        self.hovered = None;
    }

    #[must_use]
    pub fn is_load_pending(&self) -> bool {
        self.pending_load.is_some()
    }

    fn record_load_failure(&mut self, err: &PlotError) {
        warn!(error = %err, kept_records = self.records.len(), "dataset load failed");
        self.load_status = LoadStatus::Failed(err.to_string());
        self.needs_render = true;
    }
}
