//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use ct_core::Tick;
use ct_sim::{Population, SimObserver};
use tracing::warn;

use crate::row::{AgentSnapshotRow, HistoryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes one history row per tick and agent
/// snapshots at the simulation's snapshot interval.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After a run loop returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    population: usize,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Observer backed by `writer`; `population` scales the infected ratio.
    pub fn new(writer: W, population: usize) -> Self {
        Self { writer, population, last_error: None }
    }

    /// Take the stored write error (if any).  Returns `None` if all writes
    /// succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!(error = %e, "output write failed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, infected: usize) {
        let row = HistoryRow::new(tick.0, infected, self.population);
        let result = self.writer.write_history(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, population: &Population) {
        let rows: Vec<AgentSnapshotRow> = population
            .agent_views()
            .map(|v| AgentSnapshotRow::from_view(tick.0, &v))
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
