//! The `OutputWriter` trait implemented by all backend writers.

use crate::{AgentSnapshotRow, HistoryRow, OutputResult};

/// Trait implemented by output backends.
///
/// Errors are stored by [`SimOutputObserver`][crate::SimOutputObserver] and
/// retrieved with its `take_error`.
pub trait OutputWriter {
    /// Write one history row.
    fn write_history(&mut self, row: &HistoryRow) -> OutputResult<()>;

    /// Write a batch of agent snapshots.
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; calling it twice is harmless.
    fn finish(&mut self) -> OutputResult<()>;
}
