//! `ct-output` — simulation output writers for rust_contagion.
//!
//! | Backend     | Files created                                   |
//! |-------------|-------------------------------------------------|
//! | CSV         | `history.csv`, `agent_snapshots.csv`            |
//!
//! Writers implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `ct_sim::SimObserver`.
//! [`write_history`] dumps an already-recorded [`ct_sim::History`] in one go,
//! for runs that were stepped without an observer.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ct_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer, sim.population().len());
//! sim.run_while_prevalent(0.01, None, &mut obs);
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use crate::csv::{CsvWriter, write_history};
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{AgentSnapshotRow, HistoryRow};
pub use writer::OutputWriter;
