//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `history.csv`
//! - `agent_snapshots.csv`

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::Writer;
use ct_sim::History;

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, HistoryRow, OutputResult};

const HISTORY_HEADER: [&str; 3] = ["tick", "infected", "infected_ratio"];
const SNAPSHOT_HEADER: [&str; 5] = ["agent_id", "tick", "x", "y", "health"];

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    history:   Writer<File>,
    snapshots: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open (or truncate) the two CSV files in it,
    /// and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut history = Writer::from_path(dir.join("history.csv"))?;
        history.write_record(HISTORY_HEADER)?;

        let mut snapshots = Writer::from_path(dir.join("agent_snapshots.csv"))?;
        snapshots.write_record(SNAPSHOT_HEADER)?;

        Ok(Self { history, snapshots, finished: false })
    }
}

fn history_record(row: &HistoryRow) -> [String; 3] {
    [
        row.tick.to_string(),
        row.infected.to_string(),
        format!("{:.6}", row.infected_ratio),
    ]
}

impl OutputWriter for CsvWriter {
    fn write_history(&mut self, row: &HistoryRow) -> OutputResult<()> {
        self.history.write_record(history_record(row))?;
        Ok(())
    }

    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.agent_id.to_string(),
                row.tick.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.health.as_str().to_owned(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.history.flush()?;
        self.snapshots.flush()?;
        Ok(())
    }
}

/// Write a complete recorded history to `dir/history.csv` and return the
/// file path.
pub fn write_history(dir: &Path, history: &History, population: usize) -> OutputResult<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join("history.csv");
    let mut w = Writer::from_path(&path)?;
    w.write_record(HISTORY_HEADER)?;
    for (tick, infected) in history.iter() {
        w.write_record(history_record(&HistoryRow::new(tick.0, infected, population)))?;
    }
    w.flush()?;
    Ok(path)
}
