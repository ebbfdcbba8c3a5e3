//! Manual mode: one command per stdin line.
//!
//! | Input           | Effect                                      |
//! |-----------------|---------------------------------------------|
//! | empty, `s`      | advance one tick                            |
//! | `s N`           | advance N ticks                             |
//! | `g`             | print the infected-ratio history table      |
//! | `i`             | print the current state                     |
//! | `q`             | write the history CSV and quit              |

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;
use ct_output::write_history;
use ct_sim::Sim;
use tracing::{info, warn};

use crate::report;

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Step(u64),
    Graph,
    Info,
    Quit,
    Unknown(String),
}

pub fn parse(line: &str) -> Command {
    let mut words = line.split_whitespace();
    match (words.next(), words.next()) {
        (None, _) | (Some("s"), None) => Command::Step(1),
        (Some("s"), Some(n)) => match n.parse() {
            Ok(n) => Command::Step(n),
            Err(_) => Command::Unknown(line.trim().to_owned()),
        },
        (Some("g"), None) => Command::Graph,
        (Some("i"), None) => Command::Info,
        (Some("q"), None) => Command::Quit,
        _ => Command::Unknown(line.trim().to_owned()),
    }
}

/// Drive `sim` from `input` until `q` or end of input, echoing reports to
/// `out`.  The history CSV is written to `output_dir` on exit.
pub fn run<R: BufRead, W: Write>(sim: &mut Sim, input: R, mut out: W, output_dir: &Path) -> Result<()> {
    for line in input.lines() {
        match parse(&line?) {
            Command::Step(n) => {
                for _ in 0..n {
                    sim.step();
                }
                info!(
                    tick = sim.tick().0,
                    infected = sim.infected(),
                    population = sim.population().len(),
                    "stepped"
                );
            }
            Command::Graph => {
                write!(out, "{}", report::history_table(sim.history(), sim.population().len()))?;
            }
            Command::Info => write!(out, "{}", report::summary(sim))?,
            Command::Quit => break,
            Command::Unknown(cmd) => warn!(%cmd, "unknown command (s [N], g, i, q)"),
        }
    }
    let path = write_history(output_dir, sim.history(), sim.population().len())?;
    info!(path = %path.display(), "history written");
    Ok(())
}
