//! `ct-sim` — tick loop orchestrator for the rust_contagion model.
//!
//! # One tick
//!
//! ```text
//! step():
//!   ① Commit   — the grid's next buffer becomes current.
//!   ② Record   — the infected count is appended to the history.
//!   ③ Update   — every agent in creation order runs its inner update
//!                once (normal) or `fast_speed_multiplier` times (fast):
//!                  exposure check + infection roll   (never sick yet)
//!                  countdown step + recovery         (already sick)
//!                  random legal move, or stay
//!   ④ Advance  — the tick counter moves on.
//! ```
//!
//! Later agents see moves that earlier agents wrote into the next buffer
//! (and cannot enter those cells), but exposure only ever reads the
//! committed buffer.
//!
//! # Fast agents
//!
//! The grid is not re-committed between a fast agent's inner updates.  A
//! fast agent therefore scans the tick-start positions of everyone else
//! from each cell it visits during the tick; it can walk into the reach of
//! an infected agent's tick-start cell and be infected within the same tick,
//! which a normal agent cannot.  This asymmetry is part of the model.
//!
//! # Quick-start
//!
//! ```rust
//! use ct_core::EpidemicConfig;
//! use ct_sim::{NoopObserver, SimBuilder};
//!
//! let config = EpidemicConfig { grid_size: 30, population: 200, ..Default::default() };
//! let mut sim = SimBuilder::new(config).build().unwrap();
//! sim.run_while_prevalent(0.01, Some(500), &mut NoopObserver);
//! assert!(sim.tick().0 <= 500);
//! assert_eq!(sim.history().len() as u64, sim.tick().0);
//! ```

pub mod builder;
pub mod error;
pub mod history;
pub mod observer;
pub mod population;
pub mod sim;
pub mod transmission;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use history::History;
pub use observer::{NoopObserver, SimObserver};
pub use population::Population;
pub use sim::Sim;
pub use transmission::TransmissionRule;
