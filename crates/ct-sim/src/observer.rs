//! Simulation observer trait for progress reporting and data collection.

use ct_core::Tick;

use crate::Population;

/// Callbacks invoked by the [`Sim`][crate::Sim] run loops at key points of
/// each tick.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { population: usize }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, infected: usize) {
///         println!("iteration {}: {infected}/{}", tick.0, self.population);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before the grid commit.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick with the infected count that was
    /// recorded into the history for this tick.
    fn on_tick_end(&mut self, _tick: Tick, _infected: usize) {}

    /// Called at snapshot intervals with read-only access to every agent.
    fn on_snapshot(&mut self, _tick: Tick, _population: &Population) {}

    /// Called once when a run loop finishes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
