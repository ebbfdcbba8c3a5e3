//! Text reports of the prevalence history.

use std::fmt::Write;

use ct_sim::{History, Sim};

const BAR_WIDTH: usize = 50;

/// One line per tick: tick, infected count, ratio, and a bar scaled to the
/// population.
pub fn history_table(history: &History, population: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:>6} {:>9} {:>8}", "tick", "infected", "ratio");
    for ((tick, infected), ratio) in history.iter().zip(history.ratios(population)) {
        let bar = "#".repeat((ratio * BAR_WIDTH as f64).round() as usize);
        let _ = writeln!(out, "{:>6} {:>9} {:>8.4} {bar}", tick.0, infected, ratio);
    }
    out
}

/// End-of-run summary.
pub fn summary(sim: &Sim) -> String {
    let population = sim.population().len();
    let (susceptible, infected, recovered) = sim.population().health_counts();
    let mut out = String::new();
    let _ = writeln!(out, "ticks run:   {}", sim.tick().0);
    if let Some((tick, peak)) = sim.history().peak() {
        let ratio = if population == 0 { 0.0 } else { peak as f64 / population as f64 };
        let _ = writeln!(out, "peak:        {peak}/{population} ({ratio:.3}) at {tick}");
    }
    let _ = writeln!(
        out,
        "final:       {susceptible} susceptible, {infected} infected, {recovered} recovered"
    );
    out
}
