//! Append-only prevalence series.

use ct_core::Tick;

/// Infected count sampled once per completed tick, at the start of the
/// tick's agent updates.  Entry `i` belongs to tick `i`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct History {
    infected: Vec<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn push(&mut self, infected: usize) {
        self.infected.push(infected);
    }

    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.infected
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.infected.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.infected.is_empty()
    }

    pub fn latest(&self) -> Option<usize> {
        self.infected.last().copied()
    }

    /// The first tick with the highest infected count.
    pub fn peak(&self) -> Option<(Tick, usize)> {
        self.infected
            .iter()
            .enumerate()
            .fold(None, |best, (i, &n)| match best {
                Some((_, m)) if m >= n => best,
                _ => Some((Tick(i as u64), n)),
            })
    }

    /// Infected share of `population` per tick, for prevalence charts.
    pub fn ratios(&self, population: usize) -> Vec<f64> {
        if population == 0 {
            return vec![0.0; self.infected.len()];
        }
        self.infected
            .iter()
            .map(|&n| n as f64 / population as f64)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Tick, usize)> + '_ {
        self.infected
            .iter()
            .enumerate()
            .map(|(i, &n)| (Tick(i as u64), n))
    }
}
