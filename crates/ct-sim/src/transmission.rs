//! Prevalence-dependent infection probability.

use ct_core::EpidemicConfig;

/// Picks the per-exposure infection probability from the current infected
/// count.
///
/// ```text
/// infected >  threshold  →  base
/// infected <= threshold  →  base × multiplier
/// ```
///
/// The boost lets a small outbreak take hold; once prevalence passes the
/// threshold the rate drops back to `base`.  The result may exceed 1; the
/// Bernoulli trial saturates it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransmissionRule {
    pub base:       f64,
    pub multiplier: f64,
    /// Absolute infected count T.
    pub threshold:  f64,
}

impl TransmissionRule {
    pub fn from_config(config: &EpidemicConfig) -> Self {
        Self {
            base:       config.infection_probability,
            multiplier: config.infection_multiplier,
            threshold:  config.infection_threshold(),
        }
    }

    #[inline]
    pub fn probability(&self, infected: usize) -> f64 {
        if infected as f64 > self.threshold {
            self.base
        } else {
            self.base * self.multiplier
        }
    }

    /// `true` while the amplified rate is in effect.
    #[inline]
    pub fn is_amplified(&self, infected: usize) -> bool {
        infected as f64 <= self.threshold
    }
}
