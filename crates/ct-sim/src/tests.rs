//! Integration tests for ct-sim.

use ct_agent::{AgentSpec, HealthState};
use ct_core::{AgentId, EpidemicConfig, GridPoint, Tick};

use crate::{NoopObserver, Population, Sim, SimBuilder, SimObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn scenario_config(grid_size: usize) -> EpidemicConfig {
    EpidemicConfig {
        grid_size,
        population: 0,
        initial_infected_fraction: 0.0,
        infection_probability: 0.1,
        infection_multiplier: 5.0,
        infection_threshold_fraction: 0.2,
        sickness_length: 5,
        fast_fraction: 0.0,
        fast_speed_multiplier: 10,
        seed: 42,
    }
}

fn scripted(config: EpidemicConfig, specs: Vec<AgentSpec>) -> Sim {
    SimBuilder::new(config).agents(specs).build().unwrap()
}

fn random_sim(seed: u64) -> Sim {
    let config = EpidemicConfig {
        grid_size: 30,
        population: 400,
        initial_infected_fraction: 0.05,
        seed,
        ..Default::default()
    };
    SimBuilder::new(config).build().unwrap()
}

fn health(sim: &Sim, agent: u32) -> HealthState {
    sim.population().agents().health(AgentId(agent))
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_random_population() {
        let sim = random_sim(1);
        assert_eq!(sim.population().len(), 400);
        assert_eq!(sim.tick(), Tick::ZERO);
        assert!(sim.history().is_empty());
        assert_eq!(sim.population().grid().occupied_count(), 400);
        sim.verify().unwrap();
    }

    #[test]
    fn oversized_population_fails() {
        let config = EpidemicConfig { grid_size: 3, population: 10, ..Default::default() };
        assert!(SimBuilder::new(config).build().is_err());
    }

    #[test]
    fn duplicate_scripted_positions_fail() {
        let result = SimBuilder::new(scenario_config(3))
            .agents(vec![AgentSpec::susceptible(1, 1), AgentSpec::infected(1, 1)])
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn scripted_population_overrides_config_count() {
        let sim = scripted(scenario_config(4), vec![AgentSpec::infected(0, 0)]);
        assert_eq!(sim.config().population, 1);
        assert_eq!(sim.infected(), 1);
    }
}

// ── Literal scenarios ─────────────────────────────────────────────────────────

#[cfg(test)]
mod scenarios {
    use super::*;

    #[test]
    fn lone_infected_agent_recovers_after_sickness_length() {
        let mut sim = scripted(scenario_config(3), vec![AgentSpec::infected(1, 1)]);
        assert_eq!(sim.population().agents().sickness_countdown(AgentId(0)), 5);

        for _ in 0..4 {
            sim.step();
            assert_eq!(health(&sim, 0), HealthState::Infected);
        }
        sim.step();

        assert_eq!(health(&sim, 0), HealthState::Recovered);
        assert_eq!(sim.infected(), 0);
        assert_eq!(sim.history().as_slice(), &[1, 1, 1, 1, 1]);
        sim.verify().unwrap();
    }

    #[test]
    fn full_grid_never_moves() {
        let config = EpidemicConfig {
            grid_size: 2,
            population: 4,
            initial_infected_fraction: 0.5,
            fast_fraction: 0.5,
            ..Default::default()
        };
        let mut sim = SimBuilder::new(config).build().unwrap();
        let start = sim.population().agents().position.clone();

        for _ in 0..50 {
            for &p in &start {
                assert!(sim.population().grid().legal_movements(p).is_empty());
            }
            sim.step();
            assert_eq!(sim.population().agents().position, start);
            sim.verify().unwrap();
        }
    }

    #[test]
    fn amplified_certain_infection_spreads_in_one_tick() {
        let config = EpidemicConfig {
            infection_probability: 1.0,
            infection_threshold_fraction: 1.0,
            ..scenario_config(5)
        };
        let mut sim = scripted(
            config,
            vec![AgentSpec::infected(2, 2), AgentSpec::susceptible(3, 2)],
        );
        assert!(sim.population().rule().is_amplified(sim.infected()));

        sim.step();

        assert_eq!(health(&sim, 1), HealthState::Infected);
        assert_eq!(sim.infected(), 2);
        sim.verify().unwrap();
    }

    #[test]
    fn susceptible_updated_first_is_still_exposed() {
        let config = EpidemicConfig { infection_probability: 1.0, ..scenario_config(5) };
        let mut sim = scripted(
            config,
            vec![AgentSpec::susceptible(0, 0), AgentSpec::infected(1, 1)],
        );
        sim.step();
        assert_eq!(health(&sim, 0), HealthState::Infected);
    }

    #[test]
    fn zero_probability_never_infects() {
        let config = EpidemicConfig { infection_probability: 0.0, ..scenario_config(3) };
        let mut sim = scripted(
            config,
            vec![AgentSpec::infected(0, 0), AgentSpec::susceptible(1, 0)],
        );
        for _ in 0..20 {
            sim.step();
        }
        assert_eq!(health(&sim, 1), HealthState::Susceptible);
    }

    #[test]
    fn recovered_neighbor_is_not_infectious() {
        let config = EpidemicConfig {
            infection_probability: 1.0,
            sickness_length: 1,
            ..scenario_config(2)
        };
        // Full 2x2 grid: nobody moves.  Agent 0 recovers during tick 0,
        // before anyone else is exposed on tick 1.
        let mut sim = scripted(
            config,
            vec![
                AgentSpec::infected(0, 0),
                AgentSpec::susceptible(0, 1),
                AgentSpec::susceptible(1, 0),
                AgentSpec::susceptible(1, 1),
            ],
        );
        sim.step();
        assert_eq!(health(&sim, 0), HealthState::Recovered);
        // Agents 1..3 scanned after agent 0 had already recovered.
        for a in 1..4 {
            assert_eq!(health(&sim, a), HealthState::Susceptible);
        }
        for _ in 0..10 {
            sim.step();
        }
        assert_eq!(sim.infected(), 0);
    }

    #[test]
    fn infection_seen_live_by_later_agents() {
        let config = EpidemicConfig { infection_probability: 1.0, ..scenario_config(2) };
        // Full 2x2 grid; every cell neighbors every other.  Agent 0 is
        // infected by agent 3 first; agents 1 and 2 are exposed to both.
        let mut sim = scripted(
            config,
            vec![
                AgentSpec::susceptible(0, 0),
                AgentSpec::susceptible(0, 1),
                AgentSpec::susceptible(1, 0),
                AgentSpec::infected(1, 1),
            ],
        );
        sim.step();
        assert_eq!(sim.infected(), 4);
        sim.verify().unwrap();
    }
}

// ── Fast agents ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod fast_agents {
    use super::*;

    /// 3x3 grid, free cells (1, 0) and (2, 2).  Agent 0 starts at (0, 0),
    /// out of reach of the infected agent at (2, 1); its only legal move is
    /// to (1, 0), which is adjacent to (2, 1).
    fn corridor(agent0: AgentSpec) -> Vec<AgentSpec> {
        vec![
            agent0,
            AgentSpec::susceptible(0, 1),
            AgentSpec::susceptible(1, 1),
            AgentSpec::susceptible(0, 2),
            AgentSpec::susceptible(1, 2),
            AgentSpec::susceptible(2, 0),
            AgentSpec::infected(2, 1),
        ]
    }

    fn certain() -> EpidemicConfig {
        // Long enough that the remaining inner updates of the tick cannot
        // run the countdown out.
        EpidemicConfig { infection_probability: 1.0, sickness_length: 15, ..scenario_config(3) }
    }

    #[test]
    fn fast_agent_is_exposed_at_cells_it_walks_through() {
        let mut sim = scripted(certain(), corridor(AgentSpec::susceptible(0, 0).fast()));
        sim.step();
        assert_eq!(sim.population().agents().position[0], GridPoint::new(1, 0));
        assert_eq!(health(&sim, 0), HealthState::Infected);
        sim.verify().unwrap();
    }

    #[test]
    fn normal_agent_waits_a_tick_for_the_same_exposure() {
        let mut sim = scripted(certain(), corridor(AgentSpec::susceptible(0, 0)));
        sim.step();
        assert_eq!(sim.population().agents().position[0], GridPoint::new(1, 0));
        assert_eq!(health(&sim, 0), HealthState::Susceptible);
    }

    #[test]
    fn fast_infected_agent_counts_down_per_inner_update() {
        let config = EpidemicConfig { sickness_length: 15, ..scenario_config(4) };
        let mut sim = scripted(config, vec![AgentSpec::infected(0, 0).fast()]);
        sim.step();
        assert_eq!(sim.population().agents().sickness_countdown(AgentId(0)), 5);
        sim.step();
        assert_eq!(health(&sim, 0), HealthState::Recovered);
        assert_eq!(sim.infected(), 0);
    }

    #[test]
    fn fast_agent_moves_at_most_multiplier_cells() {
        let mut sim = scripted(scenario_config(25), vec![AgentSpec::susceptible(12, 12).fast()]);
        sim.step();
        let p = sim.population().agents().position[0];
        assert!((p.x - 12).abs() <= 10 && (p.y - 12).abs() <= 10);
        sim.verify().unwrap();
    }
}

// ── Invariants ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod invariants {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn occupancy_is_a_bijection_every_tick() {
        let mut sim = random_sim(5);
        for _ in 0..60 {
            sim.step();
            let positions: HashSet<GridPoint> =
                sim.population().agents().position.iter().copied().collect();
            assert_eq!(positions.len(), sim.population().len());
            sim.verify().unwrap();
        }
    }

    #[test]
    fn health_only_moves_forward() {
        let mut sim = random_sim(6);
        let mut prev = sim.population().agents().health_slice().to_vec();
        for _ in 0..80 {
            sim.step();
            let now = sim.population().agents().health_slice();
            for (before, after) in prev.iter().zip(now) {
                assert!(before <= after, "{before} -> {after}");
            }
            prev = now.to_vec();
        }
    }

    #[test]
    fn counter_matches_arena() {
        let mut sim = random_sim(7);
        for _ in 0..40 {
            sim.step();
            let (_, infected, _) = sim.population().health_counts();
            assert_eq!(sim.infected(), infected);
        }
    }

    #[test]
    fn history_has_one_entry_per_tick() {
        let mut sim = random_sim(8);
        let initial = sim.infected();
        sim.run_ticks(25, &mut NoopObserver);
        assert_eq!(sim.history().len(), 25);
        assert_eq!(sim.tick(), Tick(25));
        assert_eq!(sim.history().as_slice()[0], initial);
    }

    #[test]
    fn same_seed_same_history() {
        let mut a = random_sim(99);
        let mut b = random_sim(99);
        a.run_ticks(50, &mut NoopObserver);
        b.run_ticks(50, &mut NoopObserver);
        assert_eq!(a.history(), b.history());
        assert_eq!(a.population().agents().position, b.population().agents().position);
    }
}

// ── Transmission rule ─────────────────────────────────────────────────────────

#[cfg(test)]
mod transmission {
    use crate::TransmissionRule;

    #[test]
    fn threshold_is_strict() {
        let rule = TransmissionRule { base: 0.1, multiplier: 5.0, threshold: 10.0 };
        assert!((rule.probability(0) - 0.5).abs() < 1e-12);
        assert!((rule.probability(10) - 0.5).abs() < 1e-12);
        assert!((rule.probability(11) - 0.1).abs() < 1e-12);
        assert!(rule.is_amplified(10));
        assert!(!rule.is_amplified(11));
    }

    #[test]
    fn from_config_uses_population_fraction() {
        let config = ct_core::EpidemicConfig::default();
        let rule = TransmissionRule::from_config(&config);
        assert!((rule.threshold - 1_200.0).abs() < 1e-9);
    }
}

// ── History ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod history {
    use super::*;

    #[test]
    fn peak_and_ratios() {
        let mut sim = scripted(scenario_config(3), vec![AgentSpec::infected(1, 1)]);
        sim.run_ticks(7, &mut NoopObserver);
        let history = sim.history();
        assert_eq!(history.as_slice(), &[1, 1, 1, 1, 1, 0, 0]);
        assert_eq!(history.peak(), Some((Tick(0), 1)));
        assert_eq!(history.latest(), Some(0));
        assert_eq!(history.ratios(1), vec![1.0, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0]);
        assert_eq!(history.iter().nth(5), Some((Tick(5), 0)));
    }

    #[test]
    fn empty_history() {
        let history = crate::History::new();
        assert_eq!(history.peak(), None);
        assert_eq!(history.latest(), None);
    }
}

// ── Run loops and observers ───────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        starts:    Vec<Tick>,
        ends:      Vec<(Tick, usize)>,
        snapshots: Vec<Tick>,
        ended:     Option<Tick>,
    }

    impl SimObserver for Recorder {
        fn on_tick_start(&mut self, tick: Tick) {
            self.starts.push(tick);
        }
        fn on_tick_end(&mut self, tick: Tick, infected: usize) {
            self.ends.push((tick, infected));
        }
        fn on_snapshot(&mut self, tick: Tick, population: &Population) {
            assert!(population.len() > 0);
            self.snapshots.push(tick);
        }
        fn on_sim_end(&mut self, final_tick: Tick) {
            self.ended = Some(final_tick);
        }
    }

    #[test]
    fn observer_sees_every_tick_and_recorded_counts() {
        let mut sim = SimBuilder::new(scenario_config(3))
            .agents(vec![AgentSpec::infected(1, 1)])
            .snapshot_interval(2)
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        sim.run_ticks(6, &mut rec);
        assert_eq!(rec.starts.len(), 6);
        assert_eq!(rec.ends[0], (Tick(0), 1));
        assert_eq!(rec.ends[5], (Tick(5), 0));
        assert_eq!(rec.snapshots, vec![Tick(0), Tick(2), Tick(4)]);
        assert!(rec.ended.is_none());
    }

    #[test]
    fn run_while_prevalent_stops_at_floor() {
        let mut sim = scripted(scenario_config(3), vec![AgentSpec::infected(1, 1)]);
        let mut rec = Recorder::default();
        let ran = sim.run_while_prevalent(0.01, None, &mut rec);
        // Recovery happens during tick 4; the check before tick 5 stops.
        assert_eq!(ran, 5);
        assert_eq!(sim.infected(), 0);
        assert_eq!(rec.ended, Some(Tick(5)));
    }

    #[test]
    fn run_until_respects_max_ticks() {
        let mut sim = random_sim(4);
        let ran = sim.run_until(|_| false, Some(12), &mut NoopObserver);
        assert_eq!(ran, 12);
        assert_eq!(sim.tick(), Tick(12));
    }

    #[test]
    fn nothing_to_do_when_already_below_floor() {
        let mut sim = scripted(scenario_config(3), vec![AgentSpec::susceptible(1, 1)]);
        assert_eq!(sim.run_while_prevalent(0.01, None, &mut NoopObserver), 0);
        assert!(sim.history().is_empty());
    }

    #[test]
    fn agent_views_follow_creation_order() {
        let sim = scripted(
            scenario_config(4),
            vec![AgentSpec::infected(3, 3), AgentSpec::susceptible(0, 0)],
        );
        let views: Vec<_> = sim.agent_views().collect();
        assert_eq!(views[0].id, AgentId(0));
        assert_eq!(views[0].health, HealthState::Infected);
        assert_eq!(views[1].position, GridPoint::new(0, 0));
        assert_eq!(sim.infected_ratio(), 0.5);
    }
}
