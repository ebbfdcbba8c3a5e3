//! Unit tests for ct-agent.

#[cfg(test)]
mod state_machine {
    use ct_core::{AgentId, SimRng};

    use crate::{AgentSpec, AgentStoreBuilder, HealthState};

    fn one_agent(infected: bool) -> crate::AgentStore {
        let spec = if infected { AgentSpec::infected(0, 0) } else { AgentSpec::susceptible(0, 0) };
        AgentStoreBuilder::explicit(3, 5, vec![spec]).build(&mut SimRng::new(0)).unwrap()
    }

    #[test]
    fn infect_sets_countdown_and_flag() {
        let mut store = one_agent(false);
        let a = AgentId(0);
        assert_eq!(store.health(a), HealthState::Susceptible);
        assert!(store.infect(a, 7));
        assert_eq!(store.health(a), HealthState::Infected);
        assert_eq!(store.sickness_countdown(a), 7);
        assert!(store.has_been_sick(a));
    }

    #[test]
    fn countdown_reaches_zero_exactly_once() {
        let mut store = one_agent(true);
        let a = AgentId(0);
        let mut recoveries = 0;
        for step in 1..=20 {
            if store.tick_sickness(a) {
                recoveries += 1;
                assert_eq!(step, 5);
            }
        }
        assert_eq!(recoveries, 1);
        assert_eq!(store.health(a), HealthState::Recovered);
        assert_eq!(store.sickness_countdown(a), 0);
    }

    #[test]
    fn recovered_agent_cannot_be_reinfected() {
        let mut store = one_agent(true);
        let a = AgentId(0);
        for _ in 0..5 {
            store.tick_sickness(a);
        }
        assert!(!store.infect(a, 5));
        assert_eq!(store.health(a), HealthState::Recovered);
    }

    #[test]
    fn infected_agent_cannot_be_reinfected() {
        let mut store = one_agent(true);
        let a = AgentId(0);
        store.tick_sickness(a);
        assert!(!store.infect(a, 5));
        assert_eq!(store.sickness_countdown(a), 4);
    }

    #[test]
    fn susceptible_countdown_is_inert() {
        let mut store = one_agent(false);
        assert!(!store.tick_sickness(AgentId(0)));
        assert_eq!(store.health(AgentId(0)), HealthState::Susceptible);
    }

    #[test]
    fn health_predicates() {
        assert!(HealthState::Infected.is_infectious());
        assert!(!HealthState::Recovered.is_infectious());
        assert_eq!(HealthState::Susceptible.to_string(), "susceptible");
    }
}

#[cfg(test)]
mod builder {
    use std::collections::HashSet;

    use ct_core::{EpidemicConfig, GridPoint, SimRng};

    use crate::{AgentError, AgentSpec, AgentStoreBuilder, HealthState, SpeedClass};

    fn config(grid_size: usize, population: usize) -> EpidemicConfig {
        EpidemicConfig { grid_size, population, ..Default::default() }
    }

    #[test]
    fn random_positions_are_distinct_and_in_bounds() {
        let cfg = config(10, 80);
        let store = AgentStoreBuilder::from_config(&cfg).build(&mut SimRng::new(3)).unwrap();
        assert_eq!(store.count, 80);
        let unique: HashSet<GridPoint> = store.position.iter().copied().collect();
        assert_eq!(unique.len(), 80);
        assert!(store.position.iter().all(|p| p.in_bounds(10)));
    }

    #[test]
    fn full_grid_uses_every_cell() {
        let cfg = config(2, 4);
        let store = AgentStoreBuilder::from_config(&cfg).build(&mut SimRng::new(3)).unwrap();
        let unique: HashSet<GridPoint> = store.position.iter().copied().collect();
        assert_eq!(unique.len(), 4);
    }

    #[test]
    fn oversized_population_fails() {
        let cfg = config(2, 5);
        let err = AgentStoreBuilder::from_config(&cfg).build(&mut SimRng::new(3)).unwrap_err();
        assert!(matches!(err, AgentError::PopulationExceedsGrid { population: 5, cells: 4 }));
    }

    #[test]
    fn unaddressable_grid_side_fails() {
        let err = AgentStoreBuilder::explicit(usize::MAX, 5, vec![])
            .build(&mut SimRng::new(3))
            .unwrap_err();
        assert!(matches!(err, AgentError::Config(_)));
    }

    #[test]
    fn rolls_follow_probabilities_at_extremes() {
        let cfg = EpidemicConfig {
            initial_infected_fraction: 1.0,
            fast_fraction: 0.0,
            ..config(10, 30)
        };
        let store = AgentStoreBuilder::from_config(&cfg).build(&mut SimRng::new(9)).unwrap();
        assert_eq!(store.count_infected(), 30);
        assert_eq!(store.count_fast(), 0);
        assert!(store.ids().all(|a| store.sickness_countdown(a) == cfg.sickness_length));

        let cfg = EpidemicConfig { initial_infected_fraction: 0.0, fast_fraction: 1.0, ..cfg };
        let store = AgentStoreBuilder::from_config(&cfg).build(&mut SimRng::new(9)).unwrap();
        assert_eq!(store.count_infected(), 0);
        assert_eq!(store.count_fast(), 30);
    }

    #[test]
    fn same_seed_same_population() {
        let cfg = config(20, 150);
        let a = AgentStoreBuilder::from_config(&cfg).build(&mut SimRng::new(11)).unwrap();
        let b = AgentStoreBuilder::from_config(&cfg).build(&mut SimRng::new(11)).unwrap();
        assert_eq!(a.position, b.position);
        assert_eq!(a.speed, b.speed);
        assert_eq!(a.health_slice(), b.health_slice());
    }

    #[test]
    fn explicit_specs_are_kept_in_order() {
        let specs = vec![AgentSpec::infected(1, 1), AgentSpec::susceptible(0, 2).fast()];
        let store = AgentStoreBuilder::explicit(3, 5, specs).build(&mut SimRng::new(0)).unwrap();
        let views: Vec<_> = store.views().collect();
        assert_eq!(views[0].position, GridPoint::new(1, 1));
        assert_eq!(views[0].health, HealthState::Infected);
        assert_eq!(views[1].speed, SpeedClass::Fast);
        assert_eq!(views[1].health, HealthState::Susceptible);
    }

    #[test]
    fn explicit_out_of_bounds_fails() {
        let specs = vec![AgentSpec::susceptible(3, 0)];
        let err = AgentStoreBuilder::explicit(3, 5, specs).build(&mut SimRng::new(0)).unwrap_err();
        assert!(matches!(err, AgentError::OutOfBounds { index: 0, .. }));
    }

    #[test]
    fn speed_multiplier() {
        assert_eq!(SpeedClass::Normal.updates_per_tick(10), 1);
        assert_eq!(SpeedClass::Fast.updates_per_tick(10), 10);
    }
}
