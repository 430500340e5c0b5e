use proptest::prelude::*;

use life_automaton::{seed, step, Configuration, Error, RawConfig, RuleSet, SimulationController};

fn dims_and_count() -> impl Strategy<Value = (usize, usize, usize)> {
    (1usize..24, 1usize..24).prop_flat_map(|(w, h)| (Just(w), Just(h), 0..=w * h))
}

proptest! {
    #[test]
    fn configure_places_exact_cell_count((w, h, n) in dims_and_count(), s in any::<u64>()) {
        let config = Configuration {
            width: w,
            height: h,
            cell_count: n,
            rules: RuleSet::conway(),
            interval: std::time::Duration::from_millis(1),
            seed: Some(s),
        };
        let mut sim = SimulationController::new();
        sim.configure(&config).unwrap();
        prop_assert_eq!(sim.population(), n);
    }

    #[test]
    fn one_cell_too_many_is_rejected(w in 1usize..40, h in 1usize..40) {
        let raw = RawConfig {
            width: w.to_string(),
            height: h.to_string(),
            cell_count: (w * h + 1).to_string(),
            ..RawConfig::default()
        };
        prop_assert_eq!(
            raw.parse(),
            Err(Error::InvalidCellCount { count: (w * h + 1) as i64, capacity: (w * h) as u64 })
        );
    }

    #[test]
    fn same_seed_same_grid((w, h, n) in dims_and_count(), s in any::<u64>()) {
        prop_assert_eq!(seed(w, h, n, Some(s)).unwrap(), seed(w, h, n, Some(s)).unwrap());
    }

    #[test]
    fn repeated_configure_with_seed_is_reproducible((w, h, n) in dims_and_count(), s in any::<u64>()) {
        let config = Configuration {
            width: w,
            height: h,
            cell_count: n,
            rules: RuleSet::conway(),
            interval: std::time::Duration::from_millis(1),
            seed: Some(s),
        };
        let mut sim = SimulationController::new();
        sim.configure(&config).unwrap();
        let first = sim.current_grid().cloned();
        sim.play();
        sim.configure(&config).unwrap();
        prop_assert_eq!(sim.current_grid().cloned(), first);
        prop_assert_eq!(sim.current_step(), 0);
    }

    #[test]
    fn step_keeps_dimensions((w, h, n) in dims_and_count(), birth in "[0-8]{0,4}", survival in "[0-8]{0,4}") {
        let rules = RuleSet::parse(&birth, &survival).unwrap();
        let g = seed(w, h, n, Some(0)).unwrap();
        let next = step(&g, &rules);
        prop_assert_eq!((next.width(), next.height()), (w, h));
    }
}
