use std::collections::HashSet;

use pagesim::policy::PolicyKind;
use pagesim::simulation::Simulator;
use proptest::prelude::*;

const PROPTEST_CASES: u32 = 64;

fn policy() -> impl Strategy<Value = PolicyKind> {
    prop_oneof![
        Just(PolicyKind::Fifo),
        Just(PolicyKind::Lru),
        Just(PolicyKind::Opt),
    ]
}

fn reference() -> impl Strategy<Value = Vec<u32>> {
    proptest::collection::vec(0u32..=9, 1..=50)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(PROPTEST_CASES))]

    #[test]
    fn reset_replays_identically(capacity in 1usize..=10, pages in reference(), policy in policy()) {
        let mut simulator = Simulator::new();
        simulator.configure(capacity, pages, policy).unwrap();
        let first = simulator.run_to_completion().unwrap();

        simulator.reset().unwrap();
        let second = simulator.run_to_completion().unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn total_faults_match_fault_steps(capacity in 1usize..=10, pages in reference(), policy in policy()) {
        let mut simulator = Simulator::new();
        simulator.configure(capacity, pages.clone(), policy).unwrap();
        let results = simulator.run_to_completion().unwrap();

        let faults = results.iter().filter(|r| r.is_fault()).count();
        prop_assert_eq!(simulator.total_faults().unwrap(), faults);
        prop_assert_eq!(results.len(), pages.len());
        prop_assert!(simulator.is_complete().unwrap());
    }

    #[test]
    fn occupancy_is_bounded_and_never_shrinks(capacity in 1usize..=10, pages in reference(), policy in policy()) {
        let mut simulator = Simulator::new();
        simulator.configure(capacity, pages, policy).unwrap();

        let mut occupied = 0;
        while let Some(result) = simulator.step().unwrap() {
            prop_assert_eq!(result.frames.len(), capacity);
            let now = result.frames.iter().filter(|slot| slot.is_some()).count();
            prop_assert!(now <= capacity);
            prop_assert!(now >= occupied);
            occupied = now;

            // Resident pages are distinct
            let distinct: HashSet<_> = result.frames.iter().flatten().collect();
            prop_assert_eq!(distinct.len(), now);
        }
    }

    #[test]
    fn first_sight_always_faults(capacity in 1usize..=10, pages in reference(), policy in policy()) {
        let mut simulator = Simulator::new();
        simulator.configure(capacity, pages, policy).unwrap();

        let mut seen = HashSet::new();
        for result in simulator.run_to_completion().unwrap() {
            if seen.insert(result.page) {
                prop_assert!(result.is_fault());
            }
        }
        prop_assert!(simulator.total_faults().unwrap() >= seen.len().min(capacity));
    }

    #[test]
    fn history_grows_one_entry_per_step(capacity in 1usize..=10, pages in reference(), policy in policy()) {
        let mut simulator = Simulator::new();
        simulator.configure(capacity, pages, policy).unwrap();

        let mut steps = 0;
        while let Some(result) = simulator.step().unwrap() {
            steps += 1;
            for frame in 0..capacity {
                let history = simulator.history(frame).unwrap();
                prop_assert_eq!(history.len(), steps);
                prop_assert_eq!(history[steps - 1], result.frames[frame]);
            }
        }
    }

    #[test]
    fn opt_never_worse_than_fifo_or_lru(capacity in 1usize..=10, pages in reference()) {
        let faults = |policy| {
            let mut simulator = Simulator::new();
            simulator.configure(capacity, pages.clone(), policy).unwrap();
            simulator.run_to_completion().unwrap();
            simulator.total_faults().unwrap()
        };
        let opt = faults(PolicyKind::Opt);
        prop_assert!(opt <= faults(PolicyKind::Fifo));
        prop_assert!(opt <= faults(PolicyKind::Lru));
    }
}
