use proptest::prelude::*;

use tasker::order::TaskSequence;

// Strategy to generate a valid configuration: task N may depend on nothing,
// or on one of the tasks 0..N-1. Backward-only references make the config
// acyclic by construction and keep the insertion rule's ordering guarantee
// exercisable for every declared pair.
fn config_strategy(max_tasks: usize) -> impl Strategy<Value = String> {
    (1..=max_tasks).prop_flat_map(|num_tasks| {
        proptest::collection::vec(proptest::option::of(any::<usize>()), num_tasks).prop_map(
            |raw_deps| {
                let mut lines = Vec::new();
                for (i, dep) in raw_deps.into_iter().enumerate() {
                    match dep {
                        Some(raw) if i > 0 => {
                            lines.push(format!("task_{i} => task_{}", raw % i));
                        }
                        _ => lines.push(format!("task_{i} =>")),
                    }
                }
                lines.join("\n")
            },
        )
    })
}

proptest! {
    #[test]
    fn every_dependency_precedes_its_dependent(config in config_strategy(12)) {
        let tasks = TaskSequence::new(&config);
        let sequence = tasks.sequence().expect("generated config must sequence");
        let data = tasks.config_data();

        // Each declared task appears exactly once.
        prop_assert_eq!(sequence.len(), data.len());
        for decl in data.declarations() {
            prop_assert_eq!(
                sequence.iter().filter(|task| *task == &decl.name).count(),
                1
            );
        }

        // Declared dependencies come strictly earlier in the result.
        for decl in data.declarations() {
            if let Some(dep) = decl.dependency.as_deref() {
                let dep_idx = sequence.iter().position(|task| task == dep).unwrap();
                let task_idx = sequence.iter().position(|task| task == &decl.name).unwrap();
                prop_assert!(
                    dep_idx < task_idx,
                    "'{}' should precede '{}' in {:?}",
                    dep,
                    decl.name,
                    sequence
                );
            }
        }
    }

    #[test]
    fn sequencing_is_stable_across_calls(config in config_strategy(8)) {
        let tasks = TaskSequence::new(&config);
        prop_assert_eq!(tasks.sequence(), tasks.sequence());
    }
}
