use tasker::order::{PathStatus, TaskSequence};

mod common;

fn assert_path(tasks: &TaskSequence, name: &str, links: &[&str], status: PathStatus) {
    let path = tasks.dependency_path(name);
    assert_eq!(path.links(), links, "links of '{name}'");
    assert_eq!(path.status(), status, "status of '{name}'");
}

#[test]
fn terminal_task_has_no_dependencies() {
    common::init_tracing();

    let tasks = TaskSequence::new(
        "
        a =>
        b => c
        c => f
        d => a
        e => b
        f =>
        ",
    );

    assert_path(&tasks, "f", &[], PathStatus::NoDependencies);
}

#[test]
fn valid_chain_lists_every_hop_in_order() {
    let tasks = TaskSequence::new(
        "
        a =>
        b => c
        c => f
        d => a
        e => b
        f =>
        ",
    );

    assert_path(&tasks, "e", &["b", "c", "f"], PathStatus::CorrectDependencies);
}

#[test]
fn undeclared_name_is_an_undefined_task() {
    let tasks = TaskSequence::new("a => b\nb =>");
    assert_path(&tasks, "z", &[], PathStatus::UndefinedTask);
}

#[test]
fn cycle_is_reported_with_the_exact_cycle_members() {
    let tasks = TaskSequence::new(
        "
        a =>
        b => c
        c => e
        d => a
        e => f
        f => b
        g =>
        ",
    );

    assert_path(
        &tasks,
        "f",
        &["b", "c", "e", "f"],
        PathStatus::CircularDependencies,
    );
}

#[test]
fn self_dependent_task_reports_an_empty_chain() {
    let tasks = TaskSequence::new(
        "
        a =>
        b => c
        c => c
        d => b
        e => d
        ",
    );

    assert_path(&tasks, "c", &[], PathStatus::SelfDependentTask);
}

#[test]
fn chain_into_a_self_dependent_task_keeps_the_hops() {
    let tasks = TaskSequence::new(
        "
        a =>
        b => c
        c => c
        d => b
        e => d
        ",
    );

    assert_path(&tasks, "e", &["d", "b", "c"], PathStatus::SelfDependentTask);
}

#[test]
fn chain_into_an_undeclared_name_drops_the_missing_link() {
    let tasks = TaskSequence::new(
        "
        a =>
        b => c
        c => x
        d => b
        ",
    );

    assert_path(&tasks, "d", &["b", "c"], PathStatus::UndefinedDependencies);
}

#[test]
fn direct_dependency_on_an_undeclared_name() {
    // The missing declaration is one hop in, so this is an undefined
    // *dependency*, not an undefined task.
    let tasks = TaskSequence::new("a => x");
    assert_path(&tasks, "a", &[], PathStatus::UndefinedDependencies);
}

#[test]
fn display_renders_links_and_terminal_status() {
    let tasks = TaskSequence::new(
        "
        a =>
        b => c
        c => f
        e => b
        f =>
        ",
    );

    assert_eq!(
        tasks.dependency_path("e").to_string(),
        "b -> c -> f [correct_dependencies]"
    );
    assert_eq!(tasks.dependency_path("f").to_string(), "[no_dependencies]");
}
