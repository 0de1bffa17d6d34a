//! Scenario runner tests over the shipped scenario files

use mise::scenario::{Scenario, ScenarioRunner};
use mise::Recipe;
use std::path::PathBuf;
use std::time::Duration;

fn scenario_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(name)
}

fn run(name: &str) -> mise::scenario::ScenarioReport {
    let scenario = Scenario::load(scenario_path(name)).unwrap();
    ScenarioRunner::new(Recipe::carbonara(), Duration::from_secs(1))
        .unwrap()
        .run(&scenario)
}

#[test]
fn test_boil_water_scenario_passes() {
    let report = run("boil_water.toml");
    assert!(report.passed(), "failures: {:?}", report.failures);
    assert_eq!(report.elapsed, Duration::from_secs(570));
}

#[test]
fn test_full_walkthrough_scenario_passes() {
    let report = run("full_walkthrough.toml");
    assert!(report.passed(), "failures: {:?}", report.failures);
    assert_eq!(report.actions_run, 16);
}

#[test]
fn test_failing_assertion_is_reported() {
    let scenario = Scenario::from_toml_str(
        r#"
            [scenario]
            name = "Wrong expectation"

            [[actions]]
            action = { type = "toggle_timer" }

            [[actions]]
            action = { type = "advance", seconds = 10 }
            assert = { type = "timer_display", text = "08:00" }

            [[actions]]
            action = { type = "next" }
            assert = { type = "step_number", number = 2 }
        "#,
        "inline",
    )
    .unwrap();

    let report = ScenarioRunner::new(Recipe::carbonara(), Duration::from_secs(1))
        .unwrap()
        .run(&scenario);
    assert!(!report.passed());
    assert_eq!(report.failures.len(), 1);
    assert!(report.failures[0].contains("07:50"));
    assert!(report.summary().contains("FAILED"));
}

#[test]
fn test_short_tick_interval_speeds_up_countdown() {
    let scenario = Scenario::from_toml_str(
        r#"
            [scenario]
            name = "Fast ticks"

            [[actions]]
            action = { type = "toggle_timer" }

            [[actions]]
            action = { type = "advance", millis = 4800 }
            assert = { type = "timer_phase", phase = "complete" }

            [[actions]]
            action = { type = "check" }
            assert = { type = "cue_count", count = 1 }
        "#,
        "inline",
    )
    .unwrap();

    let report =
        ScenarioRunner::new(Recipe::carbonara(), Duration::from_millis(10))
            .unwrap()
            .run(&scenario);
    assert!(report.passed(), "failures: {:?}", report.failures);
}

#[test]
fn test_missing_scenario_file() {
    assert!(Scenario::load(scenario_path("does_not_exist.toml")).is_err());
}

#[test]
fn test_runner_rejects_recipe_without_steps() {
    let mut recipe = Recipe::carbonara();
    recipe.steps.clear();
    assert!(ScenarioRunner::new(recipe, Duration::from_secs(1)).is_err());
}
