//! Scripted walkthrough scenarios
//!
//! A scenario is a TOML file listing walkthrough actions, each optionally
//! followed by an assertion. Scenarios run headless on a virtual clock, so
//! an eight minute countdown is checked in microseconds.

mod runner;

pub use runner::{AssertionResult, ScenarioReport, ScenarioRunner};

use crate::{MiseError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// A scenario loaded from a TOML file
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    /// Scenario metadata
    pub scenario: ScenarioMetadata,
    /// Actions in execution order
    pub actions: Vec<ScenarioAction>,
}

/// Metadata about the scenario
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioMetadata {
    /// Name of the scenario
    pub name: String,
    /// What the scenario checks
    #[serde(default)]
    pub description: String,
}

/// A single action with an optional assertion checked afterwards
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioAction {
    /// The action to perform
    pub action: ActionType,
    /// Assertion to validate after the action
    #[serde(default)]
    pub assert: Option<Assertion>,
}

/// Actions a scenario can perform
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionType {
    /// Go to the next step
    Next,
    /// Go to the previous step
    Previous,
    /// Check or uncheck an ingredient
    ToggleIngredient { id: String },
    /// Press the primary timer button
    ToggleTimer,
    /// Press the restart button
    ResetTimer,
    /// Let virtual time pass and apply due ticks
    Advance {
        #[serde(default)]
        seconds: u64,
        #[serde(default)]
        millis: u64,
    },
    /// Log a message
    Log { message: String },
    /// Do nothing; useful to attach an assertion to the initial state
    Check,
}

/// Conditions checked after an action
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Assertion {
    /// One-based step number
    StepNumber { number: usize },
    /// Rounded overall progress
    ProgressPercent { percent: u8 },
    /// Seconds left on the current timer
    TimerRemaining { seconds: u32 },
    /// Rendered clock text, e.g. "07:59" or "Time's up!"
    TimerDisplay { text: String },
    /// Timer phase: "idle", "running", "paused" or "complete"
    TimerPhase { phase: String },
    /// The current step has no timer
    NoTimer,
    /// Number of checked ingredients
    CheckedCount { count: usize },
    /// The last step is reached
    Finished,
    /// Number of completion cues fired so far
    CueCount { count: usize },
}

impl Scenario {
    /// Parse and validate a scenario from TOML text
    pub fn from_toml_str(content: &str, origin: &str) -> Result<Self> {
        let scenario: Scenario = toml::from_str(content).map_err(|e| MiseError::ParseError {
            path: origin.to_string(),
            error: e.to_string(),
        })?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Load a scenario from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content, &path.display().to_string())
    }

    /// Validate the scenario
    fn validate(&self) -> Result<()> {
        if self.actions.is_empty() {
            return Err(MiseError::ScenarioError(
                "Scenario must have at least one action".to_string(),
            ));
        }

        for (index, action) in self.actions.iter().enumerate() {
            if let Some(Assertion::TimerPhase { phase }) = &action.assert {
                if !matches!(phase.as_str(), "idle" | "running" | "paused" | "complete") {
                    return Err(MiseError::ScenarioError(format!(
                        "Action {}: unknown timer phase '{}'",
                        index + 1,
                        phase
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_actions() {
        let toml_str = r#"
            [scenario]
            name = "Navigate"

            [[actions]]
            action = { type = "next" }

            [[actions]]
            action = { type = "toggle_ingredient", id = "3" }

            [[actions]]
            action = { type = "advance", seconds = 5 }

            [[actions]]
            action = { type = "log", message = "done" }
        "#;

        let scenario = Scenario::from_toml_str(toml_str, "inline").unwrap();
        assert_eq!(scenario.scenario.name, "Navigate");
        assert_eq!(scenario.actions.len(), 4);
        assert_eq!(scenario.actions[0].action, ActionType::Next);
        assert_eq!(
            scenario.actions[1].action,
            ActionType::ToggleIngredient { id: "3".to_string() }
        );
        assert_eq!(
            scenario.actions[2].action,
            ActionType::Advance {
                seconds: 5,
                millis: 0
            }
        );
    }

    #[test]
    fn test_parse_with_assertions() {
        let toml_str = r#"
            [scenario]
            name = "Assertions"

            [[actions]]
            action = { type = "check" }
            assert = { type = "timer_display", text = "08:00" }

            [[actions]]
            action = { type = "toggle_timer" }
            assert = { type = "timer_phase", phase = "running" }
        "#;

        let scenario = Scenario::from_toml_str(toml_str, "inline").unwrap();
        assert_eq!(
            scenario.actions[0].assert,
            Some(Assertion::TimerDisplay {
                text: "08:00".to_string()
            })
        );
    }

    #[test]
    fn test_rejects_empty_scenario() {
        let err = Scenario::from_toml_str("actions = []\n[scenario]\nname = \"x\"", "inline")
            .unwrap_err();
        assert!(matches!(err, MiseError::ScenarioError(_)));
    }

    #[test]
    fn test_rejects_unknown_phase() {
        let toml_str = r#"
            [scenario]
            name = "Bad phase"

            [[actions]]
            action = { type = "check" }
            assert = { type = "timer_phase", phase = "sleeping" }
        "#;
        let err = Scenario::from_toml_str(toml_str, "inline").unwrap_err();
        assert!(err.to_string().contains("sleeping"));
    }
}
