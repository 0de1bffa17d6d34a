//! Recipe content
//!
//! A recipe is immutable for the whole session. It either comes from the
//! built-in [`Recipe::carbonara`] or is loaded from a TOML file.

mod builtin;

use crate::{MiseError, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::info;

/// A recipe: metadata plus ordered ingredients and steps
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub description: String,
    /// Display string, e.g. "10 min"
    pub prep_time: String,
    /// Display string, e.g. "20 min"
    pub cook_time: String,
    pub servings: u32,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<Step>,
}

/// One line of the ingredient checklist
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Ingredient {
    /// Unique within the recipe
    pub id: String,
    pub name: String,
    /// Display string, e.g. "200g, diced"
    pub amount: String,
}

/// One instruction unit of the recipe
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Step {
    /// Unique, and increasing in step order
    pub id: u32,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tip: Option<String>,
    #[serde(default)]
    pub timer: Option<TimerSpec>,
}

/// Countdown attached to a step
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TimerSpec {
    /// Duration in whole seconds, always > 0
    pub duration: u32,
    pub label: String,
}

impl Recipe {
    /// Parse and validate a recipe from TOML text
    pub fn from_toml_str(content: &str, origin: &str) -> Result<Self> {
        let recipe: Recipe = toml::from_str(content).map_err(|e| MiseError::ParseError {
            path: origin.to_string(),
            error: e.to_string(),
        })?;
        recipe.validate()?;
        Ok(recipe)
    }

    /// Load and validate a recipe from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let recipe = Self::from_toml_str(&content, &path.display().to_string())?;
        info!(
            "Loaded recipe '{}' ({} ingredients, {} steps)",
            recipe.name,
            recipe.ingredients.len(),
            recipe.steps.len()
        );
        Ok(recipe)
    }

    /// Check the structural invariants the walkthrough relies on
    pub fn validate(&self) -> Result<()> {
        if self.steps.is_empty() {
            return Err(MiseError::InvalidRecipe("recipe has no steps".to_string()));
        }

        let mut seen = HashSet::new();
        for ingredient in &self.ingredients {
            if ingredient.id.trim().is_empty() {
                return Err(MiseError::InvalidRecipe(format!(
                    "ingredient '{}' has an empty id",
                    ingredient.name
                )));
            }
            if !seen.insert(ingredient.id.as_str()) {
                return Err(MiseError::InvalidRecipe(format!(
                    "duplicate ingredient id '{}'",
                    ingredient.id
                )));
            }
        }

        let mut last_id: Option<u32> = None;
        for step in &self.steps {
            if let Some(last) = last_id {
                if step.id <= last {
                    return Err(MiseError::InvalidRecipe(format!(
                        "step ids must be unique and increasing, found {} after {}",
                        step.id, last
                    )));
                }
            }
            last_id = Some(step.id);

            if let Some(timer) = &step.timer {
                if timer.duration == 0 {
                    return Err(MiseError::InvalidRecipe(format!(
                        "step {} has a zero-length timer",
                        step.id
                    )));
                }
            }
        }

        Ok(())
    }

    /// Number of steps
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Look up an ingredient by id
    pub fn ingredient(&self, id: &str) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| i.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL_RECIPE: &str = r#"
        name = "Soft Boiled Eggs"
        description = "Jammy eggs"
        prep_time = "1 min"
        cook_time = "7 min"
        servings = 2

        [[ingredients]]
        id = "egg"
        name = "Eggs"
        amount = "4"

        [[steps]]
        id = 1
        title = "Boil"
        description = "Lower the eggs into boiling water."
        timer = { duration = 390, label = "Egg Timer" }

        [[steps]]
        id = 2
        title = "Chill"
        description = "Move to an ice bath."
        tip = "Peel under running water."
    "#;

    #[test]
    fn test_parse_recipe() {
        let recipe = Recipe::from_toml_str(SMALL_RECIPE, "inline").unwrap();
        assert_eq!(recipe.name, "Soft Boiled Eggs");
        assert_eq!(recipe.servings, 2);
        assert_eq!(recipe.step_count(), 2);
        assert_eq!(
            recipe.steps[0].timer,
            Some(TimerSpec {
                duration: 390,
                label: "Egg Timer".to_string()
            })
        );
        assert!(recipe.steps[1].timer.is_none());
        assert_eq!(recipe.steps[1].tip.as_deref(), Some("Peel under running water."));
        assert_eq!(recipe.ingredient("egg").map(|i| i.amount.as_str()), Some("4"));
    }

    #[test]
    fn test_builtin_recipe_is_valid() {
        let recipe = Recipe::carbonara();
        recipe.validate().unwrap();
        assert_eq!(recipe.step_count(), 6);
        assert_eq!(recipe.ingredients.len(), 7);
    }

    #[test]
    fn test_rejects_empty_steps() {
        let mut recipe = Recipe::carbonara();
        recipe.steps.clear();
        assert!(matches!(recipe.validate(), Err(MiseError::InvalidRecipe(_))));
    }

    #[test]
    fn test_rejects_duplicate_ingredient_ids() {
        let mut recipe = Recipe::carbonara();
        recipe.ingredients[1].id = recipe.ingredients[0].id.clone();
        let err = recipe.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate ingredient id"));
    }

    #[test]
    fn test_rejects_out_of_order_step_ids() {
        let mut recipe = Recipe::carbonara();
        recipe.steps.swap(0, 1);
        assert!(matches!(recipe.validate(), Err(MiseError::InvalidRecipe(_))));
    }

    #[test]
    fn test_rejects_zero_duration_timer() {
        let mut recipe = Recipe::carbonara();
        recipe.steps[0].timer = Some(TimerSpec {
            duration: 0,
            label: "Nothing".to_string(),
        });
        assert!(matches!(recipe.validate(), Err(MiseError::InvalidRecipe(_))));
    }

    #[test]
    fn test_parse_error_names_origin() {
        let err = Recipe::from_toml_str("name = ", "broken.toml").unwrap_err();
        match err {
            MiseError::ParseError { path, .. } => assert_eq!(path, "broken.toml"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("eggs.toml");
        fs::write(&path, SMALL_RECIPE).unwrap();

        let recipe = Recipe::load(&path).unwrap();
        assert_eq!(recipe.name, "Soft Boiled Eggs");
    }
}
