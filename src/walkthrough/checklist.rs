//! Ingredient checklist

use crate::recipe::Ingredient;
use std::collections::HashSet;
use tracing::warn;

/// Set of checked ingredient ids, always a subset of the recipe's ids
#[derive(Debug, Clone, Default)]
pub struct IngredientChecklist {
    known: HashSet<String>,
    checked: HashSet<String>,
}

impl IngredientChecklist {
    /// Create an empty checklist for the given ingredients
    pub fn new(ingredients: &[Ingredient]) -> Self {
        Self {
            known: ingredients.iter().map(|i| i.id.clone()).collect(),
            checked: HashSet::new(),
        }
    }

    /// Flip the checked flag; returns whether `id` is now checked
    ///
    /// Unknown ids leave the checklist untouched.
    pub fn toggle(&mut self, id: &str) -> bool {
        if !self.known.contains(id) {
            warn!("Ignoring toggle for unknown ingredient '{}'", id);
            return false;
        }

        if self.checked.remove(id) {
            false
        } else {
            self.checked.insert(id.to_string());
            true
        }
    }

    pub fn is_checked(&self, id: &str) -> bool {
        self.checked.contains(id)
    }

    /// `(checked, total)`
    pub fn count(&self) -> (usize, usize) {
        (self.checked.len(), self.known.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::Recipe;

    #[test]
    fn test_toggle_is_an_involution() {
        let recipe = Recipe::carbonara();
        let mut checklist = IngredientChecklist::new(&recipe.ingredients);
        checklist.toggle("3");
        let before: Vec<bool> = recipe
            .ingredients
            .iter()
            .map(|i| checklist.is_checked(&i.id))
            .collect();

        assert!(checklist.toggle("5"));
        assert!(!checklist.toggle("5"));

        let after: Vec<bool> = recipe
            .ingredients
            .iter()
            .map(|i| checklist.is_checked(&i.id))
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_count() {
        let recipe = Recipe::carbonara();
        let mut checklist = IngredientChecklist::new(&recipe.ingredients);
        assert_eq!(checklist.count(), (0, 7));
        checklist.toggle("1");
        checklist.toggle("7");
        assert_eq!(checklist.count(), (2, 7));
        checklist.toggle("7");
        assert_eq!(checklist.count(), (1, 7));
    }

    #[test]
    fn test_unknown_id_is_ignored() {
        let recipe = Recipe::carbonara();
        let mut checklist = IngredientChecklist::new(&recipe.ingredients);
        assert!(!checklist.toggle("truffle"));
        assert!(!checklist.is_checked("truffle"));
        assert_eq!(checklist.count(), (0, 7));
    }
}
