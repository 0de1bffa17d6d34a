//! The recipe shipped with the application

use super::{Ingredient, Recipe, Step, TimerSpec};

fn ingredient(id: &str, name: &str, amount: &str) -> Ingredient {
    Ingredient {
        id: id.to_string(),
        name: name.to_string(),
        amount: amount.to_string(),
    }
}

fn step(id: u32, title: &str, description: &str, timer: Option<(u32, &str)>, tip: &str) -> Step {
    Step {
        id,
        title: title.to_string(),
        description: description.to_string(),
        tip: Some(tip.to_string()),
        timer: timer.map(|(duration, label)| TimerSpec {
            duration,
            label: label.to_string(),
        }),
    }
}

impl Recipe {
    /// Classic Spaghetti Carbonara
    pub fn carbonara() -> Self {
        Self {
            name: "Classic Spaghetti Carbonara".to_string(),
            description: "An authentic Italian pasta dish with eggs, cheese, and pancetta"
                .to_string(),
            prep_time: "10 min".to_string(),
            cook_time: "20 min".to_string(),
            servings: 4,
            ingredients: vec![
                ingredient("1", "Spaghetti", "400g"),
                ingredient("2", "Pancetta or guanciale", "200g, diced"),
                ingredient("3", "Egg yolks", "4 large"),
                ingredient("4", "Whole eggs", "2 large"),
                ingredient("5", "Pecorino Romano cheese", "100g, finely grated"),
                ingredient("6", "Black pepper", "freshly ground, to taste"),
                ingredient("7", "Salt", "for pasta water"),
            ],
            steps: vec![
                step(
                    1,
                    "Boil the Water",
                    "Fill a large pot with water and add a generous amount of salt (about 2 \
                     tablespoons). Bring the water to a rolling boil over high heat. The water \
                     should taste like the sea.",
                    Some((480, "Water Boiling Time")),
                    "Use a large pot with plenty of water to prevent the pasta from sticking \
                     together.",
                ),
                step(
                    2,
                    "Cook the Pancetta",
                    "While the water is heating, place the diced pancetta in a large, cold \
                     skillet. Turn the heat to medium and cook until the pancetta is crispy and \
                     golden, stirring occasionally. The fat should render out and the pieces \
                     should be crispy but not burnt.",
                    Some((300, "Pancetta Cooking Time")),
                    "Starting with a cold pan helps render the fat slowly and prevents burning.",
                ),
                step(
                    3,
                    "Prepare the Egg Mixture",
                    "In a medium bowl, whisk together the egg yolks, whole eggs, and grated \
                     Pecorino Romano cheese. Add a generous amount of freshly ground black \
                     pepper. Mix until well combined and creamy. Set aside.",
                    None,
                    "Room temperature eggs mix better and create a smoother sauce.",
                ),
                step(
                    4,
                    "Cook the Spaghetti",
                    "Once the water is boiling, add the spaghetti and cook according to package \
                     directions until al dente (usually 8-10 minutes). Reserve 1 cup of pasta \
                     water before draining. The starchy pasta water is essential for the sauce.",
                    Some((540, "Pasta Cooking Time")),
                    "Set a timer 1 minute before the package time and taste-test for doneness.",
                ),
                step(
                    5,
                    "Combine Everything",
                    "Remove the pan with pancetta from heat. Add the drained spaghetti to the \
                     pan with the pancetta and toss to coat. Let it cool for 1 minute. Then add \
                     the egg mixture, tossing quickly and constantly to create a creamy sauce. \
                     Add reserved pasta water, a little at a time, until you reach the desired \
                     consistency.",
                    Some((120, "Final Tossing Time")),
                    "Work quickly off heat to prevent the eggs from scrambling. The residual heat \
                     will cook the eggs perfectly.",
                ),
                step(
                    6,
                    "Serve Immediately",
                    "Divide the carbonara among warm plates. Top with additional grated Pecorino \
                     Romano and freshly ground black pepper. Serve immediately while hot and \
                     creamy.",
                    None,
                    "Carbonara waits for no one! The sauce will thicken as it cools, so serve \
                     right away.",
                ),
            ],
        }
    }
}

impl Default for Recipe {
    fn default() -> Self {
        Self::carbonara()
    }
}
