//! Recipe header
//!
//! Shows the recipe name, description, timing facts and the overall
//! progress through the steps.

use crate::ui::components::ProgressTrack;
use crate::ui::theme::Theme;
use crate::walkthrough::Walkthrough;
use egui::{RichText, Vec2};

/// Header with recipe metadata and the step progress bar
pub struct RecipeHeader<'a> {
    walkthrough: &'a Walkthrough,
    theme: &'a Theme,
}

impl<'a> RecipeHeader<'a> {
    pub fn new(walkthrough: &'a Walkthrough, theme: &'a Theme) -> Self {
        Self { walkthrough, theme }
    }

    pub fn show(self, ui: &mut egui::Ui) {
        let recipe = self.walkthrough.recipe();

        ui.horizontal(|ui| {
            // Chef badge
            let (rect, _) = ui.allocate_exact_size(Vec2::splat(48.0), egui::Sense::hover());
            ui.painter().circle_filled(rect.center(), 24.0, self.theme.primary);
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "🍳",
                egui::FontId::proportional(22.0),
                egui::Color32::WHITE,
            );

            ui.vertical(|ui| {
                ui.label(
                    RichText::new(&recipe.name)
                        .size(24.0)
                        .strong()
                        .color(self.theme.text_primary),
                );
                ui.label(RichText::new(&recipe.description).color(self.theme.text_secondary));
            });
        });

        ui.add_space(self.theme.spacing_sm);

        ui.horizontal(|ui| {
            self.fact(ui, "Prep:", &recipe.prep_time);
            ui.add_space(self.theme.spacing);
            self.fact(ui, "Cook:", &recipe.cook_time);
            ui.add_space(self.theme.spacing);
            self.fact(ui, "Servings:", &recipe.servings.to_string());
        });

        ui.add_space(self.theme.spacing_sm);

        let percent = self.walkthrough.progress_percent();
        ui.horizontal(|ui| {
            ui.label(RichText::new("Progress").size(13.0).color(self.theme.text_muted));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let response = ui.label(
                    RichText::new(format!("{}%", percent))
                        .size(13.0)
                        .color(self.theme.text_muted),
                );
                response.widget_info(|| {
                    egui::WidgetInfo::labeled(
                        egui::WidgetType::Label,
                        true,
                        format!("Recipe progress: {}%", percent),
                    )
                });
            });
        });

        ProgressTrack::new(
            self.walkthrough.navigator().progress(),
            self.theme.primary,
            self.theme.bg_tertiary,
        )
        .gradient(self.theme.secondary)
        .show(ui);
    }

    fn fact(&self, ui: &mut egui::Ui, name: &str, value: &str) {
        ui.label(
            RichText::new(name)
                .size(13.0)
                .strong()
                .color(self.theme.text_secondary),
        );
        ui.label(RichText::new(value).size(13.0).color(self.theme.text_secondary));
    }
}
