//! Step navigation buttons and the completion banner

use crate::ui::theme::Theme;
use crate::walkthrough::Walkthrough;
use egui::{Color32, RichText, Stroke, Vec2};

/// Previous / Next buttons
pub struct NavBar<'a> {
    walkthrough: &'a mut Walkthrough,
    theme: &'a Theme,
}

impl<'a> NavBar<'a> {
    pub fn new(walkthrough: &'a mut Walkthrough, theme: &'a Theme) -> Self {
        Self { walkthrough, theme }
    }

    pub fn show(mut self, ui: &mut egui::Ui) {
        let has_previous = self.walkthrough.navigator().has_previous();
        let has_next = self.walkthrough.navigator().has_next();

        let mut go_previous = false;
        let mut go_next = false;

        ui.horizontal(|ui| {
            let previous = egui::Button::new(
                RichText::new("‹  Previous").size(15.0).color(self.theme.text_primary),
            )
            .fill(self.theme.bg_secondary)
            .stroke(Stroke::new(1.0, self.theme.bg_tertiary))
            .rounding(self.theme.button_rounding)
            .min_size(Vec2::new(120.0, 44.0));
            let response = ui.add_enabled(has_previous, previous);
            response.widget_info(|| {
                egui::WidgetInfo::labeled(egui::WidgetType::Button, has_previous, "Previous step")
            });
            go_previous = response.clicked();

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let next = egui::Button::new(
                    RichText::new("Next  ›").size(15.0).color(Color32::WHITE),
                )
                .fill(self.theme.primary)
                .rounding(self.theme.button_rounding)
                .min_size(Vec2::new(120.0, 44.0));
                let response = ui.add_enabled(has_next, next);
                response.widget_info(|| {
                    egui::WidgetInfo::labeled(egui::WidgetType::Button, has_next, "Next step")
                });
                go_next = response.clicked();
            });
        });

        if go_previous {
            self.walkthrough.previous();
        } else if go_next {
            self.walkthrough.next();
        }
    }
}

/// Congratulations shown on the last step
pub struct CompletionBanner<'a> {
    recipe_name: &'a str,
    theme: &'a Theme,
}

impl<'a> CompletionBanner<'a> {
    pub fn new(recipe_name: &'a str, theme: &'a Theme) -> Self {
        Self { recipe_name, theme }
    }

    pub fn show(self, ui: &mut egui::Ui) {
        egui::Frame::none()
            .fill(self.theme.success.gamma_multiply(0.1))
            .stroke(Stroke::new(2.0, self.theme.success.gamma_multiply(0.5)))
            .rounding(self.theme.card_rounding)
            .inner_margin(self.theme.spacing_lg)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    let response = ui.label(
                        RichText::new("🎉 Congratulations!")
                            .size(20.0)
                            .strong()
                            .color(self.theme.success),
                    );
                    response.widget_info(|| {
                        egui::WidgetInfo::labeled(egui::WidgetType::Label, true, "Recipe complete")
                    });
                    ui.label(
                        RichText::new(format!(
                            "You've completed the recipe. Enjoy your delicious {}!",
                            self.recipe_name
                        ))
                        .color(self.theme.text_secondary),
                    );
                });
            });
    }
}
