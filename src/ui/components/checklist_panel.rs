//! Ingredient checklist panel

use crate::ui::theme::Theme;
use crate::walkthrough::Walkthrough;
use egui::{RichText, Vec2};

/// Clickable list of ingredients with a checked counter
pub struct ChecklistPanel<'a> {
    walkthrough: &'a mut Walkthrough,
    theme: &'a Theme,
}

impl<'a> ChecklistPanel<'a> {
    pub fn new(walkthrough: &'a mut Walkthrough, theme: &'a Theme) -> Self {
        Self { walkthrough, theme }
    }

    pub fn show(self, ui: &mut egui::Ui) {
        let theme = self.theme;
        let walkthrough = self.walkthrough;

        theme.card_frame().show(ui, |ui| {
            let (checked, total) = walkthrough.checklist().count();

            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("Ingredients")
                        .size(20.0)
                        .strong()
                        .color(theme.text_primary),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let counter = format!("{}/{} checked", checked, total);
                    let response =
                        ui.label(RichText::new(&counter).size(13.0).color(theme.text_muted));
                    response.widget_info(|| {
                        egui::WidgetInfo::labeled(egui::WidgetType::Label, true, &counter)
                    });
                });
            });

            ui.add_space(theme.spacing_sm);

            // Collect first so the clicks can borrow the walkthrough mutably
            let rows: Vec<(String, String, String, bool)> = walkthrough
                .recipe()
                .ingredients
                .iter()
                .map(|i| {
                    let is_checked = walkthrough.checklist().is_checked(&i.id);
                    (i.id.clone(), i.name.clone(), i.amount.clone(), is_checked)
                })
                .collect();

            for (id, name, amount, is_checked) in rows {
                if Self::row(ui, theme, &name, &amount, is_checked).clicked() {
                    walkthrough.toggle_ingredient(&id);
                }
            }
        });
    }

    fn row(
        ui: &mut egui::Ui,
        theme: &Theme,
        name: &str,
        amount: &str,
        is_checked: bool,
    ) -> egui::Response {
        let (icon, icon_color) = if is_checked {
            ("✔", theme.success)
        } else {
            ("○", theme.bg_tertiary)
        };

        let mut name_text = RichText::new(name);
        let mut amount_text = RichText::new(amount).size(13.0);
        if is_checked {
            name_text = name_text.strikethrough().color(theme.text_muted);
            amount_text = amount_text.color(theme.text_muted);
        } else {
            name_text = name_text.color(theme.text_primary);
            amount_text = amount_text.color(theme.text_secondary);
        }

        let mut job = egui::text::LayoutJob::default();
        RichText::new(format!("{}  ", icon))
            .size(16.0)
            .color(icon_color)
            .append_to(&mut job, ui.style(), egui::FontSelection::Default, egui::Align::Center);
        name_text.append_to(&mut job, ui.style(), egui::FontSelection::Default, egui::Align::Center);
        RichText::new("  ").append_to(
            &mut job,
            ui.style(),
            egui::FontSelection::Default,
            egui::Align::Center,
        );
        amount_text.append_to(&mut job, ui.style(), egui::FontSelection::Default, egui::Align::Center);

        let button = egui::Button::new(job)
            .frame(false)
            .min_size(Vec2::new(ui.available_width(), 32.0));
        let response = ui.add(button);

        let label = format!("Ingredient: {}", name);
        response.widget_info(|| {
            egui::WidgetInfo::selected(egui::WidgetType::Checkbox, true, is_checked, &label)
        });
        response
    }
}
