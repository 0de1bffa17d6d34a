//! Current step card

use crate::ui::components::TimerCard;
use crate::ui::theme::Theme;
use crate::walkthrough::Walkthrough;
use egui::{RichText, Stroke, Vec2};

/// Card with the step's instructions, tip and timer
pub struct StepCard<'a> {
    walkthrough: &'a mut Walkthrough,
    theme: &'a Theme,
}

impl<'a> StepCard<'a> {
    pub fn new(walkthrough: &'a mut Walkthrough, theme: &'a Theme) -> Self {
        Self { walkthrough, theme }
    }

    pub fn show(self, ui: &mut egui::Ui) {
        let theme = self.theme;
        let walkthrough = self.walkthrough;

        let step = walkthrough.current_step().clone();
        let number = walkthrough.step_number();
        let total = walkthrough.navigator().total();

        theme.card_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::splat(40.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 20.0, theme.info);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    number.to_string(),
                    egui::FontId::proportional(18.0),
                    egui::Color32::WHITE,
                );

                let response = ui.label(
                    RichText::new(&step.title)
                        .size(22.0)
                        .strong()
                        .color(theme.text_primary),
                );
                response.widget_info(|| {
                    egui::WidgetInfo::labeled(
                        egui::WidgetType::Label,
                        true,
                        format!("Step title: {}", step.title),
                    )
                });
            });

            ui.add_space(theme.spacing_sm);
            ui.label(RichText::new(&step.description).color(theme.text_secondary));

            if let Some(tip) = &step.tip {
                ui.add_space(theme.spacing_sm);
                egui::Frame::none()
                    .fill(theme.info.gamma_multiply(0.1))
                    .stroke(Stroke::new(1.0, theme.info.gamma_multiply(0.4)))
                    .rounding(theme.button_rounding)
                    .inner_margin(theme.spacing)
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.horizontal_wrapped(|ui| {
                            ui.label(RichText::new("Tip:").strong().color(theme.info));
                            ui.label(RichText::new(tip).color(theme.text_primary));
                        });
                    });
            }

            if step.timer.is_some() {
                ui.add_space(theme.spacing);
                TimerCard::new(walkthrough, theme).show(ui);
            }

            ui.add_space(theme.spacing);
            ui.separator();
            ui.vertical_centered(|ui| {
                let counter = format!("Step {} of {}", number, total);
                let response = ui.label(RichText::new(&counter).size(13.0).color(theme.text_muted));
                response.widget_info(|| {
                    egui::WidgetInfo::labeled(egui::WidgetType::Label, true, &counter)
                });
            });
        });
    }
}
