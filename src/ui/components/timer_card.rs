//! Countdown timer card
//!
//! Shows the timer of the current step: label, clock, progress and the
//! controls. The primary button starts, pauses, or resets once the time is
//! up. A smaller restart button appears while a countdown is part-way
//! through.

use crate::ui::components::ProgressTrack;
use crate::ui::theme::Theme;
use crate::walkthrough::{TimerPhase, Walkthrough};
use egui::{Color32, RichText, Stroke, Vec2};
use std::time::Instant;

/// Minimum size of the start/pause/reset button
const PRIMARY_BUTTON_SIZE: Vec2 = Vec2::new(130.0, 44.0);
/// Minimum size of the restart button
const RESTART_BUTTON_SIZE: Vec2 = Vec2::new(52.0, 44.0);

/// Width of the control row, `gap` being the item spacing between buttons
fn button_row_width(shows_restart: bool, gap: f32) -> f32 {
    if shows_restart {
        PRIMARY_BUTTON_SIZE.x + gap + RESTART_BUTTON_SIZE.x
    } else {
        PRIMARY_BUTTON_SIZE.x
    }
}

/// Timer card for the current step
pub struct TimerCard<'a> {
    walkthrough: &'a mut Walkthrough,
    theme: &'a Theme,
}

impl<'a> TimerCard<'a> {
    pub fn new(walkthrough: &'a mut Walkthrough, theme: &'a Theme) -> Self {
        Self { walkthrough, theme }
    }

    /// Show the card; draws nothing when the step has no timer
    pub fn show(mut self, ui: &mut egui::Ui) {
        let Some(timer) = self.walkthrough.timer() else {
            return;
        };
        let label = self.walkthrough.timer_label().unwrap_or_default().to_string();
        let phase = timer.phase();
        let display = timer.display();
        let progress = timer.progress();
        let primary_label = timer.primary_label();
        let shows_restart = timer.shows_secondary_reset();

        let complete = phase.is_complete();
        let accent = if complete {
            self.theme.success
        } else {
            self.theme.primary
        };

        let mut toggle_clicked = false;
        let mut restart_clicked = false;

        egui::Frame::none()
            .fill(accent.gamma_multiply(0.08))
            .stroke(Stroke::new(2.0, accent.gamma_multiply(0.5)))
            .rounding(self.theme.card_rounding)
            .inner_margin(self.theme.spacing_lg)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("⏱").size(18.0).color(accent));
                    ui.label(RichText::new(&label).size(17.0).strong().color(accent));
                });

                ui.add_space(self.theme.spacing_sm);

                ui.vertical_centered(|ui| {
                    let size = if complete { 44.0 } else { 52.0 };
                    let response = ui.label(
                        RichText::new(&display)
                            .size(size)
                            .family(egui::FontFamily::Monospace)
                            .color(accent),
                    );
                    response.widget_info(|| {
                        egui::WidgetInfo::labeled(
                            egui::WidgetType::Label,
                            true,
                            format!("Timer: {}", display),
                        )
                    });
                });

                ui.add_space(self.theme.spacing_sm);
                ProgressTrack::new(progress, accent, self.theme.bg_tertiary)
                    .height(6.0)
                    .show(ui);
                ui.add_space(self.theme.spacing);

                ui.horizontal(|ui| {
                    // Center the button row
                    let row_width =
                        button_row_width(shows_restart, ui.spacing().item_spacing.x);
                    ui.add_space(((ui.available_width() - row_width) / 2.0).max(0.0));

                    toggle_clicked = self.primary_button(ui, phase, primary_label).clicked();

                    if shows_restart {
                        restart_clicked = self.restart_button(ui).clicked();
                    }
                });
            });

        if toggle_clicked {
            self.walkthrough.toggle_timer(Instant::now());
        } else if restart_clicked {
            self.walkthrough.reset_timer();
        }
    }

    fn primary_button(&self, ui: &mut egui::Ui, phase: TimerPhase, text: &str) -> egui::Response {
        let (icon, fill, text_color) = match phase {
            TimerPhase::Complete => ("⟲", self.theme.success, Color32::WHITE),
            TimerPhase::Running => (
                "⏸",
                self.theme.primary.gamma_multiply(0.25),
                self.theme.text_primary,
            ),
            TimerPhase::Idle | TimerPhase::Paused => ("▶", self.theme.primary, Color32::WHITE),
        };

        let button = egui::Button::new(
            RichText::new(format!("{}  {}", icon, text))
                .size(16.0)
                .color(text_color),
        )
        .fill(fill)
        .rounding(self.theme.button_rounding)
        .min_size(PRIMARY_BUTTON_SIZE);

        let response = ui.add(button);
        let accessible = format!("{} timer", text);
        response.widget_info(|| {
            egui::WidgetInfo::labeled(egui::WidgetType::Button, true, &accessible)
        });
        response.on_hover_text(match phase {
            TimerPhase::Complete => "Reset the timer",
            TimerPhase::Running => "Pause the countdown",
            TimerPhase::Idle | TimerPhase::Paused => "Start the countdown",
        })
    }

    fn restart_button(&self, ui: &mut egui::Ui) -> egui::Response {
        let button = egui::Button::new(
            RichText::new("⟲").size(16.0).color(self.theme.text_secondary),
        )
        .fill(self.theme.bg_tertiary)
        .rounding(self.theme.button_rounding)
        .min_size(RESTART_BUTTON_SIZE);

        let response = ui.add(button);
        response.widget_info(|| {
            egui::WidgetInfo::labeled(egui::WidgetType::Button, true, "Restart timer")
        });
        response.on_hover_text("Back to the full time")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_width_follows_button_sizes() {
        assert_eq!(button_row_width(false, 8.0), PRIMARY_BUTTON_SIZE.x);
        assert_eq!(
            button_row_width(true, 8.0),
            PRIMARY_BUTTON_SIZE.x + 8.0 + RESTART_BUTTON_SIZE.x
        );
        assert!(button_row_width(true, 0.0) > button_row_width(false, 0.0));
    }
}
