//! Main Mise application struct and eframe integration
//!
//! This module contains the main MiseApp that implements eframe::App.

use crate::ui::components::{ChecklistPanel, CompletionBanner, NavBar, RecipeHeader, StepCard};
use crate::ui::theme::Theme;
use crate::walkthrough::Walkthrough;
use egui::{CentralPanel, SidePanel, TopBottomPanel};
use std::time::Instant;
use tracing::{debug, info};

/// Main Mise application
pub struct MiseApp {
    /// The cooking session on screen
    walkthrough: Walkthrough,
    /// UI theme
    theme: Theme,
    /// Whether the app has been initialized
    initialized: bool,
}

impl MiseApp {
    /// Create a new Mise application
    pub fn new(cc: &eframe::CreationContext<'_>, walkthrough: Walkthrough, theme: Theme) -> Self {
        theme.apply(&cc.egui_ctx);

        Self {
            walkthrough,
            theme,
            initialized: false,
        }
    }

    /// Initialize the application (called on first frame)
    fn initialize(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;
        info!("Mise UI initialized");
    }

    /// Apply due ticks and schedule the next frame while a timer runs
    fn drive_timer(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        let applied = self.walkthrough.pump(now);
        if applied > 1 {
            debug!("Caught up {} ticks in one frame", applied);
        }

        if let Some(wait) = self.walkthrough.until_next_tick(now) {
            ctx.request_repaint_after(wait);
        }
    }

    /// Show the top header bar
    fn show_header(&mut self, ctx: &egui::Context) {
        TopBottomPanel::top("header")
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg_secondary)
                    .inner_margin(self.theme.spacing),
            )
            .show(ctx, |ui| {
                RecipeHeader::new(&self.walkthrough, &self.theme).show(ui);
            });
    }

    /// Show the ingredient checklist on the side
    fn show_ingredients(&mut self, ctx: &egui::Context) {
        SidePanel::left("ingredients")
            .resizable(true)
            .default_width(340.0)
            .min_width(260.0)
            .max_width(460.0)
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg_primary)
                    .inner_margin(self.theme.spacing),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("ingredients_scroll")
                    .show(ui, |ui| {
                        ChecklistPanel::new(&mut self.walkthrough, &self.theme).show(ui);
                    });
            });
    }

    /// Show the current step, navigation and completion message
    fn show_content(&mut self, ctx: &egui::Context) {
        CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg_primary)
                    .inner_margin(self.theme.spacing),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("step_scroll")
                    .show(ui, |ui| {
                        StepCard::new(&mut self.walkthrough, &self.theme).show(ui);
                        ui.add_space(self.theme.spacing_lg);
                        NavBar::new(&mut self.walkthrough, &self.theme).show(ui);

                        if self.walkthrough.is_finished() {
                            ui.add_space(self.theme.spacing_lg);
                            CompletionBanner::new(&self.walkthrough.recipe().name, &self.theme)
                                .show(ui);
                        }
                    });
            });
    }
}

impl eframe::App for MiseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Initialize on first frame
        self.initialize();

        // Timer first so the frame shows the latest countdown
        self.drive_timer(ctx);

        // Keyboard navigation when nothing has focus
        let any_widget_focused = ctx.memory(|m| m.focused().is_some());
        if !any_widget_focused {
            let (left, right) = ctx.input(|i| {
                (
                    i.key_pressed(egui::Key::ArrowLeft),
                    i.key_pressed(egui::Key::ArrowRight),
                )
            });
            if left {
                self.walkthrough.previous();
            } else if right {
                self.walkthrough.next();
            }
        }

        self.show_header(ctx);
        self.show_ingredients(ctx);
        self.show_content(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!(
            "Mise shutting down at step {}/{}",
            self.walkthrough.step_number(),
            self.walkthrough.navigator().total()
        );
    }
}
