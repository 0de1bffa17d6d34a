//! Horizontal progress bar
//!
//! Painted by hand so the track and fill colors follow the theme, and the
//! fill can be a two-color gradient.

use egui::{Color32, Mesh, Rect, Rounding, Sense, Vec2};

/// Thin rounded progress bar
pub struct ProgressTrack {
    fraction: f32,
    fill: Color32,
    fill_end: Option<Color32>,
    track: Color32,
    height: f32,
}

impl ProgressTrack {
    /// Create a bar showing `fraction` (clamped to `[0, 1]`)
    pub fn new(fraction: f32, fill: Color32, track: Color32) -> Self {
        Self {
            fraction: fraction.clamp(0.0, 1.0),
            fill,
            fill_end: None,
            track,
            height: 8.0,
        }
    }

    /// Fade the fill from the base color to `end`
    pub fn gradient(mut self, end: Color32) -> Self {
        self.fill_end = Some(end);
        self
    }

    /// Set the bar height
    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    pub fn show(self, ui: &mut egui::Ui) -> egui::Response {
        let size = Vec2::new(ui.available_width(), self.height);
        let (rect, response) = ui.allocate_exact_size(size, Sense::hover());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            let rounding = Rounding::same(self.height / 2.0);
            painter.rect_filled(rect, rounding, self.track);

            if self.fraction > 0.0 {
                let filled = Rect::from_min_size(
                    rect.min,
                    Vec2::new(rect.width() * self.fraction, rect.height()),
                );
                match self.fill_end {
                    Some(end) => {
                        let mut mesh = Mesh::default();
                        let idx = mesh.vertices.len() as u32;
                        mesh.colored_vertex(filled.left_top(), self.fill);
                        mesh.colored_vertex(filled.right_top(), end);
                        mesh.colored_vertex(filled.right_bottom(), end);
                        mesh.colored_vertex(filled.left_bottom(), self.fill);
                        mesh.add_triangle(idx, idx + 1, idx + 2);
                        mesh.add_triangle(idx, idx + 2, idx + 3);
                        painter.add(mesh);
                    }
                    None => {
                        painter.rect_filled(filled, rounding, self.fill);
                    }
                }
            }
        }

        let percent = (self.fraction * 100.0).round() as u32;
        response.widget_info(|| {
            egui::WidgetInfo::labeled(egui::WidgetType::ProgressIndicator, true, format!("{}%", percent))
        });
        response
    }
}
