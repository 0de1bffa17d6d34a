//! UI components and application module
//!
//! This module provides the egui/eframe-based user interface for Mise.

mod app;
pub mod components;
mod theme;

pub use app::MiseApp;
pub use components::{
    ChecklistPanel, CompletionBanner, NavBar, ProgressTrack, RecipeHeader, StepCard, TimerCard,
};
pub use theme::Theme;
