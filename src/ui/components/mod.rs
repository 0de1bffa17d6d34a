//! UI components module
//!
//! This module provides the building blocks of the walkthrough screen.

pub mod checklist_panel;
pub mod header;
pub mod nav_bar;
pub mod progress_track;
pub mod step_card;
pub mod timer_card;

pub use checklist_panel::ChecklistPanel;
pub use header::RecipeHeader;
pub use nav_bar::{CompletionBanner, NavBar};
pub use progress_track::ProgressTrack;
pub use step_card::StepCard;
pub use timer_card::TimerCard;
