//! Mise - guided recipe walkthrough
//!
//! This crate provides a step-by-step cooking companion: a recipe header
//! with overall progress, an ingredient checklist, and a step card with an
//! optional countdown timer that chimes when it runs out.
//!
//! The walkthrough core is presentation independent and can be driven
//! headlessly through [`Walkthrough`] or by scripted [`scenario`] files.

pub mod audio;
pub mod config;
pub mod error;
pub mod recipe;
pub mod scenario;
pub mod ui;
pub mod walkthrough;

// Re-export error types
pub use error::{MiseError, Result};

// Re-export core types
pub use audio::{CompletionCue, CountingCue, SilentCue};
pub use config::{AppConfig, CueConfig, ThemeChoice};
pub use recipe::{Ingredient, Recipe, Step, TimerSpec};
pub use walkthrough::{
    IngredientChecklist, StepNavigator, StepTimer, TickOutcome, Ticker, TimerPhase, Walkthrough,
};
