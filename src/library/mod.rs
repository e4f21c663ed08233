// file: src/library/mod.rs
// description: persisted sheet and exercise library module exports
// reference: internal module structure

pub mod exercises;
pub mod sheets;

pub use exercises::{AddOutcome, ExerciseLibrary};
pub use sheets::{SheetStore, SheetSummary};
