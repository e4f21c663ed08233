// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod exporter;
pub mod ingest;
pub mod library;
pub mod models;
pub mod pipeline;
pub mod utils;

pub use config::{Config, ExportConfig, IngestConfig, LibraryConfig};
pub use error::{Result, SheetError};
pub use exporter::{ExportManifest, JsonExporter, XlsxExporter};
pub use ingest::{
    BatchNormalizer, ClassifiedFields, FieldClassifier, IdGenerator, IngestOptions,
    SequentialGenerator, UuidGenerator, extract_name_and_link, tokenize_block, tokenize_row,
};
pub use library::{AddOutcome, ExerciseLibrary, SheetStore, SheetSummary};
pub use models::{Category, Exercise, Gender, Level, WorkoutSheet};
pub use pipeline::{FileImporter, ImportProgress, ImportStats};
pub use utils::Validator;
