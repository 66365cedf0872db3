// file: src/pipeline/mod.rs
// description: draft processing module exports
// reference: internal module structure

pub mod processor;

pub use processor::{DraftProcessor, ProcessingResult};
