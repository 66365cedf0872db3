// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod draft;

pub use draft::{Draft, DraftHandle};
