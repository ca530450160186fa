//! AST visitors for import extraction.

pub mod import_collector;

pub use import_collector::{FileAnalysis, ImportCollector, ImportKind, ImportRecord};
