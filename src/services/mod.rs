//! Business logic services.

pub mod assembly;
pub mod catalog;
pub mod decoder;
pub mod export;
pub mod import;
pub mod ingest;
pub mod normalizer;
pub mod statistics;

pub use assembly::assemble_payload;
pub use decoder::{FileKind, Sheet, decode_rows, decode_sheets};
pub use import::save_parsed_data;
pub use ingest::{UploadedFile, ingest_upload};
pub use statistics::recompute_statistics;
