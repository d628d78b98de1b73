//! SeaORM entity definitions for the specification graph.

pub mod color_bom;
pub mod export;
pub mod measurement;
pub mod parsing_log;
pub mod spec_file;
pub mod specification;
pub mod supplier;
pub mod trim;
