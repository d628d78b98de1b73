//! Domain models and DTOs for the trim specification server.

pub mod bom;
pub mod export;
pub mod parsing_log;
pub mod payload;
pub mod records;
pub mod specification;
pub mod trim;

// Re-export commonly used types
pub use bom::{ColorBomResponse, MeasurementResponse};
pub use export::{CreateExportRequest, ExportFormat, ExportResponse, ExportType, NewExport};
pub use parsing_log::{LogLevel, ParsingLogResponse};
pub use payload::{ParsedSpecData, RowMap};
pub use records::{ColorBomRecord, MeasurementRecord, SupplierRecord, TrimRecord};
pub use specification::{
    ListSpecificationsQuery, NewSpecification, SpecStatistics, SpecStatus, SpecificationListResponse,
    SpecificationResponse,
};
pub use trim::{SearchTrimsQuery, SupplierResponse, TrimResponse, TrimWithSuppliers};
