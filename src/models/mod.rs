pub mod export;

pub use export::{ErrorResponse, ExportRequest, ExportResponse};
