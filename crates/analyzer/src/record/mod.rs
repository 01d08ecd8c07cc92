//! Record module — log record model and source loading.

pub mod load;
pub mod model;

pub use load::load_records;
pub use model::LogRecord;
