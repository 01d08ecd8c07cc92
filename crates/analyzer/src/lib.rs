// Domain-driven module structure for the logsift analyzer.

// Core infrastructure
pub mod cli;
pub mod conf;
pub mod error;

// Domain modules
pub mod query;
pub mod record;
pub mod report;
pub mod runtime;
