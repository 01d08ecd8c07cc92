//! Route — selector validation and query dispatch.

use std::path::Path;

use crate::error::AnalyzeResult;
use crate::record;
use crate::report::{self, QueryOutput};

use super::{aggregate, Query};

/// Validate the selector, load the collection, run the chosen query, and
/// print the report.
///
/// An out-of-range selector is reported on stderr and the run ends
/// without loading or computing anything; it is not treated as a process
/// failure. Read and parse errors propagate unrecovered.
pub fn run_selected_query(path: &Path, selector: u8, color: bool) -> AnalyzeResult<()> {
    // clap already range-checks --query; re-validate so the dispatcher
    // stands on its own.
    let query = match Query::try_from(selector) {
        Ok(query) => query,
        Err(other) => {
            eprintln!("Invalid query selector: {} (expected 1-5)", other);
            return Ok(());
        }
    };

    tracing::info!(selector, query = query.as_str(), "Running query");

    let records = record::load_records(path).map_err(|e| {
        tracing::error!("Failed to load log collection: {}", e);
        e
    })?;

    let output = match query {
        Query::ActionCounts => QueryOutput::Counts(aggregate::count_actions(&records)),
        Query::UniqueUsers => QueryOutput::Names(aggregate::unique_users(&records)),
        Query::ErrorUsers => QueryOutput::Names(aggregate::users_with_errors(&records)),
        Query::UniqueIps => QueryOutput::Names(aggregate::unique_ips(&records)),
        Query::TopUser => QueryOutput::TopUser(aggregate::most_frequent_user(&records)),
    };

    report::print_report(query, &output, color);
    Ok(())
}
