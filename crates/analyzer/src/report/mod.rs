//! Report module — console rendering of query results.

use std::collections::{BTreeSet, HashMap};

use colored::Colorize;

use crate::query::Query;

/// The value produced by one query run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutput {
    /// A count table (action -> occurrences).
    Counts(HashMap<String, u64>),
    /// A distinct-value set (users or IPs).
    Names(BTreeSet<String>),
    /// The most frequent user, absent for an empty collection.
    TopUser(Option<String>),
}

/// Render the result body as plain text, one entry per line.
///
/// Counts sort by count descending then key; sets render in their sorted
/// order. Ordering here is a rendering convenience, not a contract of
/// the underlying aggregates.
pub fn render(output: &QueryOutput) -> String {
    match output {
        QueryOutput::Counts(counts) => {
            if counts.is_empty() {
                return "(none)".to_string();
            }
            let mut rows: Vec<(&String, &u64)> = counts.iter().collect();
            rows.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
            rows.iter()
                .map(|(action, count)| format!("{}: {}", action, count))
                .collect::<Vec<_>>()
                .join("\n")
        }
        QueryOutput::Names(names) => {
            if names.is_empty() {
                "(none)".to_string()
            } else {
                names.iter().cloned().collect::<Vec<_>>().join("\n")
            }
        }
        QueryOutput::TopUser(Some(user)) => user.clone(),
        QueryOutput::TopUser(None) => "(no records)".to_string(),
    }
}

/// Print the header line naming the query, then the rendered result.
pub fn print_report(query: Query, output: &QueryOutput, color: bool) {
    let header = format!("== {} ==", query.title());
    if color {
        println!("{}", header.cyan().bold());
    } else {
        println!("{}", header);
    }
    println!("{}", render(output));
}
