//! Aggregate — pure single-pass computations over a log collection.
//!
//! Every function here takes the collection by reference, mutates
//! nothing, and computes its result fresh on each call.

use std::collections::{BTreeSet, HashMap};

use crate::record::LogRecord;

/// Count how many times each distinct action appears.
pub fn count_actions(records: &[LogRecord]) -> HashMap<String, u64> {
    let mut counts: HashMap<String, u64> = HashMap::new();
    for record in records {
        *counts.entry(record.action.clone()).or_insert(0) += 1;
    }
    counts
}

/// Distinct user names across the collection.
pub fn unique_users(records: &[LogRecord]) -> BTreeSet<String> {
    records.iter().map(|r| r.user.clone()).collect()
}

/// Users with at least one 4xx response.
pub fn users_with_errors(records: &[LogRecord]) -> BTreeSet<String> {
    records
        .iter()
        .filter(|r| r.is_client_error())
        .map(|r| r.user.clone())
        .collect()
}

/// Distinct client addresses across the collection.
pub fn unique_ips(records: &[LogRecord]) -> BTreeSet<String> {
    records.iter().map(|r| r.ip.clone()).collect()
}

/// The user with the most records. Ties break toward the user whose
/// first record appears earliest in the collection. `None` when the
/// collection is empty.
pub fn most_frequent_user(records: &[LogRecord]) -> Option<String> {
    let mut counts: HashMap<&str, (u64, usize)> = HashMap::new();
    for (index, record) in records.iter().enumerate() {
        let entry = counts.entry(record.user.as_str()).or_insert((0, index));
        entry.0 += 1;
    }

    counts
        .into_iter()
        .max_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
            // Higher count wins; on a tie the earlier first appearance wins.
            count_a.cmp(count_b).then(first_b.cmp(first_a))
        })
        .map(|(user, _)| user.to_string())
}
