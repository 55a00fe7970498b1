use crate::engine::Group;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupingSummary {
    pub total_items: usize,
    pub total_groups: usize,
    pub compression_ratio: f64,
    pub groups: Vec<GroupReport>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupReport {
    pub representative: String,
    pub count: usize,
    pub frequency: f64,
    pub examples: Vec<String>,
}

/// Builds a serialisable summary, keeping up to `max_examples` payloads per group.
pub fn summarize_groups<R: ToString>(groups: &[Group<R>], max_examples: usize) -> GroupingSummary {
    let total_items: usize = groups.iter().map(|g| g.len()).sum();
    let reports = groups
        .iter()
        .map(|g| GroupReport {
            representative: g.representative.clone(),
            count: g.len(),
            frequency: if total_items > 0 { g.len() as f64 / total_items as f64 } else { 0.0 },
            examples: g.items.iter().take(max_examples).map(|r| r.to_string()).collect(),
        })
        .collect();
    let compression_ratio = if groups.is_empty() { 0.0 } else { total_items as f64 / groups.len() as f64 };
    GroupingSummary {
        total_items,
        total_groups: groups.len(),
        compression_ratio,
        groups: reports,
    }
}
