use crate::models::distribution::{Distribution, DistributionEntry, DistributionKind};
use std::collections::HashMap;

/// Count occurrences of each distinct value.
///
/// Values are compared as-is (case-sensitive, no trimming). Entries are
/// ordered by count descending; equal counts keep the order in which the
/// value was first seen.
pub fn count_by<'a, I>(kind: DistributionKind, values: I) -> Distribution
where
    I: IntoIterator<Item = &'a str>,
{
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut entries: Vec<DistributionEntry> = Vec::new();

    for v in values {
        match index.get(v) {
            Some(&i) => entries[i].count += 1,
            None => {
                index.insert(v, entries.len());
                entries.push(DistributionEntry {
                    label: v.to_string(),
                    count: 1,
                });
            }
        }
    }

    // sort_by is stable: ties stay in first-seen order
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    Distribution::new(kind, entries)
}
