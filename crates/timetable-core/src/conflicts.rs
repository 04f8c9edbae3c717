//! Pairwise schedule conflict detection.
//!
//! [`compute_conflicts`] is the canonical implementation: it compares every
//! unordered pair of entries, which is plenty for the few dozen meetings a
//! week holds. [`compute_conflicts_sweep`] buckets by day and sweeps by start
//! time; it yields identical flags and exists for callers with very large
//! inputs.
//!
//! Both functions are pure: they never touch their input and return fresh
//! entries whose `has_conflict` flags are authoritative.

use std::collections::BTreeMap;

use crate::models::{ClockTime, Day, EntryId, PlannedCourse};

/// Returns a copy of `entries` with every conflict flag recomputed.
///
/// Two distinct entries conflict when they meet on the same day and their
/// half-open intervals overlap. An entry is never compared with itself.
/// Order is preserved.
pub fn compute_conflicts(entries: &[PlannedCourse]) -> Vec<PlannedCourse> {
    let mut next: Vec<PlannedCourse> = entries
        .iter()
        .cloned()
        .map(|mut entry| {
            entry.has_conflict = false;
            entry
        })
        .collect();

    for i in 0..next.len() {
        for j in (i + 1)..next.len() {
            if next[i].meeting.overlaps(&next[j].meeting) {
                next[i].has_conflict = true;
                next[j].has_conflict = true;
            }
        }
    }

    next
}

/// Day-bucketed sweep producing the same flags as [`compute_conflicts`].
///
/// Within a day, entries are visited by start time while tracking the
/// latest end seen so far and which entry owns it. An entry starting before
/// that end overlaps the owner, so both are flagged.
pub fn compute_conflicts_sweep(entries: &[PlannedCourse]) -> Vec<PlannedCourse> {
    let mut by_day: BTreeMap<Day, Vec<usize>> = BTreeMap::new();
    for (index, entry) in entries.iter().enumerate() {
        by_day.entry(entry.meeting.day).or_default().push(index);
    }

    let mut flags = vec![false; entries.len()];
    for indices in by_day.values_mut() {
        indices.sort_by_key(|&i| (entries[i].meeting.start_time, entries[i].meeting.end_time));

        let mut open: Option<(usize, ClockTime)> = None;
        for &index in indices.iter() {
            let meeting = &entries[index].meeting;
            match open {
                Some((owner, max_end)) if meeting.start_time < max_end => {
                    flags[owner] = true;
                    flags[index] = true;
                    if meeting.end_time > max_end {
                        open = Some((index, meeting.end_time));
                    }
                }
                _ => open = Some((index, meeting.end_time)),
            }
        }
    }

    entries
        .iter()
        .zip(flags)
        .map(|(entry, has_conflict)| PlannedCourse {
            has_conflict,
            ..entry.clone()
        })
        .collect()
}

/// Lists every conflicting pair of entries by ID, in input order.
pub fn conflicting_pairs(entries: &[PlannedCourse]) -> Vec<(EntryId, EntryId)> {
    let mut pairs = Vec::new();
    for (i, a) in entries.iter().enumerate() {
        for b in &entries[i + 1..] {
            if a.meeting.overlaps(&b.meeting) {
                pairs.push((a.id.clone(), b.id.clone()));
            }
        }
    }
    pairs
}
