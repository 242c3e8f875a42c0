//! Identity-keyed diffing of section snapshots.

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

use crate::ui::grid::{Item, Section};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Snapshot {
    Old,
    New,
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Snapshot::Old => f.write_str("previous"),
            Snapshot::New => f.write_str("next"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiffError {
    #[error("duplicate item identity '{identity}' in {snapshot} snapshot")]
    DuplicateIdentity { identity: String, snapshot: Snapshot },
}

/// An item that survived but changed its position relative to the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    /// Index in the old snapshot.
    pub from: usize,
    /// Index in the new snapshot.
    pub to: usize,
}

/// Changes between two snapshots of the same section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionDiff {
    /// Indices into the new snapshot, ascending.
    pub inserted: Vec<usize>,
    /// Indices into the old snapshot, ascending.
    pub removed: Vec<usize>,
    /// Ordered by destination index.
    pub moved: Vec<Move>,
}

impl SectionDiff {
    pub fn is_empty(&self) -> bool {
        self.inserted.is_empty() && self.removed.is_empty() && self.moved.is_empty()
    }
}

/// Compare two snapshots by item identity.
///
/// Items present only in `new` are inserted, items present only in `old` are
/// removed. Of the items present in both, the longest run that kept its
/// relative order is treated as stationary and everything else as moved, so a
/// single insertion never reports the items after it as moves.
pub fn diff(old: &Section, new: &Section) -> Result<SectionDiff, DiffError> {
    let old_index = index_by_identity(&old.items, Snapshot::Old)?;
    let new_index = index_by_identity(&new.items, Snapshot::New)?;

    let removed = old
        .items
        .iter()
        .enumerate()
        .filter(|(_, item)| !new_index.contains_key(item.identity()))
        .map(|(index, _)| index)
        .collect();

    let mut inserted = Vec::new();
    // (new index, old index) for items that exist on both sides.
    let mut retained = Vec::new();
    for (to, item) in new.items.iter().enumerate() {
        match old_index.get(item.identity()) {
            Some(&from) => retained.push((to, from)),
            None => inserted.push(to),
        }
    }

    let old_positions: Vec<usize> = retained.iter().map(|&(_, from)| from).collect();
    let stationary = longest_increasing(&old_positions);
    let moved = retained
        .iter()
        .zip(stationary)
        .filter(|(_, keep)| !keep)
        .map(|(&(to, from), _)| Move { from, to })
        .collect();

    Ok(SectionDiff {
        inserted,
        removed,
        moved,
    })
}

fn index_by_identity(
    items: &[Item],
    snapshot: Snapshot,
) -> Result<HashMap<&str, usize>, DiffError> {
    let mut index = HashMap::with_capacity(items.len());
    for (position, item) in items.iter().enumerate() {
        if index.insert(item.identity(), position).is_some() {
            return Err(DiffError::DuplicateIdentity {
                identity: item.identity().to_string(),
                snapshot,
            });
        }
    }
    Ok(index)
}

/// Marks the members of one longest strictly increasing subsequence.
fn longest_increasing(values: &[usize]) -> Vec<bool> {
    // tails[k] = index of the smallest tail of an increasing run of length k + 1
    let mut tails: Vec<usize> = Vec::new();
    let mut previous: Vec<Option<usize>> = vec![None; values.len()];

    for (i, &value) in values.iter().enumerate() {
        let slot = tails.partition_point(|&t| values[t] < value);
        if slot > 0 {
            previous[i] = Some(tails[slot - 1]);
        }
        if slot == tails.len() {
            tails.push(i);
        } else {
            tails[slot] = i;
        }
    }

    let mut members = vec![false; values.len()];
    let mut cursor = tails.last().copied();
    while let Some(i) = cursor {
        members[i] = true;
        cursor = previous[i];
    }
    members
}
