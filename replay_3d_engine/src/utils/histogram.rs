/// Id occurrence counting.

use rustc_hash::FxHashMap;

use crate::frame::PointId;

/// Count how often each id occurs.
///
/// Returns `(id, count)` pairs, most frequent first, ties broken by id so
/// the order is deterministic. Callers typically take the first few entries
/// to find the largest labeled objects in a frame, e.g. to remove them with
/// a [`RemoveByIds`](crate::filter::RemoveByIds) stage.
///
/// # Example
///
/// ```
/// use replay_3d_engine::replay3d::utils::id_occurrences;
///
/// let counts = id_occurrences(&[7, 3, 7, 7, 3, 1]);
/// assert_eq!(counts, vec![(7, 3), (3, 2), (1, 1)]);
/// ```
pub fn id_occurrences(ids: &[PointId]) -> Vec<(PointId, usize)> {
    let mut counts: FxHashMap<PointId, usize> = FxHashMap::default();
    for id in ids {
        *counts.entry(*id).or_insert(0) += 1;
    }

    let mut occurrences: Vec<(PointId, usize)> = counts.into_iter().collect();
    occurrences.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    occurrences
}

#[cfg(test)]
#[path = "histogram_tests.rs"]
mod tests;
