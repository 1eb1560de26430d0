//! Sibling ordering helpers for chapters and outlines.
//!
//! Both entities carry an explicit `sort_order` column scoped to their
//! parent novel. The arithmetic lives here, away from SQL, so the append
//! and reorder rules can be unit tested without a database.

use std::collections::HashSet;

use crate::error::CoreError;
use crate::types::DbId;

/// Resolve the sort order for a newly created sibling.
///
/// A missing or non-positive requested order means "append": one past the
/// current maximum, or 1 when the parent has no children yet.
pub fn resolve_sort_order(requested: Option<i32>, current_max: Option<i32>) -> i32 {
    match requested {
        Some(n) if n > 0 => n,
        _ => current_max.unwrap_or(0) + 1,
    }
}

/// Validate a caller-supplied reorder sequence against the parent's
/// existing children.
///
/// The sequence must be a full permutation: non-empty, free of duplicates,
/// and containing exactly the existing child set. Unknown ids and missing
/// children are both validation errors, so a rejected reorder never
/// touches stored order values.
pub fn validate_permutation(existing: &[DbId], supplied: &[DbId]) -> Result<(), CoreError> {
    if supplied.is_empty() {
        return Err(CoreError::Validation(
            "reorder sequence must not be empty".into(),
        ));
    }

    let mut seen = HashSet::with_capacity(supplied.len());
    for id in supplied {
        if !seen.insert(*id) {
            return Err(CoreError::Validation(format!(
                "reorder sequence contains duplicate id {id}"
            )));
        }
    }

    let existing_set: HashSet<DbId> = existing.iter().copied().collect();
    for id in supplied {
        if !existing_set.contains(id) {
            return Err(CoreError::Validation(format!(
                "id {id} does not belong to this novel"
            )));
        }
    }
    if seen.len() != existing_set.len() {
        return Err(CoreError::Validation(format!(
            "reorder sequence must include all {} existing items, got {}",
            existing_set.len(),
            seen.len()
        )));
    }

    Ok(())
}

/// Map a validated permutation to sequential order values 1..=N.
pub fn assign_sort_orders(supplied: &[DbId]) -> Vec<(DbId, i32)> {
    supplied
        .iter()
        .enumerate()
        .map(|(idx, id)| (*id, idx as i32 + 1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use uuid::Uuid;

    fn ids(n: usize) -> Vec<DbId> {
        (0..n).map(|_| Uuid::new_v4()).collect()
    }

    #[test]
    fn append_starts_at_one() {
        assert_eq!(resolve_sort_order(None, None), 1);
        assert_eq!(resolve_sort_order(Some(0), None), 1);
        assert_eq!(resolve_sort_order(Some(-3), None), 1);
    }

    #[test]
    fn append_is_max_plus_one() {
        assert_eq!(resolve_sort_order(None, Some(7)), 8);
        assert_eq!(resolve_sort_order(Some(0), Some(2)), 3);
    }

    #[test]
    fn explicit_positive_order_is_kept() {
        assert_eq!(resolve_sort_order(Some(4), Some(9)), 4);
    }

    #[test]
    fn full_permutation_is_accepted() {
        let existing = ids(4);
        let mut shuffled = existing.clone();
        shuffled.reverse();
        assert!(validate_permutation(&existing, &shuffled).is_ok());
    }

    #[test]
    fn empty_sequence_is_rejected() {
        let existing = ids(2);
        assert_matches!(
            validate_permutation(&existing, &[]),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let existing = ids(2);
        let supplied = vec![existing[0], existing[0]];
        assert_matches!(
            validate_permutation(&existing, &supplied),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn unknown_id_is_rejected() {
        let existing = ids(2);
        let supplied = vec![existing[0], Uuid::new_v4()];
        assert_matches!(
            validate_permutation(&existing, &supplied),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn missing_child_is_rejected() {
        let existing = ids(3);
        let supplied = vec![existing[0], existing[1]];
        assert_matches!(
            validate_permutation(&existing, &supplied),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn assignment_is_sequential_from_one() {
        let supplied = ids(3);
        let assigned = assign_sort_orders(&supplied);
        assert_eq!(assigned[0], (supplied[0], 1));
        assert_eq!(assigned[1], (supplied[1], 2));
        assert_eq!(assigned[2], (supplied[2], 3));
    }

    #[test]
    fn reapplying_a_permutation_assigns_identical_orders() {
        let supplied = ids(5);
        assert_eq!(assign_sort_orders(&supplied), assign_sort_orders(&supplied));
    }
}
