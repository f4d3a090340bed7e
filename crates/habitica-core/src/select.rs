// SPDX-License-Identifier: Apache-2.0

//! Task-id expression parsing and positional list reconciliation.
//!
//! Users address tasks by their 1-based display position, with
//! comma-separated lists and inclusive ranges mixed freely across
//! arguments: `habitica todos done 1-3,4 8`. Internally everything is a
//! set of 0-based indices.

use std::collections::BTreeSet;

use crate::error::HabiticaError;

/// Parse raw task-id argument tokens into a set of zero-based indices.
///
/// Each token is split on commas; a piece containing `-` is an inclusive
/// `start-stop` range, anything else a single id. Ids are 1-based positive
/// integers; duplicates collapse. An empty range (`5-3`) expands to
/// nothing, matching the usual half-open-range intuition.
///
/// # Errors
///
/// Returns `HabiticaError::TaskId` for non-numeric pieces, ranges without
/// exactly two endpoints, and the id `0` (display ids start at 1). Parsing
/// is all-or-nothing so callers can validate before mutating anything.
pub fn parse_task_ids(args: &[String]) -> Result<BTreeSet<usize>, HabiticaError> {
    let mut indices = BTreeSet::new();
    for raw_arg in args {
        for piece in raw_arg.split(',') {
            if piece.contains('-') {
                let bounds: Vec<&str> = piece.split('-').collect();
                let &[start, stop] = bounds.as_slice() else {
                    return Err(bad_token(piece));
                };
                let start = parse_id(start, piece)?;
                let stop = parse_id(stop, piece)?;
                indices.extend((start..=stop).map(|id| id - 1));
            } else {
                indices.insert(parse_id(piece, piece)? - 1);
            }
        }
    }
    Ok(indices)
}

fn parse_id(piece: &str, token: &str) -> Result<usize, HabiticaError> {
    match piece.trim().parse::<usize>() {
        Ok(id) if id >= 1 => Ok(id),
        _ => Err(bad_token(token)),
    }
}

fn bad_token(token: &str) -> HabiticaError {
    HabiticaError::TaskId {
        token: token.to_string(),
    }
}

/// Remove the given zero-based indices from a list.
///
/// Deletions are applied in strictly descending index order so that
/// earlier deletions never invalidate later indices. Survivors keep their
/// relative order. Indices are validated against the list length up front;
/// nothing is removed if any index is out of bounds.
///
/// # Errors
///
/// Returns `HabiticaError::IndexOutOfBounds` for the first index at or
/// past the end of the list.
pub fn remove_indices<T>(
    mut list: Vec<T>,
    indices: &BTreeSet<usize>,
) -> Result<Vec<T>, HabiticaError> {
    if let Some(&index) = indices.iter().find(|&&i| i >= list.len()) {
        return Err(HabiticaError::IndexOutOfBounds {
            index,
            len: list.len(),
        });
    }
    for &index in indices.iter().rev() {
        list.remove(index);
    }
    Ok(list)
}

/// Split indices into those addressing the list and those past its end.
///
/// Per-task mutation commands treat out-of-range display ids as advisory:
/// the valid ids still run, the rest are reported and skipped.
#[must_use]
pub fn partition_in_bounds(
    indices: &BTreeSet<usize>,
    len: usize,
) -> (BTreeSet<usize>, BTreeSet<usize>) {
    indices.iter().partition(|&&i| i < len)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(args: &[&str]) -> Result<BTreeSet<usize>, HabiticaError> {
        let owned: Vec<String> = args.iter().map(ToString::to_string).collect();
        parse_task_ids(&owned)
    }

    #[test]
    fn parses_range_and_single() {
        assert_eq!(
            ids(&["1-3,4"]).unwrap(),
            BTreeSet::from([0, 1, 2, 3])
        );
    }

    #[test]
    fn parses_mixed_expression() {
        assert_eq!(
            ids(&["1,3,6-9,11"]).unwrap(),
            BTreeSet::from([0, 2, 5, 6, 7, 8, 10])
        );
    }

    #[test]
    fn parses_single_id() {
        assert_eq!(ids(&["8"]).unwrap(), BTreeSet::from([7]));
    }

    #[test]
    fn duplicates_collapse() {
        assert_eq!(ids(&["1", "1-1"]).unwrap(), BTreeSet::from([0]));
    }

    #[test]
    fn multiple_tokens_merge() {
        assert_eq!(ids(&["1-3,4", "8"]).unwrap(), BTreeSet::from([0, 1, 2, 3, 7]));
    }

    #[test]
    fn empty_range_expands_to_nothing() {
        assert_eq!(ids(&["5-3"]).unwrap(), BTreeSet::new());
    }

    #[test]
    fn rejects_non_numeric() {
        assert!(matches!(
            ids(&["two"]),
            Err(HabiticaError::TaskId { .. })
        ));
    }

    #[test]
    fn rejects_malformed_range() {
        assert!(ids(&["1-2-3"]).is_err());
        assert!(ids(&["1-"]).is_err());
        assert!(ids(&["-3"]).is_err());
    }

    #[test]
    fn rejects_zero() {
        // Display ids are 1-based; 0 would underflow to a bogus index.
        assert!(ids(&["0"]).is_err());
        assert!(ids(&["0-2"]).is_err());
    }

    #[test]
    fn remove_preserves_survivor_order() {
        let list = vec!["a", "b", "c", "d", "e"];
        let kept = remove_indices(list, &BTreeSet::from([1, 3])).unwrap();
        assert_eq!(kept, vec!["a", "c", "e"]);
    }

    #[test]
    fn remove_whole_list() {
        let list = vec![10, 20, 30];
        let kept = remove_indices(list, &BTreeSet::from([0, 1, 2])).unwrap();
        assert!(kept.is_empty());
    }

    #[test]
    fn remove_rejects_out_of_bounds_without_mutating() {
        let err = remove_indices(vec![1, 2, 3], &BTreeSet::from([1, 3])).unwrap_err();
        assert!(matches!(
            err,
            HabiticaError::IndexOutOfBounds { index: 3, len: 3 }
        ));
    }

    #[test]
    fn partition_splits_valid_and_invalid() {
        let (valid, skipped) = partition_in_bounds(&BTreeSet::from([0, 2, 9]), 3);
        assert_eq!(valid, BTreeSet::from([0, 2]));
        assert_eq!(skipped, BTreeSet::from([9]));
    }
}
