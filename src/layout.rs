//! Balanced column layout for link lists
//! Splits an ordered list into two near-equal columns for terminal display

use serde::{Deserialize, Serialize};

/// Lists at or below this length are rendered as a single column.
pub const DEFAULT_COLUMN_THRESHOLD: usize = 3;

/// A footer/navigation link as it appears in portal link-group JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

/// Split a list into balanced columns using the default threshold.
pub fn split_columns<T>(items: &[T]) -> Vec<&[T]> {
    split_columns_at(items, DEFAULT_COLUMN_THRESHOLD)
}

/// Split a list into one or two ordered columns.
///
/// Lists of `threshold` items or fewer come back as a single column,
/// unchanged. Longer lists split at the ceiling midpoint, so an odd-length
/// list puts the extra item in the first column. Concatenating the returned
/// columns always reproduces the input order exactly.
pub fn split_columns_at<T>(items: &[T], threshold: usize) -> Vec<&[T]> {
    if items.len() <= threshold {
        return vec![items];
    }

    let mid = items.len().div_ceil(2);
    let (first, second) = items.split_at(mid);
    vec![first, second]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_lists_stay_in_one_column() {
        assert_eq!(split_columns::<u32>(&[]), vec![&[] as &[u32]]);
        assert_eq!(split_columns(&[1]), vec![&[1][..]]);
        assert_eq!(split_columns(&[1, 2, 3]), vec![&[1, 2, 3][..]]);
    }

    #[test]
    fn test_even_list_splits_in_half() {
        let columns = split_columns(&["a", "b", "c", "d"]);
        assert_eq!(columns, vec![&["a", "b"][..], &["c", "d"][..]]);
    }

    #[test]
    fn test_odd_list_puts_extra_item_first() {
        let columns = split_columns(&[1, 2, 3, 4, 5]);
        assert_eq!(columns, vec![&[1, 2, 3][..], &[4, 5][..]]);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        // Exactly at the threshold means no split
        assert_eq!(split_columns_at(&[1, 2, 3, 4, 5], 5).len(), 1);
        assert_eq!(split_columns_at(&[1, 2, 3, 4, 5, 6], 5).len(), 2);
    }

    #[test]
    fn test_concatenation_reproduces_input() {
        for n in 0..20usize {
            let items: Vec<usize> = (0..n).collect();
            let columns = split_columns(&items);
            let rejoined: Vec<usize> = columns.iter().flat_map(|c| c.iter().copied()).collect();
            assert_eq!(rejoined, items);
            if n > DEFAULT_COLUMN_THRESHOLD {
                assert_eq!(columns.len(), 2);
                assert_eq!(columns[0].len(), n.div_ceil(2));
            } else {
                assert_eq!(columns.len(), 1);
            }
        }
    }
}
