//! Assignment of project indices to layout slots.

use std::ops::Range;

use serde::Serialize;

use super::ColumnAllocation;

/// Projects pinned in the center column.
pub const CENTER_ITEMS: usize = 2;

/// Projects per side column.
pub const ITEMS_PER_COLUMN: usize = 2;

/// Where each project index lands. Every range is clamped to the number of
/// projects, so columns past the end are simply empty. Each side holds at
/// most as many ranges as the projects could fill; the allocation itself is
/// not capped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectPlacement {
    pub center: Range<usize>,
    /// Left columns, nearest to the center first.
    pub left: Vec<Range<usize>>,
    /// Right columns, nearest to the center first.
    pub right: Vec<Range<usize>>,
    /// Everything not placed in a column, in original order.
    pub fallback: Range<usize>,
}

fn clamped(start: usize, len: usize, total: usize) -> Range<usize> {
    let start = start.min(total);
    start..start.saturating_add(len).min(total)
}

fn slot<'a, T>(items: &'a [T], range: &Range<usize>) -> &'a [T] {
    let end = range.end.min(items.len());
    &items[range.start.min(end)..end]
}

impl ProjectPlacement {
    /// Column layout: center pair, then left columns, then right columns.
    pub fn assign(allocation: ColumnAllocation, total: usize) -> Self {
        let left_count = allocation.left as usize;
        let right_count = allocation.right as usize;

        let fillable = total
            .saturating_sub(CENTER_ITEMS)
            .div_ceil(ITEMS_PER_COLUMN);

        let center = clamped(0, CENTER_ITEMS, total);
        let left = (0..left_count.min(fillable))
            .map(|i| clamped(CENTER_ITEMS + i * ITEMS_PER_COLUMN, ITEMS_PER_COLUMN, total))
            .collect();
        let right_start = CENTER_ITEMS.saturating_add(left_count.saturating_mul(ITEMS_PER_COLUMN));
        let right = (0..right_count.min(fillable))
            .map(|j| {
                clamped(
                    right_start.saturating_add(j * ITEMS_PER_COLUMN),
                    ITEMS_PER_COLUMN,
                    total,
                )
            })
            .collect();
        let placed = CENTER_ITEMS.saturating_add(
            left_count
                .saturating_add(right_count)
                .saturating_mul(ITEMS_PER_COLUMN),
        );

        Self {
            center,
            left,
            right,
            fallback: placed.min(total)..total,
        }
    }

    /// Stacked layout: every project in the fallback list.
    pub fn stacked(total: usize) -> Self {
        Self {
            center: 0..0,
            left: Vec::new(),
            right: Vec::new(),
            fallback: 0..total,
        }
    }

    /// Number of projects shown in columns (center included).
    pub fn placed_in_columns(&self) -> usize {
        self.center.len()
            + self.left.iter().map(Range::len).sum::<usize>()
            + self.right.iter().map(Range::len).sum::<usize>()
    }

    /// Borrow the slices of `items` for each slot.
    ///
    /// `items` should be the same sequence the placement was computed for;
    /// indices past its end are clamped away.
    pub fn apply<'a, T>(&self, items: &'a [T]) -> PlacedProjects<'a, T> {
        PlacedProjects {
            center: slot(items, &self.center),
            left: self.left.iter().map(|r| slot(items, r)).collect(),
            right: self.right.iter().map(|r| slot(items, r)).collect(),
            fallback: slot(items, &self.fallback),
        }
    }
}

/// Borrowed view of the items in each slot.
#[derive(Debug)]
pub struct PlacedProjects<'a, T> {
    pub center: &'a [T],
    pub left: Vec<&'a [T]>,
    pub right: Vec<&'a [T]>,
    pub fallback: &'a [T],
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_indices(p: &ProjectPlacement) -> Vec<usize> {
        let mut out: Vec<usize> = p.center.clone().collect();
        for r in p.left.iter().chain(p.right.iter()) {
            out.extend(r.clone());
        }
        out.extend(p.fallback.clone());
        out
    }

    #[test]
    fn test_eleven_projects_one_column_each_side() {
        let p = ProjectPlacement::assign(ColumnAllocation { left: 1, right: 1 }, 11);
        assert_eq!(p.center, 0..2);
        assert_eq!(p.left, vec![2..4]);
        assert_eq!(p.right, vec![4..6]);
        assert_eq!(p.fallback, 6..11);
        assert_eq!(p.fallback.len(), 5);
        assert_eq!(p.placed_in_columns(), 6);
    }

    #[test]
    fn test_left_columns_fill_before_right() {
        let p = ProjectPlacement::assign(ColumnAllocation { left: 2, right: 2 }, 13);
        assert_eq!(p.left, vec![2..4, 4..6]);
        assert_eq!(p.right, vec![6..8, 8..10]);
        assert_eq!(p.fallback, 10..13);
    }

    #[test]
    fn test_no_side_columns_keeps_center_pair() {
        let p = ProjectPlacement::assign(ColumnAllocation::NONE, 5);
        assert_eq!(p.center, 0..2);
        assert!(p.left.is_empty() && p.right.is_empty());
        assert_eq!(p.fallback, 2..5);
    }

    #[test]
    fn test_stacked_puts_everything_in_fallback() {
        let p = ProjectPlacement::stacked(11);
        assert!(p.center.is_empty());
        assert_eq!(p.fallback, 0..11);
        assert_eq!(p.placed_in_columns(), 0);
    }

    #[test]
    fn test_out_of_range_columns_are_empty() {
        let p = ProjectPlacement::assign(ColumnAllocation { left: 2, right: 2 }, 3);
        assert_eq!(p.center, 0..2);
        assert_eq!(p.left, vec![2..3]);
        assert_eq!(p.right, vec![3..3]);
        assert!(p.fallback.is_empty());

        let empty = ProjectPlacement::assign(ColumnAllocation { left: 1, right: 1 }, 0);
        assert_eq!(empty.placed_in_columns(), 0);
        assert!(empty.fallback.is_empty());
    }

    #[test]
    fn test_huge_allocation_builds_only_fillable_columns() {
        let alloc = ColumnAllocation {
            left: 61_356_673,
            right: 61_356_673,
        };
        let p = ProjectPlacement::assign(alloc, 14);
        assert_eq!(p.center, 0..2);
        assert_eq!(p.left.len(), 6);
        assert_eq!(p.left[5], 12..14);
        assert_eq!(p.right, vec![14..14; 6]);
        assert!(p.fallback.is_empty());
        assert_eq!(p.placed_in_columns(), 14);

        let max = ColumnAllocation {
            left: u32::MAX,
            right: u32::MAX,
        };
        assert_eq!(all_indices(&ProjectPlacement::assign(max, 9)), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_assignment_is_order_preserving_partition() {
        for total in 0..20 {
            for per_side in 0..5 {
                let alloc = ColumnAllocation {
                    left: per_side,
                    right: per_side,
                };
                let p = ProjectPlacement::assign(alloc, total);
                assert_eq!(all_indices(&p), (0..total).collect::<Vec<_>>());
            }
            assert_eq!(
                all_indices(&ProjectPlacement::stacked(total)),
                (0..total).collect::<Vec<_>>()
            );
        }
    }

    #[test]
    fn test_apply_borrows_slices() {
        let items: Vec<u32> = (100..111).collect();
        let p = ProjectPlacement::assign(ColumnAllocation { left: 1, right: 1 }, items.len());
        let placed = p.apply(&items);
        assert_eq!(placed.center, &[100, 101]);
        assert_eq!(placed.left, vec![&[102, 103][..]]);
        assert_eq!(placed.right, vec![&[104, 105][..]]);
        assert_eq!(placed.fallback, &[106, 107, 108, 109, 110]);
    }

    #[test]
    fn test_apply_with_shorter_items_clamps() {
        let p = ProjectPlacement::assign(ColumnAllocation { left: 1, right: 1 }, 11);
        let items = [1, 2, 3];
        let placed = p.apply(&items);
        assert_eq!(placed.center, &[1, 2]);
        assert_eq!(placed.left[0], &[3]);
        assert!(placed.right[0].is_empty());
        assert!(placed.fallback.is_empty());
    }
}
