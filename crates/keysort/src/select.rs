//! Order statistics.

use std::cmp::Ordering;
use std::ops::{Bound, RangeBounds};

use tracing::trace;

use crate::error::{Error, Result};
use crate::key::{Identity, KeyFn};
use crate::partition::partition_lomuto;

pub fn select_kth<T: Ord + Clone>(data: &mut [T], rank: usize) -> Result<&T> {
    select_kth_by_key(data, rank, &Identity)
}

/// Returns the element of 0-indexed `rank` in key order (quickselect over Lomuto).
///
/// The slice is reordered in place. Each round partitions the remaining window and keeps
/// only the side holding `rank`, so the loop needs no call stack. Expected linear time;
/// quadratic when every partition is maximally unbalanced, e.g. on already sorted input.
pub fn select_kth_by_key<'a, T, F: KeyFn<T>>(
    data: &'a mut [T],
    rank: usize,
    key: &F,
) -> Result<&'a T> {
    let len = data.len();
    if len == 0 {
        return Err(Error::EmptyInput);
    }
    if rank >= len {
        return Err(Error::RankOutOfRange { rank, len });
    }

    let mut data = data;
    let mut rank = rank;
    let mut rounds = 0usize;
    loop {
        if data.len() == 1 {
            trace!(rounds, "quickselect narrowed to a single element");
            return Ok(&data[0]);
        }

        rounds += 1;
        let p = partition_lomuto(data, key);
        match rank.cmp(&p) {
            Ordering::Equal => {
                trace!(rounds, "quickselect hit the pivot");
                return Ok(&data[p]);
            }
            Ordering::Less => {
                let (left, _) = data.split_at_mut(p);
                data = left;
            }
            Ordering::Greater => {
                let (_, right) = data.split_at_mut(p + 1);
                rank -= p + 1;
                data = right;
            }
        }
    }
}

pub fn select_kth_in<T: Ord + Clone, R: RangeBounds<usize>>(
    data: &mut [T],
    range: R,
    rank: usize,
) -> Result<&T> {
    select_kth_in_by_key(data, range, rank, &Identity)
}

/// Like [`select_kth_by_key`] restricted to `data[range]`; `rank` counts from the start
/// of the range. Elements outside the range are not touched.
pub fn select_kth_in_by_key<'a, T, F: KeyFn<T>, R: RangeBounds<usize>>(
    data: &'a mut [T],
    range: R,
    rank: usize,
    key: &F,
) -> Result<&'a T> {
    let (start, end) = normalize_range(range, data.len())?;
    select_kth_by_key(&mut data[start..end], rank, key)
}

pub fn min_max<T: Ord + Clone>(data: &[T]) -> Result<(&T, &T)> {
    min_max_by_key(data, &Identity)
}

/// Single pass returning the first minimum and the first maximum by key.
pub fn min_max_by_key<'a, T, F: KeyFn<T>>(data: &'a [T], key: &F) -> Result<(&'a T, &'a T)> {
    let (first, rest) = data.split_first().ok_or(Error::EmptyInput)?;
    let mut min = first;
    let mut max = first;
    let mut min_key = key.key(first);
    let mut max_key = key.key(first);
    for item in rest {
        let k = key.key(item);
        if k < min_key {
            min = item;
            min_key = k;
        } else if k > max_key {
            max = item;
            max_key = k;
        }
    }
    Ok((min, max))
}

fn normalize_range<R: RangeBounds<usize>>(range: R, len: usize) -> Result<(usize, usize)> {
    let start = match range.start_bound() {
        Bound::Included(&start) => Some(start),
        Bound::Excluded(&start) => start.checked_add(1),
        Bound::Unbounded => Some(0),
    };
    let end = match range.end_bound() {
        Bound::Included(&end) => end.checked_add(1),
        Bound::Excluded(&end) => Some(end),
        Bound::Unbounded => Some(len),
    };

    match (start, end) {
        (Some(start), Some(end)) if start <= end && end <= len => Ok((start, end)),
        (start, end) => Err(Error::InvalidRange {
            start: start.unwrap_or(usize::MAX),
            end: end.unwrap_or(usize::MAX),
            len,
        }),
    }
}
