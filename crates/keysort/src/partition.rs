//! In-place partition schemes.
//!
//! All functions work on the whole slice they are given; partition a sub-range by
//! slicing first (`&mut data[lo..=hi]`). Returned indices are relative to that slice.

use crate::key::KeyFn;

/// Lomuto partition around the key of the last element.
///
/// Returns the final index `p` of the pivot: every element before `p` has a key `<=`
/// the pivot key, every element after it has a key `>=` the pivot key. Duplicates of the
/// pivot key may end up on the left. Empty input returns 0.
pub fn partition_lomuto<T, F: KeyFn<T>>(data: &mut [T], key: &F) -> usize {
    let Some(hi) = data.len().checked_sub(1) else {
        return 0;
    };

    let pivot = key.key(&data[hi]);
    let mut store = 0usize;
    for j in 0..hi {
        if key.key(&data[j]) <= pivot {
            data.swap(store, j);
            store += 1;
        }
    }

    data.swap(store, hi);
    store
}

/// Hoare partition around the key of the first element.
///
/// Returns `q` such that `data[..=q]` holds keys `<=` the pivot key and `data[q + 1..]`
/// holds keys `>=` it. For two or more elements both sides are non-empty
/// (`q < data.len() - 1`). Unlike [`partition_lomuto`] the pivot element itself is not
/// guaranteed to end up at `q`. Slices of length 0 or 1 return 0.
pub fn partition_hoare<T, F: KeyFn<T>>(data: &mut [T], key: &F) -> usize {
    let len = data.len();
    if len <= 1 {
        return 0;
    }

    let pivot = key.key(&data[0]);
    let mut i = 0usize;
    let mut j = len - 1;

    loop {
        while i < len - 1 && key.key(&data[i]) < pivot {
            i += 1;
        }

        while j > 0 && key.key(&data[j]) > pivot {
            j -= 1;
        }

        if i >= j {
            return j;
        }

        data.swap(i, j);
        i += 1;
        j -= 1;
    }
}

/// Three-way partition around the keys of the first and last elements.
///
/// The endpoints are swapped first if needed so that `pivot1 <= pivot2`. On return
/// `(p1, p2)` describes three regions:
///
/// - `data[..p1]`: keys `< pivot1`
/// - `data[p1..p2]`: keys in `pivot1..=pivot2`, both pivots included
/// - `data[p2..]`: keys `> pivot2`
///
/// Slices of length 0 or 1 return `(0, len)` without scanning.
pub fn partition_dual_pivot<T, F: KeyFn<T>>(data: &mut [T], key: &F) -> (usize, usize) {
    let len = data.len();
    if len <= 1 {
        return (0, len);
    }

    let last = len - 1;
    if key.key(&data[0]) > key.key(&data[last]) {
        data.swap(0, last);
    }

    let low = key.key(&data[0]);
    let high = key.key(&data[last]);

    // data[1..lt] < low, data[lt..scan] in the middle, data[gt..last] > high.
    let mut lt = 1usize;
    let mut scan = 1usize;
    let mut gt = last;
    while scan < gt {
        let k = key.key(&data[scan]);
        if k < low {
            data.swap(lt, scan);
            lt += 1;
            scan += 1;
        } else if k > high {
            gt -= 1;
            // The element swapped in from the right is unexamined; keep `scan` in place.
            data.swap(scan, gt);
        } else {
            scan += 1;
        }
    }

    lt -= 1;
    data.swap(0, lt);
    data.swap(last, gt);

    (lt, gt + 1)
}
