//! Binary max-heap primitives over a zero-indexed slice, and heap sort built on them.

use crate::key::{Identity, KeyFn};

#[inline]
pub fn parent(i: usize) -> Option<usize> {
    if i == 0 { None } else { Some((i - 1) / 2) }
}

#[inline]
pub fn left(i: usize) -> usize {
    2 * i + 1
}

#[inline]
pub fn right(i: usize) -> usize {
    2 * i + 2
}

pub fn is_max_heap<T: Ord + Clone>(data: &[T], from: usize) -> bool {
    is_max_heap_by_key(data, from, &Identity)
}

/// Checks the max-heap property for every parent index `>= from`.
pub fn is_max_heap_by_key<T, F: KeyFn<T>>(data: &[T], from: usize, key: &F) -> bool {
    (from.saturating_add(1)..data.len()).all(|child| match parent(child) {
        Some(p) if p >= from => key.key(&data[p]) >= key.key(&data[child]),
        _ => true,
    })
}

pub fn max_heapify<T: Ord + Clone>(data: &mut [T], i: usize, heap_size: usize) {
    max_heapify_by_key(data, i, heap_size, &Identity);
}

/// Sifts `data[i]` down until the heap property holds within `data[..heap_size]`.
///
/// Both subtrees of `i` must already be max-heaps. When a child ties with the parent
/// the parent stays put.
pub fn max_heapify_by_key<T, F: KeyFn<T>>(
    data: &mut [T],
    mut i: usize,
    heap_size: usize,
    key: &F,
) {
    let heap_size = heap_size.min(data.len());
    while i < heap_size {
        let l = left(i);
        let r = right(i);
        let mut largest = i;
        let mut largest_key = key.key(&data[i]);

        if l < heap_size {
            let k = key.key(&data[l]);
            if k > largest_key {
                largest = l;
                largest_key = k;
            }
        }
        if r < heap_size && key.key(&data[r]) > largest_key {
            largest = r;
        }

        if largest == i {
            return;
        }
        data.swap(i, largest);
        i = largest;
    }
}

pub fn build_max_heap<T: Ord + Clone>(data: &mut [T]) {
    build_max_heap_by_key(data, &Identity);
}

pub fn build_max_heap_by_key<T, F: KeyFn<T>>(data: &mut [T], key: &F) {
    let len = data.len();
    for i in (0..len / 2).rev() {
        max_heapify_by_key(data, i, len, key);
    }
}

pub fn heap_sort<T: Ord + Clone>(data: &mut [T]) {
    heap_sort_by_key(data, &Identity);
}

/// In-place heap sort. Not stable.
pub fn heap_sort_by_key<T, F: KeyFn<T>>(data: &mut [T], key: &F) {
    let len = data.len();
    if len < 2 {
        return;
    }

    build_max_heap_by_key(data, key);
    for end in (1..len).rev() {
        data.swap(0, end);
        max_heapify_by_key(data, 0, end, key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_helpers() {
        assert_eq!(parent(0), None);
        assert_eq!(parent(1), Some(0));
        assert_eq!(parent(2), Some(0));
        assert_eq!(parent(3), Some(1));
        assert_eq!(parent(6), Some(2));
        assert_eq!((left(0), right(0)), (1, 2));
        assert_eq!((left(1), right(1)), (3, 4));
        assert_eq!((left(4), right(4)), (9, 10));
    }

    #[test]
    fn detects_heap_violations() {
        assert!(is_max_heap(&[10, 8, 9, 4, 5, 3, 2], 0));
        assert!(!is_max_heap(&[10, 12, 9, 4, 5, 3, 2], 0));
        assert!(is_max_heap::<u8>(&[], 0));
        assert!(is_max_heap(&[1], 0));
        // The violation sits at the root, so checking from index 1 passes.
        assert!(is_max_heap(&[1, 8, 9, 4, 5, 3, 2], 1));
        assert!(!is_max_heap(&[1, 8, 9, 4, 5, 3, 2], 0));
    }

    #[test]
    fn heapify_sinks_the_root() {
        let mut data = [1, 8, 9, 4, 5, 3, 2];
        let len = data.len();
        max_heapify(&mut data, 0, len);
        assert_eq!(data, [9, 8, 3, 4, 5, 1, 2]);
        assert!(is_max_heap(&data, 0));

        let mut pairs: Vec<(char, u32)> = vec![('a', 1), ('b', 8), ('c', 9), ('d', 4)];
        let len = pairs.len();
        max_heapify_by_key(&mut pairs, 0, len, &|p: &(char, u32)| p.1);
        assert_eq!(pairs, [('c', 9), ('b', 8), ('a', 1), ('d', 4)]);
    }

    #[test]
    fn heapify_respects_heap_size() {
        let mut data = [1, 2, 9];
        max_heapify(&mut data, 0, 2);
        assert_eq!(data, [2, 1, 9]);
    }

    #[test]
    fn build_produces_heap() {
        let mut data = [3, 9, 2, 1, 4, 5];
        build_max_heap(&mut data);
        assert!(is_max_heap(&data, 0));
        assert_eq!(data[0], 9);

        let mut pairs: [(u32, i32); 5] = [(0, -3), (1, 7), (2, 0), (3, 7), (4, -1)];
        let by_second = |p: &(u32, i32)| p.1;
        build_max_heap_by_key(&mut pairs, &by_second);
        assert!(is_max_heap_by_key(&pairs, 0, &by_second));
        assert_eq!(pairs[0].1, 7);
    }

    #[test]
    fn sorts_known_cases() {
        let mut data = [4, 10, 3, 5, 1];
        heap_sort(&mut data);
        assert_eq!(data, [1, 3, 4, 5, 10]);

        let mut data = [12, 11, 13, 5, 6, 7];
        heap_sort(&mut data);
        assert_eq!(data, [5, 6, 7, 11, 12, 13]);
    }

    #[test]
    fn sorts_by_second_component() {
        let mut pairs: [(u32, u32); 4] = [(1, 5), (2, 3), (3, 8), (4, 1)];
        heap_sort_by_key(&mut pairs, &|p: &(u32, u32)| p.1);
        assert_eq!(pairs, [(4, 1), (2, 3), (1, 5), (3, 8)]);
    }
}
