//! Merging of key-sorted sequences.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::{debug, trace};

use crate::error::{Error, MergeInput, Result};
use crate::key::{Identity, KeyFn};

pub fn is_sorted<T: Ord + Clone>(data: &[T]) -> bool {
    is_sorted_by_key(data, &Identity)
}

/// True when every adjacent pair is non-decreasing by key. Empty and single-element
/// slices are sorted.
pub fn is_sorted_by_key<T, F: KeyFn<T>>(data: &[T], key: &F) -> bool {
    data.windows(2).all(|w| key.key(&w[0]) <= key.key(&w[1]))
}

pub fn merge<T: Ord + Clone>(a: Vec<T>, b: Vec<T>) -> Result<Vec<T>> {
    merge_by_key(a, b, &Identity)
}

/// Merges two key-sorted vectors. On equal keys the element from `a` comes first.
///
/// Both inputs are checked before any work is done; an unsorted input yields
/// [`Error::NotSorted`] and no partial result.
pub fn merge_by_key<T, F: KeyFn<T>>(a: Vec<T>, b: Vec<T>, key: &F) -> Result<Vec<T>> {
    if !is_sorted_by_key(&a, key) {
        debug!(len = a.len(), "rejecting unsorted left merge input");
        return Err(Error::NotSorted {
            input: MergeInput::Left,
        });
    }
    if !is_sorted_by_key(&b, key) {
        debug!(len = b.len(), "rejecting unsorted right merge input");
        return Err(Error::NotSorted {
            input: MergeInput::Right,
        });
    }

    Ok(merge_sorted(a, b, key))
}

pub fn merge_k_sorted<T: Ord + Clone>(lists: Vec<Vec<T>>) -> Result<Vec<T>> {
    merge_k_sorted_by_key(lists, &Identity)
}

/// Merges `k` key-sorted vectors by splitting the list of lists in half, merging each
/// half recursively and merging the two results.
///
/// Recursion depth is `ceil(log2(k))` and every level moves all `n` elements once, for
/// `O(n log k)` in total. Equal keys keep list order: an element from list `i` precedes
/// an equal-keyed element from list `j > i`. A single list is returned as is, without
/// a sortedness check; with two or more lists every one is checked before merging.
pub fn merge_k_sorted_by_key<T, F: KeyFn<T>>(lists: Vec<Vec<T>>, key: &F) -> Result<Vec<T>> {
    validate_lists(&lists, key)?;
    Ok(merge_halves(lists, key, 0))
}

pub fn merge_k_sorted_heap<T: Ord + Clone>(lists: Vec<Vec<T>>) -> Result<Vec<T>> {
    merge_k_sorted_heap_by_key(lists, &Identity)
}

/// Same contract and output as [`merge_k_sorted_by_key`], driven by a min-priority queue
/// holding the current head of every list instead of recursive pairing.
pub fn merge_k_sorted_heap_by_key<T, F: KeyFn<T>>(lists: Vec<Vec<T>>, key: &F) -> Result<Vec<T>> {
    validate_lists(&lists, key)?;

    let total = lists.iter().map(Vec::len).sum();
    let mut out = Vec::with_capacity(total);
    let mut sources: Vec<_> = lists.into_iter().map(Vec::into_iter).collect();
    let mut heads = BinaryHeap::with_capacity(sources.len());

    for (list, source) in sources.iter_mut().enumerate() {
        if let Some(item) = source.next() {
            heads.push(Head::new(item, list, key));
        }
    }

    while let Some(Head { item, list, .. }) = heads.pop() {
        out.push(item);
        if let Some(next) = sources[list].next() {
            heads.push(Head::new(next, list, key));
        }
    }

    Ok(out)
}

fn validate_lists<T, F: KeyFn<T>>(lists: &[Vec<T>], key: &F) -> Result<()> {
    // Nothing to merge a lone list against.
    if lists.len() < 2 {
        return Ok(());
    }
    match lists.iter().position(|list| !is_sorted_by_key(list, key)) {
        Some(index) => {
            debug!(
                index,
                lists = lists.len(),
                "rejecting unsorted k-way merge input"
            );
            Err(Error::NotSorted {
                input: MergeInput::List(index),
            })
        }
        None => Ok(()),
    }
}

fn merge_halves<T, F: KeyFn<T>>(mut lists: Vec<Vec<T>>, key: &F, depth: usize) -> Vec<T> {
    if lists.len() <= 1 {
        return lists.pop().unwrap_or_default();
    }

    let right = lists.split_off(lists.len() / 2);
    trace!(
        depth,
        left = lists.len(),
        right = right.len(),
        "splitting k-way merge"
    );
    let left = merge_halves(lists, key, depth + 1);
    let right = merge_halves(right, key, depth + 1);
    merge_sorted(left, right, key)
}

fn merge_sorted<T, F: KeyFn<T>>(a: Vec<T>, b: Vec<T>, key: &F) -> Vec<T> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    let mut a = a.into_iter().peekable();
    let mut b = b.into_iter().peekable();

    loop {
        let take_a = match (a.peek(), b.peek()) {
            (Some(x), Some(y)) => key.key(x) <= key.key(y),
            _ => break,
        };
        out.extend(if take_a { a.next() } else { b.next() });
    }

    out.extend(a);
    out.extend(b);
    out
}

/// Queue entry: pops the smallest key first, then the smallest list index.
struct Head<K, T> {
    key: K,
    list: usize,
    item: T,
}

impl<K, T> Head<K, T> {
    fn new<F: KeyFn<T, Key = K>>(item: T, list: usize, key: &F) -> Self {
        Self {
            key: key.key(&item),
            list,
            item,
        }
    }
}

impl<K: Ord, T> Ord for Head<K, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.list.cmp(&self.list))
    }
}

impl<K: Ord, T> PartialOrd for Head<K, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord, T> PartialEq for Head<K, T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K: Ord, T> Eq for Head<K, T> {}
