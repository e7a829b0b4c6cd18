mod algorithms;
mod error;
mod key;
mod merge;
mod partition;
mod select;

pub use algorithms::heap_sort::{
    build_max_heap, build_max_heap_by_key, heap_sort, heap_sort_by_key, is_max_heap,
    is_max_heap_by_key, left, max_heapify, max_heapify_by_key, parent, right,
};
pub use algorithms::insertion_sort::{insertion_sort, insertion_sort_by_key};
pub use error::{Error, MergeInput, Result};
pub use key::{Identity, KeyFn};
pub use merge::{
    is_sorted, is_sorted_by_key, merge, merge_by_key, merge_k_sorted, merge_k_sorted_by_key,
    merge_k_sorted_heap, merge_k_sorted_heap_by_key,
};
pub use partition::{partition_dual_pivot, partition_hoare, partition_lomuto};
pub use select::{
    min_max, min_max_by_key, select_kth, select_kth_by_key, select_kth_in, select_kth_in_by_key,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    InsertionSort,
    HeapSort,
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 2] =
    [SortAlgorithm::InsertionSort, SortAlgorithm::HeapSort];

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::InsertionSort => "insertion_sort",
        SortAlgorithm::HeapSort => "heap_sort",
    }
}

/// Whether the algorithm keeps equal keys in input order.
pub fn is_stable(algo: SortAlgorithm) -> bool {
    matches!(algo, SortAlgorithm::InsertionSort)
}

pub fn sort<T: Ord + Clone>(algo: SortAlgorithm, data: &mut [T]) {
    sort_by_key(algo, data, &Identity);
}

pub fn sort_by_key<T, F: KeyFn<T>>(algo: SortAlgorithm, data: &mut [T], key: &F) {
    match algo {
        SortAlgorithm::InsertionSort => insertion_sort_by_key(data, key),
        SortAlgorithm::HeapSort => heap_sort_by_key(data, key),
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum MergeStrategy {
    /// Recursive halving of the list of lists, pairwise merges on the way back up.
    DivideAndConquer,
    /// Priority queue over the current head of each list.
    HeapOfHeads,
}

pub const ALL_STRATEGIES: [MergeStrategy; 2] =
    [MergeStrategy::DivideAndConquer, MergeStrategy::HeapOfHeads];

pub fn all_strategies() -> &'static [MergeStrategy] {
    &ALL_STRATEGIES
}

pub fn strategy_name(strategy: MergeStrategy) -> &'static str {
    match strategy {
        MergeStrategy::DivideAndConquer => "divide_and_conquer",
        MergeStrategy::HeapOfHeads => "heap_of_heads",
    }
}

pub fn merge_k_sorted_with<T, F: KeyFn<T>>(
    strategy: MergeStrategy,
    lists: Vec<Vec<T>>,
    key: &F,
) -> Result<Vec<T>> {
    match strategy {
        MergeStrategy::DivideAndConquer => merge_k_sorted_by_key(lists, key),
        MergeStrategy::HeapOfHeads => merge_k_sorted_heap_by_key(lists, key),
    }
}
