pub mod heap_sort;
pub mod insertion_sort;
