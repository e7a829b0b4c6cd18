use crate::key::{Identity, KeyFn};

pub fn insertion_sort<T: Ord + Clone>(data: &mut [T]) {
    insertion_sort_by_key(data, &Identity);
}

/// Stable insertion sort. Only predecessors with a strictly greater key are shifted, so
/// equal keys keep their input order.
pub fn insertion_sort_by_key<T, F: KeyFn<T>>(data: &mut [T], key: &F) {
    let len = data.len();
    if len < 2 {
        return;
    }

    for i in 1..len {
        let current = key.key(&data[i]);
        let mut pos = i;
        while pos > 0 && key.key(&data[pos - 1]) > current {
            pos -= 1;
        }
        if pos < i {
            // Shift data[pos..i] one slot right and drop the current element into `pos`.
            data[pos..=i].rotate_right(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_small_cases() {
        let mut data = [5, 2, 4, 6, 1, 3];
        insertion_sort(&mut data);
        assert_eq!(data, [1, 2, 3, 4, 5, 6]);

        let mut empty: [u8; 0] = [];
        insertion_sort(&mut empty);

        let mut words = ["pear", "apple", "fig"];
        insertion_sort(&mut words);
        assert_eq!(words, ["apple", "fig", "pear"]);
    }

    #[test]
    fn keeps_equal_keys_in_input_order() {
        let mut data: [(u32, char); 6] =
            [(3, 'a'), (1, 'b'), (3, 'c'), (2, 'd'), (1, 'e'), (3, 'f')];
        insertion_sort_by_key(&mut data, &|p: &(u32, char)| p.0);
        assert_eq!(
            data,
            [(1, 'b'), (1, 'e'), (2, 'd'), (3, 'a'), (3, 'c'), (3, 'f')]
        );
    }

    #[test]
    fn sorts_by_each_component() {
        let base: [(u32, i32, &str); 3] = [(7, -2, "q"), (1, 9, "b"), (4, -5, "z")];

        let mut by_first = base;
        insertion_sort_by_key(&mut by_first, &|t: &(u32, i32, &str)| t.0);
        assert_eq!(by_first.map(|t| t.0), [1, 4, 7]);

        let mut by_second = base;
        insertion_sort_by_key(&mut by_second, &|t: &(u32, i32, &str)| t.1);
        assert_eq!(by_second.map(|t| t.0), [4, 7, 1]);

        let mut by_third = base;
        insertion_sort_by_key(&mut by_third, &|t: &(u32, i32, &str)| t.2.to_owned());
        assert_eq!(by_third.map(|t| t.0), [1, 7, 4]);
    }
}
