use std::cmp::Ordering;

/// Projection from an element to the key it is ordered by.
///
/// Every algorithm in this crate compares elements only through a `KeyFn`. The
/// projection must be pure: projecting the same element twice during one call has to
/// produce equal keys.
///
/// Any `Fn(&T) -> K` with `K: Ord` is a `KeyFn<T>`, so closures such as `|p: &(u32, char)| p.0`
/// can be passed directly. [`Identity`] orders elements by themselves.
pub trait KeyFn<T> {
    type Key: Ord;

    fn key(&self, item: &T) -> Self::Key;

    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.key(a).cmp(&self.key(b))
    }
}

impl<T, K, F> KeyFn<T> for F
where
    K: Ord,
    F: Fn(&T) -> K,
{
    type Key = K;

    #[inline]
    fn key(&self, item: &T) -> K {
        self(item)
    }
}

/// Orders elements by their own `Ord` impl. The key is a clone of the element.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Identity;

impl<T: Ord + Clone> KeyFn<T> for Identity {
    type Key = T;

    #[inline]
    fn key(&self, item: &T) -> T {
        item.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_project_fields() {
        let second = |p: &(u32, char)| p.1;
        assert_eq!(second.key(&(3, 'b')), 'b');
        assert_eq!(second.compare(&(9, 'a'), &(1, 'b')), Ordering::Less);
        assert_eq!(second.compare(&(9, 'a'), &(1, 'a')), Ordering::Equal);
    }

    #[test]
    fn identity_uses_element_order() {
        assert_eq!(Identity.key(&7_u64), 7);
        assert_eq!(Identity.compare(&"pear", &"apple"), Ordering::Greater);
        assert_eq!(Identity.compare(&2_i32, &2_i32), Ordering::Equal);
    }
}
