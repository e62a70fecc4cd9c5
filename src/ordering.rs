use crate::adapter::Comparer;
use crate::error::{Error, Result};
use std::any::type_name;
use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use tracing::{debug, trace};

pub struct OrderingAdapter<T: ?Sized, F> {
    compare: F,
    _marker: PhantomData<fn(&T)>,
}

impl<T, F> OrderingAdapter<T, F>
where
    T: ?Sized,
    F: Fn(Option<&T>, Option<&T>) -> i32,
{
    pub const fn new(compare: F) -> Self {
        Self {
            compare,
            _marker: PhantomData,
        }
    }
}

impl<T, F> Comparer<T> for OrderingAdapter<T, F>
where
    T: ?Sized,
    F: Fn(Option<&T>, Option<&T>) -> i32,
{
    #[inline]
    fn compare(&self, x: Option<&T>, y: Option<&T>) -> i32 {
        (self.compare)(x, y)
    }
}

impl<T: ?Sized, F: Clone> Clone for OrderingAdapter<T, F> {
    fn clone(&self) -> Self {
        Self {
            compare: self.compare.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T: ?Sized, F> fmt::Debug for OrderingAdapter<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "OrderingAdapter<{}>", type_name::<T>())
    }
}

pub fn create_comparer<T, F>(compare: F) -> OrderingAdapter<T, F>
where
    T: ?Sized,
    F: Fn(Option<&T>, Option<&T>) -> i32,
{
    trace!(element = type_name::<T>(), "created ordering adapter");
    OrderingAdapter::new(compare)
}

pub fn try_create_comparer<T, F>(compare: Option<F>) -> Result<OrderingAdapter<T, F>>
where
    T: ?Sized,
    F: Fn(Option<&T>, Option<&T>) -> i32,
{
    match compare {
        Some(compare) => Ok(create_comparer(compare)),
        None => {
            debug!(element = type_name::<T>(), "missing `compare` argument");
            Err(Error::InvalidArgument {
                argument: "compare",
            })
        }
    }
}

pub fn sort_by_comparer<T, C>(data: &mut [T], comparer: &C)
where
    C: Comparer<T> + ?Sized,
{
    data.sort_by(|a, b| comparer.ordering(a, b));
}

// Every value in one collection must share the same comparer.
pub struct Ordered<'c, T: ?Sized, C: ?Sized> {
    value: &'c T,
    comparer: &'c C,
}

impl<'c, T, C> Ordered<'c, T, C>
where
    T: ?Sized,
    C: Comparer<T> + ?Sized,
{
    pub const fn new(value: &'c T, comparer: &'c C) -> Self {
        Self { value, comparer }
    }

    pub const fn get(&self) -> &'c T {
        self.value
    }
}

impl<'c, T, C> PartialEq for Ordered<'c, T, C>
where
    T: ?Sized,
    C: Comparer<T> + ?Sized,
{
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<'c, T, C> Eq for Ordered<'c, T, C>
where
    T: ?Sized,
    C: Comparer<T> + ?Sized,
{
}

impl<'c, T, C> PartialOrd for Ordered<'c, T, C>
where
    T: ?Sized,
    C: Comparer<T> + ?Sized,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<'c, T, C> Ord for Ordered<'c, T, C>
where
    T: ?Sized,
    C: Comparer<T> + ?Sized,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.comparer.ordering(self.value, other.value)
    }
}

impl<'c, T: ?Sized, C: ?Sized> Clone for Ordered<'c, T, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'c, T: ?Sized, C: ?Sized> Copy for Ordered<'c, T, C> {}

impl<'c, T, C> fmt::Debug for Ordered<'c, T, C>
where
    T: fmt::Debug + ?Sized,
    C: ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Ordered({:?})", self.value)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::cell::Cell;
    use std::collections::BTreeSet;

    fn by_length(a: Option<&str>, b: Option<&str>) -> i32 {
        a.map_or(0, str::len) as i32 - b.map_or(0, str::len) as i32
    }

    #[test]
    fn test_forwards_verbatim() {
        let cmp = create_comparer::<i32, _>(|a, b| match (a, b) {
            (None, None) => 100,
            (None, Some(y)) => -200 - y,
            (Some(x), None) => 300 + x,
            (Some(x), Some(y)) => (x - y) * 7,
        });
        assert_eq!(cmp.compare(None, None), 100);
        assert_eq!(cmp.compare(None, Some(&5)), -205);
        assert_eq!(cmp.compare(Some(&5), None), 305);
        assert_eq!(cmp.compare(Some(&5), Some(&3)), 14);
        assert_eq!(cmp.compare(Some(&3), Some(&5)), -14);
    }

    #[test]
    fn test_length_scenario() {
        let cmp = create_comparer(by_length);
        assert!(cmp.compare(Some("ab"), Some("abcd")) < 0);
        assert!(cmp.compare(Some("abcd"), Some("ab")) > 0);
        assert_eq!(cmp.compare(Some("ab"), Some("cd")), 0);
        assert_eq!(cmp.ordering("ab", "cd"), Ordering::Equal);
    }

    #[test]
    fn test_idempotent() {
        let cmp = create_comparer(by_length);
        let first = cmp.compare(Some("xyz"), Some("x"));
        for _ in 0..10 {
            assert_eq!(cmp.compare(Some("xyz"), Some("x")), first);
        }
    }

    #[test]
    fn test_no_extra_calls() {
        let calls = Cell::new(0);
        let cmp = create_comparer::<u8, _>(|_, _| {
            calls.set(calls.get() + 1);
            0
        });
        cmp.compare(Some(&1), Some(&2));
        cmp.compare(None, None);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_try_create() {
        let cmp = try_create_comparer(Some(by_length)).unwrap();
        assert!(cmp.compare(Some("a"), Some("bb")) < 0);

        let err = try_create_comparer::<str, fn(Option<&str>, Option<&str>) -> i32>(None);
        assert!(matches!(err, Err(Error::InvalidArgument { argument }) if argument == "compare"));
    }

    #[test]
    #[should_panic(expected = "comparison exploded")]
    fn test_panic_propagates() {
        let cmp = create_comparer::<i32, _>(|_, _| panic!("comparison exploded"));
        cmp.compare(Some(&1), Some(&2));
    }

    #[test]
    fn test_sort_by_comparer_stable() {
        let cmp = create_comparer::<&str, _>(|a, b| by_length(a.copied(), b.copied()));
        let mut words = vec!["ccc", "a", "bb", "b", "aa"];
        sort_by_comparer(&mut words, &cmp);
        assert_eq!(words, vec!["a", "b", "bb", "aa", "ccc"]);
    }

    #[test]
    fn test_ordered_in_btree() {
        let cmp = create_comparer::<i32, _>(|a, b| match (a, b) {
            (Some(x), Some(y)) => y - x,
            _ => 0,
        });
        let values = [3, 1, 4, 1, 5];
        let set: BTreeSet<_> = values.iter().map(|v| Ordered::new(v, &cmp)).collect();
        let sorted: Vec<i32> = set.iter().map(|v| *v.get()).collect();
        assert_eq!(sorted, vec![5, 4, 3, 1]);
    }

    #[test]
    fn test_clone_and_debug() {
        let cmp = create_comparer(by_length);
        let copy = cmp.clone();
        assert_eq!(copy.compare(Some("a"), Some("a")), 0);
        assert_eq!(format!("{:?}", cmp), "OrderingAdapter<str>");
        assert_eq!(format!("{:?}", Ordered::new("hi", &cmp)), "Ordered(\"hi\")");
    }
}
