use crate::adapter::EqualityComparer;
use crate::error::{Error, Result};
use std::any::type_name;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use tracing::{debug, trace};

pub struct EqualityAdapter<T: ?Sized, E, H> {
    equals: E,
    hash: H,
    _marker: PhantomData<fn(&T)>,
}

impl<T, E, H> EqualityAdapter<T, E, H>
where
    T: ?Sized,
    E: Fn(Option<&T>, Option<&T>) -> bool,
    H: Fn(&T) -> i32,
{
    pub const fn new(equals: E, hash: H) -> Self {
        Self {
            equals,
            hash,
            _marker: PhantomData,
        }
    }
}

impl<T, E, H> EqualityComparer<T> for EqualityAdapter<T, E, H>
where
    T: ?Sized,
    E: Fn(Option<&T>, Option<&T>) -> bool,
    H: Fn(&T) -> i32,
{
    #[inline]
    fn equals(&self, x: Option<&T>, y: Option<&T>) -> bool {
        (self.equals)(x, y)
    }

    #[inline]
    fn hash_of(&self, obj: &T) -> i32 {
        (self.hash)(obj)
    }
}

impl<T: ?Sized, E: Clone, H: Clone> Clone for EqualityAdapter<T, E, H> {
    fn clone(&self) -> Self {
        Self {
            equals: self.equals.clone(),
            hash: self.hash.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T: ?Sized, E, H> fmt::Debug for EqualityAdapter<T, E, H> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "EqualityAdapter<{}>", type_name::<T>())
    }
}

pub fn create_equality_comparer<T, E, H>(equals: E, hash: H) -> EqualityAdapter<T, E, H>
where
    T: ?Sized,
    E: Fn(Option<&T>, Option<&T>) -> bool,
    H: Fn(&T) -> i32,
{
    trace!(element = type_name::<T>(), "created equality adapter");
    EqualityAdapter::new(equals, hash)
}

// `equals` is reported before `hash`.
pub fn try_create_equality_comparer<T, E, H>(
    equals: Option<E>,
    hash: Option<H>,
) -> Result<EqualityAdapter<T, E, H>>
where
    T: ?Sized,
    E: Fn(Option<&T>, Option<&T>) -> bool,
    H: Fn(&T) -> i32,
{
    let argument = match (equals, hash) {
        (Some(equals), Some(hash)) => return Ok(create_equality_comparer(equals, hash)),
        (None, _) => "equals",
        (Some(_), None) => "hash",
    };
    debug!(
        element = type_name::<T>(),
        argument,
        "missing equality comparer argument"
    );
    Err(Error::InvalidArgument { argument })
}

// Every key in one container must share the same comparer.
pub struct Keyed<'c, T: ?Sized, E: ?Sized> {
    value: &'c T,
    comparer: &'c E,
}

impl<'c, T, E> Keyed<'c, T, E>
where
    T: ?Sized,
    E: EqualityComparer<T> + ?Sized,
{
    pub const fn new(value: &'c T, comparer: &'c E) -> Self {
        Self { value, comparer }
    }

    pub const fn get(&self) -> &'c T {
        self.value
    }
}

impl<'c, T, E> PartialEq for Keyed<'c, T, E>
where
    T: ?Sized,
    E: EqualityComparer<T> + ?Sized,
{
    fn eq(&self, other: &Self) -> bool {
        self.comparer.equals(Some(self.value), Some(other.value))
    }
}

impl<'c, T, E> Eq for Keyed<'c, T, E>
where
    T: ?Sized,
    E: EqualityComparer<T> + ?Sized,
{
}

impl<'c, T, E> Hash for Keyed<'c, T, E>
where
    T: ?Sized,
    E: EqualityComparer<T> + ?Sized,
{
    fn hash<S: Hasher>(&self, state: &mut S) {
        state.write_i32(self.comparer.hash_of(self.value));
    }
}

impl<'c, T: ?Sized, E: ?Sized> Clone for Keyed<'c, T, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'c, T: ?Sized, E: ?Sized> Copy for Keyed<'c, T, E> {}

impl<'c, T, E> fmt::Debug for Keyed<'c, T, E>
where
    T: fmt::Debug + ?Sized,
    E: ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Keyed({:?})", self.value)
    }
}
