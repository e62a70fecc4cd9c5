use crate::error::{Error, Result};
use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::rc::Rc;
use std::sync::Arc;
use tracing::debug;

pub trait Comparer<T: ?Sized> {
    fn compare(&self, x: Option<&T>, y: Option<&T>) -> i32;

    fn ordering(&self, x: &T, y: &T) -> Ordering {
        self.compare(Some(x), Some(y)).cmp(&0)
    }
}

// `equals(a, b)` must imply `hash_of(a) == hash_of(b)`; nothing checks it.
pub trait EqualityComparer<T: ?Sized> {
    fn equals(&self, x: Option<&T>, y: Option<&T>) -> bool;

    fn hash_of(&self, obj: &T) -> i32;

    fn try_hash_of(&self, obj: Option<&T>) -> Result<i32> {
        match obj {
            Some(obj) => Ok(self.hash_of(obj)),
            None => {
                debug!("rejecting absent hash subject");
                Err(Error::PreconditionViolation {
                    operation: "hash_of",
                    reason: "subject must not be absent",
                })
            }
        }
    }
}

macro_rules! forward_impls {
    ($($ptr:ty),*) => {
        $(
            impl<T: ?Sized, C: Comparer<T> + ?Sized> Comparer<T> for $ptr {
                fn compare(&self, x: Option<&T>, y: Option<&T>) -> i32 {
                    (**self).compare(x, y)
                }

                fn ordering(&self, x: &T, y: &T) -> Ordering {
                    (**self).ordering(x, y)
                }
            }

            impl<T: ?Sized, C: EqualityComparer<T> + ?Sized> EqualityComparer<T> for $ptr {
                fn equals(&self, x: Option<&T>, y: Option<&T>) -> bool {
                    (**self).equals(x, y)
                }

                fn hash_of(&self, obj: &T) -> i32 {
                    (**self).hash_of(obj)
                }

                fn try_hash_of(&self, obj: Option<&T>) -> Result<i32> {
                    (**self).try_hash_of(obj)
                }
            }
        )*
    };
}

forward_impls!(&C, Box<C>, Rc<C>, Arc<C>);

// Absent sorts first.
#[derive(Clone, Copy, Debug, Default)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparer<T> for NaturalOrder {
    fn compare(&self, x: Option<&T>, y: Option<&T>) -> i32 {
        x.cmp(&y) as i32
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NaturalEquality;

impl<T: Eq + Hash + ?Sized> EqualityComparer<T> for NaturalEquality {
    fn equals(&self, x: Option<&T>, y: Option<&T>) -> bool {
        x == y
    }

    fn hash_of(&self, obj: &T) -> i32 {
        let mut hasher = DefaultHasher::new();
        obj.hash(&mut hasher);
        let hash = hasher.finish();
        (hash ^ (hash >> 32)) as i32
    }
}
