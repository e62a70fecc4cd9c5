pub mod adapter;
pub mod equality;
pub mod error;
pub mod ordering;

pub use adapter::{Comparer, EqualityComparer, NaturalEquality, NaturalOrder};
pub use equality::{create_equality_comparer, try_create_equality_comparer, EqualityAdapter, Keyed};
pub use error::{Error, Result};
pub use ordering::{
    create_comparer, sort_by_comparer, try_create_comparer, Ordered, OrderingAdapter,
};
