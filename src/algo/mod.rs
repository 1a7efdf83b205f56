//! # List Algorithms
//!
//! Searching, folding, transforming, ordering and combining lists of types. Every
//! algorithm that takes a metafunction class calls it through [`crate::func::invoke`], so
//! quoted templates, bound functions and lambdas all work as predicates and operations.
//!
//! Failures follow the invocation rules: if a predicate or operation is not invocable
//! with some element, the algorithm itself is not applicable, and `is_invocable` on the
//! algorithm reports `false`.
//!
//! ## Examples
//!
//! ```text
//! find<list<int, long, short, int>, short>         = list<short, int>
//! find_index<list<int, long, short, int>, double>  = size_t<18446744073709551615>  (npos)
//! fold<list<int_<1>, int_<2>>, int_<0>, quote<plus>>  = int_<3>
//! partition<list<int, float, short>, quote<std::is_integral>>
//!                                                   = list<list<int, short>, list<float>>
//! cartesian_product<list<list<int_<0>, int_<1>>, list<int_<2>, int_<3>>>>
//!     = list<list<int_<0>, int_<2>>, list<int_<0>, int_<3>>,
//!            list<int_<1>, int_<2>>, list<int_<1>, int_<3>>>
//! ```

mod access;
mod build;
mod fold;
mod order;
mod product;
mod search;
mod transform;

pub use access::{
    at, back, drop, empty, first, front, pair, pop_front, push_back, push_front, second, size,
};
pub use build::{as_list, concat, join, repeat_n};
pub use fold::{accumulate, fold, reverse_fold};
pub use order::{partition, sort};
pub use product::{cartesian_product, transpose, zip, zip_with};
pub use search::{
    all_of, any_of, count, count_if, find, find_if, find_index, in_, none_of, reverse_find,
    reverse_find_if, reverse_find_index,
};
pub use transform::{filter, replace, replace_if, reverse, transform, transform2, unique};
