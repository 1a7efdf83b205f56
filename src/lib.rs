//! # metakit - Type-Level Lists and Lazy Metafunctions, as Terms
//!
//! metakit is a metaprogramming toolkit: data structures and algorithms over
//! sequences of *types*, together with the machinery to compose metafunctions
//! lazily. Types are values of [`term::Term`], templates are first-class
//! [`eval::Template`] values, and instantiating a template is a call that either
//! computes a result or reports that it is not applicable.
//!
//! ## Architecture Overview
//!
//! ```text
//! Notation (String)
//!     ↓
//! [Lexer] → Token Stream
//!     ↓
//! [Parser] → ast::Expr
//!     ↓
//! [Notation] → Term, looked up in a Library and instantiated in a Context
//!     ↓
//! [fmt] → Notation (String)
//! ```
//!
//! The engine underneath the notation can also be driven directly from Rust:
//!
//! 1. **Terms** (`term`) - fundamental and compound types, integral constants, lists,
//!    integer sequences, template instantiations and deferred instantiations
//! 2. **Evaluation** (`eval`) - templates, the evaluation [`eval::Context`] with its
//!    recursion limit, nested results
//! 3. **Invocation** (`func`) - metafunction classes: quoting, binding, composition,
//!    currying, `invoke` and `is_invocable`
//! 4. **Laziness** (`lazy`, `logic`) - deferred instantiation, `let`, short-circuiting
//!    conditionals
//! 5. **Lambdas** (`lambda`) - placeholder substitution with nested scopes and
//!    variadic packs
//! 6. **Algorithms** (`algo`) - search, fold, transform, sort, partition, products
//!
//! ## Soft and Hard Failures
//!
//! Every operation returns [`error::MetaResult`]. `NotApplicable` is the soft
//! failure: "this metafunction is not invocable with these arguments". It can be
//! queried with [`func::is_invocable`], and algorithms such as `find_if` rely on it.
//! Exceeding [`config::Config::max_depth`] or writing a malformed lambda is a hard
//! error that no query absorbs.
//!
//! ## Example
//!
//! ```text
//! fold<list<int_<1>, int_<2>, int_<3>>, int_<0>, quote<plus>>          int_<6>
//! transform<list<int, short>, quote_trait<std::add_pointer>>             list<int*, short*>
//! invoke<lambda<_a, _b, std::pair<_b, std::pair<_a, _a>>>, int, short>
//!                                                std::pair<short, std::pair<int, int>>
//! ```
//!
//! ## Getting Started
//!
//! 1. Evaluate notation with [`evaluate()`] or a [`notation::Session`]
//! 2. Or build terms directly and call [`algo`], [`func`] and [`lazy`] functions
//! 3. Print results with `Display` or [`fmt::pretty()`]

pub mod algo;
pub mod ast;
pub mod config;
pub mod error;
pub mod eval;
pub mod fmt;
pub mod func;
pub mod lambda;
pub mod lazy;
pub mod lexer;
pub mod library;
pub mod logic;
pub mod math;
pub mod notation;
pub mod parser;
pub mod term;
pub mod traits;

pub use error::{MetaError, MetaResult};
pub use notation::{NotationError, Session, evaluate};
pub use term::Term;
