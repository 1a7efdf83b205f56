//! # Deferred Evaluation
//!
//! A deferred node `defer<C, Ts...>` stores a template and its arguments without
//! instantiating anything. [`let_`] (and [`force`], a `let` without variables) walks an
//! expression tree bottom-up and instantiates every deferred node it meets.
//!
//! The `lazy::` constructors in this module build deferred nodes for the library
//! templates, so `lazy::inc(vec![Term::int(10)])` is `defer<inc, int_<10>>`:
//!
//! ```text
//! let<lazy::inc<int_<10>>>                                  = int_<11>
//! let<var<_a, list<int, short>>, lazy::size<_a>>            = size_t<2>
//! let<lazy::if_<std::is_void<int>, int, defer<std::pair, int>>>   not applicable
//! ```
//!
//! Under `lazy::if_` only the chosen branch is forced; `lazy::and_` and `lazy::or_`
//! stop forcing at the first decisive operand.

use crate::error::{MetaError, MetaResult};
use crate::eval::{Context, Template};
use crate::lambda::{Binding, Bindings, Placeholder, resolve};
use crate::library::builtins;
use crate::term::Term;

/// `defer<C, Ts...>`
pub fn defer(template: Template, args: Vec<Term>) -> Term {
    Term::defer(template, args)
}

/// `let<var<P, V>..., Body>`: bind each variable in order, then force the body.
///
/// Every value is forced with the variables bound before it visible.
pub fn let_(vars: &[(Placeholder, Term)], body: &Term, ctx: &mut Context) -> MetaResult<Term> {
    let mut scope = Bindings::new();
    for (placeholder, value) in vars {
        let value = resolve(value, &scope, ctx)?;
        scope.enter();
        scope.add(*placeholder, Binding::One(value));
    }
    resolve(body, &scope, ctx)
}

/// `let<Expr>`
pub fn force(expr: &Term, ctx: &mut Context) -> MetaResult<Term> {
    let_(&[], expr, ctx)
}

/// Split `let` template arguments into `var<P, V>` bindings and the body.
pub fn let_from_args(args: &[Term], ctx: &mut Context) -> MetaResult<Term> {
    let (body, vars) = args
        .split_last()
        .ok_or_else(|| MetaError::malformed("let needs a body"))?;
    let vars = vars.iter().map(as_var).collect::<MetaResult<Vec<_>>>()?;
    let_(&vars, body, ctx)
}

fn as_var(term: &Term) -> MetaResult<(Placeholder, Term)> {
    if let Term::App(app) = term {
        if app.template.is("var") {
            if let [Term::Placeholder(p), value] = app.args.as_slice() {
                return Ok((*p, value.clone()));
            }
        }
    }
    Err(MetaError::malformed(format!(
        "let binding {term} is not of the form var<placeholder, value>"
    )))
}

macro_rules! lazy_constructors {
    ($($name:ident),* $(,)?) => {
        $(
            #[doc = concat!("`lazy::", stringify!($name), "<Args...>`")]
            pub fn $name(args: Vec<Term>) -> Term {
                Term::defer(builtins::$name(), args)
            }
        )*
    };
}

lazy_constructors!(
    // invocation
    invoke, apply_list, compose, bind_front, bind_back, flip, curry, uncurry, on, not_fn,
    always, id, nested_type, is_trait, is_valid,
    // logic
    if_, if_c, and_, or_, and_c, or_c, strict_and, strict_or, not_, not_c,
    // math
    plus, minus, multiplies, divides, modulus, negate, inc, dec, equal_to, not_equal_to,
    greater, less, greater_equal, less_equal, bit_and, bit_or, bit_xor, bit_not, min, max,
    // lists
    size, empty, front, back, at, drop, push_front, push_back, pop_front, first, second,
    concat, join, repeat_n, find, find_if, reverse_find, reverse_find_if, find_index,
    reverse_find_index, in_, count, count_if, all_of, any_of, none_of, fold, accumulate,
    reverse_fold, transform, filter, replace, replace_if, unique, reverse, sort, partition,
    cartesian_product, zip, zip_with, transpose, as_list,
    // traits
    sizeof_, alignof_,
);
