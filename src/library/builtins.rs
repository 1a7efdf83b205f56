//! One constructor per library template.
//!
//! Each function returns the [`Template`] under its library name. Templates compare by
//! name, so building one twice yields equal values.

use crate::algo;
use crate::error::{MetaError, MetaResult};
use crate::eval::{self, Arity, Context, Template, index_of, value_of};
use crate::func;
use crate::lambda;
use crate::lazy;
use crate::logic;
use crate::math::{self, BinaryOp, Comparison, UnaryOp};
use crate::term::{IntSeq, Prim, Term};
use crate::traits;

fn size_term(n: usize) -> Term {
    Term::size(n as u64)
}

fn position(found: Option<usize>) -> Term {
    found.map_or_else(Term::npos, size_term)
}

fn constant_of(ty: Prim, value: &Term, ctx: &mut Context) -> MetaResult<Term> {
    Ok(Term::Const(value_of(value, ctx)?.cast(ty)?))
}

fn values(args: &[Term], ctx: &mut Context) -> MetaResult<Vec<i128>> {
    args.iter()
        .map(|arg| Ok(value_of(arg, ctx)?.value()))
        .collect()
}

macro_rules! binary_ops {
    ($($name:ident => $op:expr),* $(,)?) => {
        $(
            pub fn $name() -> Template {
                Template::alias(stringify!($name), Arity::exactly(2), |args, ctx| {
                    math::binary($op, &args[0], &args[1], ctx)
                })
            }
        )*
    };
}

macro_rules! comparisons {
    ($($name:ident => $cmp:expr),* $(,)?) => {
        $(
            pub fn $name() -> Template {
                Template::alias(stringify!($name), Arity::exactly(2), |args, ctx| {
                    math::compare($cmp, &args[0], &args[1], ctx)
                })
            }
        )*
    };
}

macro_rules! unary_ops {
    ($($name:ident => $op:expr),* $(,)?) => {
        $(
            pub fn $name() -> Template {
                Template::alias(stringify!($name), Arity::exactly(1), |args, ctx| {
                    math::unary($op, &args[0], ctx)
                })
            }
        )*
    };
}

macro_rules! type_traits {
    ($($name:ident => $lib:literal, $arity:expr, $compute:expr);* $(;)?) => {
        $(
            pub fn $name() -> Template {
                Template::class_with_type($lib, Arity::exactly($arity), |args, _| {
                    let compute: fn(&[Term]) -> MetaResult<Term> = $compute;
                    compute(args)
                })
            }
        )*
    };
}

// Invocation

pub fn list() -> Template {
    Template::alias("list", Arity::any(), |args, _| Ok(Term::list(args.iter().cloned())))
}

pub fn invoke() -> Template {
    Template::alias("invoke", Arity::at_least(1), |args, ctx| {
        func::invoke(&args[0], &args[1..], ctx)
    })
}

pub fn apply_list() -> Template {
    Template::alias("apply_list", Arity::exactly(2), |args, ctx| {
        func::apply_list(&args[0], &args[1], ctx)
    })
}

/// `apply<F, Seq>`: another name for `apply_list`.
pub fn apply() -> Template {
    Template::alias("apply", Arity::exactly(2), |args, ctx| {
        func::apply_list(&args[0], &args[1], ctx)
    })
}

pub fn compose() -> Template {
    Template::alias("compose", Arity::any(), |args, _| Ok(func::compose(args.to_vec())))
}

pub fn bind_front() -> Template {
    Template::alias("bind_front", Arity::at_least(1), |args, _| {
        Ok(func::bind_front(args[0].clone(), args[1..].to_vec()))
    })
}

pub fn bind_back() -> Template {
    Template::alias("bind_back", Arity::at_least(1), |args, _| {
        Ok(func::bind_back(args[0].clone(), args[1..].to_vec()))
    })
}

pub fn flip() -> Template {
    Template::alias("flip", Arity::exactly(1), |args, _| Ok(func::flip(args[0].clone())))
}

/// `curry<F, Q = quote<list>>`
pub fn curry() -> Template {
    Template::alias("curry", Arity::between(1, 2), |args, _| match args {
        [f, q] => Ok(func::compose(vec![f.clone(), q.clone()])),
        _ => Ok(func::curry(args[0].clone())),
    })
}

pub fn uncurry() -> Template {
    Template::alias("uncurry", Arity::exactly(1), |args, _| {
        Ok(func::uncurry(args[0].clone()))
    })
}

pub fn on() -> Template {
    Template::alias("on", Arity::at_least(1), |args, _| {
        Ok(func::on(args[0].clone(), args[1..].to_vec()))
    })
}

pub fn not_fn() -> Template {
    Template::alias("not_fn", Arity::exactly(1), |args, _| Ok(func::not_fn(args[0].clone())))
}

pub fn always() -> Template {
    Template::alias("always", Arity::exactly(1), |args, _| Ok(func::always(args[0].clone())))
}

/// `id<T>`: a class whose nested `type` is `T`.
pub fn id() -> Template {
    Template::class_with_type("id", Arity::exactly(1), |args, _| Ok(args[0].clone()))
}

/// `_t<T>`: the nested `type` of `T`.
pub fn nested_type() -> Template {
    Template::alias("_t", Arity::exactly(1), |args, ctx| eval::eval(&args[0], ctx))
}

pub fn is_trait() -> Template {
    Template::alias("is_trait", Arity::exactly(1), |args, ctx| {
        Ok(Term::bool(eval::is_trait(&args[0], ctx)?))
    })
}

/// `is_valid<T>`: another name for `is_trait`.
pub fn is_valid() -> Template {
    Template::alias("is_valid", Arity::exactly(1), |args, ctx| {
        Ok(Term::bool(eval::is_trait(&args[0], ctx)?))
    })
}

pub fn is_callable() -> Template {
    Template::alias("is_callable", Arity::exactly(1), |args, _| {
        Ok(Term::bool(func::is_callable(&args[0])))
    })
}

pub fn is_invocable() -> Template {
    Template::alias("is_invocable", Arity::at_least(1), |args, ctx| {
        Ok(Term::bool(func::is_invocable(&args[0], &args[1..], ctx)?))
    })
}

pub fn lambda() -> Template {
    Template::alias("lambda", Arity::at_least(1), |args, _| lambda::lambda_from_args(args))
}

/// `let<var<P, V>..., Body>`
pub fn let_() -> Template {
    Template::alias("let", Arity::at_least(1), lazy::let_from_args)
}

pub fn var() -> Template {
    Template::class("var", Arity::exactly(2))
}

// Logic

pub fn if_() -> Template {
    Template::alias("if_", Arity::between(2, 3), logic::if_from_args)
}

pub fn if_c() -> Template {
    Template::alias("if_c", Arity::between(2, 3), logic::if_from_args)
}

pub fn and_() -> Template {
    Template::alias("and_", Arity::any(), logic::and_)
}

pub fn or_() -> Template {
    Template::alias("or_", Arity::any(), logic::or_)
}

pub fn and_c() -> Template {
    Template::alias("and_c", Arity::any(), logic::and_)
}

pub fn or_c() -> Template {
    Template::alias("or_c", Arity::any(), logic::or_)
}

pub fn strict_and() -> Template {
    Template::alias("strict_and", Arity::any(), logic::strict_and)
}

pub fn strict_or() -> Template {
    Template::alias("strict_or", Arity::any(), logic::strict_or)
}

pub fn not_() -> Template {
    Template::alias("not_", Arity::exactly(1), |args, ctx| logic::not_(&args[0], ctx))
}

pub fn not_c() -> Template {
    Template::alias("not_c", Arity::exactly(1), |args, ctx| logic::not_(&args[0], ctx))
}

// Math

binary_ops! {
    plus => BinaryOp::Plus,
    minus => BinaryOp::Minus,
    multiplies => BinaryOp::Multiplies,
    divides => BinaryOp::Divides,
    modulus => BinaryOp::Modulus,
    bit_and => BinaryOp::BitAnd,
    bit_or => BinaryOp::BitOr,
    bit_xor => BinaryOp::BitXor,
}

unary_ops! {
    negate => UnaryOp::Negate,
    inc => UnaryOp::Inc,
    dec => UnaryOp::Dec,
    bit_not => UnaryOp::BitNot,
}

comparisons! {
    equal_to => Comparison::EqualTo,
    not_equal_to => Comparison::NotEqualTo,
    less => Comparison::Less,
    greater => Comparison::Greater,
    less_equal => Comparison::LessEqual,
    greater_equal => Comparison::GreaterEqual,
}

pub fn min() -> Template {
    Template::alias("min", Arity::exactly(2), |args, ctx| math::min(&args[0], &args[1], ctx))
}

pub fn max() -> Template {
    Template::alias("max", Arity::exactly(2), |args, ctx| math::max(&args[0], &args[1], ctx))
}

// Constants

pub fn int_() -> Template {
    Template::alias("int_", Arity::exactly(1), |args, ctx| {
        constant_of(Prim::Int, &args[0], ctx)
    })
}

pub fn size_t() -> Template {
    Template::alias("size_t", Arity::exactly(1), |args, ctx| {
        constant_of(Prim::SizeT, &args[0], ctx)
    })
}

pub fn bool_() -> Template {
    Template::alias("bool_", Arity::exactly(1), |args, ctx| {
        Ok(Term::bool(value_of(&args[0], ctx)?.is_true()))
    })
}

pub fn char_() -> Template {
    Template::alias("char_", Arity::exactly(1), |args, ctx| {
        constant_of(Prim::Char, &args[0], ctx)
    })
}

/// `integral_constant<T, N>`
pub fn integral_constant() -> Template {
    Template::alias("integral_constant", Arity::exactly(2), |args, ctx| {
        constant_of(args[0].as_prim()?, &args[1], ctx)
    })
}

// Integer sequences

/// `integer_sequence<T, Ns...>`
pub fn integer_sequence() -> Template {
    Template::alias("integer_sequence", Arity::at_least(1), |args, ctx| {
        let ty = args[0].as_prim()?;
        Ok(Term::IntSeq(IntSeq::new(ty, values(&args[1..], ctx)?)?))
    })
}

/// `index_sequence<Ns...>`
pub fn index_sequence() -> Template {
    Template::alias("index_sequence", Arity::any(), |args, ctx| {
        Ok(Term::IntSeq(IntSeq::new(Prim::SizeT, values(args, ctx)?)?))
    })
}

/// `make_integer_sequence<T, N>`
pub fn make_integer_sequence() -> Template {
    Template::alias("make_integer_sequence", Arity::exactly(2), |args, ctx| {
        let ty = args[0].as_prim()?;
        let count = index_of(&args[1], ctx)? as u64;
        ctx.check_length("make_integer_sequence", count.into())?;
        Ok(Term::IntSeq(IntSeq::make(ty, count)?))
    })
}

/// `make_index_sequence<N>`
pub fn make_index_sequence() -> Template {
    Template::alias("make_index_sequence", Arity::exactly(1), |args, ctx| {
        let count = index_of(&args[0], ctx)? as u64;
        ctx.check_length("make_index_sequence", count.into())?;
        Ok(Term::IntSeq(IntSeq::make(Prim::SizeT, count)?))
    })
}

/// `integer_range<T, From, To>`: the integers `[From, To)`.
pub fn integer_range() -> Template {
    Template::alias("integer_range", Arity::exactly(3), |args, ctx| {
        let ty = args[0].as_prim()?;
        let from = value_of(&args[1], ctx)?.value();
        let to = value_of(&args[2], ctx)?.value();
        ctx.check_length("integer_range", u128::try_from(to - from).unwrap_or(0))?;
        Ok(Term::IntSeq(IntSeq::range(ty, from, to)?))
    })
}

// Lists

pub fn size() -> Template {
    Template::alias("size", Arity::exactly(1), |args, _| {
        Ok(size_term(algo::size(&args[0])?))
    })
}

pub fn empty() -> Template {
    Template::alias("empty", Arity::exactly(1), |args, _| {
        Ok(Term::bool(algo::empty(&args[0])?))
    })
}

pub fn front() -> Template {
    Template::alias("front", Arity::exactly(1), |args, _| algo::front(&args[0]))
}

pub fn back() -> Template {
    Template::alias("back", Arity::exactly(1), |args, _| algo::back(&args[0]))
}

/// `at<L, N>`
pub fn at() -> Template {
    Template::alias("at", Arity::exactly(2), |args, ctx| {
        algo::at(&args[0], index_of(&args[1], ctx)?)
    })
}

/// `list_element<N, L>`: `at<L, N>` with the arguments swapped.
pub fn list_element() -> Template {
    Template::alias("list_element", Arity::exactly(2), |args, ctx| {
        algo::at(&args[1], index_of(&args[0], ctx)?)
    })
}

/// `drop<L, N>`
pub fn drop() -> Template {
    Template::alias("drop", Arity::exactly(2), |args, ctx| {
        algo::drop(&args[0], index_of(&args[1], ctx)?)
    })
}

pub fn push_front() -> Template {
    Template::alias("push_front", Arity::at_least(1), |args, _| {
        algo::push_front(&args[0], &args[1..])
    })
}

pub fn push_back() -> Template {
    Template::alias("push_back", Arity::at_least(1), |args, _| {
        algo::push_back(&args[0], &args[1..])
    })
}

pub fn pop_front() -> Template {
    Template::alias("pop_front", Arity::exactly(1), |args, _| algo::pop_front(&args[0]))
}

pub fn pair() -> Template {
    Template::alias("pair", Arity::exactly(2), |args, _| {
        Ok(algo::pair(args[0].clone(), args[1].clone()))
    })
}

pub fn first() -> Template {
    Template::alias("first", Arity::exactly(1), |args, ctx| algo::first(&args[0], ctx))
}

pub fn second() -> Template {
    Template::alias("second", Arity::exactly(1), |args, ctx| algo::second(&args[0], ctx))
}

pub fn concat() -> Template {
    Template::alias("concat", Arity::any(), algo::concat)
}

pub fn join() -> Template {
    Template::alias("join", Arity::exactly(1), |args, ctx| algo::join(&args[0], ctx))
}

/// `repeat_n<N, T>`
pub fn repeat_n() -> Template {
    Template::alias("repeat_n", Arity::exactly(2), |args, ctx| {
        let count = index_of(&args[0], ctx)?;
        algo::repeat_n(count, &args[1], ctx)
    })
}

pub fn find() -> Template {
    Template::alias("find", Arity::exactly(2), |args, _| algo::find(&args[0], &args[1]))
}

pub fn find_if() -> Template {
    Template::alias("find_if", Arity::exactly(2), |args, ctx| {
        algo::find_if(&args[0], &args[1], ctx)
    })
}

pub fn reverse_find() -> Template {
    Template::alias("reverse_find", Arity::exactly(2), |args, _| {
        algo::reverse_find(&args[0], &args[1])
    })
}

pub fn reverse_find_if() -> Template {
    Template::alias("reverse_find_if", Arity::exactly(2), |args, ctx| {
        algo::reverse_find_if(&args[0], &args[1], ctx)
    })
}

pub fn find_index() -> Template {
    Template::alias("find_index", Arity::exactly(2), |args, _| {
        Ok(position(algo::find_index(&args[0], &args[1])?))
    })
}

pub fn reverse_find_index() -> Template {
    Template::alias("reverse_find_index", Arity::exactly(2), |args, _| {
        Ok(position(algo::reverse_find_index(&args[0], &args[1])?))
    })
}

/// `in<L, T>`
pub fn in_() -> Template {
    Template::alias("in", Arity::exactly(2), |args, _| {
        Ok(Term::bool(algo::in_(&args[0], &args[1])?))
    })
}

pub fn count() -> Template {
    Template::alias("count", Arity::exactly(2), |args, _| {
        Ok(size_term(algo::count(&args[0], &args[1])?))
    })
}

pub fn count_if() -> Template {
    Template::alias("count_if", Arity::exactly(2), |args, ctx| {
        Ok(size_term(algo::count_if(&args[0], &args[1], ctx)?))
    })
}

pub fn all_of() -> Template {
    Template::alias("all_of", Arity::exactly(2), |args, ctx| {
        Ok(Term::bool(algo::all_of(&args[0], &args[1], ctx)?))
    })
}

pub fn any_of() -> Template {
    Template::alias("any_of", Arity::exactly(2), |args, ctx| {
        Ok(Term::bool(algo::any_of(&args[0], &args[1], ctx)?))
    })
}

pub fn none_of() -> Template {
    Template::alias("none_of", Arity::exactly(2), |args, ctx| {
        Ok(Term::bool(algo::none_of(&args[0], &args[1], ctx)?))
    })
}

/// `fold<L, State, Op>`
pub fn fold() -> Template {
    Template::alias("fold", Arity::exactly(3), |args, ctx| {
        algo::fold(&args[0], args[1].clone(), &args[2], ctx)
    })
}

pub fn accumulate() -> Template {
    Template::alias("accumulate", Arity::exactly(3), |args, ctx| {
        algo::accumulate(&args[0], args[1].clone(), &args[2], ctx)
    })
}

pub fn reverse_fold() -> Template {
    Template::alias("reverse_fold", Arity::exactly(3), |args, ctx| {
        algo::reverse_fold(&args[0], args[1].clone(), &args[2], ctx)
    })
}

/// `transform<L, F>` or `transform<L1, L2, F>`
pub fn transform() -> Template {
    Template::alias("transform", Arity::between(2, 3), |args, ctx| match args {
        [list, func] => algo::transform(list, func, ctx),
        [lhs, rhs, func] => algo::transform2(lhs, rhs, func, ctx),
        _ => Err(MetaError::not_applicable("transform expects 2 to 3 arguments")),
    })
}

pub fn filter() -> Template {
    Template::alias("filter", Arity::exactly(2), |args, ctx| {
        algo::filter(&args[0], &args[1], ctx)
    })
}

/// `replace<L, Old, New>`
pub fn replace() -> Template {
    Template::alias("replace", Arity::exactly(3), |args, _| {
        algo::replace(&args[0], &args[1], &args[2])
    })
}

/// `replace_if<L, Pred, New>`
pub fn replace_if() -> Template {
    Template::alias("replace_if", Arity::exactly(3), |args, ctx| {
        algo::replace_if(&args[0], &args[1], &args[2], ctx)
    })
}

pub fn unique() -> Template {
    Template::alias("unique", Arity::exactly(1), |args, ctx| algo::unique(&args[0], ctx))
}

pub fn reverse() -> Template {
    Template::alias("reverse", Arity::exactly(1), |args, ctx| algo::reverse(&args[0], ctx))
}

pub fn sort() -> Template {
    Template::alias("sort", Arity::exactly(2), |args, ctx| {
        algo::sort(&args[0], &args[1], ctx)
    })
}

pub fn partition() -> Template {
    Template::alias("partition", Arity::exactly(2), |args, ctx| {
        algo::partition(&args[0], &args[1], ctx)
    })
}

pub fn cartesian_product() -> Template {
    Template::alias("cartesian_product", Arity::exactly(1), |args, ctx| {
        algo::cartesian_product(&args[0], ctx)
    })
}

pub fn zip() -> Template {
    Template::alias("zip", Arity::exactly(1), |args, ctx| algo::zip(&args[0], ctx))
}

/// `zip_with<F, ListOfLists>`
pub fn zip_with() -> Template {
    Template::alias("zip_with", Arity::exactly(2), |args, ctx| {
        algo::zip_with(&args[0], &args[1], ctx)
    })
}

pub fn transpose() -> Template {
    Template::alias("transpose", Arity::exactly(1), |args, ctx| {
        algo::transpose(&args[0], ctx)
    })
}

pub fn as_list() -> Template {
    Template::alias("as_list", Arity::exactly(1), |args, ctx| algo::as_list(&args[0], ctx))
}

pub fn inherit() -> Template {
    Template::alias("inherit", Arity::exactly(1), |args, _| traits::inherit(&args[0]))
}

/// The class produced by `inherit`.
pub fn inherit_() -> Template {
    Template::class("inherit_", Arity::any())
}

// Traits

pub fn std_pair() -> Template {
    Template::class("std::pair", Arity::exactly(2))
}

pub fn std_tuple() -> Template {
    Template::class("std::tuple", Arity::any())
}

type_traits! {
    std_is_same => "std::is_same", 2, |args| Ok(traits::is_same(&args[0], &args[1]));
    std_is_integral => "std::is_integral", 1, |args| Ok(traits::is_integral(&args[0]));
    std_is_floating_point => "std::is_floating_point", 1,
        |args| Ok(traits::is_floating_point(&args[0]));
    std_is_void => "std::is_void", 1, |args| Ok(traits::is_void(&args[0]));
    std_is_const => "std::is_const", 1, |args| Ok(traits::is_const(&args[0]));
    std_is_pointer => "std::is_pointer", 1, |args| Ok(traits::is_pointer(&args[0]));
    std_is_convertible => "std::is_convertible", 2,
        |args| Ok(traits::is_convertible(&args[0], &args[1]));
    std_add_const => "std::add_const", 1, |args| Ok(traits::add_const(&args[0]));
    std_add_pointer => "std::add_pointer", 1, |args| Ok(traits::add_pointer(&args[0]));
    std_add_lvalue_reference => "std::add_lvalue_reference", 1,
        |args| Ok(traits::add_lvalue_reference(&args[0]));
    std_remove_const => "std::remove_const", 1, |args| Ok(traits::remove_const(&args[0]));
    std_remove_pointer => "std::remove_pointer", 1, |args| Ok(traits::remove_pointer(&args[0]));
    std_make_signed => "std::make_signed", 1, |args| traits::make_signed(&args[0]);
}

pub fn sizeof_() -> Template {
    Template::alias("sizeof_", Arity::exactly(1), |args, _| traits::sizeof_(&args[0]))
}

pub fn alignof_() -> Template {
    Template::alias("alignof_", Arity::exactly(1), |args, _| traits::alignof_(&args[0]))
}

pub fn void_() -> Template {
    Template::alias("void_", Arity::any(), |args, _| Ok(traits::void_(args)))
}

/// Every template above, in registration order.
pub fn all() -> Vec<Template> {
    vec![
        // invocation
        list(), invoke(), apply_list(), apply(), compose(), bind_front(), bind_back(), flip(),
        curry(), uncurry(), on(), not_fn(), always(), id(), nested_type(), is_trait(),
        is_valid(), is_callable(), is_invocable(), lambda(), let_(), var(),
        // logic
        if_(), if_c(), and_(), or_(), and_c(), or_c(), strict_and(), strict_or(), not_(),
        not_c(),
        // math
        plus(), minus(), multiplies(), divides(), modulus(), bit_and(), bit_or(), bit_xor(),
        negate(), inc(), dec(), bit_not(), equal_to(), not_equal_to(), less(), greater(),
        less_equal(), greater_equal(), min(), max(),
        // constants and integer sequences
        int_(), size_t(), bool_(), char_(), integral_constant(), integer_sequence(),
        index_sequence(), make_integer_sequence(), make_index_sequence(), integer_range(),
        // lists
        size(), empty(), front(), back(), at(), list_element(), drop(), push_front(),
        push_back(), pop_front(), pair(), first(), second(), concat(), join(), repeat_n(),
        find(), find_if(), reverse_find(), reverse_find_if(), find_index(),
        reverse_find_index(), in_(), count(), count_if(), all_of(), any_of(), none_of(),
        fold(), accumulate(), reverse_fold(), transform(), filter(), replace(), replace_if(),
        unique(), reverse(), sort(), partition(), cartesian_product(), zip(), zip_with(),
        transpose(), as_list(), inherit(), inherit_(),
        // traits
        std_pair(), std_tuple(), std_is_same(), std_is_integral(), std_is_floating_point(),
        std_is_void(), std_is_const(), std_is_pointer(), std_is_convertible(),
        std_add_const(), std_add_pointer(), std_add_lvalue_reference(), std_remove_const(),
        std_remove_pointer(), std_make_signed(), sizeof_(), alignof_(), void_(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::Constant;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique() {
        let templates = all();
        let names: HashSet<&str> = templates.iter().map(Template::name).collect();
        assert_eq!(names.len(), templates.len());
    }

    #[test]
    fn test_find_index_reports_npos() {
        let mut ctx = Context::new();
        let list = Term::list([Term::Prim(Prim::Int)]);
        let missing = find_index()
            .instantiate(&[list.clone(), Term::Prim(Prim::Short)], &mut ctx)
            .unwrap();
        assert_eq!(missing, Term::npos());
        let found = find_index()
            .instantiate(&[list, Term::Prim(Prim::Int)], &mut ctx)
            .unwrap();
        assert_eq!(found, Term::size(0));
    }

    #[test]
    fn test_constants() {
        let mut ctx = Context::new();
        let seven = size_t().instantiate(&[Term::int(7)], &mut ctx).unwrap();
        assert_eq!(seven, Term::size(7));
        let long = integral_constant()
            .instantiate(&[Term::Prim(Prim::Long), Term::int(5)], &mut ctx)
            .unwrap();
        assert_eq!(long.as_const().map(Constant::ty), Some(Prim::Long));
        assert!(
            integral_constant()
                .instantiate(&[Term::Prim(Prim::Float), Term::int(5)], &mut ctx)
                .is_err()
        );
    }

    #[test]
    fn test_trait_nested_type() {
        let mut ctx = Context::new();
        let add_const = std_add_const()
            .instantiate(&[Term::Prim(Prim::Int)], &mut ctx)
            .unwrap();
        assert_eq!(add_const.to_string(), "std::add_const<int>");
        assert_eq!(eval::eval(&add_const, &mut ctx).unwrap().to_string(), "int const");
    }
}
