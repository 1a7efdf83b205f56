use anyhow::Result;
use metakit::algo;
use metakit::eval::Context;
use metakit::func::quote_trait;
use metakit::library::builtins;
use metakit::term::{Prim, Term};
use metakit::{MetaError, Session};

fn session() -> Session {
    let mut session = Session::new();
    session.declare(&["A", "B", "C"]);
    session
}

fn check(session: &mut Session, source: &str, expected: &str) -> Result<()> {
    assert_eq!(session.eval(source)?.to_string(), expected, "evaluating {source}");
    Ok(())
}

fn check_soft_failure(session: &mut Session, source: &str) {
    let err = session.eval(source).unwrap_err();
    assert!(
        err.meta_error().is_some_and(MetaError::is_soft),
        "expected {source} to be not applicable, got {err}"
    );
}

#[test]
fn folds_over_integer_ranges() -> Result<()> {
    let mut s = session();
    check(
        &mut s,
        "fold<as_list<make_integer_sequence<int, 11>>, 0, quote<plus>>",
        "int_<55>",
    )?;
    check(
        &mut s,
        "fold<as_list<integer_range<int, 5, 10>>, 0, quote<plus>>",
        "int_<35>",
    )?;
    check(
        &mut s,
        "accumulate<list<int_<1>, int_<2>, int_<3>>, 10, quote<minus>>",
        "int_<4>",
    )?;
    check(
        &mut s,
        "reverse_fold<list<A, B, C>, list<>, quote<push_back>>",
        "list<C, B, A>",
    )?;
    check_soft_failure(&mut s, "fold<list<int, short>, 0, quote<plus>>");
    Ok(())
}

#[test]
fn searches() -> Result<()> {
    let mut s = session();
    let list = "list<int, long, short, int>";
    check(&mut s, &format!("find<{list}, short>"), "list<short, int>")?;
    check(&mut s, &format!("find<{list}, double>"), "list<>")?;
    check(&mut s, &format!("reverse_find<{list}, int>"), "list<int>")?;
    check(&mut s, &format!("find_index<{list}, int>"), "size_t<0>")?;
    check(&mut s, &format!("reverse_find_index<{list}, int>"), "size_t<3>")?;
    check(
        &mut s,
        &format!("find_index<{list}, double>"),
        "size_t<18446744073709551615>",
    )?;
    assert_eq!(s.eval(&format!("find_index<{list}, double>"))?, s.eval("npos")?);
    check(&mut s, &format!("in<{list}, long>"), "bool_<true>")?;
    check(&mut s, &format!("count<{list}, int>"), "size_t<2>")?;
    check(
        &mut s,
        "reverse_find_if<list<int, float, short, double>, quote<std::is_integral>>",
        "list<short, double>",
    )?;
    check(
        &mut s,
        "count_if<list<int, float, short>, quote<std::is_integral>>",
        "size_t<2>",
    )?;
    Ok(())
}

#[test]
fn quantifiers() -> Result<()> {
    let mut s = session();
    check(
        &mut s,
        "all_of<list<int, short>, quote<std::is_integral>>",
        "bool_<true>",
    )?;
    check(
        &mut s,
        "any_of<list<float, double>, quote<std::is_integral>>",
        "bool_<false>",
    )?;
    check(
        &mut s,
        "none_of<list<float, double>, quote<std::is_integral>>",
        "bool_<true>",
    )?;
    check(&mut s, "all_of<list<>, quote<std::is_integral>>", "bool_<true>")?;
    Ok(())
}

#[test]
fn transformations() -> Result<()> {
    let mut s = session();
    check(
        &mut s,
        "transform<list<int, short>, quote_trait<std::add_pointer>>",
        "list<int*, short*>",
    )?;
    check(
        &mut s,
        "transform<list<int, short>, list<A, B>, quote<std::pair>>",
        "list<std::pair<int, A>, std::pair<short, B>>",
    )?;
    check_soft_failure(&mut s, "transform<list<int, short>, list<A>, quote<std::pair>>");
    check(
        &mut s,
        "filter<list<int, float, short, double>, quote<std::is_floating_point>>",
        "list<float, double>",
    )?;
    check(
        &mut s,
        "replace<list<int, short, int>, int, char>",
        "list<char, short, char>",
    )?;
    check(
        &mut s,
        "replace_if<list<int, float, short>, quote<std::is_integral>, A>",
        "list<A, float, A>",
    )?;
    check(
        &mut s,
        "unique<list<int, short, int, double, short, double, double>>",
        "list<int, short, double>",
    )?;
    check(&mut s, "reverse<list<A, B, C>>", "list<C, B, A>")?;
    Ok(())
}

#[test]
fn sort_is_stable() -> Result<()> {
    let mut s = session();
    let by_size = "lambda<_a, _b, lazy::less<lazy::sizeof_<_a>, lazy::sizeof_<_b>>>";
    check(
        &mut s,
        &format!("sort<list<char[5], char[2], bool[2], char[3]>, {by_size}>"),
        "list<char[2], bool[2], char[3], char[5]>",
    )?;
    check(
        &mut s,
        &format!(
            "sort<list<char[5], char[3], char[2], char[6], char[1], char[5], char[10]>, {by_size}>"
        ),
        "list<char[1], char[2], char[3], char[5], char[5], char[6], char[10]>",
    )?;
    check(&mut s, &format!("sort<list<>, {by_size}>"), "list<>")?;
    check(
        &mut s,
        "sort<list<int_<3>, int_<1>, int_<2>>, quote<greater>>",
        "list<int_<3>, int_<2>, int_<1>>",
    )?;
    Ok(())
}

#[test]
fn sorting_long_presorted_lists() -> Result<()> {
    let mut s = session();
    let values: Vec<String> = (0..300).map(|i| format!("int_<{i}>")).collect();
    let list = format!("list<{}>", values.join(", "));
    check(&mut s, &format!("sort<{list}, quote<less>>"), &list)?;
    Ok(())
}

#[test]
fn partition_keeps_order_in_both_groups() -> Result<()> {
    let mut s = session();
    check(
        &mut s,
        "partition<list<int, float, short, double>, quote<std::is_integral>>",
        "list<list<int, short>, list<float, double>>",
    )?;
    Ok(())
}

#[test]
fn building_lists() -> Result<()> {
    let mut s = session();
    check(
        &mut s,
        "concat<list<int>, list<short>, list<char>, list<long>>",
        "list<int, short, char, long>",
    )?;
    check(&mut s, "concat<>", "list<>")?;
    check(
        &mut s,
        "join<list<list<A>, list<>, list<B, C>>>",
        "list<A, B, C>",
    )?;
    check(&mut s, "repeat_n<3, int>", "list<int, int, int>")?;
    check(&mut s, "repeat_n<0, int>", "list<>")?;
    check(
        &mut s,
        "as_list<integer_sequence<char, 'a', 'b'>>",
        "list<char_<'a'>, char_<'b'>>",
    )?;
    Ok(())
}

#[test]
fn element_access() -> Result<()> {
    let mut s = session();
    check(&mut s, "size<list<A, B, C>>", "size_t<3>")?;
    check(&mut s, "empty<list<>>", "bool_<true>")?;
    check(&mut s, "front<list<A, B, C>>", "A")?;
    check(&mut s, "back<list<A, B, C>>", "C")?;
    check(&mut s, "at<list<A, B, C>, 1>", "B")?;
    check(&mut s, "list_element<2, list<A, B, C>>", "C")?;
    check(&mut s, "drop<list<A, B, C>, 2>", "list<C>")?;
    check(&mut s, "push_front<list<C>, A, B>", "list<A, B, C>")?;
    check(&mut s, "push_back<list<A>, B, C>", "list<A, B, C>")?;
    check(&mut s, "pop_front<list<A, B>>", "list<B>")?;
    check(&mut s, "first<pair<A, B>>", "A")?;
    check(&mut s, "second<pair<A, B>>", "B")?;
    check_soft_failure(&mut s, "front<list<>>");
    check_soft_failure(&mut s, "at<list<A>, 1>");
    check_soft_failure(&mut s, "drop<list<A>, 2>");
    Ok(())
}

#[test]
fn products() -> Result<()> {
    let mut s = session();
    check(
        &mut s,
        "cartesian_product<list<list<int_<0>, int_<1>>, list<int_<2>, int_<3>>>>",
        "list<list<int_<0>, int_<2>>, list<int_<0>, int_<3>>, \
         list<int_<1>, int_<2>>, list<int_<1>, int_<3>>>",
    )?;
    check(
        &mut s,
        "zip<list<list<A, B>, list<int, short>>>",
        "list<list<A, int>, list<B, short>>",
    )?;
    check(
        &mut s,
        "zip_with<quote<std::pair>, list<list<A, B>, list<int, short>>>",
        "list<std::pair<A, int>, std::pair<B, short>>",
    )?;
    check(
        &mut s,
        "transpose<list<list<A, B, C>, list<int, short, char>>>",
        "list<list<A, int>, list<B, short>, list<C, char>>",
    )?;
    check_soft_failure(&mut s, "zip<list<list<A, B>, list<int>>>");
    Ok(())
}

#[test]
fn inherit_requires_unique_classes() -> Result<()> {
    let mut s = session();
    check(&mut s, "inherit<list<A, B>>", "inherit_<A, B>")?;
    check_soft_failure(&mut s, "inherit<list<A, A>>");
    check_soft_failure(&mut s, "inherit<list<int>>");
    Ok(())
}

#[test]
fn algorithms_from_rust() -> Result<()> {
    let mut ctx = Context::new();
    let list = Term::list([Term::Prim(Prim::Int), Term::Prim(Prim::Float)]);
    let integral = quote_trait(builtins::std_is_integral());
    assert_eq!(algo::find_index(&list, &Term::Prim(Prim::Float))?, Some(1));
    assert_eq!(algo::count_if(&list, &integral, &mut ctx)?, 1);
    assert_eq!(
        algo::filter(&list, &integral, &mut ctx)?,
        Term::list([Term::Prim(Prim::Int)])
    );
    Ok(())
}
