use anyhow::Result;
use metakit::eval::{Arity, Context, Template};
use metakit::lambda::Placeholder;
use metakit::lazy::{self, force};
use metakit::library::builtins;
use metakit::logic;
use metakit::term::{Prim, Term};
use metakit::{MetaError, evaluate};

/// `fact<N>`: `N > 0 ? N * fact<N - 1> : 1`, with the recursion behind a lazy `if_`.
fn fact() -> Template {
    Template::alias("fact", Arity::exactly(1), |args, ctx| {
        let n = args[0].clone();
        let recurse = lazy::multiplies(vec![
            n.clone(),
            Term::defer(fact(), vec![lazy::dec(vec![n.clone()])]),
        ]);
        let expr = lazy::if_(vec![
            lazy::greater(vec![n, Term::int(0)]),
            recurse,
            Term::int(1),
        ]);
        force(&expr, ctx)
    })
}

#[test]
fn factorial_terminates_through_lazy_if() -> Result<()> {
    let mut ctx = Context::new();
    assert_eq!(fact().instantiate(&[Term::int(0)], &mut ctx)?, Term::int(1));
    assert_eq!(fact().instantiate(&[Term::int(5)], &mut ctx)?, Term::int(120));
    assert_eq!(
        fact().instantiate(&[Term::int(10)], &mut ctx)?,
        Term::int(3_628_800)
    );
    Ok(())
}

#[test]
fn defer_waits_until_forced() -> Result<()> {
    let mut ctx = Context::new();
    let ill_formed = lazy::defer(builtins::std_pair(), vec![Term::Prim(Prim::Int)]);
    assert!(matches!(ill_formed, Term::Defer(_)));
    assert!(force(&ill_formed, &mut ctx).unwrap_err().is_soft());
    Ok(())
}

#[test]
fn untaken_branch_is_never_forced() -> Result<()> {
    assert_eq!(
        evaluate("let<lazy::if_<std::true_type, int, defer<std::pair, int>>>")?,
        Term::Prim(Prim::Int)
    );
    assert_eq!(
        evaluate("let<lazy::if_c<false, defer<std::pair, int>, short>>")?,
        Term::Prim(Prim::Short)
    );
    Ok(())
}

#[test]
fn if_without_else_is_not_applicable_when_false() {
    let err = evaluate("let<lazy::if_<std::false_type, int>>").unwrap_err();
    assert!(err.meta_error().is_some_and(MetaError::is_soft));
}

#[test]
fn and_or_stop_at_the_first_decisive_operand() -> Result<()> {
    assert_eq!(
        evaluate("let<lazy::and_<std::false_type, defer<std::pair, int>>>")?,
        Term::bool(false)
    );
    assert_eq!(
        evaluate("let<lazy::or_<std::true_type, defer<std::pair, int>>>")?,
        Term::bool(true)
    );
    assert_eq!(evaluate("and_<std::true_type, std::true_type>")?, Term::bool(true));
    assert_eq!(evaluate("or_<>")?, Term::bool(false));
    assert_eq!(evaluate("and_<>")?, Term::bool(true));
    Ok(())
}

#[test]
fn strict_logic_evaluates_every_operand() -> Result<()> {
    let mut ctx = Context::new();
    let operands = [Term::bool(false), Term::Prim(Prim::Int)];
    assert_eq!(logic::and_(&operands, &mut ctx)?, Term::bool(false));
    assert!(logic::strict_and(&operands, &mut ctx).unwrap_err().is_soft());
    Ok(())
}

#[test]
fn let_binds_variables_in_order() -> Result<()> {
    let term =
        evaluate("let<var<_a, 2>, var<_b, lazy::plus<_a, 3>>, lazy::multiplies<_a, _b>>")?;
    assert_eq!(term, Term::int(10));

    let mut ctx = Context::new();
    let vars = [(Placeholder::A, Term::Prim(Prim::Int))];
    let body = Term::app(builtins::std_pair(), vec![Placeholder::A.into(), Placeholder::A.into()]);
    assert_eq!(
        lazy::let_(&vars, &body, &mut ctx)?.to_string(),
        "std::pair<int, int>"
    );
    Ok(())
}

#[test]
fn let_rejects_bindings_that_are_not_vars() {
    let err = evaluate("let<int, short>").unwrap_err();
    assert!(matches!(
        err.meta_error(),
        Some(MetaError::Malformed { .. })
    ));
}
