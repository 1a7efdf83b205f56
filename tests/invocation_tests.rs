use anyhow::Result;
use metakit::MetaError;
use metakit::config::Config;
use metakit::eval::{Arity, Context, Template};
use metakit::evaluate;
use metakit::func::{
    always, apply_list, bind_back, bind_front, compose, curry, flip, invoke, is_invocable,
    not_fn, on, quote, quote_trait, uncurry,
};
use metakit::library::builtins;
use metakit::term::{IntSeq, Prim, Term};

fn prim(p: Prim) -> Term {
    Term::Prim(p)
}

fn forever() -> Template {
    Template::alias("forever", Arity::any(), |args, ctx| {
        forever().instantiate(args, ctx)
    })
}

#[test]
fn quote_instantiates_class_templates() -> Result<()> {
    let mut ctx = Context::new();
    let pair = quote(builtins::std_pair());
    let result = invoke(&pair, &[prim(Prim::Int), prim(Prim::Short)], &mut ctx)?;
    assert_eq!(result.to_string(), "std::pair<int, short>");
    Ok(())
}

#[test]
fn quote_fails_softly_on_bad_arity() -> Result<()> {
    let mut ctx = Context::new();
    let pair = quote(builtins::std_pair());
    assert!(!is_invocable(&pair, &[prim(Prim::Int)], &mut ctx)?);
    let err = invoke(&pair, &[prim(Prim::Int)], &mut ctx).unwrap_err();
    assert!(err.is_soft());
    Ok(())
}

#[test]
fn binding_fixes_leading_or_trailing_arguments() -> Result<()> {
    let mut ctx = Context::new();
    let pair = quote(builtins::std_pair());
    let front = bind_front(pair.clone(), vec![prim(Prim::Int)]);
    let back = bind_back(pair, vec![prim(Prim::Int)]);
    assert_eq!(
        invoke(&front, &[prim(Prim::Short)], &mut ctx)?.to_string(),
        "std::pair<int, short>"
    );
    assert_eq!(
        invoke(&back, &[prim(Prim::Short)], &mut ctx)?.to_string(),
        "std::pair<short, int>"
    );
    Ok(())
}

#[test]
fn compose_applies_last_function_first() -> Result<()> {
    let mut ctx = Context::new();
    let f = compose(vec![
        quote_trait(builtins::std_add_pointer()),
        quote_trait(builtins::std_add_const()),
    ]);
    assert_eq!(invoke(&f, &[prim(Prim::Int)], &mut ctx)?.to_string(), "int const*");
    Ok(())
}

#[test]
fn flip_swaps_the_first_two_arguments() -> Result<()> {
    let mut ctx = Context::new();
    let f = flip(quote(builtins::list()));
    let result = invoke(
        &f,
        &[prim(Prim::Int), prim(Prim::Short), prim(Prim::Char)],
        &mut ctx,
    )?;
    assert_eq!(result.to_string(), "list<short, int, char>");
    Ok(())
}

#[test]
fn curry_and_uncurry() -> Result<()> {
    let mut ctx = Context::new();
    let counted = curry(quote(builtins::size()));
    let args = [prim(Prim::Int), prim(Prim::Short), prim(Prim::Char)];
    assert_eq!(invoke(&counted, &args, &mut ctx)?, Term::size(3));

    let pair = uncurry(quote(builtins::std_pair()));
    let list = Term::list([prim(Prim::Int), prim(Prim::Short)]);
    assert_eq!(
        invoke(&pair, &[list], &mut ctx)?.to_string(),
        "std::pair<int, short>"
    );
    Ok(())
}

#[test]
fn apply_list_unpacks_integer_sequences() -> Result<()> {
    let mut ctx = Context::new();
    let seq = Term::IntSeq(IntSeq::make(Prim::Int, 3)?);
    let result = apply_list(&quote(builtins::list()), &seq, &mut ctx)?;
    assert_eq!(result.to_string(), "list<int_<0>, int_<1>, int_<2>>");
    Ok(())
}

#[test]
fn apply_list_uses_registered_sequences() -> Result<()> {
    let mut ctx = Context::new();
    let boxed = Template::class("boxed", Arity::exactly(1));
    ctx.register_sequence(&boxed, |args| match args {
        [inner] => Ok(inner.as_list()?.to_vec()),
        _ => Err(MetaError::not_applicable("boxed holds one list")),
    });
    let sequence = boxed.instantiate(
        &[Term::list([prim(Prim::Int), prim(Prim::Short)])],
        &mut ctx,
    )?;
    let result = apply_list(&quote(builtins::std_pair()), &sequence, &mut ctx)?;
    assert_eq!(result.to_string(), "std::pair<int, short>");
    Ok(())
}

#[test]
fn on_projects_every_argument() -> Result<()> {
    let mut ctx = Context::new();
    let f = on(
        quote(builtins::std_pair()),
        vec![quote_trait(builtins::std_add_pointer())],
    );
    let result = invoke(&f, &[prim(Prim::Int), prim(Prim::Short)], &mut ctx)?;
    assert_eq!(result.to_string(), "std::pair<int*, short*>");
    Ok(())
}

#[test]
fn not_fn_and_always() -> Result<()> {
    let mut ctx = Context::new();
    let not_integral = not_fn(quote_trait(builtins::std_is_integral()));
    assert_eq!(
        invoke(&not_integral, &[prim(Prim::Float)], &mut ctx)?,
        Term::bool(true)
    );
    let constant = always(prim(Prim::Int));
    let args = [prim(Prim::Char), Term::int(3)];
    assert_eq!(invoke(&constant, &args, &mut ctx)?, prim(Prim::Int));
    Ok(())
}

#[test]
fn invocation_through_notation() -> Result<()> {
    assert_eq!(
        evaluate("_t<invoke<bind_front<quote<std::is_same>, float>, float>>")?,
        Term::bool(true)
    );
    assert_eq!(evaluate("is_trait<std::add_const<int>>")?, Term::bool(true));
    assert_eq!(evaluate("is_trait<std::pair<int, int>>")?, Term::bool(false));
    assert_eq!(evaluate("is_callable<quote<list>>")?, Term::bool(true));
    assert_eq!(evaluate("is_callable<int>")?, Term::bool(false));
    assert_eq!(
        evaluate("is_invocable<quote<std::pair>, int>")?,
        Term::bool(false)
    );
    Ok(())
}

#[test]
fn recursion_limit_is_a_hard_error() {
    let mut ctx = Context::with_config(Config::default().with_max_depth(16));
    let err = forever().instantiate(&[], &mut ctx).unwrap_err();
    assert_eq!(
        err,
        MetaError::RecursionLimit {
            limit: 16,
            while_evaluating: "forever".to_string(),
        }
    );
    assert!(!err.is_soft());

    let outcome = is_invocable(&quote(forever()), &[], &mut ctx);
    assert!(matches!(outcome, Err(MetaError::RecursionLimit { .. })));
    assert_eq!(ctx.depth(), 0);
}
