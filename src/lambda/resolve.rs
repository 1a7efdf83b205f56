use std::rc::Rc;

use tracing::debug;

use crate::error::{MetaError, MetaResult};
use crate::eval::{Context, truthy};
use crate::func::Func;
use crate::term::{Application, Term};

use super::scope::{Binding, Bindings};

/// Substitute bound placeholders in `term` and force deferred nodes, bottom-up.
///
/// - A bound placeholder becomes its argument; unbound ones are left alone.
/// - A deferred node resolves its arguments, then instantiates. `if_`, `and_` and `or_`
///   only resolve the operands they need.
/// - A nested lambda becomes a closure over the current bindings.
/// - Any other instantiation is rebuilt from its resolved arguments. If the rebuilt
///   instantiation is ill-formed, the original node is kept as an opaque leaf.
pub fn resolve(term: &Term, scope: &Bindings, ctx: &mut Context) -> MetaResult<Term> {
    match term {
        Term::Placeholder(p) => match scope.resolve(*p) {
            Some(Binding::One(value)) => Ok(value.clone()),
            Some(Binding::Pack(_)) => Err(MetaError::not_applicable(format!(
                "variadic placeholder {p} used outside an argument list"
            ))),
            None => Ok(term.clone()),
        },
        Term::Defer(app) => resolve_deferred(app, scope, ctx),
        Term::App(app) => or_leaf(term, resolve_instantiation(app, scope, ctx)),
        Term::List(list) => Ok(Term::list(resolve_args(list.as_slice(), scope, ctx)?)),
        Term::Func(func) => or_leaf(term, resolve_func(func, scope, ctx)),
        _ => Ok(term.clone()),
    }
}

/// Resolve an argument list, splicing variadic bindings in place.
pub fn resolve_args(args: &[Term], scope: &Bindings, ctx: &mut Context) -> MetaResult<Vec<Term>> {
    let mut resolved = Vec::with_capacity(args.len());
    for arg in args {
        if let Term::Placeholder(p) = arg {
            if let Some(Binding::Pack(items)) = scope.resolve(*p) {
                resolved.extend(items.iter().cloned());
                continue;
            }
        }
        resolved.push(resolve(arg, scope, ctx)?);
    }
    Ok(resolved)
}

fn or_leaf(original: &Term, rebuilt: MetaResult<Term>) -> MetaResult<Term> {
    match rebuilt {
        Err(err) if err.is_soft() => {
            debug!(term = %original, error = %err, "kept as opaque leaf");
            Ok(original.clone())
        }
        other => other,
    }
}

fn resolve_instantiation(app: &Application, scope: &Bindings, ctx: &mut Context) -> MetaResult<Term> {
    let args = resolve_args(&app.args, scope, ctx)?;
    if args == app.args {
        return Ok(Term::App(Rc::new(app.clone())));
    }
    app.template.instantiate(&args, ctx)
}

fn resolve_deferred(app: &Application, scope: &Bindings, ctx: &mut Context) -> MetaResult<Term> {
    let template = &app.template;
    if template.is("if_") || template.is("if_c") {
        resolve_conditional(app, scope, ctx)
    } else if template.is("and_") || template.is("and_c") {
        resolve_logical(app, false, scope, ctx)
    } else if template.is("or_") || template.is("or_c") {
        resolve_logical(app, true, scope, ctx)
    } else {
        let args = resolve_args(&app.args, scope, ctx)?;
        template.instantiate(&args, ctx)
    }
}

/// `lazy::if_<Cond, Then, Else>`: the branch not taken is never resolved.
fn resolve_conditional(app: &Application, scope: &Bindings, ctx: &mut Context) -> MetaResult<Term> {
    let (cond, branches) = match app.args.split_first() {
        Some((cond, branches)) if (1..=2).contains(&branches.len()) => (cond, branches),
        _ => {
            return Err(MetaError::not_applicable(format!(
                "if_ expects 2 to 3 arguments, found {}",
                app.args.len()
            )));
        }
    };
    let cond = resolve(cond, scope, ctx)?;
    let chosen = if truthy(&cond, ctx)? {
        &branches[0]
    } else {
        branches.get(1).ok_or_else(|| {
            MetaError::not_applicable(format!("if_ condition {cond} is false and has no else"))
        })?
    };
    debug!(%cond, "lazy if_ picked a branch");
    resolve(chosen, scope, ctx)
}

/// `lazy::and_` / `lazy::or_`: stop at the first operand equal to `decisive`.
fn resolve_logical(
    app: &Application,
    decisive: bool,
    scope: &Bindings,
    ctx: &mut Context,
) -> MetaResult<Term> {
    for (index, operand) in app.args.iter().enumerate() {
        let value = resolve(operand, scope, ctx)?;
        if truthy(&value, ctx)? == decisive {
            debug!(
                skipped = app.args.len() - index - 1,
                "{} short-circuited",
                app.template.name()
            );
            return Ok(Term::bool(decisive));
        }
    }
    Ok(Term::bool(!decisive))
}

fn resolve_func(func: &Func, scope: &Bindings, ctx: &mut Context) -> MetaResult<Term> {
    let resolved = match func {
        Func::Lambda(inner) => Func::Lambda(Rc::new(inner.capture(scope))),
        Func::Always(value) => Func::Always(Rc::new(resolve(value, scope, ctx)?)),
        Func::Compose(funcs) => Func::Compose(resolve_args(funcs, scope, ctx)?),
        Func::BindFront(f, bound) => Func::BindFront(
            Rc::new(resolve(f, scope, ctx)?),
            resolve_args(bound, scope, ctx)?,
        ),
        Func::BindBack(f, bound) => Func::BindBack(
            Rc::new(resolve(f, scope, ctx)?),
            resolve_args(bound, scope, ctx)?,
        ),
        Func::Flip(f) => Func::Flip(Rc::new(resolve(f, scope, ctx)?)),
        Func::On(f, projections) => Func::On(
            Rc::new(resolve(f, scope, ctx)?),
            resolve_args(projections, scope, ctx)?,
        ),
        Func::NotFn(f) => Func::NotFn(Rc::new(resolve(f, scope, ctx)?)),
        Func::Quote(_) | Func::QuoteTrait(_) | Func::Native(_) => func.clone(),
    };
    Ok(Term::Func(resolved))
}
