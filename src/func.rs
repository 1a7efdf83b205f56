//! # Metafunction Classes
//!
//! A metafunction class is a term that can be invoked with arguments. Every higher-level
//! construct goes through [`invoke`], and every failure to apply is a soft
//! [`MetaError::NotApplicable`] that [`is_invocable`] turns into `false`.
//!
//! ## Adapters
//!
//! | constructor | invoking with `Args...` |
//! |-------------|-------------------------|
//! | [`quote`]`(C)` | `C<Args...>` if well-formed |
//! | [`quote_trait`]`(C)` | `C<Args...>::type` |
//! | [`always`]`(T)` | `T` |
//! | [`compose`]`(F1, ..., Fn)` | `F1(...(Fn(Args...)))` |
//! | [`bind_front`]`(F, Bs...)` | `F(Bs..., Args...)` |
//! | [`bind_back`]`(F, Bs...)` | `F(Args..., Bs...)` |
//! | [`flip`]`(F)` | `F(A1, A0, Rest...)` |
//! | [`curry`]`(F)` | `F(list<Args...>)` |
//! | [`uncurry`]`(F)` | `F(Elements...)` of its single sequence argument |
//! | [`on`]`(F, Gs...)` | `F(compose(Gs...)(A0), compose(Gs...)(A1), ...)` |
//! | [`not_fn`]`(F)` | `not_<F(Args...)>` |
//!
//! Each adapter returns another metafunction class, so they compose freely.

use std::fmt;
use std::rc::Rc;

use tracing::debug;

use crate::error::{MetaError, MetaResult};
use crate::eval::{Arity, Context, Template, eval, truthy};
use crate::lambda::Lambda;
use crate::library::builtins;
use crate::term::Term;

/// Invocation behind a native metafunction class.
pub type NativeFn = Rc<dyn Fn(&[Term], &mut Context) -> MetaResult<Term>>;

/// A metafunction class implemented in Rust, compared by name.
#[derive(Clone)]
pub struct Native {
    name: Rc<str>,
    arity: Arity,
    call: NativeFn,
}

impl Native {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Native {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Native {}

impl fmt::Debug for Native {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Native({})", self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Func {
    Quote(Template),
    QuoteTrait(Template),
    Always(Rc<Term>),
    Compose(Vec<Term>),
    BindFront(Rc<Term>, Vec<Term>),
    BindBack(Rc<Term>, Vec<Term>),
    Flip(Rc<Term>),
    On(Rc<Term>, Vec<Term>),
    NotFn(Rc<Term>),
    Lambda(Rc<Lambda>),
    Native(Native),
}

impl Func {
    fn name(&self) -> &str {
        match self {
            Func::Quote(t) | Func::QuoteTrait(t) => t.name(),
            Func::Always(_) => "always",
            Func::Compose(_) => "compose",
            Func::BindFront(..) => "bind_front",
            Func::BindBack(..) => "bind_back",
            Func::Flip(_) => "flip",
            Func::On(..) => "on",
            Func::NotFn(_) => "not_fn",
            Func::Lambda(_) => "lambda",
            Func::Native(native) => native.name(),
        }
    }

    fn call(&self, args: &[Term], ctx: &mut Context) -> MetaResult<Term> {
        match self {
            Func::Quote(template) => template.instantiate(args, ctx),
            Func::QuoteTrait(template) => {
                let instance = template.instantiate(args, ctx)?;
                eval(&instance, ctx)
            }
            Func::Always(value) => Ok((**value).clone()),
            Func::Compose(funcs) => {
                let (innermost, rest) = funcs
                    .split_last()
                    .ok_or_else(|| MetaError::not_applicable("compose<> is not invocable"))?;
                let mut result = invoke(innermost, args, ctx)?;
                for func in rest.iter().rev() {
                    result = invoke(func, std::slice::from_ref(&result), ctx)?;
                }
                Ok(result)
            }
            Func::BindFront(func, bound) => {
                let all: Vec<Term> = bound.iter().chain(args).cloned().collect();
                invoke(func, &all, ctx)
            }
            Func::BindBack(func, bound) => {
                let all: Vec<Term> = args.iter().chain(bound).cloned().collect();
                invoke(func, &all, ctx)
            }
            Func::Flip(func) => {
                if args.len() < 2 {
                    return Err(MetaError::not_applicable(format!(
                        "flip needs at least 2 arguments, found {}",
                        args.len()
                    )));
                }
                let mut flipped = args.to_vec();
                flipped.swap(0, 1);
                invoke(func, &flipped, ctx)
            }
            Func::On(func, projections) => {
                let projection = compose(projections.clone());
                let projected = args
                    .iter()
                    .map(|arg| invoke(&projection, std::slice::from_ref(arg), ctx))
                    .collect::<MetaResult<Vec<_>>>()?;
                invoke(func, &projected, ctx)
            }
            Func::NotFn(func) => {
                let result = invoke(func, args, ctx)?;
                Ok(Term::bool(!truthy(&result, ctx)?))
            }
            Func::Lambda(lambda) => lambda.invoke(args, ctx),
            Func::Native(native) => {
                if !native.arity.accepts(args.len()) {
                    return Err(MetaError::not_applicable(format!(
                        "{} expects {} arguments, found {}",
                        native.name,
                        native.arity,
                        args.len()
                    )));
                }
                (native.call)(args, ctx)
            }
        }
    }
}

/// `invoke<F, Args...>`: the single call-site convention.
pub fn invoke(func: &Term, args: &[Term], ctx: &mut Context) -> MetaResult<Term> {
    match func {
        Term::Func(f) => ctx.nested(f.name(), |ctx| f.call(args, ctx)),
        other => Err(MetaError::not_applicable(format!(
            "{other} is not a metafunction class"
        ))),
    }
}

/// Whether `invoke(func, args)` succeeds. Only soft failures count as "no".
pub fn is_invocable(func: &Term, args: &[Term], ctx: &mut Context) -> MetaResult<bool> {
    match invoke(func, args, ctx) {
        Ok(_) => Ok(true),
        Err(err) if err.is_soft() => {
            debug!(%func, error = %err, "not invocable");
            Ok(false)
        }
        Err(err) => Err(err),
    }
}

pub fn is_callable(term: &Term) -> bool {
    matches!(term, Term::Func(_))
}

/// `apply_list<F, Seq>`: invoke `F` with the elements of a sequence-like term.
pub fn apply_list(func: &Term, sequence: &Term, ctx: &mut Context) -> MetaResult<Term> {
    let args = ctx.unpack(sequence)?;
    invoke(func, &args, ctx)
}

pub fn quote(template: Template) -> Term {
    Term::Func(Func::Quote(template))
}

pub fn quote_trait(template: Template) -> Term {
    Term::Func(Func::QuoteTrait(template))
}

pub fn always(value: Term) -> Term {
    Term::Func(Func::Always(Rc::new(value)))
}

pub fn compose(funcs: Vec<Term>) -> Term {
    Term::Func(Func::Compose(funcs))
}

pub fn bind_front(func: Term, bound: Vec<Term>) -> Term {
    Term::Func(Func::BindFront(Rc::new(func), bound))
}

pub fn bind_back(func: Term, bound: Vec<Term>) -> Term {
    Term::Func(Func::BindBack(Rc::new(func), bound))
}

pub fn flip(func: Term) -> Term {
    Term::Func(Func::Flip(Rc::new(func)))
}

/// `curry<F>`: `compose<F, quote<list>>`.
pub fn curry(func: Term) -> Term {
    compose(vec![func, quote(builtins::list())])
}

/// `uncurry<F>`: `bind_front<quote<apply_list>, F>`.
pub fn uncurry(func: Term) -> Term {
    bind_front(quote(builtins::apply_list()), vec![func])
}

pub fn on(func: Term, projections: Vec<Term>) -> Term {
    Term::Func(Func::On(Rc::new(func), projections))
}

pub fn not_fn(func: Term) -> Term {
    Term::Func(Func::NotFn(Rc::new(func)))
}

/// A metafunction class implemented by a Rust closure.
pub fn native(
    name: &str,
    arity: Arity,
    call: impl Fn(&[Term], &mut Context) -> MetaResult<Term> + 'static,
) -> Term {
    Term::Func(Func::Native(Native {
        name: name.into(),
        arity,
        call: Rc::new(call),
    }))
}
